//! Value coercion.
//!
//! Form inputs arrive as text. Before a comparison or membership value is
//! placed in a query it is converted according to the filter's [`DataType`].
//!
//! In `auto` mode the precedence is fixed: an exact `"true"`/`"false"` wins,
//! then a finite number, and anything else stays a string. Dates are never
//! auto-detected; the `date` type must be requested explicitly.

use crate::error::{FilterError, Result};
use crate::model::DataType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Largest integer an IEEE double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%d %b %Y"];

/// A raw value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl TypedValue {
    /// Representation inside a MongoDB query document (dates as extended JSON).
    pub fn to_document_value(&self) -> Value {
        match self {
            TypedValue::Date(date) => serde_json::json!({ "$date": format_date(date) }),
            other => other.to_flat_value(),
        }
    }

    /// Representation inside a flat filter record (dates as RFC 3339 text).
    pub fn to_flat_value(&self) -> Value {
        match self {
            TypedValue::String(s) => Value::String(s.clone()),
            TypedValue::Number(n) => number_value(*n),
            TypedValue::Boolean(b) => Value::Bool(*b),
            TypedValue::Date(date) => Value::String(format_date(date)),
        }
    }
}

/// Converts `raw` to the requested type.
///
/// Explicit `number`, `boolean` and `date` types fail with
/// [`FilterError::Conversion`] when the text cannot represent them; `string`
/// and `auto` never fail.
pub fn coerce(raw: &str, data_type: DataType) -> Result<TypedValue> {
    match data_type {
        DataType::Number => parse_number(raw)
            .map(TypedValue::Number)
            .ok_or_else(|| FilterError::conversion(raw, "number")),
        DataType::Boolean => parse_boolean(raw)
            .map(TypedValue::Boolean)
            .ok_or_else(|| FilterError::conversion(raw, "boolean")),
        DataType::Date => parse_date(raw)
            .map(TypedValue::Date)
            .ok_or_else(|| FilterError::conversion(raw, "date")),
        DataType::String => Ok(TypedValue::String(raw.to_string())),
        DataType::Auto => Ok(auto_detect(raw)),
    }
}

fn auto_detect(raw: &str) -> TypedValue {
    match raw {
        "true" => return TypedValue::Boolean(true),
        "false" => return TypedValue::Boolean(false),
        _ => {}
    }
    match parse_number(raw) {
        Some(n) => TypedValue::Number(n),
        None => TypedValue::String(raw.to_string()),
    }
}

/// Parses a finite number, tolerating surrounding whitespace. Blank input is
/// not a number. Unsigned `0x`, `0o` and `0b` literals are read in their radix.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(n) = parse_radix_literal(trimmed) {
        return Some(n);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    // from_str_radix would take a leading sign, the literal forms do not.
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

fn parse_boolean(raw: &str) -> Option<bool> {
    let lower = raw.to_lowercase();
    if lower == "true" || raw == "1" {
        Some(true)
    } else if lower == "false" || raw == "0" {
        Some(false)
    } else {
        None
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| parse_partial_iso_date(s))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM` is the first of that month and `YYYY` is January 1st.
fn parse_partial_iso_date(s: &str) -> Option<NaiveDate> {
    let all_digits = |part: &str, len: usize| {
        part.len() == len && part.chars().all(|c| c.is_ascii_digit())
    };
    let (year, month) = match s.split_once('-') {
        Some((year, month)) if all_digits(year, 4) && all_digits(month, 2) => {
            (year, month.parse::<u32>().ok()?)
        }
        None if all_digits(s, 4) => (s, 1),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year.parse::<i32>().ok()?, month, 1)
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Integral values inside the exactly-representable range become JSON
/// integers so `18` stays `18` rather than `18.0`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn number_parses_exact_values() {
        assert_eq!(coerce("18", DataType::Number).unwrap(), TypedValue::Number(18.0));
        assert_eq!(coerce("-2.5", DataType::Number).unwrap(), TypedValue::Number(-2.5));
        assert_eq!(coerce(" 42 ", DataType::Number).unwrap(), TypedValue::Number(42.0));
        assert_eq!(coerce("1e3", DataType::Number).unwrap(), TypedValue::Number(1000.0));
    }

    #[test]
    fn number_reads_radix_literals() {
        assert_eq!(coerce("0x10", DataType::Number).unwrap(), TypedValue::Number(16.0));
        assert_eq!(coerce("0XfF", DataType::Number).unwrap(), TypedValue::Number(255.0));
        assert_eq!(coerce("0b101", DataType::Number).unwrap(), TypedValue::Number(5.0));
        assert_eq!(coerce("0o17", DataType::Number).unwrap(), TypedValue::Number(15.0));
        assert_eq!(coerce("0x10", DataType::Auto).unwrap(), TypedValue::Number(16.0));
    }

    #[test]
    fn number_rejects_non_numeric_input() {
        for raw in [
            "abc", "", "   ", "12abc", "NaN", "inf", "1e400", "0x", "0xZZ", "0b2", "0x+1",
            "-0x10",
        ] {
            let err = coerce(raw, DataType::Number).unwrap_err();
            assert!(
                matches!(err, FilterError::Conversion { target: "number", .. }),
                "expected conversion error for {:?}",
                raw
            );
        }
    }

    #[test]
    fn boolean_accepts_words_and_digits() {
        assert_eq!(coerce("TRUE", DataType::Boolean).unwrap(), TypedValue::Boolean(true));
        assert_eq!(coerce("1", DataType::Boolean).unwrap(), TypedValue::Boolean(true));
        assert_eq!(coerce("False", DataType::Boolean).unwrap(), TypedValue::Boolean(false));
        assert_eq!(coerce("0", DataType::Boolean).unwrap(), TypedValue::Boolean(false));
        assert!(coerce("yes", DataType::Boolean).is_err());
        assert!(coerce("2", DataType::Boolean).is_err());
    }

    #[test]
    fn date_accepts_common_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(coerce("2024-01-15", DataType::Date).unwrap(), TypedValue::Date(midnight));

        let afternoon = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        assert_eq!(
            coerce("2024-01-15T14:30:00Z", DataType::Date).unwrap(),
            TypedValue::Date(afternoon)
        );
        assert_eq!(
            coerce("2024-01-15 14:30", DataType::Date).unwrap(),
            TypedValue::Date(afternoon)
        );
        assert_eq!(
            coerce("2024-01-15T16:30:00+02:00", DataType::Date).unwrap(),
            TypedValue::Date(afternoon)
        );
    }

    #[test]
    fn date_accepts_partial_iso_and_slash_forms() {
        let jan_15 = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(coerce("2024/01/15", DataType::Date).unwrap(), TypedValue::Date(jan_15));
        assert_eq!(coerce("Jan 15, 2024", DataType::Date).unwrap(), TypedValue::Date(jan_15));
        assert_eq!(coerce("15 Jan 2024", DataType::Date).unwrap(), TypedValue::Date(jan_15));
        assert_eq!(
            coerce("2024/01/15 14:30", DataType::Date).unwrap(),
            TypedValue::Date(Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap())
        );

        let jan_1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(coerce("2024-01", DataType::Date).unwrap(), TypedValue::Date(jan_1));
        assert_eq!(coerce("2024", DataType::Date).unwrap(), TypedValue::Date(jan_1));
        assert_eq!(
            coerce("2024-03", DataType::Date).unwrap(),
            TypedValue::Date(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );

        assert!(coerce("2024-13", DataType::Date).is_err());
        assert!(coerce("24", DataType::Date).is_err());
    }

    #[test]
    fn date_rejects_garbage() {
        assert!(matches!(
            coerce("not a date", DataType::Date).unwrap_err(),
            FilterError::Conversion { target: "date", .. }
        ));
        assert!(coerce("2024-13-45", DataType::Date).is_err());
    }

    #[test]
    fn string_is_returned_verbatim() {
        assert_eq!(
            coerce("42", DataType::String).unwrap(),
            TypedValue::String("42".into())
        );
        assert_eq!(
            coerce("true", DataType::String).unwrap(),
            TypedValue::String("true".into())
        );
    }

    #[test]
    fn auto_prefers_boolean_then_number_then_string() {
        assert_eq!(coerce("true", DataType::Auto).unwrap(), TypedValue::Boolean(true));
        assert_eq!(coerce("false", DataType::Auto).unwrap(), TypedValue::Boolean(false));
        // "1" is only a boolean when boolean is requested explicitly.
        assert_eq!(coerce("1", DataType::Auto).unwrap(), TypedValue::Number(1.0));
        assert_eq!(coerce("0", DataType::Auto).unwrap(), TypedValue::Number(0.0));
        // Boolean detection is exact-match only.
        assert_eq!(coerce("True", DataType::Auto).unwrap(), TypedValue::String("True".into()));
        assert_eq!(coerce("João", DataType::Auto).unwrap(), TypedValue::String("João".into()));
    }

    #[test]
    fn auto_keeps_blank_and_non_finite_as_strings() {
        assert_eq!(coerce("", DataType::Auto).unwrap(), TypedValue::String("".into()));
        assert_eq!(coerce("  ", DataType::Auto).unwrap(), TypedValue::String("  ".into()));
        assert_eq!(coerce("inf", DataType::Auto).unwrap(), TypedValue::String("inf".into()));
    }

    #[test]
    fn auto_never_parses_dates() {
        assert_eq!(
            coerce("2024-01-15", DataType::Auto).unwrap(),
            TypedValue::String("2024-01-15".into())
        );
    }

    #[test]
    fn integral_numbers_serialize_as_integers() {
        assert_eq!(TypedValue::Number(18.0).to_document_value(), json!(18));
        assert_eq!(TypedValue::Number(2.5).to_document_value(), json!(2.5));
    }

    #[test]
    fn dates_serialize_per_output_shape() {
        let date = TypedValue::Date(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(
            date.to_document_value(),
            json!({"$date": "2024-01-15T00:00:00.000Z"})
        );
        assert_eq!(date.to_flat_value(), json!("2024-01-15T00:00:00.000Z"));
    }
}

//! Core filter types.
//!
//! A [`FilterSpec`] is one predicate the user declared on a form: a field, an
//! [`Operator`], the raw text they typed, and the options controlling how that
//! text is interpreted. Everything here is plain data; compiling happens in
//! [`crate::compiler`].

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of filter operators.
///
/// Names match the operator identifiers used by the host form (`eq`,
/// `notRegex`, `notExists`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Regex,
    Contains,
    NotRegex,
    NotContains,
    In,
    Nin,
    Exists,
    NotExists,
}

impl Operator {
    pub fn all() -> &'static [Operator] {
        &[
            Operator::Eq,
            Operator::Ne,
            Operator::Gt,
            Operator::Gte,
            Operator::Lt,
            Operator::Lte,
            Operator::Regex,
            Operator::Contains,
            Operator::NotRegex,
            Operator::NotContains,
            Operator::In,
            Operator::Nin,
            Operator::Exists,
            Operator::NotExists,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Regex => "regex",
            Operator::Contains => "contains",
            Operator::NotRegex => "notRegex",
            Operator::NotContains => "notContains",
            Operator::In => "in",
            Operator::Nin => "nin",
            Operator::Exists => "exists",
            Operator::NotExists => "notExists",
        }
    }

    /// Operators that build a regular-expression match.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Operator::Regex | Operator::Contains | Operator::NotRegex | Operator::NotContains
        )
    }

    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::Nin)
    }

    pub fn is_existence(&self) -> bool {
        matches!(self, Operator::Exists | Operator::NotExists)
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::all()
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| FilterError::UnsupportedOperator(s.to_string()))
    }
}

impl TryFrom<String> for Operator {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the raw text of a filter is converted before it lands in the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Date,
    #[default]
    Auto,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::Auto => "auto",
        }
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(DataType::String),
            "number" => Ok(DataType::Number),
            "boolean" => Ok(DataType::Boolean),
            "date" => Ok(DataType::Date),
            "auto" => Ok(DataType::Auto),
            other => Err(format!("Unknown data type: {}", other)),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical connective used when several document fragments are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Combination {
    #[default]
    And,
    Or,
}

impl Combination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Combination::And => "and",
            Combination::Or => "or",
        }
    }

    /// The query-document key for this connective.
    pub fn document_key(&self) -> &'static str {
        match self {
            Combination::And => "$and",
            Combination::Or => "$or",
        }
    }
}

impl FromStr for Combination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "and" => Ok(Combination::And),
            "or" => Ok(Combination::Or),
            other => Err(format!("Unknown logical operator: {}", other)),
        }
    }
}

impl TryFrom<String> for Combination {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Shape of the compiled output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputMode {
    /// A single MongoDB query document.
    #[default]
    Document,
    /// An ordered list of flat `{field, operator, value}` records.
    Array,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Document => "document",
            OutputMode::Array => "array",
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "doc" => Ok(OutputMode::Document),
            "array" | "flat" => Ok(OutputMode::Array),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One user-declared field predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub raw_value: String,
    #[serde(default)]
    pub raw_value_list: String,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    #[serde(default = "default_true")]
    pub literal_search: bool,
}

fn default_true() -> bool {
    true
}

impl FilterSpec {
    pub fn new(field: impl Into<String>, operator: Operator) -> Self {
        Self {
            field: field.into(),
            operator,
            raw_value: String::new(),
            raw_value_list: String::new(),
            data_type: DataType::Auto,
            case_sensitive: true,
            literal_search: true,
        }
    }

    /// Convenience: a comparison or pattern filter with a single value.
    pub fn with_value(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self::new(field, operator).value(value)
    }

    /// Convenience: an `in`/`nin` filter over a comma-separated list.
    pub fn with_list(field: impl Into<String>, operator: Operator, list: impl Into<String>) -> Self {
        Self::new(field, operator).value_list(list)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.raw_value = value.into();
        self
    }

    pub fn value_list(mut self, list: impl Into<String>) -> Self {
        self.raw_value_list = list.into();
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn literal_search(mut self, literal_search: bool) -> Self {
        self.literal_search = literal_search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_names_round_trip_through_from_str() {
        for op in Operator::all() {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), *op);
        }
    }

    #[test]
    fn unknown_operator_is_unsupported() {
        let err = "like".parse::<Operator>().unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedOperator(ref s) if s == "like"));
    }

    #[test]
    fn operator_names_are_case_sensitive() {
        assert!("NOTREGEX".parse::<Operator>().is_err());
        assert!("notregex".parse::<Operator>().is_err());
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let spec: FilterSpec =
            serde_json::from_str(r#"{"field": "status", "operator": "exists"}"#).unwrap();
        assert_eq!(spec.operator, Operator::Exists);
        assert_eq!(spec.data_type, DataType::Auto);
        assert!(spec.case_sensitive);
        assert!(spec.literal_search);
        assert!(spec.raw_value.is_empty());
    }

    #[test]
    fn spec_rejects_unknown_operator_on_deserialize() {
        let err = serde_json::from_str::<FilterSpec>(r#"{"field": "a", "operator": "between"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported operator: between"));
    }

    #[test]
    fn combination_parses_case_insensitively() {
        assert_eq!("OR".parse::<Combination>().unwrap(), Combination::Or);
        assert_eq!(Combination::And.document_key(), "$and");
    }

    #[test]
    fn output_mode_accepts_flat_alias() {
        assert_eq!("flat".parse::<OutputMode>().unwrap(), OutputMode::Array);
    }

    #[test]
    fn connective_and_output_deserialize_case_insensitively() {
        let or: Combination = serde_json::from_str(r#""OR""#).unwrap();
        assert_eq!(or, Combination::Or);
        let array: OutputMode = serde_json::from_str(r#""Array""#).unwrap();
        assert_eq!(array, OutputMode::Array);
        assert_eq!(serde_json::to_string(&Combination::Or).unwrap(), r#""or""#);
    }

    #[test]
    fn unknown_output_mode_names_the_value() {
        let err = serde_json::from_str::<OutputMode>(r#""xml""#).unwrap_err();
        assert!(err.to_string().contains("Unknown output mode: xml"));
    }
}

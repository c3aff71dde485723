//! # Filter Compiler
//!
//! Turns one [`FilterSpec`] into either a MongoDB document fragment or a flat
//! filter record. Both shapes come from the same intermediate [`Predicate`],
//! so the two output modes can only differ in layout, never in meaning.
//!
//! ## Operator Semantics
//!
//! | operator                   | input          | predicate                          |
//! |----------------------------|----------------|------------------------------------|
//! | `eq ne gt gte lt lte`      | value          | comparison against coerced value   |
//! | `regex`, `notRegex`        | value          | pattern, escaped iff literal mode  |
//! | `contains`, `notContains`  | value          | pattern, always escaped            |
//! | `in`, `nin`                | value list     | membership over coerced tokens     |
//! | `exists`, `notExists`      | none           | field presence                     |
//!
//! `contains`/`notContains` ignore `literal_search` on purpose: they are
//! substring searches and never accept a user-written pattern.

use crate::coerce::{coerce, TypedValue};
use crate::error::{FilterError, Result};
use crate::model::{FilterSpec, Operator, OutputMode};
use crate::pattern::{escape_literal, resolve_flags, RegexFlags};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

/// A normalized record independent of any database's query syntax.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RegexFlags>,
}

/// One compiled filter, in the shape selected by [`OutputMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledFilter {
    /// `{ <field>: { <operator object> } }`
    Document(Map<String, Value>),
    Flat(FlatRecord),
}

impl CompiledFilter {
    pub fn into_value(self) -> Value {
        match self {
            CompiledFilter::Document(map) => Value::Object(map),
            // A record of strings, JSON values and unit enums always serializes.
            CompiledFilter::Flat(record) => serde_json::to_value(record).unwrap_or(Value::Null),
        }
    }
}

/// The meaning of a filter, before it is laid out for a target.
#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    Compare(TypedValue),
    Pattern {
        pattern: String,
        flags: RegexFlags,
        negated: bool,
    },
    Membership(Vec<TypedValue>),
    Exists(bool),
}

/// Compiles a single filter specification.
///
/// Fails with [`FilterError::MissingField`] for an empty field and propagates
/// [`FilterError::Conversion`] from value coercion. A spec either compiles
/// completely or not at all.
pub fn compile(spec: &FilterSpec, mode: OutputMode) -> Result<CompiledFilter> {
    if spec.field.is_empty() {
        return Err(FilterError::MissingField);
    }

    let predicate = predicate_for(spec)?;
    debug!(field = %spec.field, operator = %spec.operator, mode = mode.as_str(), "compiled filter");

    Ok(match mode {
        OutputMode::Document => CompiledFilter::Document(document_fragment(spec, predicate)),
        OutputMode::Array => CompiledFilter::Flat(flat_record(spec, predicate)),
    })
}

/// Splits a comma-separated list, trimming tokens and dropping empty ones.
pub fn parse_value_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn predicate_for(spec: &FilterSpec) -> Result<Predicate> {
    let flags = resolve_flags(spec.case_sensitive);

    let predicate = match spec.operator {
        Operator::Eq | Operator::Ne | Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
            Predicate::Compare(coerce(&spec.raw_value, spec.data_type)?)
        }
        Operator::Regex | Operator::NotRegex => Predicate::Pattern {
            pattern: if spec.literal_search {
                escape_literal(&spec.raw_value)
            } else {
                spec.raw_value.clone()
            },
            flags,
            negated: spec.operator == Operator::NotRegex,
        },
        Operator::Contains | Operator::NotContains => Predicate::Pattern {
            pattern: escape_literal(&spec.raw_value),
            flags,
            negated: spec.operator == Operator::NotContains,
        },
        Operator::In | Operator::Nin => {
            let values = parse_value_list(&spec.raw_value_list)
                .into_iter()
                .map(|token| coerce(token, spec.data_type))
                .collect::<Result<Vec<_>>>()?;
            Predicate::Membership(values)
        }
        Operator::Exists => Predicate::Exists(true),
        Operator::NotExists => Predicate::Exists(false),
    };

    Ok(predicate)
}

fn document_fragment(spec: &FilterSpec, predicate: Predicate) -> Map<String, Value> {
    let condition = match predicate {
        Predicate::Compare(value) => {
            json!({ format!("${}", spec.operator): value.to_document_value() })
        }
        Predicate::Pattern {
            pattern,
            flags,
            negated,
        } => {
            let regex = json!({ "$regex": pattern, "$options": flags.as_str() });
            if negated {
                json!({ "$not": regex })
            } else {
                regex
            }
        }
        Predicate::Membership(values) => {
            let values: Vec<Value> = values.iter().map(TypedValue::to_document_value).collect();
            json!({ format!("${}", spec.operator): values })
        }
        Predicate::Exists(present) => json!({ "$exists": present }),
    };

    let mut fragment = Map::new();
    fragment.insert(spec.field.clone(), condition);
    fragment
}

fn flat_record(spec: &FilterSpec, predicate: Predicate) -> FlatRecord {
    let (value, options) = match predicate {
        Predicate::Compare(value) => (value.to_flat_value(), None),
        Predicate::Pattern { pattern, flags, .. } => (Value::String(pattern), Some(flags)),
        Predicate::Membership(values) => (
            Value::Array(values.iter().map(TypedValue::to_flat_value).collect()),
            None,
        ),
        Predicate::Exists(present) => (Value::Bool(present), None),
    };

    FlatRecord {
        field: spec.field.clone(),
        operator: spec.operator,
        value,
        options,
    }
}

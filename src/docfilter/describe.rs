//! Human-readable filter descriptions.
//!
//! Descriptions are localized. Brazilian Portuguese is the default because it
//! is what the workflow forms are presented in; English is available for
//! logs and tooling.

use crate::model::{Combination, FilterSpec, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }

    /// Phrase placed between the quoted field and the value.
    pub fn phrase(&self, operator: Operator) -> &'static str {
        match self {
            Locale::PtBr => match operator {
                Operator::Eq => "igual a",
                Operator::Ne => "diferente de",
                Operator::Gt => "maior que",
                Operator::Gte => "maior ou igual a",
                Operator::Lt => "menor que",
                Operator::Lte => "menor ou igual a",
                Operator::Regex => "contém",
                Operator::Contains => "contém texto",
                Operator::NotRegex => "não contém",
                Operator::NotContains => "não contém texto",
                Operator::In => "está em",
                Operator::Nin => "não está em",
                Operator::Exists => "existe",
                Operator::NotExists => "não existe",
            },
            Locale::En => match operator {
                Operator::Eq => "equals",
                Operator::Ne => "differs from",
                Operator::Gt => "greater than",
                Operator::Gte => "greater than or equal to",
                Operator::Lt => "less than",
                Operator::Lte => "less than or equal to",
                Operator::Regex => "matches",
                Operator::Contains => "contains text",
                Operator::NotRegex => "does not match",
                Operator::NotContains => "does not contain text",
                Operator::In => "is in",
                Operator::Nin => "is not in",
                Operator::Exists => "exists",
                Operator::NotExists => "does not exist",
            },
        }
    }

    /// Short label shown when picking an operator.
    pub fn label(&self, operator: Operator) -> &'static str {
        match self {
            Locale::PtBr => match operator {
                Operator::Eq => "Igual (=)",
                Operator::Ne => "Diferente (!=)",
                Operator::Gt => "Maior que (>)",
                Operator::Gte => "Maior ou igual (>=)",
                Operator::Lt => "Menor que (<)",
                Operator::Lte => "Menor ou igual (<=)",
                Operator::Regex => "Regex",
                Operator::Contains => "Contém texto",
                Operator::NotRegex => "Não corresponde (regex)",
                Operator::NotContains => "Não contém texto",
                Operator::In => "Está em (IN)",
                Operator::Nin => "Não está em (NOT IN)",
                Operator::Exists => "Existe",
                Operator::NotExists => "Não existe",
            },
            Locale::En => match operator {
                Operator::Eq => "Equals (=)",
                Operator::Ne => "Not equal (!=)",
                Operator::Gt => "Greater than (>)",
                Operator::Gte => "Greater or equal (>=)",
                Operator::Lt => "Less than (<)",
                Operator::Lte => "Less or equal (<=)",
                Operator::Regex => "Regex",
                Operator::Contains => "Contains text",
                Operator::NotRegex => "Does not match (regex)",
                Operator::NotContains => "Does not contain text",
                Operator::In => "In (IN)",
                Operator::Nin => "Not in (NOT IN)",
                Operator::Exists => "Exists",
                Operator::NotExists => "Does not exist",
            },
        }
    }

    /// Connector placed between per-filter descriptions, spaces included.
    pub fn connector(&self, combination: Combination) -> &'static str {
        match (self, combination) {
            (Locale::PtBr, Combination::And) => " E ",
            (Locale::PtBr, Combination::Or) => " OU ",
            (Locale::En, Combination::And) => " AND ",
            (Locale::En, Combination::Or) => " OR ",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("Unknown locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one filter using the raw text the user typed.
pub fn describe_filter(spec: &FilterSpec, locale: Locale) -> String {
    let phrase = locale.phrase(spec.operator);
    if spec.operator.is_membership() {
        format!("\"{}\" {} [{}]", spec.field, phrase, spec.raw_value_list)
    } else if spec.operator.is_existence() {
        format!("\"{}\" {}", spec.field, phrase)
    } else {
        format!("\"{}\" {} \"{}\"", spec.field, phrase, spec.raw_value)
    }
}

/// Joins per-filter descriptions with the localized connector.
pub fn describe_all(specs: &[FilterSpec], combination: Combination, locale: Locale) -> String {
    specs
        .iter()
        .map(|spec| describe_filter(spec, locale))
        .collect::<Vec<_>>()
        .join(locale.connector(combination))
}

//! Host form payloads.
//!
//! The workflow host hands filters over as loosely typed form values: every
//! field is text, most are optional and booleans may be missing. [`FilterForm`]
//! mirrors that payload and converts into a validated [`FilterSpec`].

use crate::error::{FilterError, Result};
use crate::model::{Combination, DataType, FilterSpec, Operator, OutputMode};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterForm {
    #[serde(default)]
    pub field: String,
    #[serde(default = "default_operator")]
    pub operator: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub value_list: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub literal_search: Option<bool>,
}

fn default_operator() -> String {
    Operator::Eq.as_str().to_string()
}

impl TryFrom<FilterForm> for FilterSpec {
    type Error = FilterError;

    /// Unknown operators are rejected. Unknown data types fall back to `auto`,
    /// which is how the form has always treated them.
    fn try_from(form: FilterForm) -> Result<Self> {
        let operator: Operator = form.operator.parse()?;

        let data_type = match form.data_type.as_deref() {
            None | Some("") => DataType::Auto,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(field = %form.field, "{}; falling back to auto", e);
                DataType::Auto
            }),
        };

        Ok(FilterSpec {
            field: form.field,
            operator,
            raw_value: form.value.unwrap_or_default(),
            raw_value_list: form.value_list.unwrap_or_default(),
            data_type,
            case_sensitive: form.case_sensitive.unwrap_or(true),
            literal_search: form.literal_search.unwrap_or(true),
        })
    }
}

/// One input item: the filters configured on the form plus how to combine them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default)]
    pub filters: Vec<FilterForm>,
    #[serde(default)]
    pub logical_operator: Option<Combination>,
    #[serde(default)]
    pub output: Option<OutputMode>,
}

impl FilterRequest {
    /// Converts every form entry, failing on the first invalid one.
    pub fn specs(&self) -> Result<Vec<FilterSpec>> {
        self.filters
            .iter()
            .cloned()
            .map(FilterSpec::try_from)
            .collect()
    }
}

//! Aggregation of compiled filters.
//!
//! Each spec is compiled on its own, in input order. In document mode the
//! fragments are merged: a single fragment is returned as-is, two or more are
//! wrapped in `$and`/`$or`. Array mode never merges; it always yields the
//! ordered list of flat records and ignores the combination.

use crate::compiler::compile;
use crate::describe::{describe_all, Locale};
use crate::error::{FilterError, Result};
use crate::form::FilterRequest;
use crate::model::{Combination, FilterSpec, OutputMode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::CompileDefaults;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledResult {
    /// The query document, or the array of flat records in array mode.
    pub filter: Value,
    pub output: OutputMode,
    pub logical_operator: Combination,
    pub description: String,
    pub count: usize,
}

pub fn run(
    specs: &[FilterSpec],
    mode: OutputMode,
    combination: Combination,
    locale: Locale,
) -> Result<CompiledResult> {
    if specs.is_empty() {
        return Err(FilterError::EmptyFilterSet);
    }

    let mut compiled = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        if spec.field.is_empty() {
            debug!(index, "filter has no field");
            return Err(FilterError::MissingField);
        }
        compiled.push(compile(spec, mode)?.into_value());
    }

    let count = compiled.len();
    let filter = match mode {
        OutputMode::Document if count == 1 => compiled.remove(0),
        OutputMode::Document => {
            let mut wrapper = Map::new();
            wrapper.insert(combination.document_key().to_string(), Value::Array(compiled));
            Value::Object(wrapper)
        }
        OutputMode::Array => Value::Array(compiled),
    };

    // Flat arrays carry no boolean logic, so their description always reads as AND.
    let description_combination = match mode {
        OutputMode::Document => combination,
        OutputMode::Array => Combination::And,
    };

    Ok(CompiledResult {
        filter,
        output: mode,
        logical_operator: combination,
        description: describe_all(specs, description_combination, locale),
        count,
    })
}

/// Compiles one host request, filling unspecified settings from `defaults`.
pub fn run_request(request: &FilterRequest, defaults: CompileDefaults) -> Result<CompiledResult> {
    let specs = request.specs()?;
    run(
        &specs,
        request.output.unwrap_or(defaults.output),
        request.logical_operator.unwrap_or(defaults.combination),
        defaults.locale,
    )
}

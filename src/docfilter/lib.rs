//! # Docfilter Architecture
//!
//! Docfilter compiles filters that users declare on a workflow form (field,
//! operator, value, data type and a couple of text-matching switches) into
//! either a MongoDB query document or a flat array of normalized filter
//! records for systems that do not speak MongoDB's query language.
//!
//! It does not run queries and it does not talk to a database. Every call is a
//! pure transformation of its inputs.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads JSON requests, prints compiled JSON and messages   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configured defaults   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Aggregation, batch policy, operator listing, config      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (compiler.rs, coerce.rs, pattern.rs, describe.rs)     │
//! │  - One spec in, one compiled filter out                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use docfilter::model::{Combination, DataType, FilterSpec, Operator, OutputMode};
//! use serde_json::json;
//!
//! let specs = vec![
//!     FilterSpec::with_value("age", Operator::Gte, "18").data_type(DataType::Number),
//!     FilterSpec::with_value("name", Operator::Regex, "Jo.Hn").case_sensitive(false),
//! ];
//! let result =
//!     docfilter::compile_filters(&specs, OutputMode::Document, Combination::And).unwrap();
//! assert_eq!(
//!     result.filter,
//!     json!({"$and": [
//!         {"age": {"$gte": 18}},
//!         {"name": {"$regex": "Jo\\.Hn", "$options": "i"}}
//!     ]})
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Aggregation, batch execution, operator listing, config
//! - [`compiler`]: Single-filter compilation
//! - [`coerce`]: Text to typed value conversion
//! - [`pattern`]: Regex escaping and flags
//! - [`describe`]: Localized descriptions
//! - [`form`]: Host form payloads
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod coerce;
pub mod commands;
pub mod compiler;
pub mod config;
pub mod describe;
pub mod error;
pub mod form;
pub mod model;
pub mod pattern;

pub use coerce::{coerce, TypedValue};
pub use commands::CompiledResult;
pub use error::{FilterError, Result};
pub use pattern::{escape_literal, resolve_flags};

use describe::Locale;
use model::{Combination, FilterSpec, OutputMode};

/// Compiles `specs` into one result, describing it in the default locale.
pub fn compile_filters(
    specs: &[FilterSpec],
    output: OutputMode,
    combination: Combination,
) -> Result<CompiledResult> {
    commands::compile::run(specs, output, combination, Locale::default())
}

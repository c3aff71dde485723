//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for hosts (the CLI, a workflow node adapter, a test harness).
//!
//! It dispatches to `commands/*.rs`, applies configured defaults and returns
//! structured [`CmdResult`] values. It performs no I/O beyond loading and
//! saving configuration, and never formats output for humans.

use crate::commands::{self, CmdResult, CompileDefaults, CompiledResult};
use crate::config::FilterConfig;
use crate::error::Result;
use crate::form::FilterRequest;
use crate::model::{Combination, FilterSpec, OutputMode};
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{BatchItem, CmdMessage, ItemOutcome, MessageLevel, OperatorInfo};

/// The main API facade for filter compilation.
#[derive(Debug, Clone, Default)]
pub struct FilterApi {
    config: FilterConfig,
    config_dir: Option<PathBuf>,
}

impl FilterApi {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            config_dir: None,
        }
    }

    /// Builds an API whose configuration is loaded from (and saved to) `dir`.
    pub fn from_config_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let config = FilterConfig::load(&dir)?;
        Ok(Self {
            config,
            config_dir: Some(dir),
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FilterConfig {
        &mut self.config
    }

    fn defaults(&self) -> CompileDefaults {
        CompileDefaults::from(&self.config)
    }

    /// Compiles already-validated specs with the configured locale.
    pub fn compile(
        &self,
        specs: &[FilterSpec],
        mode: OutputMode,
        combination: Combination,
    ) -> Result<CompiledResult> {
        commands::compile::run(specs, mode, combination, self.config.locale)
    }

    /// Compiles one host request, filling unspecified settings from config.
    pub fn compile_request(&self, request: &FilterRequest) -> Result<CmdResult> {
        let compiled = commands::compile::run_request(request, self.defaults())?;
        Ok(CmdResult::default().with_compiled(compiled))
    }

    /// Compiles every item; `continue_on_fail` overrides the configured policy.
    pub fn batch(
        &self,
        requests: &[FilterRequest],
        continue_on_fail: Option<bool>,
    ) -> Result<CmdResult> {
        commands::batch::run(
            requests,
            self.defaults(),
            continue_on_fail.unwrap_or(self.config.continue_on_fail),
        )
    }

    pub fn operators(&self) -> CmdResult {
        commands::operators::run(self.config.locale)
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(self.config_dir.as_deref(), action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

use crate::config::FilterConfig;
use crate::describe::Locale;
use crate::model::{Combination, OutputMode};
use serde::Serialize;

pub mod batch;
pub mod compile;
pub mod config;
pub mod operators;

pub use batch::{BatchItem, ItemOutcome};
pub use compile::CompiledResult;
pub use operators::OperatorInfo;

/// Defaults applied to requests that leave a setting unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileDefaults {
    pub combination: Combination,
    pub output: OutputMode,
    pub locale: Locale,
}

impl From<&FilterConfig> for CompileDefaults {
    fn from(config: &FilterConfig) -> Self {
        Self {
            combination: config.combination,
            output: config.output,
            locale: config.locale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub compiled: Option<CompiledResult>,
    pub items: Vec<BatchItem>,
    pub operators: Vec<OperatorInfo>,
    pub config: Option<FilterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_compiled(mut self, compiled: CompiledResult) -> Self {
        self.compiled = Some(compiled);
        self
    }

    pub fn with_items(mut self, items: Vec<BatchItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_operators(mut self, operators: Vec<OperatorInfo>) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

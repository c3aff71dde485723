//! Batch compilation over host input items.
//!
//! Each item carries its own filter set. By default the first failing item
//! aborts the batch with an error tagged by its index; with
//! `continue_on_fail` the failure is recorded on that item and the remaining
//! items are still compiled.

use crate::error::Result;
use crate::form::FilterRequest;
use serde::Serialize;
use tracing::{info, warn};

use super::compile::{self, CompiledResult};
use super::{CmdMessage, CmdResult, CompileDefaults};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOutcome {
    Compiled(CompiledResult),
    Failed { kind: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: ItemOutcome,
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Compiled(_))
    }
}

pub fn run(
    requests: &[FilterRequest],
    defaults: CompileDefaults,
    continue_on_fail: bool,
) -> Result<CmdResult> {
    let mut items = Vec::with_capacity(requests.len());

    for (index, request) in requests.iter().enumerate() {
        let outcome = match compile::run_request(request, defaults) {
            Ok(compiled) => ItemOutcome::Compiled(compiled),
            Err(err) if continue_on_fail => {
                warn!(index, kind = err.kind(), "item failed: {}", err);
                ItemOutcome::Failed {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                }
            }
            Err(err) => return Err(err.at_item(index)),
        };
        items.push(BatchItem { index, outcome });
    }

    let failed = items.iter().filter(|item| !item.is_ok()).count();
    info!(total = items.len(), failed, "batch compiled");

    let mut result = CmdResult::default();
    if failed > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} of {} items failed",
            failed,
            items.len()
        )));
    } else if items.is_empty() {
        result.add_message(CmdMessage::info("No items to compile"));
    }
    Ok(result.with_items(items))
}

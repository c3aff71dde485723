use crate::describe::Locale;
use crate::model::Operator;
use serde::Serialize;

use super::CmdResult;

/// What an operator needs from the form, for listings and help output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorInfo {
    pub operator: Operator,
    pub label: &'static str,
    pub phrase: &'static str,
    pub input: &'static str,
}

pub fn run(locale: Locale) -> CmdResult {
    let operators = Operator::all()
        .iter()
        .map(|&operator| OperatorInfo {
            operator,
            label: locale.label(operator),
            phrase: locale.phrase(operator),
            input: input_kind(operator),
        })
        .collect();
    CmdResult::default().with_operators(operators)
}

fn input_kind(operator: Operator) -> &'static str {
    if operator.is_membership() {
        "list"
    } else if operator.is_existence() {
        "none"
    } else {
        "value"
    }
}

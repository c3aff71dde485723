use colored::Colorize;
use docfilter::api::{CmdMessage, MessageLevel, OperatorInfo};
use docfilter::config::FilterConfig;
use docfilter::error::Result;
use serde::Serialize;

const LABEL_WIDTH: usize = 26;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

/// Same as [`print_messages`] but on stderr, for commands whose stdout is JSON.
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", styled(message));
    }
}

fn styled(message: &CmdMessage) -> colored::ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

pub(super) fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

pub(super) fn print_operators(operators: &[OperatorInfo]) {
    for info in operators {
        let input = match info.input {
            "list" => "<a,b,c>",
            "value" => "<value>",
            _ => "",
        };
        let name = format!("{:<12}", info.operator.as_str());
        println!(
            "{} {:<width$} {}",
            name.yellow(),
            info.label,
            input.dimmed(),
            width = LABEL_WIDTH
        );
    }
}

pub(super) fn print_config(config: &FilterConfig) {
    for key in FilterConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

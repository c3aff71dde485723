//! Regular-expression safety helpers.

use serde::Serialize;
use std::fmt;

const METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escapes every regex metacharacter so `text` matches only itself.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Regex option flags as understood by the `$options` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum RegexFlags {
    None,
    CaseInsensitive,
}

impl RegexFlags {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegexFlags::None => "",
            RegexFlags::CaseInsensitive => "i",
        }
    }
}

impl From<RegexFlags> for String {
    fn from(flags: RegexFlags) -> Self {
        flags.as_str().to_string()
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn resolve_flags(case_sensitive: bool) -> RegexFlags {
    if case_sensitive {
        RegexFlags::None
    } else {
        RegexFlags::CaseInsensitive
    }
}

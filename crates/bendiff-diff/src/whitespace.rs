//! Whitespace comparison policy and comparison keys.
//!
//! Whitespace here is exactly ASCII space, tab and carriage return. Lines
//! never contain `\n` by the time they reach the engine.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How whitespace affects line equality.
///
/// This only changes which lines compare equal; the original line text is
/// always what gets displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhitespaceMode {
    /// Lines must match byte for byte.
    #[default]
    Exact,
    /// Trailing whitespace is ignored.
    IgnoreTrailing,
    /// All whitespace is ignored, wherever it appears.
    IgnoreAll,
}

impl WhitespaceMode {
    pub const ALL: [WhitespaceMode; 3] = [
        WhitespaceMode::Exact,
        WhitespaceMode::IgnoreTrailing,
        WhitespaceMode::IgnoreAll,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WhitespaceMode::Exact => "exact",
            WhitespaceMode::IgnoreTrailing => "ignore-trailing",
            WhitespaceMode::IgnoreAll => "ignore-all",
        }
    }
}

impl fmt::Display for WhitespaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhitespaceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WhitespaceMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown whitespace mode: {s}"))
    }
}

fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Build the string used to test `line` for equality under `mode`.
///
/// Borrows from `line` unless characters actually have to be removed from
/// the middle of it.
pub fn comparison_key(line: &str, mode: WhitespaceMode) -> Cow<'_, str> {
    match mode {
        WhitespaceMode::Exact => Cow::Borrowed(line),
        WhitespaceMode::IgnoreTrailing => Cow::Borrowed(line.trim_end_matches(is_ws)),
        WhitespaceMode::IgnoreAll => {
            if line.contains(is_ws) {
                Cow::Owned(line.chars().filter(|&c| !is_ws(c)).collect())
            } else {
                Cow::Borrowed(line)
            }
        }
    }
}

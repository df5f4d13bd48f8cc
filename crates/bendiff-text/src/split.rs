//! Newline-normalized line splitting.
//!
//! CRLF, LF and a lone CR each count as exactly one line break. Returned
//! lines never contain terminator characters, which is the contract the
//! diff engine's whitespace handling relies on.

use serde::{Deserialize, Serialize};

/// Lines of a text plus whether it ended with a line break.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLines {
    /// The lines, without terminators.
    pub lines: Vec<String>,
    /// `true` iff the input ended with a line break.
    pub had_final_newline: bool,
}

/// Split `text` into lines, normalizing line endings.
///
/// A trailing terminator does not produce an extra empty line; text without
/// one keeps its final partial line.
pub fn split_lines(text: &str) -> SplitLines {
    let mut out = SplitLines::default();
    if text.is_empty() {
        return out;
    }

    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.lines.push(text[start..i].to_string());
                i += 1;
                start = i;
            }
            b'\r' => {
                out.lines.push(text[start..i].to_string());
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    out.had_final_newline = matches!(bytes.last(), Some(b'\n' | b'\r'));
    if !out.had_final_newline {
        out.lines.push(text[start..].to_string());
    }

    out
}

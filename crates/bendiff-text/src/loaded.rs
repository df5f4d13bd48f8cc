//! One side of a comparison: its lines and how loading went.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TextError, TextResult};
use crate::split::{split_lines, SplitLines};

/// Outcome of loading one side of a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadStatus {
    /// The text was loaded and split into lines.
    #[default]
    Ok,
    /// The path does not exist (an added or deleted file).
    NotFound,
    /// The path exists but could not be read.
    Unreadable,
    /// The content is not valid UTF-8.
    NotUtf8,
}

impl LoadStatus {
    pub fn is_ok(self) -> bool {
        self == LoadStatus::Ok
    }

    /// Short human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            LoadStatus::Ok => "loaded",
            LoadStatus::NotFound => "not found",
            LoadStatus::Unreadable => "unreadable",
            LoadStatus::NotUtf8 => "not valid UTF-8",
        }
    }
}

/// Text for one side of a diff.
///
/// `lines` is only meaningful when `status` is [`LoadStatus::Ok`]; for any
/// other status it is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedText {
    /// Where the text came from, if it came from a file.
    pub path: Option<PathBuf>,
    pub status: LoadStatus,
    pub lines: Vec<String>,
    pub had_final_newline: bool,
}

impl LoadedText {
    /// Successfully loaded text made of the given lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A side that failed to load with the given status.
    pub fn missing(status: LoadStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Split in-memory text into a loaded side.
    pub fn from_text(text: &str) -> Self {
        let SplitLines {
            lines,
            had_final_newline,
        } = split_lines(text);
        Self {
            lines,
            had_final_newline,
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// The lines to feed the diff engine: empty unless the load succeeded.
    pub fn diff_lines(&self) -> &[String] {
        if self.is_ok() {
            &self.lines
        } else {
            &[]
        }
    }
}

/// Read `path` as UTF-8 text and split it into normalized lines.
pub fn read_utf8_text(path: &Path) -> TextResult<SplitLines> {
    let bytes = fs::read(path)?;
    let text = std::str::from_utf8(&bytes).map_err(|e| TextError::NotUtf8 {
        offset: e.valid_up_to(),
    })?;
    Ok(split_lines(text))
}

/// Load `path` as text. Never fails: problems are reported in the status.
pub fn load_utf8_text_file(path: impl Into<PathBuf>) -> LoadedText {
    let path = path.into();
    match read_utf8_text(&path) {
        Ok(split) => {
            debug!(path = %path.display(), lines = split.lines.len(), "loaded text file");
            LoadedText {
                path: Some(path),
                status: LoadStatus::Ok,
                lines: split.lines,
                had_final_newline: split.had_final_newline,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load text file");
            LoadedText {
                path: Some(path),
                ..LoadedText::missing(e.status())
            }
        }
    }
}

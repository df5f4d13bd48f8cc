//! Error types for the text crate.

use std::io;

use crate::loaded::LoadStatus;

/// Errors that can occur while reading a file as UTF-8 text.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The path does not exist.
    #[error("file not found")]
    NotFound,

    /// The path exists but could not be read.
    #[error("file unreadable: {0}")]
    Unreadable(#[source] io::Error),

    /// The file content is not valid UTF-8.
    #[error("file is not valid UTF-8 (first invalid byte at offset {offset})")]
    NotUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

impl TextError {
    /// The load status a renderer should see for this failure.
    pub fn status(&self) -> LoadStatus {
        match self {
            TextError::NotFound => LoadStatus::NotFound,
            TextError::Unreadable(_) => LoadStatus::Unreadable,
            TextError::NotUtf8 { .. } => LoadStatus::NotUtf8,
        }
    }
}

impl From<io::Error> for TextError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            TextError::NotFound
        } else {
            TextError::Unreadable(e)
        }
    }
}

/// Convenience alias for text results.
pub type TextResult<T> = Result<T, TextError>;

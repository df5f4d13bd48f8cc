//! Text inputs for the bendiff diff pipeline.
//!
//! The diff engine works on already-split, terminator-free lines. This crate
//! turns raw bytes on disk into that shape and records *why* a side could not
//! be loaded, so renderers can branch on a status instead of an error.
//!
//! # Key Types
//!
//! - [`LoadedText`] / [`LoadStatus`] -- One side of a comparison plus its load outcome
//! - [`SplitLines`] -- Result of newline-normalized line splitting
//! - [`TextError`] -- Why reading a file as UTF-8 text failed

pub mod error;
pub mod loaded;
pub mod split;

pub use error::{TextError, TextResult};
pub use loaded::{load_utf8_text_file, read_utf8_text, LoadStatus, LoadedText};
pub use split::{split_lines, SplitLines};

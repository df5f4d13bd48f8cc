//! Line diff engine for bendiff.
//!
//! Computes a minimal line-level edit script between two sequences of lines
//! under a whitespace comparison policy, groups it into zero-context hunks,
//! and derives the views consumers need from a single [`LineDiff`]:
//! summary statistics, a unified two-column row stream, and per-line
//! classifications.
//!
//! # Key Types
//!
//! - [`LineDiff`] / [`Hunk`] / [`EditOp`] -- Result of [`diff_lines`]
//! - [`WhitespaceMode`] -- Comparison policy for line equality
//! - [`DiffStats`] -- Hunk and added/deleted line counts
//! - [`AlignedRow`] -- One row of a two-column view
//!
//! All operations are pure and synchronous. Memory for the edit script
//! search grows with the square of the combined input size in the worst
//! case; callers diffing very large inputs should bound them or run the
//! engine off any interactive thread.

pub mod alignment;
pub mod hunk;
pub mod line_diff;
pub mod myers;
pub mod stats;
pub mod whitespace;

pub use alignment::{
    build_aligned_rows, left_line_classification, right_line_classification, AlignedRow,
};
pub use hunk::build_hunks;
pub use line_diff::{diff_lines, EditOp, Hunk, LineDiff, LineOp};
pub use myers::shortest_edit_script;
pub use stats::{compute_diff_stats, DiffStats};
pub use whitespace::{comparison_key, WhitespaceMode};

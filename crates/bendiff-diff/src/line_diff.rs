//! Line-level diff: the result types and the [`diff_lines`] entry point.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hunk::build_hunks;
use crate::myers::shortest_edit_script;
use crate::whitespace::{comparison_key, WhitespaceMode};

/// The kind of an edit, without its line indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineOp {
    /// The line is present on both sides.
    #[default]
    Equal,
    /// The line exists only on the right.
    Insert,
    /// The line exists only on the left.
    Delete,
}

/// One step of an edit script.
///
/// Indices are 0-based positions in the original left/right inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "op")]
pub enum EditOp {
    /// `left[left]` and `right[right]` compare equal.
    Equal { left: usize, right: usize },
    /// `right[right]` was inserted.
    Insert { right: usize },
    /// `left[left]` was deleted.
    Delete { left: usize },
}

impl EditOp {
    pub fn op(&self) -> LineOp {
        match self {
            EditOp::Equal { .. } => LineOp::Equal,
            EditOp::Insert { .. } => LineOp::Insert,
            EditOp::Delete { .. } => LineOp::Delete,
        }
    }

    /// Index into the left input, absent for insertions.
    pub fn left_index(&self) -> Option<usize> {
        match *self {
            EditOp::Equal { left, .. } | EditOp::Delete { left } => Some(left),
            EditOp::Insert { .. } => None,
        }
    }

    /// Index into the right input, absent for deletions.
    pub fn right_index(&self) -> Option<usize> {
        match *self {
            EditOp::Equal { right, .. } | EditOp::Insert { right } => Some(right),
            EditOp::Delete { .. } => None,
        }
    }
}

/// A maximal run of non-equal edits.
///
/// Starts are 0-based; counts are the number of lines consumed on each side.
/// Hunks carry no context lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub left_start: usize,
    pub left_count: usize,
    pub right_start: usize,
    pub right_count: usize,
    /// The edits in this hunk, in script order.
    pub ops: Vec<EditOp>,
}

impl Hunk {
    /// One past the last left line covered by this hunk.
    pub fn left_end(&self) -> usize {
        self.left_start + self.left_count
    }

    /// One past the last right line covered by this hunk.
    pub fn right_end(&self) -> usize {
        self.right_start + self.right_count
    }
}

/// The result of diffing two line sequences.
///
/// Hunks are sorted by position and never overlap; everything between and
/// around them is equal on both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// The whitespace policy the diff was computed under.
    pub mode: WhitespaceMode,
    pub hunks: Vec<Hunk>,
    /// Number of lines in the left input.
    pub left_line_count: usize,
    /// Number of lines in the right input.
    pub right_line_count: usize,
}

impl LineDiff {
    /// Returns `true` if the two inputs compared equal.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// All edits across all hunks, in order.
    pub fn ops(&self) -> impl Iterator<Item = &EditOp> {
        self.hunks.iter().flat_map(|h| &h.ops)
    }
}

/// Diff two sequences of lines under `mode`.
///
/// Lines must already be split and free of terminators. Empty inputs are
/// fine: an empty left side diffs to all insertions, an empty right side to
/// all deletions, and identical inputs to no hunks.
pub fn diff_lines<L, R>(left: &[L], right: &[R], mode: WhitespaceMode) -> LineDiff
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let left_keys: Vec<_> = left
        .iter()
        .map(|l| comparison_key(l.as_ref(), mode))
        .collect();
    let right_keys: Vec<_> = right
        .iter()
        .map(|l| comparison_key(l.as_ref(), mode))
        .collect();

    let script = shortest_edit_script(&left_keys, &right_keys);
    let hunks = build_hunks(&script);

    debug!(
        left = left.len(),
        right = right.len(),
        %mode,
        hunks = hunks.len(),
        "computed line diff"
    );

    LineDiff {
        mode,
        hunks,
        left_line_count: left.len(),
        right_line_count: right.len(),
    }
}

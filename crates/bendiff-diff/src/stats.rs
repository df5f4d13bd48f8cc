//! Summary statistics over an existing diff.

use serde::{Deserialize, Serialize};

use crate::line_diff::{EditOp, LineDiff};

/// Hunk and line counts for a status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub hunk_count: usize,
    pub added_line_count: usize,
    pub deleted_line_count: usize,
}

/// Fold a computed diff into [`DiffStats`]. Does not re-run the diff.
pub fn compute_diff_stats(d: &LineDiff) -> DiffStats {
    d.ops().fold(
        DiffStats {
            hunk_count: d.hunks.len(),
            ..DiffStats::default()
        },
        |mut s, op| {
            match op {
                EditOp::Insert { .. } => s.added_line_count += 1,
                EditOp::Delete { .. } => s.deleted_line_count += 1,
                EditOp::Equal { .. } => {}
            }
            s
        },
    )
}

impl From<&LineDiff> for DiffStats {
    fn from(d: &LineDiff) -> Self {
        compute_diff_stats(d)
    }
}

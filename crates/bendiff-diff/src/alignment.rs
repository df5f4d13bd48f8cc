//! Two-column row alignment and per-line classification.
//!
//! A [`LineDiff`] only stores the changed regions. The row stream replays
//! them together with the equal runs implied between and around them, which
//! is what a side-by-side view draws and what per-line highlighting needs.

use serde::{Deserialize, Serialize};

use crate::line_diff::{EditOp, LineDiff, LineOp};

/// One visual row in a two-column view.
///
/// `left`/`right` are 0-based indices into the original inputs; `None` means
/// the row has nothing on that side (which is not the same as line 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub op: LineOp,
}

impl AlignedRow {
    fn equal(left: usize, right: usize) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            op: LineOp::Equal,
        }
    }
}

impl From<EditOp> for AlignedRow {
    fn from(op: EditOp) -> Self {
        Self {
            left: op.left_index(),
            right: op.right_index(),
            op: op.op(),
        }
    }
}

/// Build the unified row stream for `d`.
///
/// Rows cover every left and every right line exactly once, in increasing
/// order on each side.
pub fn build_aligned_rows(d: &LineDiff) -> Vec<AlignedRow> {
    let mut rows = Vec::with_capacity(d.left_line_count + d.right_line_count);
    let mut left_pos = 0;
    let mut right_pos = 0;

    for h in &d.hunks {
        debug_assert!(h.left_start >= left_pos && h.right_start >= right_pos);
        let gap = h.left_start.saturating_sub(left_pos);
        debug_assert_eq!(gap, h.right_start.saturating_sub(right_pos), "unequal gap before hunk");
        emit_equals(&mut rows, &mut left_pos, &mut right_pos, gap);

        for &op in &h.ops {
            rows.push(AlignedRow::from(op));
            match op {
                EditOp::Equal { .. } => {
                    left_pos += 1;
                    right_pos += 1;
                }
                EditOp::Insert { .. } => right_pos += 1,
                EditOp::Delete { .. } => left_pos += 1,
            }
        }

        debug_assert_eq!(left_pos, h.left_end());
        debug_assert_eq!(right_pos, h.right_end());
    }

    let tail = d.left_line_count.saturating_sub(left_pos);
    debug_assert_eq!(tail, d.right_line_count.saturating_sub(right_pos), "unequal tail");
    emit_equals(&mut rows, &mut left_pos, &mut right_pos, tail);

    rows
}

fn emit_equals(rows: &mut Vec<AlignedRow>, left_pos: &mut usize, right_pos: &mut usize, count: usize) {
    for _ in 0..count {
        rows.push(AlignedRow::equal(*left_pos, *right_pos));
        *left_pos += 1;
        *right_pos += 1;
    }
}

/// One entry per left line: `Delete` where a hunk removes it, else `Equal`.
pub fn left_line_classification(d: &LineDiff) -> Vec<LineOp> {
    let mut out = vec![LineOp::Equal; d.left_line_count];
    for op in d.ops() {
        if let EditOp::Delete { left } = *op {
            if let Some(slot) = out.get_mut(left) {
                *slot = LineOp::Delete;
            }
        }
    }
    out
}

/// One entry per right line: `Insert` where a hunk adds it, else `Equal`.
pub fn right_line_classification(d: &LineDiff) -> Vec<LineOp> {
    let mut out = vec![LineOp::Equal; d.right_line_count];
    for op in d.ops() {
        if let EditOp::Insert { right } = *op {
            if let Some(slot) = out.get_mut(right) {
                *slot = LineOp::Insert;
            }
        }
    }
    out
}

//! Grouping an edit script into zero-context hunks.

use crate::line_diff::{EditOp, Hunk};

/// Partition a forward edit script into hunks.
///
/// Runs of `Equal` steps separate hunks and are not included in them; any
/// context shown around a change is a rendering concern.
pub fn build_hunks(ops: &[EditOp]) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut open: Option<Hunk> = None;
    let mut left_pos = 0;
    let mut right_pos = 0;

    for &op in ops {
        match op {
            EditOp::Equal { .. } => {
                left_pos += 1;
                right_pos += 1;
                hunks.extend(open.take());
            }
            EditOp::Insert { .. } => {
                let hunk = open.get_or_insert_with(|| starting_at(left_pos, right_pos));
                hunk.right_count += 1;
                hunk.ops.push(op);
                right_pos += 1;
            }
            EditOp::Delete { .. } => {
                let hunk = open.get_or_insert_with(|| starting_at(left_pos, right_pos));
                hunk.left_count += 1;
                hunk.ops.push(op);
                left_pos += 1;
            }
        }
    }

    hunks.extend(open);
    hunks
}

fn starting_at(left_start: usize, right_start: usize) -> Hunk {
    Hunk {
        left_start,
        right_start,
        ..Hunk::default()
    }
}

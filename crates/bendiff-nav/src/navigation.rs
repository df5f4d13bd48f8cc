use serde::{Deserialize, Serialize};

use bendiff_diff::{Hunk, LineDiff};

/// Where one change sits in both inputs.
///
/// Starts are 0-based line indices, as in [`Hunk`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeLocation {
    pub hunk_index: usize,
    pub left_start: usize,
    pub left_count: usize,
    pub right_start: usize,
    pub right_count: usize,
}

impl ChangeLocation {
    fn from_hunk(hunk_index: usize, h: &Hunk) -> Self {
        Self {
            hunk_index,
            left_start: h.left_start,
            left_count: h.left_count,
            right_start: h.right_start,
            right_count: h.right_count,
        }
    }
}

/// One location per hunk, in hunk order.
pub fn enumerate_change_hunks(d: &LineDiff) -> Vec<ChangeLocation> {
    d.hunks
        .iter()
        .enumerate()
        .map(|(i, h)| ChangeLocation::from_hunk(i, h))
        .collect()
}

/// The change after `current`.
///
/// With no cursor, or one past the end of `changes`, this is the first
/// change. At the last change there is nowhere to go and `None` comes back.
pub fn next_change_index(current: Option<usize>, changes: &[ChangeLocation]) -> Option<usize> {
    if changes.is_empty() {
        return None;
    }
    match current {
        Some(i) if i < changes.len() => Some(i + 1).filter(|&n| n < changes.len()),
        _ => Some(0),
    }
}

/// The change before `current`; the mirror of [`next_change_index`].
pub fn prev_change_index(current: Option<usize>, changes: &[ChangeLocation]) -> Option<usize> {
    let last = changes.len().checked_sub(1)?;
    match current {
        Some(i) if i <= last => i.checked_sub(1),
        _ => Some(last),
    }
}

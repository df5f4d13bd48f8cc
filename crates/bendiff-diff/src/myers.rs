//! Myers' greedy shortest-edit-script search.
//!
//! The forward pass records, for every edit distance `d`, the furthest
//! x-coordinate reached on each diagonal `k = x - y`. A copy of that
//! frontier is kept for every `d` so the path can be walked back from
//! `(n, m)` to the origin once the end is reached.
//!
//! Both the frontier and the trace are sized by `n + m`, so memory is
//! `O((n + m) * d)` and quadratic in the worst case.
//!
//! When more than one shortest script exists, the choice is fixed by the
//! predecessor rule in [`Frontier::came_from_above`]: on the `k == -d` edge
//! the path always comes from diagonal `k + 1` (an insertion), on the
//! `k == d` edge from `k - 1` (a deletion), and in between from whichever
//! neighbour reached further, preferring `k - 1` on ties. Downstream hunk
//! boundaries depend on this rule; changing it changes the golden fixtures.

use crate::line_diff::EditOp;

/// Furthest-reaching x per diagonal, indexed by `k + offset`.
#[derive(Clone, Debug)]
struct Frontier {
    offset: isize,
    xs: Vec<isize>,
}

impl Frontier {
    fn new(max: usize) -> Self {
        // Diagonals -max..=max, plus one slot so `k + 1` is always valid.
        Self {
            offset: max as isize,
            xs: vec![0; 2 * max + 2],
        }
    }

    fn get(&self, k: isize) -> isize {
        self.xs[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: isize) {
        self.xs[(k + self.offset) as usize] = x;
    }

    /// Whether the best path to diagonal `k` at distance `d` arrives by a
    /// vertical move from `k + 1` rather than a horizontal one from `k - 1`.
    fn came_from_above(&self, d: isize, k: isize) -> bool {
        k == -d || (k != d && self.get(k - 1) < self.get(k + 1))
    }
}

/// Compute a shortest edit script turning `left` into `right`.
///
/// Returns the full script in forward order, including `Equal` steps.
pub fn shortest_edit_script<T: PartialEq>(left: &[T], right: &[T]) -> Vec<EditOp> {
    let trace = forward(left, right);
    backtrack(&trace, left.len(), right.len())
}

/// Run the forward search, returning the frontier snapshot taken at the
/// start of every distance up to and including the one that reached the end.
fn forward<T: PartialEq>(left: &[T], right: &[T]) -> Vec<Frontier> {
    let n = left.len() as isize;
    let m = right.len() as isize;
    let max = left.len() + right.len();

    let mut v = Frontier::new(max);
    let mut trace = Vec::new();

    for d in 0..=max as isize {
        trace.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let mut x = if v.came_from_above(d, k) {
                v.get(k + 1)
            } else {
                v.get(k - 1) + 1
            };
            let mut y = x - k;

            while x < n && y < m && left[x as usize] == right[y as usize] {
                x += 1;
                y += 1;
            }

            v.set(k, x);

            if x >= n && y >= m {
                return trace;
            }
        }
    }

    // Distance n + m always reaches the end.
    trace
}

/// Walk back from `(n, m)` through the saved frontiers.
fn backtrack(trace: &[Frontier], n: usize, m: usize) -> Vec<EditOp> {
    let mut ops = Vec::with_capacity(n.max(m));
    let mut x = n as isize;
    let mut y = m as isize;

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;

        let prev_k = if v.came_from_above(d, k) { k + 1 } else { k - 1 };
        let prev_x = v.get(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            ops.push(EditOp::Equal {
                left: x as usize,
                right: y as usize,
            });
        }

        if d > 0 {
            if x == prev_x {
                ops.push(EditOp::Insert {
                    right: prev_y as usize,
                });
            } else {
                ops.push(EditOp::Delete {
                    left: prev_x as usize,
                });
            }
        }

        x = prev_x;
        y = prev_y;
    }

    ops.reverse();
    ops
}

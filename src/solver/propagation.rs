use tracing::debug;

use crate::solver::{
    board::{cell_name, Board, CellId},
    stats::SearchStats,
    work_list::WorkList,
};

/// Outcome of an AC-3 pass over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Propagation {
    /// Every arc is consistent; domains may still hold several candidates.
    Consistent,
    /// The named cell's domain was emptied: no assignment can satisfy the
    /// constraints, so the board is unsolvable as given.
    Contradiction(CellId),
}

impl Propagation {
    pub fn is_consistent(self) -> bool {
        matches!(self, Propagation::Consistent)
    }
}

/// Runs the AC-3 algorithm until fixpoint or contradiction.
///
/// The worklist starts with every arc. For each dequeued arc `(xi, xj)`,
/// [`revise`] prunes `xi`'s domain; if anything was removed, every arc
/// `(xk, xi)` with `xk` a neighbor of `xi` other than `xj` is re-enqueued,
/// since the smaller domain may have invalidated their consistency.
///
/// This is a pure domain-reduction pass: it never assigns or guesses a
/// value, so an emptied domain is a sound proof that the board has no
/// solution.
pub fn ac3(board: &mut Board, stats: &mut SearchStats) -> Propagation {
    let mut worklist = WorkList::seed(board.arcs());

    while let Some((xi, xj)) = worklist.pop_front() {
        stats.revisions += 1;
        if revise(board, xi, xj) {
            stats.prunings += 1;
            if board.domain(xi).is_empty() {
                debug!(cell = %cell_name(xi), "domain emptied during propagation");
                return Propagation::Contradiction(xi);
            }
            for &xk in board.neighbors(xi) {
                if xk != xj {
                    worklist.push_back((xk, xi));
                }
            }
        }
    }

    debug!("propagation reached fixpoint");
    Propagation::Consistent
}

/// Removes from `xi`'s domain every value with no support in `xj`'s domain.
///
/// Under the inequality constraint a value `x` is supported by any
/// `y != x`, so `x` loses support exactly when `xj`'s domain is `{x}`.
/// Removal is by value, never by position. Returns whether anything was
/// removed.
pub fn revise(board: &mut Board, xi: CellId, xj: CellId) -> bool {
    let mut revised = false;
    for x in board.domain(xi).clone() {
        let supported = board.domain(xj).iter().any(|&y| y != x);
        if !supported {
            board.domain_mut(xi).remove(&x);
            revised = true;
        }
    }
    revised
}

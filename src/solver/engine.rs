use tracing::debug;

use crate::solver::{
    board::Board,
    heuristics::{
        value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    },
    propagation::{ac3, Propagation},
    search::BacktrackingSearch,
    solution::SolvedBoard,
    stats::SearchStats,
};

/// The main engine for solving a Sudoku board.
///
/// The `SolverEngine` first applies constraint propagation (the AC-3
/// algorithm) to prune the candidate domains. If propagation collapses
/// every domain to a singleton, the board is solved outright; otherwise it
/// proceeds with a backtracking search over the reduced domains.
pub struct SolverEngine {
    search: BacktrackingSearch,
}

impl SolverEngine {
    /// Creates an engine with the given branching heuristics.
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            search: BacktrackingSearch::new(variable_heuristic, value_heuristic),
        }
    }

    /// Attempts to solve the board.
    ///
    /// # Returns
    ///
    /// * `(Some(solved), stats)` if a complete solution is found; the
    ///   solution's method records whether propagation alone sufficed
    ///   (`AC3`) or search was required (`BTS`).
    /// * `(None, stats)` if the board is proven unsolvable: either a
    ///   domain emptied during propagation (AC-3 removals are sound, so
    ///   this can only happen when the clues themselves are
    ///   contradictory), or every search branch at the root was
    ///   exhausted.
    pub fn solve(&self, mut board: Board) -> (Option<SolvedBoard>, SearchStats) {
        let mut stats = SearchStats::default();

        if let Propagation::Contradiction(cell) = ac3(&mut board, &mut stats) {
            debug!(cell, "board is unsolvable as given");
            return (None, stats);
        }

        if board.all_singleton() {
            debug!("solved by propagation alone");
            return (Some(SolvedBoard::from_domains(&board)), stats);
        }

        debug!("propagation left open choices, starting search");
        let solved = self
            .search
            .solve(&mut board, &mut stats)
            .map(|assignment| SolvedBoard::from_assignment(&assignment));
        (solved, stats)
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}

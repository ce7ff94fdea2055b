//! Defines the standard heuristics for selecting which cell to branch on
//! next during the search process.

use crate::solver::{
    board::{Board, CellId, CELL_COUNT},
    search::Assignment,
};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned cell the
/// solver should branch on next. A good heuristic can dramatically improve
/// solver performance.
pub trait VariableSelectionHeuristic {
    /// Selects the next cell to be assigned.
    ///
    /// # Arguments
    ///
    /// * `board`: The current domains and constraint network.
    /// * `assignment`: The cells already holding a trial value.
    ///
    /// # Returns
    ///
    /// * `Some(CellId)` of the chosen cell, if any cell is unassigned.
    /// * `None` if every cell is already assigned.
    fn select_variable(&self, board: &Board, assignment: &Assignment) -> Option<CellId>;
}

/// A simple heuristic that selects the first unassigned cell in the fixed
/// row-major enumeration.
///
/// This provides a basic, deterministic way to select cells.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, _board: &Board, assignment: &Assignment) -> Option<CellId> {
        (0..CELL_COUNT).find(|&cell| !assignment.contains(cell))
    }
}

/// A heuristic that selects the unassigned cell with the Minimum Remaining
/// Values in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// cell, so the hardest parts of the board are tackled early and dead ends
/// surface sooner. In case of a tie, the cell earliest in the row-major
/// enumeration is chosen to ensure determinism.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, board: &Board, assignment: &Assignment) -> Option<CellId> {
        (0..CELL_COUNT)
            .filter(|&cell| !assignment.contains(cell))
            .min_by(|&a, &b| {
                // Primary criterion: domain size (ascending)
                // Secondary criterion: cell id (ascending, for tie-breaking)
                (board.domain(a).len(), a).cmp(&(board.domain(b).len(), b))
            })
    }
}

use std::collections::HashMap;

use tracing::trace;

use crate::solver::{
    board::{cell_name, Board, CellId, CELL_COUNT},
    heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
    stats::SearchStats,
};

/// Partial mapping from cells to chosen digits, built incrementally during
/// search and complete at 81 entries.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    values: HashMap<CellId, u8>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: CellId) -> Option<u8> {
        self.values.get(&cell).copied()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.values.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.values.len() == CELL_COUNT
    }

    pub(crate) fn assign(&mut self, cell: CellId, value: u8) {
        self.values.insert(cell, value);
    }

    pub(crate) fn unassign(&mut self, cell: CellId) {
        self.values.remove(&cell);
    }
}

/// Depth-first search over partial assignments.
///
/// Each frame picks a cell with the variable heuristic, tries its
/// candidate values in the value heuristic's order, forward checks every
/// tentative assignment, and recurses. The shared board is mutated in
/// place, so the undo contract is strict: on every failing path a frame
/// restores exactly the domain values its own forward checking removed
/// before handing control back to its caller.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Searches for a complete assignment over the board's current domains.
    ///
    /// Returns `None` only after every branch at the root has been
    /// exhausted, which proves the board unsolvable as given. Recursion
    /// depth is bounded by the 81 cells, one frame per assigned cell.
    pub fn solve(&self, board: &mut Board, stats: &mut SearchStats) -> Option<Assignment> {
        let mut assignment = Assignment::new();
        if self.backtrack(board, &mut assignment, stats) {
            Some(assignment)
        } else {
            None
        }
    }

    fn backtrack(
        &self,
        board: &mut Board,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> bool {
        if assignment.is_complete() {
            return true;
        }

        let Some(cell) = self.variable_heuristic.select_variable(board, assignment) else {
            // Unreachable while the assignment is incomplete, but the
            // heuristic's contract allows it.
            return assignment.is_complete();
        };
        stats.nodes_visited += 1;

        for value in self.value_heuristic.order_values(cell, board) {
            if !is_consistent(board, assignment, cell, value) {
                continue;
            }

            trace!(cell = %cell_name(cell), value, "trying assignment");
            assignment.assign(cell, value);
            forward_check(board, assignment, cell, value);

            if self.backtrack(board, assignment, stats) {
                return true;
            }

            undo_prunings(board, cell);
            assignment.unassign(cell);
            stats.backtracks += 1;
            trace!(cell = %cell_name(cell), value, "abandoned assignment");
        }

        false
    }
}

/// A value is consistent when no already-assigned neighbor holds it.
fn is_consistent(board: &Board, assignment: &Assignment, cell: CellId, value: u8) -> bool {
    board
        .neighbors(cell)
        .iter()
        .all(|&neighbor| assignment.get(neighbor) != Some(value))
}

/// Forward checking: removes `value` from every unassigned neighbor's
/// domain that contains it, recording each removal in `cell`'s pruning log
/// so [`undo_prunings`] can restore the domains exactly.
pub(crate) fn forward_check(board: &mut Board, assignment: &Assignment, cell: CellId, value: u8) {
    let neighbors = board.neighbors(cell).to_vec();
    for neighbor in neighbors {
        if assignment.contains(neighbor) {
            continue;
        }
        if board.domain(neighbor).contains(&value) {
            board.domain_mut(neighbor).remove(&value);
            board.log_pruning(cell, neighbor, value);
        }
    }
}

/// Restores every `(neighbor, value)` pair recorded in `cell`'s pruning
/// log and leaves the log empty.
pub(crate) fn undo_prunings(board: &mut Board, cell: CellId) {
    for (neighbor, value) in board.take_prunings(cell) {
        board.domain_mut(neighbor).insert(value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        heuristics::{
            value::LeastConstrainingValueHeuristic, variable::MinimumRemainingValuesHeuristic,
        },
        propagation::ac3,
    };

    fn default_search() -> BacktrackingSearch {
        BacktrackingSearch::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    #[test]
    fn assignment_tracks_membership_and_completion() {
        let mut assignment = Assignment::new();
        assert!(assignment.is_empty());
        assert!(!assignment.is_complete());

        assignment.assign(12, 4);
        assert_eq!(assignment.get(12), Some(4));
        assert!(assignment.contains(12));
        assert_eq!(assignment.len(), 1);

        assignment.unassign(12);
        assert_eq!(assignment.get(12), None);

        for cell in 0..CELL_COUNT {
            assignment.assign(cell, 1);
        }
        assert!(assignment.is_complete());
    }

    #[test]
    fn forward_check_and_undo_restore_domains_exactly() {
        // Three solved rows, the rest blank, so propagation leaves the
        // lower cells with wide domains to prune from.
        let mut board = Board::parse(
            "534678912672195348198342567000000000000000000000000000000000000000000000000000000",
        )
        .unwrap();
        let mut stats = SearchStats::default();
        assert!(ac3(&mut board, &mut stats).is_consistent());

        let before: Vec<_> = (0..CELL_COUNT).map(|cell| board.domain(cell).clone()).collect();

        // D1 is open after propagation; try a candidate and roll it back.
        let cell = 27;
        assert!(board.domain(cell).len() > 1);
        let value = *board.domain(cell).get_min().unwrap();
        forward_check(&mut board, &Assignment::new(), cell, value);

        let touched = (0..CELL_COUNT).any(|c| board.domain(c) != &before[c]);
        assert!(touched, "forward checking should prune some neighbor");

        undo_prunings(&mut board, cell);
        for (c, original) in before.iter().enumerate() {
            assert_eq!(board.domain(c), original, "cell {c} not restored");
        }
        assert_eq!(board.take_prunings(cell), vec![]);
    }

    #[test]
    fn forward_check_skips_assigned_neighbors() {
        let mut board = Board::parse(&"0".repeat(CELL_COUNT)).unwrap();
        let mut assignment = Assignment::new();
        assignment.assign(1, 3);

        forward_check(&mut board, &assignment, 0, 3);

        // A2 is assigned, so its domain is left alone even though it
        // contains the value.
        assert!(board.domain(1).contains(&3));
        assert!(!board.domain(2).contains(&3));
    }

    #[test]
    fn search_completes_a_propagated_board() {
        // Three solved rows, the rest blank: propagation cannot finish
        // this, search must.
        let mut board = Board::parse(
            "534678912672195348198342567000000000000000000000000000000000000000000000000000000",
        )
        .unwrap();
        let mut stats = SearchStats::default();
        assert!(ac3(&mut board, &mut stats).is_consistent());
        assert!(!board.all_singleton());

        let assignment = default_search()
            .solve(&mut board, &mut stats)
            .expect("an open board with three solved rows is completable");

        assert!(assignment.is_complete());
        for cell in 0..27 {
            assert_eq!(assignment.get(cell), Some(board.clue(cell)));
        }
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn exhausted_search_reports_failure() {
        // A1..A3 are pinned to {1, 2} by the row clues plus a 9 in each of
        // their columns or block: three cells, two values. Arc-consistent,
        // yet unsolvable, so every branch must die at the root.
        let mut board = Board::parse(
            "000345678000000000009000000900000000000000000000000000090000000000000000000000000",
        )
        .unwrap();
        let mut stats = SearchStats::default();
        assert!(ac3(&mut board, &mut stats).is_consistent());
        assert_eq!(board.domain(0).len(), 2);
        assert_eq!(board.domain(1).len(), 2);
        assert_eq!(board.domain(2).len(), 2);

        let before: Vec<_> = (0..CELL_COUNT).map(|cell| board.domain(cell).len()).collect();
        let result = default_search().solve(&mut board, &mut stats);

        assert!(result.is_none());
        assert!(stats.backtracks > 0);

        // Root-level rollback: after exhaustion every domain is exactly
        // the size it was before the search began.
        let after: Vec<_> = (0..CELL_COUNT).map(|cell| board.domain(cell).len()).collect();
        assert_eq!(after, before);
    }
}

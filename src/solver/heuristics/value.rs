use crate::solver::board::{Board, CellId};

/// A trait for strategies that determine the order of values to try for a
/// cell.
pub trait ValueOrderingHeuristic {
    /// Given a cell, returns its candidate values in the order they should
    /// be tried.
    ///
    /// The candidates are returned as a snapshot rather than an iterator:
    /// forward checking mutates neighboring domains while the caller walks
    /// the list, so the ordering must be fixed up front.
    fn order_values(&self, cell: CellId, board: &Board) -> Vec<u8>;
}

/// A simple heuristic that returns values in their natural ascending order.
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(&self, cell: CellId, board: &Board) -> Vec<u8> {
        board.domain(cell).iter().copied().collect()
    }
}

/// The Least Constraining Value heuristic: try first the value that rules
/// out the fewest candidates in neighboring domains.
///
/// Each candidate is ranked by how many neighbor domains currently contain
/// it; the sort is stable, so ties keep the domain's ascending order. A
/// singleton domain short-circuits to its single value.
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(&self, cell: CellId, board: &Board) -> Vec<u8> {
        let mut values: Vec<u8> = board.domain(cell).iter().copied().collect();
        if values.len() == 1 {
            return values;
        }

        values.sort_by_key(|value| {
            board
                .neighbors(cell)
                .iter()
                .filter(|&&neighbor| board.domain(neighbor).contains(value))
                .count()
        });
        values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::board::CELL_COUNT;

    fn empty_board() -> Board {
        Board::parse(&"0".repeat(CELL_COUNT)).unwrap()
    }

    #[test]
    fn identity_returns_ascending_domain_order() {
        let mut board = empty_board();
        *board.domain_mut(0) = [9, 2, 5].into_iter().collect();

        assert_eq!(IdentityValueHeuristic.order_values(0, &board), vec![2, 5, 9]);
    }

    #[test]
    fn lcv_defers_the_most_constraining_value() {
        // On an otherwise blank board every value appears in all 20
        // neighbor domains. Collapsing A1 to {5} leaves 5 present in 20 of
        // A2's neighbor domains but every other value in only 19, so 5
        // sorts last.
        let mut board = empty_board();
        *board.domain_mut(0) = [5].into_iter().collect();

        let order = LeastConstrainingValueHeuristic.order_values(1, &board);
        assert_eq!(order, vec![1, 2, 3, 4, 6, 7, 8, 9, 5]);
    }

    #[test]
    fn lcv_ties_keep_ascending_order() {
        let board = empty_board();
        let order = LeastConstrainingValueHeuristic.order_values(40, &board);
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn singleton_domain_short_circuits() {
        let mut board = empty_board();
        *board.domain_mut(17) = [8].into_iter().collect();

        assert_eq!(LeastConstrainingValueHeuristic.order_values(17, &board), vec![8]);
    }
}

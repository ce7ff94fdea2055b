use std::collections::HashSet;

use crate::solver::board::{CellId, CELL_COUNT};

/// Number of all-different groups on a classic board: 9 rows, 9 columns,
/// 9 blocks.
pub const GROUP_COUNT: usize = 27;

/// The binary constraint network derived from the 27 all-different groups.
///
/// Each group expands into every ordered pair of its distinct members, so
/// the arc set is closed under reversal by construction; pairs that arise
/// from overlapping groups (a row and a block share up to three cells) are
/// deduplicated. Built once per board and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    arcs: Vec<(CellId, CellId)>,
    neighbors: Vec<Vec<CellId>>,
}

/// The 27 groups in a fixed order: rows `A..I`, then columns `1..9`, then
/// blocks left-to-right within each band of three rows.
pub(crate) fn groups() -> Vec<Vec<CellId>> {
    let mut groups = Vec::with_capacity(GROUP_COUNT);

    for row in 0..9 {
        groups.push((0..9).map(|col| row * 9 + col).collect());
    }

    for col in 0..9 {
        groups.push((0..9).map(|row| row * 9 + col).collect());
    }

    for band in 0..3 {
        for stack in 0..3 {
            let mut block = Vec::with_capacity(9);
            for row in 0..3 {
                for col in 0..3 {
                    block.push((band * 3 + row) * 9 + stack * 3 + col);
                }
            }
            groups.push(block);
        }
    }

    groups
}

impl ConstraintGraph {
    /// Builds the constraint network for a classic 9×9 board.
    pub fn classic() -> Self {
        let mut seen = HashSet::new();
        let mut arcs = Vec::new();
        for group in groups() {
            for &a in &group {
                for &b in &group {
                    if a != b && seen.insert((a, b)) {
                        arcs.push((a, b));
                    }
                }
            }
        }

        let mut neighbors = vec![Vec::new(); CELL_COUNT];
        for &(a, b) in &arcs {
            neighbors[a].push(b);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self { arcs, neighbors }
    }

    pub fn arcs(&self) -> &[(CellId, CellId)] {
        &self.arcs
    }

    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        &self.neighbors[cell]
    }
}

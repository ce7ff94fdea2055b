use im::OrdSet;

use crate::{
    error::{Error, Result},
    solver::constraints::ConstraintGraph,
};

/// Index of a cell in the fixed row-major enumeration `A1..A9, B1..B9, ..., I9`.
pub type CellId = usize;

/// Number of cells on a classic board.
pub const CELL_COUNT: usize = 81;

/// The set of candidate digits still possible for one cell.
///
/// An ordered set supports removal by value, and iterates ascending,
/// which is the fixed value-enumeration order the heuristics tie-break
/// on.
pub type Domain = OrdSet<u8>;

/// Renders a cell index as its conventional name: rows `A..I`, columns `1..9`.
pub fn cell_name(cell: CellId) -> String {
    let row = (b'A' + (cell / 9) as u8) as char;
    format!("{}{}", row, cell % 9 + 1)
}

/// The mutable solver state for one puzzle.
///
/// The clue vector and the constraint graph are fixed at construction; the
/// domains and the per-cell pruning log are mutated by propagation and
/// search. Search frames that mutate domains must restore them through the
/// pruning log before returning failure to their caller.
#[derive(Debug, Clone)]
pub struct Board {
    clues: [u8; CELL_COUNT],
    domains: Vec<Domain>,
    graph: ConstraintGraph,
    pruned: Vec<Vec<(CellId, u8)>>,
}

impl Board {
    /// Parses an 81-symbol puzzle string, `0` marking a blank cell.
    ///
    /// This is the boundary check for raw input: anything that is not
    /// exactly 81 digit characters is rejected here with a descriptive
    /// error, so the core never sees a malformed board.
    pub fn parse(input: &str) -> Result<Self> {
        let symbols: Vec<char> = input.trim().chars().collect();
        if symbols.len() != CELL_COUNT {
            return Err(Error::BadLength(symbols.len()));
        }

        let mut clues = [0u8; CELL_COUNT];
        for (cell, &symbol) in symbols.iter().enumerate() {
            match symbol.to_digit(10) {
                Some(digit) => clues[cell] = digit as u8,
                None => {
                    return Err(Error::BadSymbol {
                        cell: cell_name(cell),
                        found: symbol,
                    })
                }
            }
        }

        Ok(Self::from_clues(clues))
    }

    /// Builds a board from already-validated clues (0 = blank).
    ///
    /// A clue cell starts with a singleton domain; a blank cell starts with
    /// the full `{1..9}`.
    pub fn from_clues(clues: [u8; CELL_COUNT]) -> Self {
        let domains = clues
            .iter()
            .map(|&clue| {
                if clue == 0 {
                    (1..=9).collect()
                } else {
                    Domain::unit(clue)
                }
            })
            .collect();

        Self {
            clues,
            domains,
            graph: ConstraintGraph::classic(),
            pruned: vec![Vec::new(); CELL_COUNT],
        }
    }

    /// The original clue for a cell (0 if the cell was blank).
    pub fn clue(&self, cell: CellId) -> u8 {
        self.clues[cell]
    }

    pub fn domain(&self, cell: CellId) -> &Domain {
        &self.domains[cell]
    }

    pub fn domain_mut(&mut self, cell: CellId) -> &mut Domain {
        &mut self.domains[cell]
    }

    pub fn is_singleton(&self, cell: CellId) -> bool {
        self.domains[cell].len() == 1
    }

    /// The single remaining candidate for a cell, if its domain is a singleton.
    pub fn singleton_value(&self, cell: CellId) -> Option<u8> {
        if self.is_singleton(cell) {
            self.domains[cell].get_min().copied()
        } else {
            None
        }
    }

    /// Whether every domain has collapsed to a single candidate.
    pub fn all_singleton(&self) -> bool {
        (0..CELL_COUNT).all(|cell| self.is_singleton(cell))
    }

    /// Every directed inequality arc, closed under reversal.
    pub fn arcs(&self) -> &[(CellId, CellId)] {
        self.graph.arcs()
    }

    /// The cells sharing a row, column, or block with `cell`.
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        self.graph.neighbors(cell)
    }

    /// Records that forward checking on behalf of `cell` removed `value`
    /// from `neighbor`'s domain.
    pub fn log_pruning(&mut self, cell: CellId, neighbor: CellId, value: u8) {
        self.pruned[cell].push((neighbor, value));
    }

    /// Drains `cell`'s pruning log, leaving it empty for the next trial value.
    pub fn take_prunings(&mut self, cell: CellId) -> Vec<(CellId, u8)> {
        std::mem::take(&mut self.pruned[cell])
    }
}

//! Gridlock solves classic 9×9 Sudoku boards by modelling them as a binary
//! constraint satisfaction problem: 81 cell variables with candidate-digit
//! domains, and an inequality arc for every ordered pair of cells that share
//! a row, column, or 3×3 block.
//!
//! Solving is a two-stage process:
//!
//! - **[`ac3`]**: worklist-driven arc-consistency propagation that prunes
//!   candidate digits until a fixpoint or a contradiction. Easy boards
//!   collapse to a full solution here.
//! - **[`SolverEngine`]**: when propagation leaves choices open, a
//!   depth-first backtracking search finishes the job, picking cells with
//!   the minimum-remaining-values heuristic, ordering digits by
//!   least-constraining-value, and forward checking each tentative
//!   assignment with exact rollback on failure.
//!
//! # Example
//!
//! ```
//! use gridlock::solver::{board::Board, engine::SolverEngine};
//!
//! let puzzle =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
//! let board = Board::parse(puzzle).unwrap();
//!
//! let (solved, _stats) = SolverEngine::default().solve(board);
//! let solved = solved.expect("this puzzle has a solution");
//!
//! assert!(solved.is_valid());
//! // Renders as the 81 solved digits, a space, and a tag telling whether
//! // propagation alone (`AC3`) or backtracking search (`BTS`) produced them.
//! println!("{solved}");
//! ```
//!
//! [`ac3`]: solver::propagation::ac3
//! [`SolverEngine`]: solver::engine::SolverEngine

pub mod error;
pub mod solver;

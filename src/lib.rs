//! Constraint propagation solver for nonogram (picross) puzzles
//!
//! Every row and column carries a hint sequence of block lengths. The solver
//! enumerates each line's valid block placements once, then repeatedly filters
//! them against the known cells and distills the survivors into newly forced
//! cells, alternating row and column passes until the grid is determined.

#![forbid(unsafe_code)]

/// Board state: cells, hints, and live candidate sets
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// The propagation engine: enumeration, filtering, distillation, solve loop
pub mod solver;

pub use io::error::{Result, SolverError};

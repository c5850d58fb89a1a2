//! Solve loop orchestration
//!
//! Alternates row and column propagation passes until every cell is known
//! or the configured round cap expires. Rows are mutually independent
//! within a row pass (likewise columns within a column pass), but the two
//! passes must not interleave: each reads the cells the other wrote last.

use crate::grid::board::{Board, LineAxis};
use crate::io::configuration::DEFAULT_MAX_ROUNDS;
use crate::io::error::{Result, SolverError};

/// Parameters controlling a solve run
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Maximum row-plus-column rounds before giving up
    pub max_rounds: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Drives propagation passes over a board until it is determined
///
/// The solver never guesses: every cell it writes is forced by the current
/// information. Puzzles that need contradiction search therefore stop
/// making progress and run into the round cap instead.
#[derive(Debug)]
pub struct Solver {
    board: Board,
    config: SolverConfig,
    rounds_completed: usize,
}

impl Solver {
    /// Create a solver for a freshly constructed board
    pub const fn new(board: Board, config: SolverConfig) -> Self {
        Self {
            board,
            config,
            rounds_completed: 0,
        }
    }

    /// The board in its current state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the solver and return the board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Rounds completed so far
    pub const fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// Whether the board is fully determined
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Propagate every row once
    ///
    /// # Errors
    ///
    /// Propagates a contradiction discovered in any row.
    pub fn run_row_pass(&mut self) -> Result<()> {
        for index in 0..self.board.size() {
            self.board.propagate_line(LineAxis::Row, index)?;
        }
        Ok(())
    }

    /// Propagate every column once
    ///
    /// # Errors
    ///
    /// Propagates a contradiction discovered in any column.
    pub fn run_column_pass(&mut self) -> Result<()> {
        for index in 0..self.board.size() {
            self.board.propagate_line(LineAxis::Column, index)?;
        }
        Ok(())
    }

    /// Run one full round: a row pass, then a column pass
    ///
    /// Returns whether further rounds are needed, `false` once solved.
    ///
    /// # Errors
    ///
    /// Propagates a contradiction discovered in either pass.
    pub fn run_round(&mut self) -> Result<bool> {
        self.run_row_pass()?;
        self.run_column_pass()?;
        self.rounds_completed += 1;
        Ok(!self.board.is_solved())
    }

    /// Run rounds until the board is solved or the cap is reached
    ///
    /// Returns the number of rounds the solve took.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ExhaustedCandidates`] when a line becomes
    /// contradictory mid-solve, and [`SolverError::NotSolvable`] when the
    /// round cap expires with cells still unknown — a puzzle that needs
    /// search beyond pure propagation, or one with no solution at all.
    pub fn solve(&mut self) -> Result<usize> {
        for round in 1..=self.config.max_rounds {
            if !self.run_round()? {
                return Ok(round);
            }
        }
        Err(SolverError::NotSolvable {
            rounds: self.config.max_rounds,
            unresolved: self.board.unknown_count(),
        })
    }
}

//! Puzzle definitions and the text puzzle format
//!
//! A puzzle file lists one line of whitespace-separated block lengths per
//! row (top to bottom), a single `&` line, then one line per column (left
//! to right). Lines starting with `#` are comments. A line with no numbers
//! is a valid hint sequence and means the grid line holds no filled cells.
//!
//! ```text
//! # 3x3 example
//! 3
//! 2
//! 1
//! &
//! 1 1
//! 2
//! 2
//! ```

use std::fs;
use std::path::Path;

use crate::grid::board::Hints;
use crate::io::configuration::{COMMENT_PREFIX, MAX_GRID_DIMENSION, SECTION_SEPARATOR};
use crate::io::error::{Result, SolverError, invalid_puzzle, puzzle_format};

/// Row and column hint sequences for a square puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Block lengths per row, top to bottom
    pub rows: Vec<Hints>,
    /// Block lengths per column, left to right
    pub cols: Vec<Hints>,
}

impl Puzzle {
    /// Parse puzzle text
    ///
    /// # Errors
    ///
    /// Returns an error when a block length is not a positive integer,
    /// the `&` separator is missing or repeated, or the two sections do
    /// not describe a square grid within the size limit.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Hints> = Vec::new();
        let mut cols: Vec<Hints> = Vec::new();
        let mut in_cols = false;

        for (number, raw) in text.lines().enumerate() {
            let line_number = number + 1;
            let line = raw.trim();
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if line == SECTION_SEPARATOR {
                if in_cols {
                    return Err(puzzle_format(
                        line_number,
                        &"unexpected second section separator",
                    ));
                }
                in_cols = true;
                continue;
            }

            let hints = parse_hints(line, line_number)?;
            if in_cols {
                cols.push(hints);
            } else {
                rows.push(hints);
            }
        }

        if !in_cols {
            return Err(invalid_puzzle(&"missing column section separator"));
        }
        Self { rows, cols }.validated()
    }

    /// Load and parse a puzzle file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or its content does
    /// not parse; parse errors are attributed to the file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SolverError::PuzzleRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|error| match error {
            SolverError::PuzzleFormat { line, reason, .. } => SolverError::PuzzleFormat {
                path: path.to_path_buf(),
                line,
                reason,
            },
            other => other,
        })
    }

    /// Edge length of the grid the puzzle describes
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    fn validated(self) -> Result<Self> {
        if self.rows.len() != self.cols.len() {
            return Err(invalid_puzzle(&format!(
                "a square puzzle needs matching sections, found {} rows and {} columns",
                self.rows.len(),
                self.cols.len()
            )));
        }
        if self.rows.is_empty() {
            return Err(invalid_puzzle(&"puzzle describes an empty grid"));
        }
        if self.rows.len() > MAX_GRID_DIMENSION {
            return Err(invalid_puzzle(&format!(
                "grid dimension {} exceeds the supported maximum {MAX_GRID_DIMENSION}",
                self.rows.len()
            )));
        }
        Ok(self)
    }
}

fn parse_hints(line: &str, line_number: usize) -> Result<Hints> {
    line.split_whitespace()
        .map(|token| match token.parse::<usize>() {
            Ok(0) => Err(puzzle_format(
                line_number,
                &format!("block length must be positive, found '{token}'"),
            )),
            Ok(length) => Ok(length),
            Err(_) => Err(puzzle_format(
                line_number,
                &format!("invalid block length '{token}'"),
            )),
        })
        .collect()
}

//! Board state management for square nonogram puzzles
//!
//! The board owns the tri-state cell matrix, the per-line hint sequences,
//! and each line's live candidate set. Candidate sets are populated once at
//! construction and only ever shrink afterwards; cells only ever move from
//! unknown to a known value.

use ndarray::{Array2, ArrayView1};

use crate::grid::cell::Cell;
use crate::io::error::{Result, WithLine, invalid_puzzle};
use crate::solver::candidates::CandidateSet;
use crate::solver::placements::Placements;
use crate::solver::propagation::{distill_candidates, filter_candidates};

/// Block lengths for one line, in order of appearance
pub type Hints = Vec<usize>;

/// Identifies which axis a line belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAxis {
    /// A horizontal line, indexed top to bottom
    Row,
    /// A vertical line, indexed left to right
    Column,
}

impl std::fmt::Display for LineAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// An N×N tri-state grid plus the hint and candidate state of every line
///
/// Construction enumerates every line's placements, so a hint that cannot
/// fit its line at all is rejected before any pass runs. After that, the
/// only mutation paths are [`Board::propagate_line`] (which shrinks one
/// line's candidate set and writes newly forced cells back) and nothing
/// else; a cell once known is never reverted.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Array2<Cell>,
    row_hints: Vec<Hints>,
    col_hints: Vec<Hints>,
    row_candidates: Vec<CandidateSet>,
    col_candidates: Vec<CandidateSet>,
}

impl Board {
    /// Create a board with all cells unknown and full candidate sets
    ///
    /// # Errors
    ///
    /// Returns an error if the hint collections do not both contain exactly
    /// `size` sequences, or if any single-block hint is longer than the line
    /// it must fit in.
    pub fn new(size: usize, row_hints: Vec<Hints>, col_hints: Vec<Hints>) -> Result<Self> {
        if row_hints.len() != size || col_hints.len() != size {
            return Err(invalid_puzzle(&format!(
                "expected {size} row and {size} column hint sequences, found {} and {}",
                row_hints.len(),
                col_hints.len()
            )));
        }

        let row_candidates = enumerate_lines(size, &row_hints, LineAxis::Row)?;
        let col_candidates = enumerate_lines(size, &col_hints, LineAxis::Column)?;

        Ok(Self {
            size,
            cells: Array2::from_elem((size, size), Cell::Unknown),
            row_hints,
            col_hints,
            row_candidates,
            col_candidates,
        })
    }

    /// Edge length of the square grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The full cell matrix
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// View of one row's cells
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid.
    pub fn row(&self, index: usize) -> ArrayView1<'_, Cell> {
        self.cells.row(index)
    }

    /// View of one column's cells
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid.
    pub fn column(&self, index: usize) -> ArrayView1<'_, Cell> {
        self.cells.column(index)
    }

    /// Hint sequence of one line, empty when the index is out of range
    pub fn hints(&self, axis: LineAxis, index: usize) -> &[usize] {
        let hints = match axis {
            LineAxis::Row => self.row_hints.get(index),
            LineAxis::Column => self.col_hints.get(index),
        };
        hints.map_or(&[], Vec::as_slice)
    }

    /// Live candidate set of one line
    pub fn candidates(&self, axis: LineAxis, index: usize) -> Option<&CandidateSet> {
        match axis {
            LineAxis::Row => self.row_candidates.get(index),
            LineAxis::Column => self.col_candidates.get(index),
        }
    }

    /// Number of placements still live for one line
    pub fn live_candidate_count(&self, axis: LineAxis, index: usize) -> usize {
        self.candidates(axis, index).map_or(0, CandidateSet::len)
    }

    /// Whether every cell has been resolved
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&cell| cell.is_known())
    }

    /// Number of cells still unresolved
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Unknown).count()
    }

    /// Filter one line's candidates against its current cells, then distill
    /// the survivors and write the result back into the grid
    ///
    /// Out-of-range indices are ignored. Distillation only ever turns
    /// unknown cells into known ones: every surviving placement agrees with
    /// the cells that were already known, so the intersection retains them.
    ///
    /// # Errors
    ///
    /// Returns an error when the line's hints are non-empty but no candidate
    /// survives filtering, which means the grid state is self-contradictory.
    pub fn propagate_line(&mut self, axis: LineAxis, index: usize) -> Result<()> {
        if index >= self.size {
            return Ok(());
        }
        let line = match axis {
            LineAxis::Row => self.cells.row(index).to_owned(),
            LineAxis::Column => self.cells.column(index).to_owned(),
        };
        let (hints, candidates) = match axis {
            LineAxis::Row => (self.row_hints.get(index), self.row_candidates.get_mut(index)),
            LineAxis::Column => (self.col_hints.get(index), self.col_candidates.get_mut(index)),
        };
        let (Some(hints), Some(candidates)) = (hints, candidates) else {
            return Ok(());
        };

        filter_candidates(line.view(), hints, candidates);
        let distilled = distill_candidates(self.size, hints, candidates).with_line(axis, index)?;

        match axis {
            LineAxis::Row => self.cells.row_mut(index).assign(&distilled),
            LineAxis::Column => self.cells.column_mut(index).assign(&distilled),
        }
        Ok(())
    }
}

// Candidate enumeration happens per line so an unsatisfiable hint can name
// the line it belongs to.
fn enumerate_lines(size: usize, hints: &[Hints], axis: LineAxis) -> Result<Vec<CandidateSet>> {
    hints
        .iter()
        .enumerate()
        .map(|(index, line_hints)| {
            let placements = Placements::new(size, line_hints).with_line(axis, index)?;
            Ok(CandidateSet::new(placements.collect()))
        })
        .collect()
}

//! Candidate filtering and line distillation
//!
//! One line's propagation step has two halves: drop every candidate
//! placement that disagrees with a cell the line already knows, then
//! intersect the survivors position by position. Positions every survivor
//! renders identically become known; the rest stay unknown.

use ndarray::{Array1, ArrayView1};

use crate::grid::cell::Cell;
use crate::io::error::{Result, exhausted_candidates};
use crate::solver::candidates::CandidateSet;
use crate::solver::render::{PlacementCells, render_placement};

/// Drop candidates that contradict the line's known cells
///
/// A placement survives when its rendering matches every position the
/// line already knows; unknown positions place no constraint. Emptying
/// the set is a valid outcome here and is surfaced by distillation.
pub fn filter_candidates(
    line: ArrayView1<'_, Cell>,
    hints: &[usize],
    candidates: &mut CandidateSet,
) {
    let size = line.len();
    candidates.retain(|placement| {
        line.iter()
            .zip(PlacementCells::new(size, hints, placement))
            .all(|(&cell, rendered)| cell == Cell::Unknown || cell == rendered)
    });
}

/// Intersect the surviving placements into a new line of cells
///
/// A hint-less line distills to all empty regardless of the candidates
/// supplied. For a hinted line, a position keeps its value only when every
/// survivor renders it identically; any disagreement resets it to unknown.
///
/// # Errors
///
/// Returns an error when the hints are non-empty but no candidate is live:
/// the line admits no placement at all, so the grid state around it is
/// self-contradictory.
pub fn distill_candidates(
    size: usize,
    hints: &[usize],
    candidates: &CandidateSet,
) -> Result<Array1<Cell>> {
    if hints.is_empty() {
        return Ok(Array1::from_elem(size, Cell::Empty));
    }

    let mut live = candidates.iter();
    let Some(first) = live.next() else {
        return Err(exhausted_candidates());
    };

    let mut distilled = render_placement(size, hints, first);
    for placement in live {
        let rendered = PlacementCells::new(size, hints, placement);
        for (current, cell) in distilled.iter_mut().zip(rendered) {
            if *current != cell {
                *current = Cell::Unknown;
            }
        }
    }
    Ok(distilled)
}

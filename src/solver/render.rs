use ndarray::Array1;

use crate::grid::cell::Cell;

/// Lazy left-to-right walk of the cells a placement implies
///
/// Positions before the first block, between blocks, and after the last
/// block yield [`Cell::Empty`]; positions inside a block yield
/// [`Cell::Filled`]. Pure and total: rendering never fails, it simply
/// expands whatever offsets it is given. Validating that the offsets form
/// a well-formed placement is enumeration's job, upstream.
#[derive(Debug, Clone)]
pub struct PlacementCells<'a> {
    hints: &'a [usize],
    starts: &'a [usize],
    size: usize,
    position: usize,
    block: usize,
}

impl<'a> PlacementCells<'a> {
    /// Walk the `size` cells implied by starting each block of `hints` at
    /// the matching offset of `starts`
    pub const fn new(size: usize, hints: &'a [usize], starts: &'a [usize]) -> Self {
        Self {
            hints,
            starts,
            size,
            position: 0,
            block: 0,
        }
    }
}

impl Iterator for PlacementCells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.position >= self.size {
            return None;
        }
        let position = self.position;
        self.position += 1;

        // Move the block cursor past blocks that end at or before here
        while let (Some(&start), Some(&length)) =
            (self.starts.get(self.block), self.hints.get(self.block))
        {
            if position < start + length {
                break;
            }
            self.block += 1;
        }

        let filled = matches!(
            (self.starts.get(self.block), self.hints.get(self.block)),
            (Some(&start), Some(_)) if position >= start
        );
        Some(if filled { Cell::Filled } else { Cell::Empty })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlacementCells<'_> {}

impl std::iter::FusedIterator for PlacementCells<'_> {}

/// Render a placement into a full line of cells
pub fn render_placement(size: usize, hints: &[usize], starts: &[usize]) -> Array1<Cell> {
    PlacementCells::new(size, hints, starts).collect()
}

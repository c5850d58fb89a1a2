use bitvec::prelude::*;
use std::fmt;

use crate::solver::placements::Placement;

/// Live set of candidate placements for one line
///
/// Every placement the line's hints admit is stored once at construction,
/// with one liveness bit per placement. Filtering clears bits and nothing
/// ever sets them again, so a line's candidate set can only shrink: a
/// placement consistent with the true solution is never manufactured or
/// resurrected, only preserved.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    placements: Vec<Placement>,
    live: BitVec,
}

impl CandidateSet {
    /// Create a set with every placement live
    pub fn new(placements: Vec<Placement>) -> Self {
        let live = bitvec![1; placements.len()];
        Self { placements, live }
    }

    /// Number of placements still live
    pub fn len(&self) -> usize {
        self.live.count_ones()
    }

    /// Whether no placement remains live
    pub fn is_empty(&self) -> bool {
        self.live.not_any()
    }

    /// Number of placements enumerated at construction
    pub const fn enumerated(&self) -> usize {
        self.placements.len()
    }

    /// Iterate the live placements in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.live
            .iter_ones()
            .filter_map(|index| self.placements.get(index))
    }

    /// Drop every live placement the predicate rejects
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Placement) -> bool,
    {
        for (index, placement) in self.placements.iter().enumerate() {
            if self.live.get(index).as_deref() == Some(&true) && !keep(placement) {
                self.live.set(index, false);
            }
        }
    }

    /// Extract the live placements as owned values
    pub fn to_vec(&self) -> Vec<Placement> {
        self.iter().cloned().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({} live of {})",
            self.len(),
            self.enumerated()
        )
    }
}

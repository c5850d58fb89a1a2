//! Tests for candidate filtering and line distillation

#[cfg(test)]
mod tests {
    use crosshatch::SolverError;
    use crosshatch::grid::Cell;
    use crosshatch::solver::candidates::CandidateSet;
    use crosshatch::solver::propagation::{distill_candidates, filter_candidates};
    use ndarray::array;

    const U: Cell = Cell::Unknown;
    const F: Cell = Cell::Filled;
    const X: Cell = Cell::Empty;

    // Tests filtering a single-block line against partially known cells
    // Verified by ignoring known cells in the consistency check
    #[test]
    fn test_filter_single_block() {
        let line = array![U, F, X];

        let mut ones = CandidateSet::new(vec![vec![0], vec![1], vec![2]]);
        filter_candidates(line.view(), &[1], &mut ones);
        assert_eq!(ones.to_vec(), vec![vec![1]]);

        let mut twos = CandidateSet::new(vec![vec![0], vec![1], vec![2]]);
        filter_candidates(line.view(), &[2], &mut twos);
        assert_eq!(twos.to_vec(), vec![vec![0]]);
    }

    // Tests filtering a two-block line keeps exactly the consistent placements
    #[test]
    fn test_filter_two_blocks() {
        let line = array![U, U, U, F, X, U];
        let good = vec![vec![0, 3], vec![2, 5]];
        let bad = vec![vec![0, 4], vec![0, 5], vec![1, 4], vec![1, 5]];

        let mut all = good.clone();
        all.extend(bad);
        let mut set = CandidateSet::new(all);
        filter_candidates(line.view(), &[2, 1], &mut set);
        assert_eq!(set.to_vec(), good);
    }

    // Tests unknown cells place no constraint at all
    #[test]
    fn test_filter_unconstrained_line_keeps_everything() {
        let line = array![U, U, U];
        let mut set = CandidateSet::new(vec![vec![0], vec![1], vec![2]]);
        filter_candidates(line.view(), &[1], &mut set);
        assert_eq!(set.len(), 3);
    }

    // Tests a hint-less line distills to all empty regardless of candidates
    // Verified by routing hint-less lines through the intersection path
    #[test]
    fn test_distill_no_hints() {
        let distilled = distill_candidates(2, &[], &CandidateSet::new(Vec::new()));
        assert_eq!(distilled.ok(), Some(array![X, X]));
    }

    // Tests distilling two placements of one block
    #[test]
    fn test_distill_single_block() {
        let set = CandidateSet::new(vec![vec![0], vec![1]]);
        let distilled = distill_candidates(4, &[2], &set);
        assert_eq!(distilled.ok(), Some(array![U, F, U, X]));
    }

    // Tests distilling two placements of a block pair
    #[test]
    fn test_distill_two_blocks() {
        let set = CandidateSet::new(vec![vec![0, 2], vec![2, 4]]);
        let distilled = distill_candidates(5, &[1, 1], &set);
        assert_eq!(distilled.ok(), Some(array![U, X, F, X, U]));
    }

    // Tests a lone survivor distills to its full rendering
    #[test]
    fn test_distill_lone_survivor() {
        let set = CandidateSet::new(vec![vec![1]]);
        let distilled = distill_candidates(3, &[1], &set);
        assert_eq!(distilled.ok(), Some(array![X, F, X]));
    }

    // Tests an exhausted set with non-empty hints is a contradiction
    // Verified by returning an all-unknown line instead of the error
    #[test]
    fn test_distill_exhausted_is_an_error() {
        let result = distill_candidates(3, &[1], &CandidateSet::new(Vec::new()));
        assert!(matches!(
            result,
            Err(SolverError::ExhaustedCandidates { .. })
        ));
    }
}

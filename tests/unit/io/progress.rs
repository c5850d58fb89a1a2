//! Tests for batch progress display management

#[cfg(test)]
mod tests {
    use crosshatch::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    // Tests the full lifecycle for a small batch with individual bars
    #[test]
    fn test_individual_bar_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.start_file(0, Path::new("a.non"), 100);
        pm.update_round(0, 1, Duration::from_millis(5));
        pm.complete_file(0, Duration::from_millis(10));

        pm.start_file(1, Path::new("b.non"), 100);
        pm.update_round(1, 7, Duration::from_millis(5));
        pm.complete_file(1, Duration::from_millis(10));

        pm.finish();
    }

    // Tests large batches switch to a single batch bar without panicking
    #[test]
    fn test_batch_mode_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(50);

        for index in 0..50 {
            pm.start_file(index, Path::new("puzzle.non"), 10);
            pm.update_round(index, 10, Duration::from_millis(1));
            pm.complete_file(index, Duration::from_millis(1));
        }

        pm.finish();
    }

    // Tests updates for files that were never started are tolerated
    #[test]
    fn test_update_unknown_file_is_ignored() {
        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.update_round(5, 1, Duration::from_millis(1));
        pm.finish();
    }
}

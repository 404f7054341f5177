//! Tests for the quiet-mode solution counter

#[cfg(test)]
mod tests {
    use pentomino::board::{Board, Dimensions};
    use pentomino::io::progress::SearchProgress;
    use pentomino::pieces::SymmetryPolicy;
    use pentomino::search::{SolutionSink, Solver};

    // Tests the counter tracks the latest solution number
    // Verified by incrementing instead of storing the index
    #[test]
    fn test_hidden_progress_counts() -> pentomino::Result<()> {
        let board = Board::new(Dimensions::default());
        let mut progress = SearchProgress::hidden();
        assert_eq!(progress.count(), 0);

        progress.on_solution(1, &board)?;
        progress.on_solution(2, &board)?;
        progress.finish();

        assert_eq!(progress.count(), 2);
        Ok(())
    }

    // Tests the counter works as a search sink
    // Verified by resetting the count on finish
    #[test]
    fn test_progress_as_search_sink() -> pentomino::Result<()> {
        let mut solver = Solver::new(Dimensions::new(3, 20)?, SymmetryPolicy::Full);
        let mut progress = SearchProgress::hidden();

        let total = solver.solve(&mut progress)?;
        progress.finish();

        assert_eq!(total, 8);
        assert_eq!(progress.count(), total);
        Ok(())
    }

    // Tests a visible spinner can be created and cleared
    // Verified by panicking on a missing template
    #[test]
    fn test_visible_progress_lifecycle() -> pentomino::Result<()> {
        let board = Board::new(Dimensions::new(8, 8)?);
        let mut progress = SearchProgress::new("8x8");

        progress.on_solution(1, &board)?;
        progress.finish();

        assert_eq!(progress.count(), 1);
        Ok(())
    }
}

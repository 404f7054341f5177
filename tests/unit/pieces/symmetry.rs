//! Tests for orientation limits and piece-set construction

#[cfg(test)]
mod tests {
    use pentomino::board::Dimensions;
    use pentomino::pieces::symmetry::{
        ORIENTATION_LIMITS, build_piece_set, orientation_limit,
    };
    use pentomino::pieces::{Piece, PieceId, SymmetryPolicy};

    fn orientation_counts(pieces: &[Piece]) -> Vec<(PieceId, usize)> {
        pieces
            .iter()
            .map(|piece| (piece.id(), piece.orientations().len()))
            .collect()
    }

    // Tests only F carries an orientation budget
    // Verified by adding a limit entry for X
    #[test]
    fn test_only_f_is_limited() {
        assert_eq!(ORIENTATION_LIMITS.len(), 1);
        for id in PieceId::ALL {
            let limit = orientation_limit(id, false, SymmetryPolicy::Reduced);
            if id == PieceId::F {
                assert_eq!(limit, Some(2));
            } else {
                assert_eq!(limit, None, "piece {id}");
            }
        }
    }

    // Tests square boards keep a single F orientation
    // Verified by swapping the square and rectangle budgets
    #[test]
    fn test_square_board_limit() {
        assert_eq!(
            orientation_limit(PieceId::F, true, SymmetryPolicy::Reduced),
            Some(1)
        );
        assert_eq!(
            orientation_limit(PieceId::F, false, SymmetryPolicy::Reduced),
            Some(2)
        );
    }

    // Tests the full policy lifts every limit
    // Verified by ignoring the policy argument
    #[test]
    fn test_full_policy_has_no_limits() {
        for id in PieceId::ALL {
            assert_eq!(orientation_limit(id, true, SymmetryPolicy::Full), None);
            assert_eq!(orientation_limit(id, false, SymmetryPolicy::Full), None);
        }
    }

    // Tests the reduced policy is the default
    // Verified by marking Full as the default variant
    #[test]
    fn test_default_policy_is_reduced() {
        assert_eq!(SymmetryPolicy::default(), SymmetryPolicy::Reduced);
    }

    // Tests the 6x10 piece set keeps two F orientations and all others intact
    // Verified by truncating every piece to the F budget
    #[test]
    fn test_rectangle_piece_set() -> pentomino::Result<()> {
        let dimensions = Dimensions::new(6, 10)?;
        let pieces = build_piece_set(dimensions, SymmetryPolicy::Reduced);

        assert_eq!(
            orientation_counts(&pieces),
            vec![
                (PieceId::F, 2),
                (PieceId::I, 2),
                (PieceId::L, 8),
                (PieceId::N, 8),
                (PieceId::P, 8),
                (PieceId::T, 4),
                (PieceId::U, 4),
                (PieceId::V, 4),
                (PieceId::W, 4),
                (PieceId::X, 1),
                (PieceId::Y, 8),
                (PieceId::Z, 4),
            ]
        );
        Ok(())
    }

    // Tests the truncated F keeps its leading orientations
    // Verified by keeping the last orientations instead
    #[test]
    fn test_truncation_keeps_leading_orientations() -> pentomino::Result<()> {
        let full_f = Piece::new(PieceId::F);
        let pieces = build_piece_set(Dimensions::new(8, 8)?, SymmetryPolicy::Reduced);
        let reduced_f = pieces.first().map(Piece::orientations).unwrap_or_default();

        assert_eq!(reduced_f.len(), 1);
        assert_eq!(reduced_f.first(), full_f.orientations().first());
        Ok(())
    }

    // Tests the full policy builds every orientation of every piece
    // Verified by applying the rectangle budget under the full policy
    #[test]
    fn test_full_piece_set() -> pentomino::Result<()> {
        let pieces = build_piece_set(Dimensions::new(5, 12)?, SymmetryPolicy::Full);
        let total: usize = pieces.iter().map(|piece| piece.orientations().len()).sum();

        assert_eq!(pieces.len(), 12);
        assert_eq!(total, 63);
        Ok(())
    }

    // Tests narrow blocker boards use the rectangle budget
    // Verified by choosing the budget from the blocker instead of the shape
    #[test]
    fn test_narrow_blocker_board_piece_set() -> pentomino::Result<()> {
        let pieces = build_piece_set(Dimensions::new(4, 16)?, SymmetryPolicy::Reduced);
        let f_orientations = pieces.first().map(|piece| piece.orientations().len());

        assert_eq!(f_orientations, Some(2));
        Ok(())
    }
}

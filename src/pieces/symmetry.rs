//! Symmetry reduction for complete tilings
//!
//! Every tiling has mirror and rotated twins on the same board: eight on a
//! square board, four on a rectangle. Restricting a single asymmetric piece to
//! one representative orientation per board-symmetry class makes the search
//! report each family of twins exactly once.
//!
//! `F` carries the restriction. Its shape has no symmetry of its own, so each
//! of its eight orientations belongs to a different twin of a tiling. On a
//! square board any one orientation represents all eight twins. On a
//! rectangle, a quarter turn is not a board symmetry, so the first two
//! generated orientations (unturned and one quarter turn) cover the two
//! classes.

use crate::board::Dimensions;
use crate::pieces::catalog::{Piece, PieceId};

/// Orientation budget for a piece that breaks board symmetry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationLimit {
    /// The restricted piece
    pub piece: PieceId,
    /// Orientations kept on a square board
    pub square: usize,
    /// Orientations kept on a non-square board
    pub rectangle: usize,
}

/// Pieces whose orientation lists are cut short, with their budgets
pub const ORIENTATION_LIMITS: &[OrientationLimit] = &[OrientationLimit {
    piece: PieceId::F,
    square: 1,
    rectangle: 2,
}];

/// Whether the search applies the symmetry reduction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SymmetryPolicy {
    /// Report one tiling per family of board-symmetric twins
    #[default]
    Reduced,
    /// Report every tiling, twins included
    Full,
}

/// Orientation budget of a piece, or `None` if it is unrestricted
pub fn orientation_limit(
    piece: PieceId,
    board_is_square: bool,
    policy: SymmetryPolicy,
) -> Option<usize> {
    if policy == SymmetryPolicy::Full {
        return None;
    }

    ORIENTATION_LIMITS
        .iter()
        .find(|limit| limit.piece == piece)
        .map(|limit| {
            if board_is_square {
                limit.square
            } else {
                limit.rectangle
            }
        })
}

/// Build the catalog pieces with their symmetry budgets applied
pub fn build_piece_set(dimensions: Dimensions, policy: SymmetryPolicy) -> Vec<Piece> {
    PieceId::ALL
        .into_iter()
        .map(|id| {
            let mut piece = Piece::new(id);
            if let Some(limit) = orientation_limit(id, dimensions.is_square(), policy) {
                piece.truncate_orientations(limit);
            }
            piece
        })
        .collect()
}

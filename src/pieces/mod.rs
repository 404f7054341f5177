//! Pentomino definitions and their orientation sets

/// Static shape catalog for the twelve free pentominoes
pub mod catalog;
/// Rotation, reflection and normalization of cell offsets
pub mod orientation;
/// Per-piece orientation limits that break board symmetry
pub mod symmetry;

pub use catalog::{Piece, PieceId};
pub use orientation::{Offset, Orientation};
pub use symmetry::SymmetryPolicy;

//! Exhaustive pentomino tiling enumerator
//!
//! Finds every tiling of a 60-cell rectangle (or a 64-cell board with a fixed
//! central 2x2 blocker) by the twelve free pentominoes, using row-major
//! backtracking with a symmetry-breaking restriction on the `F` piece.

#![forbid(unsafe_code)]

/// Board occupancy grid and validated board dimensions
pub mod board;
/// Input/output operations, rendering and error handling
pub mod io;
/// Piece shapes, orientation generation and symmetry reduction
pub mod pieces;
/// Backtracking search engine and solution reporting
pub mod search;

pub use io::error::{PentominoError, Result};

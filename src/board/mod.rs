//! Board geometry and occupancy
//!
//! This module contains:
//! - Validated board dimensions and the size-argument parser
//! - The label grid with fit checks, placement and the row-major space scan

/// Board dimension validation and parsing
pub mod dimensions;
/// Label grid with placement primitives
pub mod grid;

pub use dimensions::Dimensions;
pub use grid::{Board, Label, Position};

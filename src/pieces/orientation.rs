//! Orientation generation under the dihedral group of the square
//!
//! Each piece is expanded into every pattern reachable by quarter turns and a
//! mirror flip. Patterns are sorted row-major and shifted so that their first
//! cell sits at the origin, which makes structurally identical patterns
//! compare equal and lets the generator drop duplicates.

use std::cmp::Ordering;
use std::fmt;

/// Cell offset relative to an anchor cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    /// Horizontal displacement (grows to the right)
    pub dx: i32,
    /// Vertical displacement (grows downwards)
    pub dy: i32,
}

impl Offset {
    /// Create an offset from its components
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Rotate a quarter turn: `(x, y) -> (-y, x)`
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }

    /// Mirror across the vertical axis: `(x, y) -> (-x, y)`
    #[must_use]
    pub const fn reflected(self) -> Self {
        Self {
            dx: -self.dx,
            dy: self.dy,
        }
    }
}

// Row-major: compare by row first, then column
impl Ord for Offset {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.dy, self.dx).cmp(&(other.dy, other.dx))
    }
}

impl PartialOrd for Offset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dx, self.dy)
    }
}

/// One of the eight symmetries of the square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    /// Number of quarter turns applied first (0..=3)
    pub quarter_turns: u8,
    /// Whether the turned pattern is mirrored afterwards
    pub reflected: bool,
}

impl Transform {
    /// All eight transforms: four rotations, then the same four mirrored
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create a transform
    pub const fn new(quarter_turns: u8, reflected: bool) -> Self {
        Self {
            quarter_turns,
            reflected,
        }
    }

    /// Apply the transform to a single offset
    pub const fn apply(self, offset: Offset) -> Offset {
        let mut result = offset;
        let mut turn = 0;
        while turn < self.quarter_turns % 4 {
            result = result.rotated();
            turn += 1;
        }
        if self.reflected {
            result = result.reflected();
        }
        result
    }
}

/// Normalized cell pattern of one piece orientation
///
/// Cells are sorted by `(dy, dx)` and the first cell is always `(0, 0)`, so
/// placing the orientation at a cell covers that cell and only cells after it
/// in row-major order on the same row or rows below.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    cells: Vec<Offset>,
}

impl Orientation {
    /// Sort cells row-major and translate the first one to the origin
    pub fn normalize(mut cells: Vec<Offset>) -> Self {
        cells.sort_unstable();
        if let Some(&anchor) = cells.first() {
            for cell in &mut cells {
                *cell = Offset::new(cell.dx - anchor.dx, cell.dy - anchor.dy);
            }
        }
        Self { cells }
    }

    /// Offsets covered by this orientation, anchor first
    pub fn cells(&self) -> &[Offset] {
        &self.cells
    }

    /// Number of cells in the pattern
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the pattern covers no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}

/// Generate the distinct orientations of a shape
///
/// Applies the transforms in [`Transform::ALL`] order and keeps the first
/// occurrence of every normalized pattern. Shapes with internal symmetry yield
/// fewer than eight results. An empty shape yields one empty orientation.
pub fn distinct_orientations(base: &[Offset]) -> Vec<Orientation> {
    let mut orientations: Vec<Orientation> = Vec::with_capacity(Transform::ALL.len());

    for transform in Transform::ALL {
        let cells = base.iter().map(|&cell| transform.apply(cell)).collect();
        let candidate = Orientation::normalize(cells);

        if !orientations.contains(&candidate) {
            orientations.push(candidate);
        }
    }

    orientations
}

//! The twelve free pentominoes
//!
//! Shapes are drawn in the conventional letter layout:
//!
//! ```text
//!   F F   I   L     N             T T T
//! F F     I   L     N     P P       T
//!   F     I   L     N N   P P       T
//!         I   L L     N   P
//!         I
//!
//! U   U   V       W         X        Y   Z Z
//! U U U   V       W W     X X X    Y Y     Z
//!         V V V     W W     X        Y     Z Z
//!                                    Y
//! ```

use crate::pieces::orientation::{Offset, Orientation, distinct_orientations};
use std::fmt;

/// Identity of a free pentomino, in catalog declaration order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceId {
    /// The F pentomino
    F,
    /// The I pentomino (straight line)
    I,
    /// The L pentomino
    L,
    /// The N pentomino
    N,
    /// The P pentomino
    P,
    /// The T pentomino
    T,
    /// The U pentomino
    U,
    /// The V pentomino
    V,
    /// The W pentomino
    W,
    /// The X pentomino (plus sign)
    X,
    /// The Y pentomino
    Y,
    /// The Z pentomino
    Z,
}

macro_rules! shape {
    ($(($dx:expr, $dy:expr)),* $(,)?) => {
        [$(Offset::new($dx, $dy)),*]
    };
}

const F_CELLS: [Offset; 5] = shape![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];
const I_CELLS: [Offset; 5] = shape![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
const L_CELLS: [Offset; 5] = shape![(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)];
const N_CELLS: [Offset; 5] = shape![(0, 0), (0, 1), (0, 2), (1, 2), (1, 3)];
const P_CELLS: [Offset; 5] = shape![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
const T_CELLS: [Offset; 5] = shape![(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)];
const U_CELLS: [Offset; 5] = shape![(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)];
const V_CELLS: [Offset; 5] = shape![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)];
const W_CELLS: [Offset; 5] = shape![(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)];
const X_CELLS: [Offset; 5] = shape![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)];
const Y_CELLS: [Offset; 5] = shape![(1, 0), (0, 1), (1, 1), (1, 2), (1, 3)];
const Z_CELLS: [Offset; 5] = shape![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)];

impl PieceId {
    /// Every piece in catalog order, which is also the search order
    pub const ALL: [Self; 12] = [
        Self::F,
        Self::I,
        Self::L,
        Self::N,
        Self::P,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Single-character label used on the board
    pub const fn label(self) -> char {
        match self {
            Self::F => 'F',
            Self::I => 'I',
            Self::L => 'L',
            Self::N => 'N',
            Self::P => 'P',
            Self::T => 'T',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// Look up a piece by its label
    pub fn from_label(label: char) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.label() == label)
    }

    /// Base shape as drawn in the catalog
    pub const fn base_cells(self) -> &'static [Offset; 5] {
        match self {
            Self::F => &F_CELLS,
            Self::I => &I_CELLS,
            Self::L => &L_CELLS,
            Self::N => &N_CELLS,
            Self::P => &P_CELLS,
            Self::T => &T_CELLS,
            Self::U => &U_CELLS,
            Self::V => &V_CELLS,
            Self::W => &W_CELLS,
            Self::X => &X_CELLS,
            Self::Y => &Y_CELLS,
            Self::Z => &Z_CELLS,
        }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A pentomino with the orientations the search may use
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    orientations: Vec<Orientation>,
}

impl Piece {
    /// Build a piece with every distinct orientation of its catalog shape
    pub fn new(id: PieceId) -> Self {
        Self {
            id,
            orientations: distinct_orientations(id.base_cells()),
        }
    }

    /// Piece identity
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Orientations in generation order
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Keep only the first `limit` orientations
    pub fn truncate_orientations(&mut self, limit: usize) {
        self.orientations.truncate(limit);
    }
}

// Listing format used by `--debug`
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:({})", self.id, self.orientations.len())?;
        for orientation in &self.orientations {
            writeln!(f, "    {orientation}")?;
        }
        Ok(())
    }
}

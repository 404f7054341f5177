//! Board occupancy grid with placement primitives
//!
//! Cells hold a [`Label`]. Queries outside the board return
//! [`Label::OutOfBounds`], which never equals [`Label::Empty`], so a fit check
//! doubles as a bounds check. Placement writes without checking; callers pair
//! every [`Board::place`] with a prior successful [`Board::check`].

use ndarray::Array2;
use std::fmt;

use crate::board::dimensions::Dimensions;
use crate::io::configuration::{BLOCKER_GLYPH, BLOCKER_SIDE, EMPTY_GLYPH, OUT_OF_BOUNDS_GLYPH};
use crate::pieces::{Orientation, PieceId};

/// Board coordinates as `[x, y]`
pub type Position = [i32; 2];

/// Content of a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Unoccupied cell
    #[default]
    Empty,
    /// Cell covered by a placed piece
    Piece(PieceId),
    /// Permanently reserved cell of the central blocker
    Blocker,
    /// Returned for coordinates outside the board; never stored
    OutOfBounds,
}

impl Label {
    /// Single-character rendering of the label
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => EMPTY_GLYPH,
            Self::Piece(id) => id.label(),
            Self::Blocker => BLOCKER_GLYPH,
            Self::OutOfBounds => OUT_OF_BOUNDS_GLYPH,
        }
    }
}

/// Rectangular grid of cell labels
///
/// Stored row-major as `cells[[y, x]]`. Boards with 64 cells start with the
/// central 2x2 block marked as [`Label::Blocker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Label>,
    dimensions: Dimensions,
}

impl Board {
    /// Create an empty board, reserving the central blocker where required
    pub fn new(dimensions: Dimensions) -> Self {
        let mut cells = Array2::from_elem((dimensions.height(), dimensions.width()), Label::Empty);

        if let Some([x, y]) = dimensions.blocker_origin() {
            for row in y..y + BLOCKER_SIDE {
                for col in x..x + BLOCKER_SIDE {
                    if let Some(cell) = cells.get_mut([row, col]) {
                        *cell = Label::Blocker;
                    }
                }
            }
        }

        Self { cells, dimensions }
    }

    /// Board dimensions
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.dimensions.width()
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.height()
    }

    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some([row, col])
    }

    /// Label at `(x, y)`, or [`Label::OutOfBounds`] outside the board
    pub fn at(&self, x: i32, y: i32) -> Label {
        self.index(x, y)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(Label::OutOfBounds)
    }

    /// Test whether every cell of `orientation` anchored at `origin` is empty
    pub fn check(&self, origin: Position, orientation: &Orientation) -> bool {
        orientation
            .cells()
            .iter()
            .all(|cell| self.at(origin[0] + cell.dx, origin[1] + cell.dy) == Label::Empty)
    }

    /// Write `label` into every cell of `orientation` anchored at `origin`
    ///
    /// Placing [`Label::Empty`] over a previous placement removes it.
    /// Cells outside the board are skipped.
    pub fn place(&mut self, origin: Position, orientation: &Orientation, label: Label) {
        for cell in orientation.cells() {
            if let Some(index) = self.index(origin[0] + cell.dx, origin[1] + cell.dy) {
                if let Some(target) = self.cells.get_mut(index) {
                    *target = label;
                }
            }
        }
    }

    /// Place a piece for the lifetime of the returned guard
    ///
    /// The placement is erased when the guard is dropped, on every exit path.
    pub fn place_scoped<'b, 'o>(
        &'b mut self,
        origin: Position,
        orientation: &'o Orientation,
        label: Label,
    ) -> Placed<'b, 'o> {
        self.place(origin, orientation, label);
        Placed {
            board: self,
            origin,
            orientation,
        }
    }

    /// First empty cell at or after `from` in row-major order
    ///
    /// Scans right along the row, then wraps to the start of the next row.
    /// Returns `None` once the scan runs past the last row.
    pub fn find_space(&self, from: Position) -> Option<Position> {
        let width = i32::try_from(self.width()).ok()?;
        let height = i32::try_from(self.height()).ok()?;
        let [mut x, mut y] = from;

        while y < height {
            if self.at(x, y) == Label::Empty {
                return Some([x, y]);
            }
            x += 1;
            if x >= width {
                x = 0;
                y += 1;
            }
        }

        None
    }

    /// Number of unoccupied cells
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&label| label == Label::Empty).count()
    }
}

/// One glyph per cell, rows separated by newlines
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for label in row {
                write!(f, "{}", label.glyph())?;
            }
        }
        Ok(())
    }
}

/// Guard for a piece placed with [`Board::place_scoped`]
pub struct Placed<'b, 'o> {
    board: &'b mut Board,
    origin: Position,
    orientation: &'o Orientation,
}

impl Placed<'_, '_> {
    /// Board with the piece in place
    pub fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_, '_> {
    fn drop(&mut self) {
        self.board.place(self.origin, self.orientation, Label::Empty);
    }
}

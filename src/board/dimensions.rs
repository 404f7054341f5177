//! Validated board dimensions
//!
//! A board is accepted when both sides are at least three cells and the area
//! is either exactly covered by the twelve pieces or leaves room for the
//! central 2x2 blocker.

use crate::io::configuration::{
    BLOCKED_AREA, BLOCKER_SIDE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_SIDE, TILED_AREA,
};
use crate::io::error::{PentominoError, Result, invalid_dimensions, invalid_size};
use std::fmt;
use std::str::FromStr;

/// Width and height of a tileable board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Validate a width and height
    ///
    /// # Errors
    ///
    /// Returns an error if either side is shorter than three cells or the
    /// area is neither 60 nor 64
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(invalid_dimensions(
                width,
                height,
                &format!("both sides must be at least {MIN_SIDE}"),
            ));
        }

        let area = width.saturating_mul(height);
        if area != TILED_AREA && area != BLOCKED_AREA {
            return Err(invalid_dimensions(
                width,
                height,
                &format!("area {area} must be {TILED_AREA} or {BLOCKED_AREA}"),
            ));
        }

        Ok(Self { width, height })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether width equals height
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether the board reserves its central 2x2 block
    pub const fn has_blocker(&self) -> bool {
        self.area() == BLOCKED_AREA
    }

    /// Top-left cell `[x, y]` of the central blocker, if the board has one
    pub const fn blocker_origin(&self) -> Option<[usize; 2]> {
        if self.has_blocker() {
            Some([
                self.width / 2 - BLOCKER_SIDE / 2,
                self.height / 2 - BLOCKER_SIDE / 2,
            ])
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses any text holding exactly two integers, such as `6x10` or `5 12`
impl FromStr for Dimensions {
    type Err = PentominoError;

    fn from_str(text: &str) -> Result<Self> {
        let numbers: Vec<&str> = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .collect();

        let [width, height] = numbers.as_slice() else {
            return Err(invalid_size(&text, &"expected a width and a height"));
        };

        let width = width
            .parse::<usize>()
            .map_err(|e| invalid_size(&text, &e))?;
        let height = height
            .parse::<usize>()
            .map_err(|e| invalid_size(&text, &e))?;

        Self::new(width, height)
    }
}

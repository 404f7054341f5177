//! Board constants and runtime configuration defaults

/// Number of unit cells in every pentomino
pub const PIECE_CELLS: usize = 5;

/// Number of distinct free pentominoes
pub const PIECE_COUNT: usize = 12;

/// Board area covered exactly by the twelve pentominoes
pub const TILED_AREA: usize = PIECE_CELLS * PIECE_COUNT;

// The extra four cells are taken by the central blocker
/// Board area that receives the central 2x2 blocker
pub const BLOCKED_AREA: usize = TILED_AREA + BLOCKER_SIDE * BLOCKER_SIDE;

/// Side length of the square blocker placed on 64-cell boards
pub const BLOCKER_SIDE: usize = 2;

/// Smallest accepted board side
pub const MIN_SIDE: usize = 3;

// Default values for configurable parameters
/// Board width used when no valid size is given
pub const DEFAULT_WIDTH: usize = 6;
/// Board height used when no valid size is given
pub const DEFAULT_HEIGHT: usize = 10;

// Cell glyphs used by snapshots and debug output
/// Glyph of an unoccupied cell
pub const EMPTY_GLYPH: char = ' ';
/// Glyph of a blocker cell
pub const BLOCKER_GLYPH: char = '@';
/// Glyph returned for coordinates outside the board
pub const OUT_OF_BOUNDS_GLYPH: char = '?';

// Diagram rendering
/// Text lines emitted per board row (and for the closing border)
pub const LINES_PER_ROW: usize = 2;
/// Corner glyphs indexed by the 4-bit boundary mask, one table per text line
pub const DIAGRAM_ELEMENTS: [[&str; 16]; LINES_PER_ROW] = [
    [
        "    ", "", "", "+---", "", "----", "+   ", "+---", "", "+---", "|   ", "+---", "+   ",
        "+---", "+   ", "+---",
    ],
    [
        "    ", "", "", "    ", "", "    ", "    ", "    ", "", "|   ", "|   ", "|   ", "|   ",
        "|   ", "|   ", "|   ",
    ],
];

// Progress display settings
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

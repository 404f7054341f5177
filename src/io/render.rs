//! Text diagrams of tiled boards
//!
//! Piece outlines are drawn at cell corners. For every corner the four cells
//! meeting there are compared pairwise around the corner, giving a 4-bit mask:
//!
//! ```text
//!              2
//!   (x-1,y-1)  |  (x,y-1)
//!         4 ---+--- 1
//!   (x-1,y)    |  (x,y)
//!              8
//! ```
//!
//! Each mask selects a four-character element for each of the two text lines
//! drawn per board row.

use crate::board::Board;
use crate::io::configuration::{DIAGRAM_ELEMENTS, LINES_PER_ROW};
use crate::io::error::{Result, output_error};
use crate::search::sink::SolutionSink;
use std::io::Write;
use std::path::PathBuf;

/// Boundary mask for the corner at the top-left of cell `(x, y)`
pub fn corner_mask(board: &Board, x: i32, y: i32) -> usize {
    let here = board.at(x, y);
    let up = board.at(x, y - 1);
    let up_left = board.at(x - 1, y - 1);
    let left = board.at(x - 1, y);

    let mut mask = 0;
    if here != up {
        mask |= 1;
    }
    if up != up_left {
        mask |= 2;
    }
    if up_left != left {
        mask |= 4;
    }
    if left != here {
        mask |= 8;
    }
    mask
}

/// Render the board outline as `2 * (height + 1)` lines of text
///
/// Lines are joined with `\n` and carry no trailing newline.
pub fn render_diagram(board: &Board) -> String {
    let width = i32::try_from(board.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(board.height()).unwrap_or(i32::MAX);

    let mut lines = Vec::with_capacity(diagram_line_count(board));
    for y in 0..=height {
        for elements in &DIAGRAM_ELEMENTS {
            let mut line = String::new();
            for x in 0..=width {
                if let Some(element) = elements.get(corner_mask(board, x, y)) {
                    line.push_str(element);
                }
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Number of text lines produced by [`render_diagram`]
pub const fn diagram_line_count(board: &Board) -> usize {
    (board.height() + 1) * LINES_PER_ROW
}

/// How consecutive diagrams are laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    /// Move the cursor back up so each diagram overwrites the previous one
    #[default]
    InPlace,
    /// Print each diagram below the previous one
    Scroll,
}

/// Sink that writes a diagram and the running solution number per tiling
///
/// The number is appended to the last diagram line, matching the layout of
/// the in-place display where the count sits under the board.
pub struct DiagramWriter<W: Write> {
    out: W,
    layout: Layout,
    path: Option<PathBuf>,
}

impl<W: Write> DiagramWriter<W> {
    /// Create a writer over any output stream
    pub const fn new(out: W, layout: Layout) -> Self {
        Self {
            out,
            layout,
            path: None,
        }
    }

    /// Attach the destination path used in error messages
    #[must_use]
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Write one diagram
    ///
    /// Scrolling output is left to the stream's buffering; in-place output is
    /// flushed after every diagram.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream fails
    pub fn write_solution(&mut self, index: u64, board: &Board) -> Result<()> {
        let cursor_up = if self.layout == Layout::InPlace && index > 1 {
            format!("\x1b[{}A", diagram_line_count(board))
        } else {
            String::new()
        };

        writeln!(self.out, "{cursor_up}{}{index}", render_diagram(board))
            .map_err(|e| output_error(self.path.clone(), "write diagram", e))?;

        // Redrawn diagrams must reach the terminal before the next one replaces them
        if self.layout == Layout::InPlace {
            self.flush()?;
        }
        Ok(())
    }

    /// Push any buffered diagrams to the stream
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream fails
    pub fn flush(&mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| output_error(self.path.clone(), "flush diagrams", e))
    }

    /// Consume the writer and return the stream
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionSink for DiagramWriter<W> {
    fn on_solution(&mut self, index: u64, board: &Board) -> Result<()> {
        self.write_solution(index, board)
    }
}

//! Exhaustive backtracking over the row-major first empty cell
//!
//! Each level finds the first empty cell at or after the resume position and
//! tries every unplaced piece in every allowed orientation anchored there.
//! Orientations are normalized so their anchor is their row-major first cell,
//! which means any piece covering the first empty cell must be anchored on it.
//! Cell order and piece order are fixed, so the solution sequence is
//! reproducible.

use crate::board::{Board, Dimensions, Label, Position};
use crate::io::error::Result;
use crate::pieces::symmetry::build_piece_set;
use crate::pieces::{Piece, SymmetryPolicy};
use crate::search::pool::PiecePool;
use crate::search::sink::SolutionSink;

/// Owns the board, the prepared pieces and the used-piece flags of a run
pub struct Solver {
    board: Board,
    pieces: Vec<Piece>,
    pool: PiecePool,
    solutions: u64,
}

impl Solver {
    /// Prepare a solver for a fresh board of the given size
    pub fn new(dimensions: Dimensions, policy: SymmetryPolicy) -> Self {
        let pieces = build_piece_set(dimensions, policy);
        Self::with_pieces(Board::new(dimensions), pieces)
    }

    /// Prepare a solver over an explicit board and piece set
    ///
    /// The board may already hold placements; the search only fills the
    /// cells that are empty when it starts.
    pub fn with_pieces(board: Board, pieces: Vec<Piece>) -> Self {
        let pool = PiecePool::new(pieces.len());
        Self {
            board,
            pieces,
            pool,
            solutions: 0,
        }
    }

    /// Pieces in search order with their allowed orientations
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Board in its current state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Used-piece flags in their current state
    pub const fn pool(&self) -> &PiecePool {
        &self.pool
    }

    /// Tilings found by the most recent solve
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Enumerate every tiling, reporting each one to `sink`
    ///
    /// Runs until the search space is exhausted and returns the number of
    /// tilings found. The counter restarts at zero on every call, and the board
    /// and pool are back in their starting state when this returns.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `sink`; the search stops there
    pub fn solve<S: SolutionSink>(&mut self, sink: &mut S) -> Result<u64> {
        self.solutions = 0;

        let mut search = Search {
            pieces: &self.pieces,
            solutions: &mut self.solutions,
            sink,
        };
        search.descend(&mut self.board, &mut self.pool, [0, 0])?;

        Ok(self.solutions)
    }
}

/// Mutable search context threaded through the recursion
struct Search<'a, S> {
    pieces: &'a [Piece],
    solutions: &'a mut u64,
    sink: &'a mut S,
}

impl<S: SolutionSink> Search<'_, S> {
    fn descend(&mut self, board: &mut Board, pool: &mut PiecePool, from: Position) -> Result<()> {
        if pool.is_exhausted() {
            *self.solutions += 1;
            return self.sink.on_solution(*self.solutions, board);
        }

        // Remaining pieces with no room left cannot complete this branch
        let Some(origin) = board.find_space(from) else {
            return Ok(());
        };

        let pieces = self.pieces;
        for (index, piece) in pieces.iter().enumerate() {
            if !pool.is_available(index) {
                continue;
            }

            let mut taken = pool.take(index);
            let label = Label::Piece(piece.id());

            for orientation in piece.orientations() {
                if board.check(origin, orientation) {
                    let mut placed = board.place_scoped(origin, orientation, label);
                    self.descend(placed.board(), taken.pool(), origin)?;
                }
            }
        }

        Ok(())
    }
}

use bitvec::prelude::*;
use std::fmt;

/// Used-piece flags for the backtracking search
///
/// Indexed by position in the piece set. A piece is taken before its
/// placements are tried and released afterwards, so the flags after a full
/// backtrack equal the flags before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiecePool {
    used: BitVec,
}

impl PiecePool {
    /// Create a pool with every piece available
    pub fn new(piece_count: usize) -> Self {
        Self {
            used: bitvec![0; piece_count],
        }
    }

    /// Number of pieces tracked
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Test if the pool tracks no pieces
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Test if the piece at `index` is still unplaced
    pub fn is_available(&self, index: usize) -> bool {
        self.used.get(index).as_deref() == Some(&false)
    }

    /// Count unplaced pieces
    pub fn remaining(&self) -> usize {
        self.used.count_zeros()
    }

    /// Test if every piece has been placed
    pub fn is_exhausted(&self) -> bool {
        self.used.all()
    }

    /// Indices of unplaced pieces in pool order
    pub fn available(&self) -> Vec<usize> {
        self.used.iter_zeros().collect()
    }

    /// Mark the piece at `index` used until the returned guard is dropped
    ///
    /// Indices outside the pool are ignored.
    pub fn take(&mut self, index: usize) -> Taken<'_> {
        if index < self.used.len() {
            self.used.set(index, true);
        }
        Taken { pool: self, index }
    }

    fn release(&mut self, index: usize) {
        if index < self.used.len() {
            self.used.set(index, false);
        }
    }
}

impl fmt::Display for PiecePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PiecePool({} of {} remaining)", self.remaining(), self.len())
    }
}

/// Guard for a piece taken with [`PiecePool::take`]
pub struct Taken<'a> {
    pool: &'a mut PiecePool,
    index: usize,
}

impl Taken<'_> {
    /// Pool with the piece marked used
    pub fn pool(&mut self) -> &mut PiecePool {
        self.pool
    }
}

impl Drop for Taken<'_> {
    fn drop(&mut self) {
        self.pool.release(self.index);
    }
}

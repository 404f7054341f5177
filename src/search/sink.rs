use crate::board::Board;
use crate::io::error::Result;

/// Receiver of completed tilings
///
/// The search calls [`SolutionSink::on_solution`] once per tiling with the
/// running solution number (starting at 1) and the fully covered board. The
/// board is only borrowed for the duration of the call; the search resumes
/// mutating it afterwards.
pub trait SolutionSink {
    /// Handle one completed tiling
    ///
    /// # Errors
    ///
    /// Returning an error stops the search and propagates the error to the
    /// caller of the solve
    fn on_solution(&mut self, index: u64, board: &Board) -> Result<()>;
}

impl<F> SolutionSink for F
where
    F: FnMut(u64, &Board) -> Result<()>,
{
    fn on_solution(&mut self, index: u64, board: &Board) -> Result<()> {
        self(index, board)
    }
}

/// Sink that only keeps the number of tilings reported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolutionCount {
    /// Tilings seen so far
    pub count: u64,
}

impl SolutionSink for SolutionCount {
    fn on_solution(&mut self, _index: u64, _board: &Board) -> Result<()> {
        self.count += 1;
        Ok(())
    }
}

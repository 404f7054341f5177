/// Recursive backtracking over the board
pub mod engine;
/// Used-piece bookkeeping for the search
pub mod pool;
/// Consumers of completed tilings
pub mod sink;

pub use engine::Solver;
pub use sink::SolutionSink;

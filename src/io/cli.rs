//! Command-line interface for enumerating pentomino tilings

use crate::board::Dimensions;
use crate::io::error::{Result, output_error};
use crate::io::progress::SearchProgress;
use crate::io::render::{DiagramWriter, Layout};
use crate::pieces::SymmetryPolicy;
use crate::search::Solver;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pentomino")]
#[command(
    author,
    version,
    about = "Enumerate every tiling of a board by the twelve pentominoes"
)]
/// Command-line arguments for the tiling enumerator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board size such as 6x10, 5x12, 4x15, 3x20 or 8x8 (64-cell boards get a central 2x2 blocker)
    #[arg(value_name = "SIZE")]
    pub size: Option<String>,

    /// List every piece's orientations before searching
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress diagrams and only report the number of tilings
    #[arg(short, long)]
    pub quiet: bool,

    /// Print each diagram below the previous one instead of redrawing in place
    #[arg(short, long)]
    pub scroll: bool,

    /// Report mirrored and rotated twins instead of one tiling per family
    #[arg(short, long)]
    pub full_symmetry: bool,

    /// Write diagrams to a file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Board dimensions requested on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if a size was given but does not describe a tileable board
    pub fn dimensions(&self) -> Result<Dimensions> {
        self.size
            .as_deref()
            .map_or_else(|| Ok(Dimensions::default()), |text| text.parse())
    }

    /// Requested dimensions, falling back to the default board when invalid
    // Allow print for user feedback when the size argument is ignored
    #[allow(clippy::print_stderr)]
    pub fn resolve_dimensions(&self) -> Dimensions {
        self.dimensions().unwrap_or_else(|error| {
            let fallback = Dimensions::default();
            eprintln!("{error} (using {fallback})");
            fallback
        })
    }

    /// Symmetry reduction selected by the flags
    pub const fn symmetry_policy(&self) -> SymmetryPolicy {
        if self.full_symmetry {
            SymmetryPolicy::Full
        } else {
            SymmetryPolicy::Reduced
        }
    }

    /// Diagram layout selected by the flags
    ///
    /// Files never receive cursor movement, so file output always scrolls.
    pub const fn layout(&self) -> Layout {
        if self.scroll || self.output.is_some() {
            Layout::Scroll
        } else {
            Layout::InPlace
        }
    }
}

/// Runs one enumeration according to the CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Enumerate the tilings of the requested board
    ///
    /// Returns the number of tilings found.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created or written
    pub fn run(&self) -> Result<u64> {
        let dimensions = self.cli.resolve_dimensions();
        let mut solver = Solver::new(dimensions, self.cli.symmetry_policy());

        match &self.cli.output {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|e| output_error(Some(path.clone()), "create file", e))?;
                self.run_with(&mut solver, BufWriter::new(file), Some(path.clone()))
            }
            None => {
                let stdout = std::io::stdout();
                self.run_with(&mut solver, stdout.lock(), None)
            }
        }
    }

    /// Enumerate with a prepared solver, writing results to `out`
    ///
    /// `path` names the destination in error messages. The diagram layout
    /// comes from [`Cli::layout`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails
    pub fn run_with<W: Write>(
        &self,
        solver: &mut Solver,
        mut out: W,
        path: Option<PathBuf>,
    ) -> Result<u64> {
        if self.cli.debug {
            for piece in solver.pieces() {
                write!(out, "{piece}")
                    .map_err(|e| output_error(path.clone(), "write piece listing", e))?;
            }
        }

        if self.cli.quiet {
            let label = solver.board().dimensions().to_string();
            let mut progress = SearchProgress::new(&label);
            let outcome = solver.solve(&mut progress);
            progress.finish();
            let total = outcome?;

            writeln!(out, "{total} solutions")
                .and_then(|()| out.flush())
                .map_err(|e| output_error(path, "write summary", e))?;
            return Ok(total);
        }

        let mut writer = DiagramWriter::new(out, self.cli.layout());
        if let Some(path) = path {
            writer = writer.with_path(path);
        }
        let total = solver.solve(&mut writer)?;
        writer.flush()?;
        Ok(total)
    }
}

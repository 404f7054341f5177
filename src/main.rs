//! CLI entry point for the pentomino tiling enumerator

use clap::Parser;
use pentomino::io::cli::{Cli, Runner};

fn main() -> pentomino::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run().map(|_| ())
}

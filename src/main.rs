//! CLI entry point for lattice MIS instance generation and solving

use clap::Parser;
use mislattice::io::cli::{Cli, CommandProcessor, init_logging};

fn main() -> mislattice::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut processor = CommandProcessor::new(cli);
    processor.process()
}

//! CLI entry point for the nonogram constraint propagation solver

use clap::Parser;
use crosshatch::io::cli::{Cli, FileProcessor};

fn main() -> crosshatch::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

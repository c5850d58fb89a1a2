//! Command-line interface for batch solving of puzzle files

use crate::grid::board::Board;
use crate::io::configuration::{DEFAULT_MAX_ROUNDS, OUTPUT_SUFFIX, PUZZLE_EXTENSION};
use crate::io::display::render_board;
use crate::io::error::{Result, SolverError, invalid_puzzle};
use crate::io::progress::ProgressManager;
use crate::io::puzzle::Puzzle;
use crate::solver::executor::{Solver, SolverConfig};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "crosshatch")]
#[command(
    author,
    version,
    about = "Solve nonogram puzzles by constraint propagation"
)]
/// Command-line arguments for the puzzle solving tool
pub struct Cli {
    /// Input puzzle file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Maximum propagation rounds per puzzle
    #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub rounds: usize,

    /// Write each solved grid to standard output
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails, a puzzle does not
    /// parse, a puzzle cannot be solved, or a solution cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_puzzle(&format!(
                    "target file must have the .{PUZZLE_EXTENSION} extension"
                )))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_puzzle(&format!(
                "target must be a .{PUZZLE_EXTENSION} file or a directory"
            )))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, self.cli.rounds);
        }

        let puzzle = Puzzle::from_path(input_path)?;
        let size = puzzle.size();
        let Puzzle { rows, cols } = puzzle;
        let board = Board::new(size, rows, cols)?;
        let mut solver = Solver::new(
            board,
            SolverConfig {
                max_rounds: self.cli.rounds,
            },
        );

        let mut solved = false;
        for round in 1..=self.cli.rounds {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_round(index, round, start_time.elapsed());
            }

            if !solver.run_round()? {
                solved = true;
                break;
            }
        }
        if !solved {
            return Err(SolverError::NotSolvable {
                rounds: self.cli.rounds,
                unresolved: solver.board().unknown_count(),
            });
        }

        let rendered = render_board(solver.board());
        fs::write(&output_path, &rendered).map_err(|source| SolverError::FileSystem {
            path: output_path.clone(),
            operation: "write solution",
            source,
        })?;

        // Allow print for solved grids requested on stdout
        #[allow(clippy::print_stdout)]
        if self.cli.print {
            println!("{rendered}");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.txt", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

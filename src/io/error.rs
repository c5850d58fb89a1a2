//! Error types and line-context enrichment for solver operations

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::grid::board::LineAxis;

/// Main error type for puzzle loading and solving
#[derive(Debug)]
pub enum SolverError {
    /// Failed to read a puzzle file from the filesystem
    PuzzleRead {
        /// Path to the puzzle file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Puzzle text that cannot be parsed
    PuzzleFormat {
        /// Path to the puzzle file, when known
        path: PathBuf,
        /// One-based number of the offending text line
        line: usize,
        /// Description of what is wrong
        reason: String,
    },

    /// Hint collections that do not describe a square puzzle
    InvalidPuzzle {
        /// Description of the structural problem
        reason: String,
    },

    /// A hint block that cannot fit in its line at any offset
    ///
    /// Signals a malformed puzzle definition and surfaces at enumeration
    /// time; it is never treated as an empty enumeration.
    InvalidHint {
        /// Axis of the offending line
        axis: LineAxis,
        /// Index of the offending line
        index: usize,
        /// Length of the block that does not fit
        block: usize,
        /// Size of the line it was meant for
        size: usize,
    },

    /// A line whose live candidate set emptied out
    ///
    /// The current grid state admits no placement for this line, so the
    /// puzzle state is self-contradictory.
    ExhaustedCandidates {
        /// Axis of the contradictory line
        axis: LineAxis,
        /// Index of the contradictory line
        index: usize,
    },

    /// The round cap expired with cells still unknown
    ///
    /// Either the puzzle needs search beyond pure propagation or it has no
    /// solution; propagation alone cannot tell the two apart.
    NotSolvable {
        /// Rounds that were run
        rounds: usize,
        /// Cells still unresolved when the cap expired
        unresolved: usize,
    },

    /// General filesystem failure while writing results
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PuzzleRead { path, source } => {
                write!(f, "Failed to read puzzle '{}': {source}", path.display())
            }
            Self::PuzzleFormat { path, line, reason } => {
                write!(
                    f,
                    "Invalid puzzle '{}' line {line}: {reason}",
                    path.display()
                )
            }
            Self::InvalidPuzzle { reason } => {
                write!(f, "Invalid puzzle: {reason}")
            }
            Self::InvalidHint {
                axis,
                index,
                block,
                size,
            } => {
                write!(
                    f,
                    "Hint block of length {block} cannot fit in {axis} {index} (line size {size})"
                )
            }
            Self::ExhaustedCandidates { axis, index } => {
                write!(f, "No candidate placements remain for {axis} {index}")
            }
            Self::NotSolvable { rounds, unresolved } => {
                write!(
                    f,
                    "No solution found after {rounds} rounds ({unresolved} cells unresolved)"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PuzzleRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> Self {
        Self::PuzzleRead {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Attaches line identity to errors raised by line-local components
///
/// Enumeration and distillation operate on a single line without knowing
/// which one; whoever drives them names the line afterwards.
pub trait WithLine<T> {
    /// Name the line an error belongs to
    ///
    /// # Errors
    ///
    /// Propagates the original error with line identity applied
    fn with_line(self, axis: LineAxis, index: usize) -> Result<T>;
}

impl<T, E> WithLine<T> for std::result::Result<T, E>
where
    E: Into<SolverError>,
{
    fn with_line(self, axis: LineAxis, index: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            SolverError::InvalidHint { block, size, .. } => SolverError::InvalidHint {
                axis,
                index,
                block,
                size,
            },
            SolverError::ExhaustedCandidates { .. } => {
                SolverError::ExhaustedCandidates { axis, index }
            }
            other => other,
        })
    }
}

/// Create an invalid-hint error; line identity is attached by the caller
pub const fn invalid_hint(block: usize, size: usize) -> SolverError {
    SolverError::InvalidHint {
        axis: LineAxis::Row,
        index: 0,
        block,
        size,
    }
}

/// Create an exhausted-candidates error; line identity is attached by the caller
pub const fn exhausted_candidates() -> SolverError {
    SolverError::ExhaustedCandidates {
        axis: LineAxis::Row,
        index: 0,
    }
}

/// Create an invalid-puzzle error
pub fn invalid_puzzle(reason: &impl ToString) -> SolverError {
    SolverError::InvalidPuzzle {
        reason: reason.to_string(),
    }
}

/// Create a puzzle-format error with no file attribution yet
pub fn puzzle_format(line: usize, reason: &impl ToString) -> SolverError {
    SolverError::PuzzleFormat {
        path: PathBuf::from("<unknown>"),
        line,
        reason: reason.to_string(),
    }
}

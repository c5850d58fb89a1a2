//! Solver constants and runtime configuration defaults

/// Maximum propagation rounds before a puzzle is reported unsolvable
pub const DEFAULT_MAX_ROUNDS: usize = 100;

// Safety limit to keep per-line enumeration within memory bounds
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// File extension recognized as a puzzle definition
pub const PUZZLE_EXTENSION: &str = "non";

/// Prefix marking a comment line in a puzzle file
pub const COMMENT_PREFIX: char = '#';

/// Line separating the row section from the column section
pub const SECTION_SEPARATOR: &str = "&";

// Output settings
/// Suffix added to solution filenames
pub const OUTPUT_SUFFIX: &str = "_solution";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

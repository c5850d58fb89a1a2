//! Input/output operations and error handling
//!
//! This module contains everything around the solving core:
//! - Error types shared by the whole crate
//! - Puzzle file parsing and validation
//! - Textual rendering, progress display, and the CLI driver

/// Command-line interface and batch file processing
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Textual rendering of board state
pub mod display;
/// Error types and line-context enrichment
pub mod error;
/// Progress reporting for batch solving
pub mod progress;
/// Puzzle definitions and the text puzzle format
pub mod puzzle;

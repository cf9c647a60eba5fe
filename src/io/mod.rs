//! Input/output surface: errors, constants, parsing, export and the CLI

/// Command-line interface and batch processing
pub mod cli;
/// Compile-time constants and defaults
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// PNG export of composed pictures
pub mod image;
/// Tile set and motif text parsing
pub mod input;
/// Terminal progress display
pub mod progress;

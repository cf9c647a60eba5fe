//! Error types for tile parsing, assembly, composition and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// Grid dimensions violate a shape requirement
    ///
    /// Raised for empty or ragged cell rows, non-square tiles, tile sets
    /// with mixed sizes and tiles too small to carry an interior.
    Shape {
        /// Description of the violated shape requirement
        reason: String,
    },

    /// Text input could not be turned into a tile or motif
    Parse {
        /// 1-based line number of the offending input line
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Two tiles in one set share an identifier
    DuplicateTile {
        /// The repeated identifier
        id: u64,
    },

    /// Assembly cannot satisfy every border constraint
    ///
    /// Occurs when:
    /// - A full pass over the pending queue placed no tile
    /// - All tiles were placed but they do not form a dense square
    Unsolvable {
        /// Number of tiles placed when the search stopped
        placed: usize,
        /// Number of tiles still waiting for a slot
        pending: usize,
        /// Bounding dimensions (rows, cols) of the placed tiles
        dimensions: (usize, usize),
    },

    /// A grid slot that must hold a tile is empty
    IncompleteGrid {
        /// Slot row
        row: usize,
        /// Slot column
        col: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the picture image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { reason } => write!(f, "Invalid shape: {reason}"),
            Self::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
            Self::DuplicateTile { id } => write!(f, "Tile {id} appears more than once"),
            Self::Unsolvable {
                placed,
                pending,
                dimensions,
            } => {
                write!(
                    f,
                    "No arrangement satisfies all borders: {placed} placed, {pending} pending (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::IncompleteGrid { row, col } => {
                write!(f, "Grid slot ({row}, {col}) holds no tile")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
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

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

/// Create a shape error
pub fn shape_error(reason: &impl ToString) -> StitchError {
    StitchError::Shape {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> StitchError {
    StitchError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

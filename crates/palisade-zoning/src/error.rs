//! Error types for palisade-zoning.

use thiserror::Error;

/// Result type for zoning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating clustering input.
///
/// Numeric edge cases inside the algorithms (empty clusters, zero
/// distances, degenerate sizes) are handled with documented fallback
/// values and never surface here. Only malformed input is an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The similarity matrix is not square.
    #[error("similarity matrix must be square: {rows} rows but row {row} has {cols} columns")]
    NotSquare { rows: usize, row: usize, cols: usize },
}

//! Error types for palisade-selector.

use thiserror::Error;

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a classifier model.
///
/// A missing model file is NOT represented here: running without a
/// model is a supported configuration and selection simply uses the
/// rule cascade.
#[derive(Debug, Error)]
pub enum Error {
    /// The model artifact is structurally invalid.
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

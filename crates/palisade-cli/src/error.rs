//! Error types for zone-advisor.

use thiserror::Error;

/// Result type for advisor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running an advisor invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line was malformed.
    #[error("usage error: {0}")]
    Usage(String),

    /// The input payload could not be parsed or validated.
    #[error("invalid input: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// Model artifact failed to load.
    #[error("model error: {0}")]
    Model(#[from] palisade_selector::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Usage mistakes exit with 1; bad input and runtime failures exit
    /// with 2 so callers can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 1,
            _ => 2,
        }
    }
}

//! Error types for hostfetch.
//!
//! Probe failures never appear here: a probe that cannot produce a value
//! resolves to an `Unsupported` outcome and the report proceeds. This type
//! covers the fatal paths around the core — configuration loading, argument
//! handling, and report I/O — and carries a stable exit code for each.

use thiserror::Error;

/// Result type alias for hostfetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the hostfetch CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Codes are stable: 2 for configuration problems, 3 for bad arguments,
    /// 4 for I/O and serialization failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            Error::InvalidArgument(_) => 3,
            Error::Io(_) | Error::Json(_) => 4,
        }
    }
}

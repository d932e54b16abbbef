//! Error types for IMPCTON Rewards

use thiserror::Error;

/// Main error type for IMPCTON Rewards operations
#[derive(Error, Debug)]
pub enum RewardsError {
    /// Transport-level HTTP failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Response body was not a valid profile document
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using RewardsError
pub type RewardsResult<T> = Result<T, RewardsError>;

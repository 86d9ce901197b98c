//! Error types for the confmate ecosystem.

use thiserror::Error;

/// Errors that can occur in confmate operations.
///
/// Nothing on the reminder hot path returns these: feed parsing, preference
/// reads and writes all degrade to empty/no-op instead. Errors surface only
/// where the caller can act on them (config, network, presentation).
#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for confmate operations.
pub type CompanionResult<T> = Result<T, CompanionError>;

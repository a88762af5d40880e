//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during logging initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),

    /// Configuration error (e.g. malformed filter directive)
    #[error("Configuration error: {0}")]
    Config(String),
}

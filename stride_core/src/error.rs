//! Error types for the stride_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A reading required by the selected workout variant was not supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// A raw reading violated a precondition (non-positive duration, weight, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The workout-type code did not match any known variant
    #[error("Unknown workout code: {0}")]
    UnknownWorkoutCode(String),
}

use std::io;

use thiserror::Error;

/// Library-wide error type for sf-cli operations.
///
/// Only conditions that must stop the command live here. Failed inference
/// (missing `.git`, unknown remote shape, absent git identity) is reported
/// as a warning and never becomes an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The target path has no usable final segment to name the repository after.
    #[error("Invalid path provided: '{0}' does not name a directory")]
    InvalidRootName(String),

    /// Interactive prompt failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Configuration document could not be serialized.
    #[error("Failed to serialize configuration document: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }
}

//! Interactive terminal collaborator.

use crate::domain::AppError;

/// Port for asking the user questions and telling them about degraded inference.
pub trait Console {
    /// Ask for a line of text, pre-filled with `default`.
    fn input(&self, message: &str, default: &str) -> Result<String, AppError>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError>;

    /// Report a recoverable problem. Shown before any related prompt.
    fn warn(&self, message: &str);
}

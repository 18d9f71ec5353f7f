use crate::domain::AppError;
use crate::ports::Console;

/// Answers every prompt with its default.
///
/// Used when stdin is not a terminal, so scripted runs and CI fall through to
/// inferred values and built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnattendedConsole;

impl Console for UnattendedConsole {
    fn input(&self, message: &str, default: &str) -> Result<String, AppError> {
        tracing::debug!(prompt = message, answer = default, "no terminal; using default");
        Ok(default.to_string())
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        tracing::debug!(prompt = message, answer = default, "no terminal; using default");
        Ok(default)
    }

    fn warn(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

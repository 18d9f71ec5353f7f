use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Console;

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn input(&self, message: &str, default: &str) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(message).allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_failure)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new().with_prompt(message).default(default).interact().map_err(prompt_failure)
    }

    fn warn(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

fn prompt_failure(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            AppError::prompt_error("cancelled by user")
        }
        err => AppError::prompt_error(err.to_string()),
    }
}

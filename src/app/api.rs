//! Public entry points wired to the real filesystem, git and terminal.

use std::io::{self, IsTerminal};

use crate::adapters::{Git2Identity, LocalFilesystem, TerminalConsole, UnattendedConsole};
use crate::app::AppContext;
use crate::app::commands::init::{self, InitOutcome};
use crate::domain::{AppError, ScaffoldDefaults, ScaffoldRequest};

/// Scaffold a root repository with the built-in defaults.
pub fn init(request: &ScaffoldRequest) -> Result<InitOutcome, AppError> {
    init_with_defaults(request, ScaffoldDefaults::default())
}

/// Scaffold a root repository with custom defaults.
///
/// Prompts on the terminal when stdin is one; otherwise every prompt takes
/// its default.
pub fn init_with_defaults(
    request: &ScaffoldRequest,
    defaults: ScaffoldDefaults,
) -> Result<InitOutcome, AppError> {
    let working_dir = std::env::current_dir()?;
    let git = Git2Identity::for_repository(&request.path);

    if io::stdin().is_terminal() {
        let ctx = AppContext::new(LocalFilesystem, git, TerminalConsole, working_dir)
            .with_defaults(defaults);
        init::execute(&ctx, request)
    } else {
        tracing::debug!("stdin is not a terminal; accepting defaults");
        let ctx = AppContext::new(LocalFilesystem, git, UnattendedConsole, working_dir)
            .with_defaults(defaults);
        init::execute(&ctx, request)
    }
}

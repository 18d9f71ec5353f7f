//! `init` command: scaffold a Semantic Flow root repository.
//!
//! Runs as a fixed sequence of steps, each of which may prompt:
//! 1. plan the folder layout (aborts on an unusable path)
//! 2. resolve the site root
//! 3. decide whether the configuration document is written
//! 4. resolve creator and description, build the document
//! 5. create directories and write the document

mod inspector;
mod planner;
mod resolver;
mod writer;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, ConfigDocument, ScaffoldRequest, SiteIdentity};
use crate::ports::{Console, GitIdentity, SiteFilesystem};

pub use inspector::inspect;
pub use planner::plan;
pub use resolver::{resolve_creator, resolve_description, resolve_site_root};
pub use writer::{WriteDecision, decide_write, write};

/// Result of a completed `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub site_root: String,
    /// Site root is the localhost fallback.
    pub site_root_is_default: bool,
    /// False when the user kept an existing configuration document.
    pub config_written: bool,
}

/// Execute the init command.
pub fn execute<F, G, C>(
    ctx: &AppContext<F, G, C>,
    request: &ScaffoldRequest,
) -> Result<InitOutcome, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    tracing::debug!(step = "plan", path = %request.path.display());
    let plan = plan(ctx, request)?;

    tracing::debug!(step = "site-root");
    let site_root = resolve_site_root(ctx, request, &plan.root_name)?;

    tracing::debug!(step = "write-gate");
    let config_path = request.path.join(&ctx.defaults().config_file);
    let decision = decide_write(ctx, &config_path)?;

    let document = if decision.writes() {
        tracing::debug!(step = "identity");
        let creator = resolve_creator(ctx, &site_root)?;
        let description = resolve_description(ctx)?;
        let identity = SiteIdentity { site_root: site_root.clone(), creator };
        Some(ConfigDocument::build(&identity, &plan, &description))
    } else {
        None
    };

    tracing::debug!(step = "write", ?decision);
    let config_written = write(ctx, &request.path, &plan, document.as_ref())?;

    let site_root_is_default = site_root == ctx.defaults().site_root_for(&plan.root_name);
    Ok(InitOutcome { path: request.path.clone(), site_root, site_root_is_default, config_written })
}

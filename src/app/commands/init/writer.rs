//! Materializes the directory skeleton and the configuration document.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, ConfigDocument, FolderPlan};
use crate::ports::{Console, GitIdentity, SiteFilesystem};

/// Whether the configuration document will be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    Create,
    Overwrite,
    Keep,
}

impl WriteDecision {
    pub fn writes(self) -> bool {
        !matches!(self, WriteDecision::Keep)
    }
}

/// Ask before replacing an existing document. Declining defaults to keeping it.
pub fn decide_write<F, G, C>(
    ctx: &AppContext<F, G, C>,
    config_path: &Path,
) -> Result<WriteDecision, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    if !ctx.fs().exists(config_path) {
        return Ok(WriteDecision::Create);
    }
    let message = format!("{} already exists. Overwrite?", config_path.display());
    if ctx.console().confirm(&message, false)? {
        Ok(WriteDecision::Overwrite)
    } else {
        Ok(WriteDecision::Keep)
    }
}

/// Create the directories of `plan` under `root` and write `document` if given.
///
/// Returns whether the document was written.
pub fn write<F, G, C>(
    ctx: &AppContext<F, G, C>,
    root: &Path,
    plan: &FolderPlan,
    document: Option<&ConfigDocument>,
) -> Result<bool, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let text = document.map(ConfigDocument::to_pretty_json).transpose()?;

    for dir in plan.directories(root) {
        tracing::debug!(dir = %dir.display(), "ensure directory");
        ctx.fs().ensure_dir(&dir)?;
    }

    let Some(text) = text else {
        return Ok(false);
    };
    let config_path = root.join(&ctx.defaults().config_file);
    tracing::debug!(path = %config_path.display(), "write configuration document");
    ctx.fs().write_text(&config_path, &text)?;
    Ok(true)
}

//! Reads the target repository's git remote.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::GitRemoteInfo;
use crate::domain::git_remote::{GitRemoteUrl, first_remote_url};
use crate::ports::{Console, GitIdentity, SiteFilesystem};

/// Remote information for the repository at `path`.
///
/// Never fails: an unreadable config or an unknown URL shape is reported as a
/// warning and yields `None` / `Other`.
pub fn inspect<F, G, C>(ctx: &AppContext<F, G, C>, path: &Path) -> GitRemoteInfo
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let git_dir = path.join(".git");
    if !ctx.fs().exists(&git_dir) {
        tracing::debug!(path = %path.display(), "no .git directory");
        return GitRemoteInfo::None;
    }

    let config = match ctx.fs().read_text(&git_dir.join("config")) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%err, "failed to read .git/config");
            ctx.console()
                .warn(&format!("Failed to read .git/config for site root inference: {err}"));
            return GitRemoteInfo::None;
        }
    };

    let Some(url) = first_remote_url(&config) else {
        tracing::warn!("no remote url in .git/config");
        ctx.console().warn("Could not find repository URL in .git/config.");
        return GitRemoteInfo::None;
    };

    match GitRemoteUrl::parse(url) {
        GitRemoteUrl::Unrecognized { raw } => {
            tracing::warn!(url = %raw, "unrecognized git remote url");
            ctx.console()
                .warn(&format!("Unrecognized git URL format '{raw}'. Cannot infer site root."));
            GitRemoteInfo::Other { raw_url: raw }
        }
        parsed => {
            tracing::debug!(?parsed, "parsed git remote");
            parsed.into_info()
        }
    }
}

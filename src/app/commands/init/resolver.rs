//! Site identity resolution.
//!
//! Precedence is decided in `domain::identity`; this module gathers the
//! inputs and asks the user.

use crate::app::AppContext;
use crate::domain::identity::{answer_or_default, creator_candidate, decide_site_root};
use crate::domain::site_root::is_absolute_url;
use crate::domain::{AppError, GitRemoteInfo, ScaffoldRequest, SiteRootDecision, SiteRootSource};
use crate::ports::{Console, GitIdentity, SiteFilesystem};

use super::inspector::inspect;

pub(super) const SITE_ROOT_PROMPT: &str = "Site root URL";
pub(super) const CREATOR_PROMPT: &str = "Creator";
pub(super) const DESCRIPTION_PROMPT: &str = "Site description";

/// Site root for the repository named `root_name`.
///
/// An explicit `--siteRoot` is used verbatim. Otherwise the value inferred
/// from a GitHub remote, or the localhost fallback, is offered for
/// confirmation.
pub fn resolve_site_root<F, G, C>(
    ctx: &AppContext<F, G, C>,
    request: &ScaffoldRequest,
    root_name: &str,
) -> Result<String, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let explicit = request.site_root_flag();
    let remote = match explicit {
        Some(_) => GitRemoteInfo::None,
        None => inspect(ctx, &request.path),
    };

    let decision = decide_site_root(explicit, &remote, ctx.defaults().site_root_for(root_name));
    tracing::debug!(?decision, "site root decision");

    let site_root = match decision {
        SiteRootDecision::Fixed(value) => value,
        SiteRootDecision::Ask { default, source } => {
            if source == SiteRootSource::Default {
                tracing::warn!("site root falls back to the localhost default");
                ctx.console().warn("Site root not provided and could not be inferred.");
            }
            let answer = ctx.console().input(SITE_ROOT_PROMPT, &default)?;
            answer_or_default(&answer, &default)
        }
    };

    if !is_absolute_url(&site_root) {
        tracing::warn!(%site_root, "site root is not an absolute URL");
        ctx.console().warn(&format!("Site root '{site_root}' is not an absolute URL."));
    }
    Ok(site_root)
}

/// Creator recorded in the document: git `user.name`, `user.email`, or the
/// GitHub Pages owner of `site_root`, confirmed by the user.
pub fn resolve_creator<F, G, C>(
    ctx: &AppContext<F, G, C>,
    site_root: &str,
) -> Result<String, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let user_name = ctx.git().get("user.name");
    let user_email = ctx.git().get("user.email");

    let default = match creator_candidate(user_name.as_deref(), user_email.as_deref(), site_root) {
        Some(creator) => creator,
        None => {
            tracing::warn!("no creator in git identity or site root");
            ctx.console().warn("Could not determine creator from git user.name or user.email.");
            ctx.defaults().creator.clone()
        }
    };

    let answer = ctx.console().input(CREATOR_PROMPT, &default)?;
    Ok(answer_or_default(&answer, &default))
}

pub fn resolve_description<F, G, C>(ctx: &AppContext<F, G, C>) -> Result<String, AppError>
where
    F: SiteFilesystem,
    G: GitIdentity,
    C: Console,
{
    let default = &ctx.defaults().description;
    let answer = ctx.console().input(DESCRIPTION_PROMPT, default)?;
    Ok(answer_or_default(&answer, default))
}

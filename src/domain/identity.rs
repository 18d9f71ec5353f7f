//! Precedence decisions for site identity.
//!
//! These functions only decide what value to use, or what to ask the user
//! and with which default. Prompting and IO happen in the init pipeline.

use super::git_remote::GitRemoteInfo;
use super::site_root::{derive_site_root, pages_owner};

/// The resolved identity recorded in the configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub site_root: String,
    pub creator: String,
}

/// Where a site root default came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRootSource {
    Explicit,
    Inferred,
    Default,
}

/// Next step for the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRootDecision {
    /// Use the value without asking.
    Fixed(String),
    /// Ask the user, pre-filled with `default`.
    Ask { default: String, source: SiteRootSource },
}

/// Explicit flag, then a GitHub remote, then `fallback`.
///
/// An explicit value skips the prompt; everything else is confirmed by the user.
pub fn decide_site_root(
    explicit: Option<&str>,
    remote: &GitRemoteInfo,
    fallback: String,
) -> SiteRootDecision {
    if let Some(value) = explicit {
        return SiteRootDecision::Fixed(value.to_string());
    }
    match remote.github() {
        Some((owner, repo_name)) => SiteRootDecision::Ask {
            default: derive_site_root(owner, repo_name),
            source: SiteRootSource::Inferred,
        },
        None => SiteRootDecision::Ask { default: fallback, source: SiteRootSource::Default },
    }
}

/// Git `user.name`, then `user.email`, then the GitHub Pages owner of `site_root`.
pub fn creator_candidate(
    user_name: Option<&str>,
    user_email: Option<&str>,
    site_root: &str,
) -> Option<String> {
    fn non_blank(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }
    non_blank(user_name)
        .or_else(|| non_blank(user_email))
        .map(str::to_string)
        .or_else(|| pages_owner(site_root))
}

/// Trimmed prompt answer, or `default` when blank.
pub fn answer_or_default(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() { default.to_string() } else { answer.to_string() }
}

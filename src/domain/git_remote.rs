//! Git remote URL parsing.
//!
//! Only GitHub remotes in SSH (`git@github.com:owner/repo.git`) and HTTPS
//! (`https://github.com/owner/repo.git`) form are recognized. Anything else
//! is kept as a raw URL so callers can report it.

const SSH_PREFIX: &str = "git@github.com:";
const HTTPS_PREFIX: &str = "https://github.com/";

/// A remote URL classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRemoteUrl {
    Ssh { owner: String, repo: String },
    Https { owner: String, repo: String },
    Unrecognized { raw: String },
}

impl GitRemoteUrl {
    pub fn parse(url: &str) -> Self {
        let url = url.trim();

        if let Some(rest) = url.strip_prefix(SSH_PREFIX)
            && let Some((owner, repo)) = split_owner_repo(rest)
        {
            return GitRemoteUrl::Ssh { owner, repo };
        }

        if let Some(rest) = url.strip_prefix(HTTPS_PREFIX)
            && let Some((owner, repo)) = split_owner_repo(rest)
        {
            return GitRemoteUrl::Https { owner, repo };
        }

        GitRemoteUrl::Unrecognized { raw: url.to_string() }
    }

    /// Collapse the URL form into what resolution needs.
    pub fn into_info(self) -> GitRemoteInfo {
        match self {
            GitRemoteUrl::Ssh { owner, repo } | GitRemoteUrl::Https { owner, repo } => {
                GitRemoteInfo::GitHub { owner, repo_name: repo }
            }
            GitRemoteUrl::Unrecognized { raw } => GitRemoteInfo::Other { raw_url: raw },
        }
    }
}

/// What a repository's remote says about where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRemoteInfo {
    GitHub { owner: String, repo_name: String },
    Other { raw_url: String },
    None,
}

impl GitRemoteInfo {
    /// `(owner, repo_name)` for GitHub remotes.
    pub fn github(&self) -> Option<(&str, &str)> {
        match self {
            GitRemoteInfo::GitHub { owner, repo_name } => Some((owner, repo_name)),
            _ => None,
        }
    }
}

/// Value of the first `url = <value>` line in git config text.
///
/// Multiple remotes are not disambiguated; the first one wins.
pub fn first_remote_url(config_text: &str) -> Option<&str> {
    config_text.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("url")?;
        let value = rest.trim_start().strip_prefix('=')?.trim();
        (!value.is_empty()).then_some(value)
    })
}

fn split_owner_repo(path: &str) -> Option<(String, String)> {
    let path = path.trim_end_matches('/');
    let (owner, repo) = path.split_once('/')?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}

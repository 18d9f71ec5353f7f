use std::path::{Path, PathBuf};

use git2::{Config, ConfigLevel};

use crate::ports::GitIdentity;

/// Reads identity keys through libgit2.
///
/// Consults the system, XDG and global config files, plus the target
/// repository's `.git/config` when one exists.
#[derive(Debug, Clone)]
pub struct Git2Identity {
    repo_config: Option<PathBuf>,
}

impl Git2Identity {
    pub fn for_repository(root: &Path) -> Self {
        let path = root.join(".git").join("config");
        Self { repo_config: path.is_file().then_some(path) }
    }

    fn config(&self) -> Result<Config, git2::Error> {
        let mut config = Config::open_default().or_else(|_| Config::new())?;
        if let Some(path) = &self.repo_config {
            config.add_file(path, ConfigLevel::Local, false)?;
        }
        Ok(config)
    }
}

impl GitIdentity for Git2Identity {
    fn get(&self, key: &str) -> Option<String> {
        let config = match self.config() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(%err, "git config unavailable");
                return None;
            }
        };
        config.get_string(key).ok().filter(|value| !value.trim().is_empty())
    }
}

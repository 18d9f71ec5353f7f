use std::path::{Path, PathBuf};

use crate::domain::ScaffoldDefaults;
use crate::ports::{Console, GitIdentity, SiteFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: SiteFilesystem, G: GitIdentity, C: Console> {
    fs: F,
    git: G,
    console: C,
    defaults: ScaffoldDefaults,
    working_dir: PathBuf,
}

impl<F: SiteFilesystem, G: GitIdentity, C: Console> AppContext<F, G, C> {
    /// Create a new application context with built-in defaults.
    pub fn new(fs: F, git: G, console: C, working_dir: PathBuf) -> Self {
        Self { fs, git, console, defaults: ScaffoldDefaults::default(), working_dir }
    }

    /// Replace the built-in defaults.
    pub fn with_defaults(mut self, defaults: ScaffoldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn defaults(&self) -> &ScaffoldDefaults {
        &self.defaults
    }

    /// Directory relative target paths are resolved against when naming the root.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

//! Shared testing harness for `sf-cli` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    home: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty `$HOME`, so no git
    /// identity leaks in from the developer's machine.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let home = root.path().join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&home).expect("Failed to create test home directory");

        Self { root, work_dir, home }
    }

    /// Path to the directory used as the working directory for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `sf-cli` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sf-cli").expect("Failed to locate sf-cli binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `url = <remote>` into `<site>/.git/config`.
    pub(crate) fn add_git_remote(&self, site: &str, remote: &str) {
        let git_dir = self.work_dir.join(site).join(".git");
        fs::create_dir_all(&git_dir).expect("Failed to create .git directory");
        fs::write(
            git_dir.join("config"),
            format!("[core]\n\tbare = false\n[remote \"origin\"]\n\turl = {remote}\n"),
        )
        .expect("Failed to write .git/config");
    }

    /// Set a value in the isolated user's global git config.
    pub(crate) fn set_git_identity(&self, name: &str) {
        fs::write(self.home.join(".gitconfig"), format!("[user]\n\tname = {name}\n"))
            .expect("Failed to write .gitconfig");
    }

    pub(crate) fn site_path(&self, site: &str) -> PathBuf {
        self.work_dir.join(site)
    }

    pub(crate) fn config_text(&self, site: &str) -> String {
        fs::read_to_string(self.site_path(site).join("config.jsonld"))
            .expect("config.jsonld should exist")
    }

    pub(crate) fn config(&self, site: &str) -> Value {
        serde_json::from_str(&self.config_text(site)).expect("config.jsonld should be JSON")
    }

    /// Assert that the directory skeleton exists.
    pub(crate) fn assert_skeleton(&self, site: &str, output: &str, src: &str) {
        let root = self.site_path(site);
        assert!(root.join(output).is_dir(), "{output} should exist");
        assert!(root.join(output).join("_assets").is_dir(), "{output}/_assets should exist");
        assert!(root.join(src).is_dir(), "{src} should exist");
        assert!(root.join("templates").is_dir(), "templates should exist");
    }
}

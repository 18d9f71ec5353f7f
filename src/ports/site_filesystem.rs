//! Filesystem primitives used by the scaffold.

use std::path::Path;

use crate::domain::AppError;

/// Port for the handful of filesystem operations the scaffold performs.
///
/// Paths are used as given; relative paths resolve against the process
/// working directory in the real implementation.
pub trait SiteFilesystem {
    /// Create a directory and its parents. Existing directories are not an error.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's contents.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}

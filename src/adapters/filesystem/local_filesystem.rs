//! `SiteFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::SiteFilesystem;

/// Real filesystem. Relative paths resolve against the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl SiteFilesystem for LocalFilesystem {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(AppError::from)
    }
}

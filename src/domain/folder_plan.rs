//! Directory skeleton of a root repository.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Folder names making up a root repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPlan {
    pub root_name: String,
    pub output_dir_name: String,
    pub src_dir_name: String,
    pub templates_dir_name: String,
    pub assets_dir_name: String,
}

impl FolderPlan {
    /// Directories to create under `root`, in creation order.
    pub fn directories(&self, root: &Path) -> Vec<PathBuf> {
        let output = root.join(&self.output_dir_name);
        vec![
            root.to_path_buf(),
            output.clone(),
            output.join(&self.assets_dir_name),
            root.join(&self.src_dir_name),
            root.join(&self.templates_dir_name),
        ]
    }
}

/// Last named segment of `path`, resolving `.` and `..` against `working_dir`.
///
/// Returns `None` for an empty path or one made only of separators.
pub fn root_name(path: &Path, working_dir: &Path) -> Option<String> {
    if path.as_os_str().is_empty() {
        return None;
    }

    let joined = working_dir.join(path);
    let mut segments: Vec<&OsStr> = Vec::new();
    for component in joined.components() {
        match component {
            Component::Normal(segment) => segments.push(segment),
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    segments.last().map(|segment| segment.to_string_lossy().into_owned())
}

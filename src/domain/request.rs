use std::path::PathBuf;

/// Input to a single `init` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Target directory of the root repository.
    pub path: PathBuf,
    /// `--siteRoot`: used verbatim, skips inference and the site root prompt.
    pub explicit_site_root: Option<String>,
    /// `--output`: output folder name.
    pub explicit_output_dir: Option<String>,
    /// `--src`: source folder name.
    pub explicit_src_dir: Option<String>,
    /// `--debug`: verbose diagnostics.
    pub debug: bool,
}

impl ScaffoldRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    /// Explicit site root, ignoring blank values.
    pub fn site_root_flag(&self) -> Option<&str> {
        non_blank(self.explicit_site_root.as_deref())
    }

    pub fn output_dir_flag(&self) -> Option<&str> {
        non_blank(self.explicit_output_dir.as_deref())
    }

    pub fn src_dir_flag(&self) -> Option<&str> {
        non_blank(self.explicit_src_dir.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

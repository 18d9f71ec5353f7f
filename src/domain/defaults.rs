//! Built-in defaults for a Semantic Flow root repository.

/// Default values consulted when neither flags, inference, nor the user
/// supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldDefaults {
    /// Prefix of the fallback site root; the root directory name is appended.
    pub site_root_base: String,
    /// Output (published) folder name.
    pub output_dir: String,
    /// Source folder name.
    pub src_dir: String,
    /// Templates folder name. Not configurable from the command line.
    pub templates_dir: String,
    /// Assets folder created inside the output folder.
    pub assets_dir: String,
    /// File name of the JSON-LD configuration document.
    pub config_file: String,
    /// Creator recorded when no identity could be found.
    pub creator: String,
    /// Site description recorded when the user gives none.
    pub description: String,
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            site_root_base: "http://localhost/".to_string(),
            output_dir: "docs".to_string(),
            src_dir: "src".to_string(),
            templates_dir: "templates".to_string(),
            assets_dir: "_assets".to_string(),
            config_file: "config.jsonld".to_string(),
            creator: "unknown".to_string(),
            description: "A Semantic Flow site".to_string(),
        }
    }
}

impl ScaffoldDefaults {
    /// Fallback site root for a repository named `root_name`.
    pub fn site_root_for(&self, root_name: &str) -> String {
        format!("{}{}", self.site_root_base, root_name)
    }
}

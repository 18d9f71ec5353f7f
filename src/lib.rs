//! sf-cli: scaffold Semantic Flow Root Repositories.
//!
//! A root repository is a directory holding source, output and template
//! folders plus a `config.jsonld` document recording the site root URL and
//! the site's creator.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{init, init_with_defaults};
pub use app::commands::init::InitOutcome;
pub use domain::{
    AppError, ConfigDocument, FolderPlan, GitRemoteInfo, GitRemoteUrl, ScaffoldDefaults,
    ScaffoldRequest, SiteIdentity, derive_site_root,
};

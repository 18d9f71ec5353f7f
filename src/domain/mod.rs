pub mod config_document;
pub mod defaults;
pub mod error;
pub mod folder_plan;
pub mod git_remote;
pub mod identity;
pub mod request;
pub mod site_root;

pub use config_document::{ConfigDocument, RecordedLayout};
pub use defaults::ScaffoldDefaults;
pub use error::AppError;
pub use folder_plan::FolderPlan;
pub use git_remote::{GitRemoteInfo, GitRemoteUrl};
pub use identity::{SiteIdentity, SiteRootDecision, SiteRootSource};
pub use request::ScaffoldRequest;
pub use site_root::derive_site_root;

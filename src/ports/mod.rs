mod console;
mod git_identity;
mod site_filesystem;

pub use console::Console;
pub use git_identity::GitIdentity;
pub use site_filesystem::SiteFilesystem;

//! Filesystem adapter for the `SiteFilesystem` port.

mod local_filesystem;

pub use local_filesystem::LocalFilesystem;

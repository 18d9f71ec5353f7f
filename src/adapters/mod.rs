pub mod console;
pub mod filesystem;
pub mod git;

pub use console::{TerminalConsole, UnattendedConsole};
pub use filesystem::LocalFilesystem;
pub use git::Git2Identity;

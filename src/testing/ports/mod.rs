mod stub_git_identity;

pub use self::memory_filesystem::MemoryFilesystem;
pub use self::scripted_console::{ConsoleEvent, ScriptedConsole};
pub use self::stub_git_identity::StubGitIdentity;

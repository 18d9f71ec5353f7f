//! `Console` adapters: an interactive terminal and an unattended fallback.

mod terminal;
mod unattended;

pub use terminal::TerminalConsole;
pub use unattended::UnattendedConsole;

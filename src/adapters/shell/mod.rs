//! Presentation shell adapters.

mod logging_shell;

pub use logging_shell::LoggingShell;

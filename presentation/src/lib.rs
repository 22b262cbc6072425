//! Presentation layer for legislation
//!
//! This crate contains CLI definitions, console output formatters,
//! progress indicators, and the interactive TUI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::TaskSpinner;
pub use tui::TuiApp;

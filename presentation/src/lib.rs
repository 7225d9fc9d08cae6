//! Presentation layer for soalgen
//!
//! CLI argument definitions, console and JSON formatting, progress
//! reporting, and the interactive quiz REPL live here.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, ExportArg, OutputArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::QuizRepl;

//! Presentation-level configuration
//!
//! Display and REPL settings, assembled by the binary from the config
//! file and CLI flags.

use serde::{Deserialize, Serialize};
use soalgen_domain::OutputFormat;
use std::path::PathBuf;

/// How the formatters should render a quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// View to render, after CLI and file sources are reconciled
    pub format: OutputFormat,
    /// Use terminal colors
    pub color: bool,
    /// Print the answer key under each question
    pub show_answers: bool,
    /// Print the explanation under each question
    pub include_explanations: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_answers: true,
            include_explanations: true,
        }
    }
}

/// How the interactive session behaves
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Draw progress bars while a command runs
    pub show_progress: bool,
    /// Where to persist command history between sessions
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

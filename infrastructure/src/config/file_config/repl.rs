//! `[repl]` section of the TOML configuration

use serde::{Deserialize, Serialize};

/// Interactive mode settings as they appear on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Draw progress bars while a command runs
    pub show_progress: bool,
    /// Where to persist command history between sessions
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

//! `[output]` section of the TOML configuration

use serde::{Deserialize, Serialize};
use soalgen_domain::OutputFormat;

/// Display settings as they appear on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Preferred view when none is given on the command line
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

//! Configuration file loading for soalgen
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./soalgen.toml` or `./.soalgen.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/soalgen/config.toml`
//! 4. Fallback: `~/.config/soalgen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGenerationConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;

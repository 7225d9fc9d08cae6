//! Discovers and merges TOML configuration files

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// File names probed in the working directory, first hit wins.
const PROJECT_FILE_NAMES: [&str; 2] = ["soalgen.toml", ".soalgen.toml"];

/// Builds a [`FileConfig`] by layering every known source.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge all configuration sources into one [`FileConfig`].
    ///
    /// Later sources win over earlier ones: built-in defaults, then the
    /// global file under the user config directory, then `./soalgen.toml`
    /// (or `./.soalgen.toml`), then the path given on the command line.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            figment = figment.merge(Toml::file(&global));
        }

        if let Some(project) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project));
        }

        if let Some(explicit) = config_path {
            figment = figment.merge(Toml::file(explicit));
        }

        figment.extract().map_err(Box::new)
    }

    /// Built-in defaults only, skipping every file on disk (`--no-config`).
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Location of the per-user config file.
    ///
    /// `$XDG_CONFIG_HOME/soalgen/config.toml` on Linux, the platform
    /// equivalent elsewhere. The file does not have to exist.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("soalgen").join("config.toml"))
    }

    /// First project-level config file present in the working directory.
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILE_NAMES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print which config files would be picked up, for troubleshooting.
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./soalgen.toml or ./.soalgen.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "[FOUND]" } else { "[     ]" };
            println!("  {} Global:  {}", marker, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

//! Configuration file loading.
//!
//! The file is TOML with a single `[board]` table holding the initial
//! selections:
//!
//! ```toml
//! [board]
//! default_currency = "EUR"
//! sort_column = "Company"
//! sort_order = "Ascending"
//! field = "Yield"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use quotebook_engine::BoardConfig;

use crate::error::{CliError, CliResult};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "quotebook.toml";

/// Settings read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Initial board selections.
    pub board: BoardConfig,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the explicit file if given, otherwise the first default
    /// location that exists, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_locations().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// `./quotebook.toml`, then `<config dir>/quotebook/quotebook.toml`.
fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("quotebook").join(CONFIG_FILE_NAME));
    }
    locations
}

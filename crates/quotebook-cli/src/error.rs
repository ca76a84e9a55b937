//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

use quotebook_engine::ConfigError;
use quotebook_ext_json::CatalogError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Board settings were rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration file could not be read or parsed.
    #[error("Invalid config file {path}: {message}")]
    ConfigFile {
        /// File that failed.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be written.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

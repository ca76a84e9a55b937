//! # Quotebook Ext JSON
//!
//! Loads the quote catalog document (`{ "Items": [...] }`) from JSON.
//!
//! [`parse_catalog`] decodes bytes already in memory, [`load_catalog`]
//! reads a file, and [`JsonCatalogSource`] keeps a file-backed snapshot
//! that can be reloaded without disturbing readers of the previous one.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use quotebook_core::RawCatalog;

/// Errors raised while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid catalog.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A specialized Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Decodes a catalog document.
pub fn parse_catalog(bytes: &[u8]) -> CatalogResult<RawCatalog> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads and decodes a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<RawCatalog> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&bytes)?;

    info!(
        "Loaded catalog from {}: {} entries, {} quotes",
        path.display(),
        catalog.len(),
        catalog.quote_count()
    );
    Ok(catalog)
}

/// File-backed catalog snapshot.
#[derive(Debug)]
pub struct JsonCatalogSource {
    file_path: PathBuf,
    catalog: RwLock<Arc<RawCatalog>>,
}

impl JsonCatalogSource {
    /// Opens a catalog file.
    pub fn new(file_path: impl AsRef<Path>) -> CatalogResult<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        let catalog = load_catalog(&file_path)?;
        Ok(Self {
            file_path,
            catalog: RwLock::new(Arc::new(catalog)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Current snapshot.
    pub fn catalog(&self) -> Arc<RawCatalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Re-reads the file and swaps in the new snapshot.
    ///
    /// On error the previous snapshot stays in place.
    pub fn reload(&self) -> CatalogResult<Arc<RawCatalog>> {
        let catalog = Arc::new(load_catalog(&self.file_path)?);
        *self.catalog.write() = Arc::clone(&catalog);
        Ok(catalog)
    }
}

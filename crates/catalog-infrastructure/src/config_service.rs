//! Configuration service implementation.
//!
//! Loads [`CatalogConfig`] from `config.toml` and resolves where slot files go.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use catalog_core::error::Result;
use catalog_core::{CatalogConfig, CatalogError};

use crate::paths::CatalogPaths;
use crate::storage::FileSlotStorage;

/// Loads catalog configuration from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading the platform `config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(CatalogPaths::config_file()?))
    }

    /// Creates a service reading a specific file (for testing or `--config`).
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration.
    ///
    /// A missing file yields the defaults; an unparsable file is an error.
    pub fn load(&self) -> Result<CatalogConfig> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "[ConfigService] No config at {:?}, using defaults",
                    self.config_path
                );
                return Ok(CatalogConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| {
            CatalogError::config(format!(
                "Failed to parse {:?}: {}",
                self.config_path, e
            ))
        })
    }
}

/// Returns the directory slot files are stored in for `config`.
pub fn resolve_data_dir(config: &CatalogConfig) -> Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(CatalogPaths::data_dir()?),
    }
}

/// Builds the file slot storage described by `config`.
pub fn file_storage_for(config: &CatalogConfig) -> Result<FileSlotStorage> {
    Ok(FileSlotStorage::new(resolve_data_dir(config)?))
}

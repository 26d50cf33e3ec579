//! Unified path management for catalog files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/item-catalog/      # Config directory
//! └── config.toml              # Optional configuration
//!
//! ~/.local/share/item-catalog/ # Data directory
//! └── items.json               # Default slot
//! ```

use std::path::PathBuf;

use catalog_core::CatalogError;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for CatalogError {
    fn from(err: PathError) -> Self {
        CatalogError::config(err.to_string())
    }
}

/// Platform paths for the catalog, resolved via `dirs`.
pub struct CatalogPaths;

impl CatalogPaths {
    const APP_DIR: &'static str = "item-catalog";

    /// Returns the catalog configuration directory (e.g. `~/.config/item-catalog/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the catalog data directory (e.g. `~/.local/share/item-catalog/`).
    ///
    /// Slot files live here unless the configuration overrides it.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

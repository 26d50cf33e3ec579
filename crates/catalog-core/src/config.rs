//! Catalog configuration model.
//!
//! Read from `config.toml`; every field has a default so an absent or partial
//! file is valid.

use serde::Deserialize;
use std::path::PathBuf;

use crate::store::DEFAULT_SLOT_KEY;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Slot key the collection is stored under.
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Overrides the platform data directory for slot files.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_slot() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.slot, "items");
    }

    #[test]
    fn test_partial_toml() {
        let config: CatalogConfig = toml::from_str(r#"data_dir = "/tmp/catalog""#).unwrap();
        assert_eq!(config.slot, "items");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/catalog")));
    }
}

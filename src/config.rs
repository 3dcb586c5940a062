//! # Configuration
//!
//! Engine configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables, and compiled defaults.
//!
//! Resolution order, highest priority first:
//! 1. **Environment variables**: `CATALOG_BASE_URL`, `CATALOG_TIMEOUT_SECS`.
//! 2. **Config file**: an optional `stockroom.toml` passed to [`InventoryConfig::load`].
//! 3. **Compiled defaults** via `#[config(default = ...)]`.

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Configuration for the inventory engine.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Base URL of the remote catalog service.
    #[config(env = "CATALOG_BASE_URL", default = "http://localhost:3001")]
    pub base_url: String,

    /// Seconds before an in-flight request is abandoned.
    #[config(env = "CATALOG_TIMEOUT_SECS", default = 30)]
    pub request_timeout_secs: u64,

    /// Page size used when fetching the collection from the remote. The view
    /// pipeline filters client-side, so this is deliberately generous.
    #[config(default = 100)]
    pub fetch_limit: usize,

    /// Rows shown per page in the derived view.
    #[config(default = 10)]
    pub items_per_page: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            request_timeout_secs: 30,
            fetch_limit: 100,
            items_per_page: 10,
        }
    }
}

impl InventoryConfig {
    /// Layered load: environment variables override the optional TOML file,
    /// which overrides compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| CatalogError::Unknown(format!("invalid configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = InventoryConfig::default();
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.fetch_limit, 100);
        assert!(config.base_url.starts_with("http"));
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = InventoryConfig::load(None).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
    }
}

//! Application settings loaded from TOML.
//!
//! Every field has a default, so an empty document is valid and a file only
//! needs the keys it changes:
//!
//! ```toml
//! [catalog]
//! per_page = 24
//!
//! [select]
//! type_ahead_timeout_ms = 500
//! max_visible_items = 6
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::logging::targets;

use crate::catalog::DEFAULT_PER_PAGE;
use crate::error::{Error, Result};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub select: SelectSettings,
}

/// Catalog paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Products shown per page.
    pub per_page: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Behavior of selection dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectSettings {
    /// Idle milliseconds before the type-ahead buffer is cleared.
    pub type_ahead_timeout_ms: u64,
    /// Rows shown in an open option list before it scrolls.
    pub max_visible_items: usize,
}

impl SelectSettings {
    pub fn type_ahead_timeout(&self) -> Duration {
        Duration::from_millis(self.type_ahead_timeout_ms)
    }
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            type_ahead_timeout_ms: 1000,
            max_visible_items: 8,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "settings loaded");
        Ok(settings)
    }
}

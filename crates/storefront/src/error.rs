//! Error types for the storefront crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading settings and catalog data.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings were not valid TOML or had the wrong shape.
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Product data was not valid JSON or had the wrong shape.
    #[error("invalid product data: {0}")]
    Products(#[from] serde_json::Error),
}

/// Result type for storefront operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for catalog configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur loading or validating a catalog configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Both viewport lists are empty.
    #[error("catalog defines no viewports")]
    EmptyCatalog,

    /// A viewport entry has a zero dimension.
    #[error("invalid viewport: {width}x{height} (dimensions must be positive)")]
    InvalidViewport {
        /// Offending width.
        width: u32,
        /// Offending height.
        height: u32,
    },
}

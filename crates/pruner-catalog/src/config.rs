//! Catalog configuration loading.
//!
//! A `CatalogConfig` carries everything the optimizer and the comparator
//! treat as policy: the two viewport lists, the minimum tile size, and the
//! bytes-per-pixel estimate. Omitted fields fall back to the built-in
//! catalogs and constants, so an empty file reproduces the defaults.
//!
//! ```yaml
//! priority:
//!   - [1920, 1080]
//!   - [360, 800]
//! secondary:
//!   - [1280, 720]
//! min_tile_size: 120
//! bytes_per_pixel: 3
//! ```

use std::path::Path;

use serde::Deserialize;

use pruner_core::Viewport;

use crate::catalogs::{
    priority_viewports, secondary_viewports, DEFAULT_BYTES_PER_PIXEL, DEFAULT_MIN_TILE_SIZE,
};
use crate::error::{CatalogError, CatalogResult};

/// Validated catalog configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Breakpoint-aligned viewports.
    pub priority: Vec<Viewport>,
    /// Broader device-coverage viewports.
    pub secondary: Vec<Viewport>,
    /// Minimum usable tile dimension for candidate generation.
    pub min_tile_size: u32,
    /// Bytes-per-pixel estimate for byte-waste reporting.
    pub bytes_per_pixel: u64,
}

/// Raw YAML shape before validation and defaulting.
#[derive(Debug, Deserialize)]
struct RawConfig {
    priority: Option<Vec<Viewport>>,
    secondary: Option<Vec<Viewport>>,
    min_tile_size: Option<u32>,
    bytes_per_pixel: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            priority: priority_viewports(),
            secondary: secondary_viewports(),
            min_tile_size: DEFAULT_MIN_TILE_SIZE,
            bytes_per_pixel: DEFAULT_BYTES_PER_PIXEL,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        let config = Self {
            priority: raw.priority.unwrap_or_else(priority_viewports),
            secondary: raw.secondary.unwrap_or_else(secondary_viewports),
            min_tile_size: raw.min_tile_size.unwrap_or(DEFAULT_MIN_TILE_SIZE),
            bytes_per_pixel: raw.bytes_per_pixel.unwrap_or(DEFAULT_BYTES_PER_PIXEL),
        };
        config.validate()?;
        Ok(config)
    }

    /// Both viewport lists concatenated, priority first.
    pub fn viewports(&self) -> Vec<Viewport> {
        let mut all = self.priority.clone();
        all.extend(self.secondary.iter().copied());
        all
    }

    fn validate(&self) -> CatalogResult<()> {
        if self.priority.is_empty() && self.secondary.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for vp in self.priority.iter().chain(&self.secondary) {
            if vp.width == 0 || vp.height == 0 {
                return Err(CatalogError::InvalidViewport {
                    width: vp.width,
                    height: vp.height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_empty_yaml_reproduces_defaults() {
        let config = CatalogConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.viewports().len(), 21);
    }

    #[test]
    fn test_partial_override() {
        let config = CatalogConfig::from_yaml_str(
            "
priority:
  - [240, 240]
secondary: []
min_tile_size: 60
",
        )
        .unwrap();
        assert_eq!(config.priority, vec![Viewport::new(240, 240)]);
        assert!(config.secondary.is_empty());
        assert_eq!(config.min_tile_size, 60);
        assert_eq!(config.bytes_per_pixel, DEFAULT_BYTES_PER_PIXEL);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = CatalogConfig::from_yaml_str("priority:\n  - [0, 800]\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidViewport { width: 0, height: 800 }
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let err = CatalogConfig::from_yaml_str("priority: []\nsecondary: []\n").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_tile_size: 90").unwrap();
        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_tile_size, 90);

        let missing = CatalogConfig::from_file("/nonexistent/catalog.yaml");
        assert!(matches!(
            missing,
            Err(CatalogError::ConfigNotFound { .. })
        ));
    }
}

//! # pruner-catalog
//!
//! The fixed device-viewport catalogs and breakpoint variant sets every
//! strategy is evaluated against, plus a YAML configuration layer so the
//! catalogs, the minimum tile size, and the bytes-per-pixel estimate are
//! explicit inputs rather than buried constants.
//!
//! # Catalogs
//!
//! - [`priority_viewports`] - the five breakpoints also used for
//!   picture/srcset variants
//! - [`secondary_viewports`] - sixteen further common device sizes
//! - [`common_viewports`] - both lists concatenated, priority first
//!
//! # Variant Sets
//!
//! - [`three_breakpoint_variants`] / [`five_breakpoint_variants`] - the
//!   pre-rendered image sets of the picture/srcset strategies
//! - [`benchmark_variant`] - the single full-resolution image
//!
//! # Configuration
//!
//! ```rust
//! use pruner_catalog::CatalogConfig;
//!
//! let config = CatalogConfig::from_yaml_str("
//! priority:
//!   - [1920, 1080]
//!   - [360, 800]
//! min_tile_size: 100
//! ").unwrap();
//! assert_eq!(config.priority.len(), 2);
//! assert_eq!(config.min_tile_size, 100);
//! assert_eq!(config.bytes_per_pixel, 3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod catalogs;
mod config;
mod error;

pub use catalogs::{
    benchmark_variant, common_viewports, five_breakpoint_variants, priority_viewports,
    secondary_viewports, three_breakpoint_variants, DEFAULT_BYTES_PER_PIXEL,
    DEFAULT_MIN_TILE_SIZE, DEFAULT_SOURCE_DIMS,
};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};

//! # pruner-core
//!
//! Core types for viewport-aware image tiling.
//!
//! This crate provides the foundational types used throughout the pruner
//! ecosystem:
//!
//! - [`Viewport`] - A target device screen size in CSS pixels
//! - [`ImageDims`] - Native pixel dimensions of a source image or variant
//! - [`TileSize`], [`TileGrid`] - A uniform tile and the grid it induces
//! - [`Density`] - Device pixel ratio (1x / 1.5x / 2x)
//! - [`TileManifest`] - The descriptor handed to markup generation
//!
//! ## Design Philosophy
//!
//! Everything here is plain immutable data. Waste accounting and the tile
//! search live in `pruner-waste` and `pruner-opt`; this crate only defines
//! the geometry they agree on.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. All other pruner crates depend on `pruner-core`:
//!
//! ```text
//! pruner-core (this crate)
//!    ^
//!    |
//!    +-- pruner-waste (waste model)
//!    +-- pruner-catalog (viewport catalogs, configuration)
//!    +-- pruner-opt (tile search, density scaling, comparison)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod density;
pub mod manifest;
pub mod tile;
pub mod viewport;

// Re-exports for convenience
pub use density::{Density, ParseDensityError};
pub use manifest::TileManifest;
pub use tile::{TileGrid, TileSize};
pub use viewport::{ImageDims, Viewport};

//! # pruner-waste
//!
//! The waste model: pure functions quantifying pixel and byte over-delivery
//! for an (asset, viewport) pairing.
//!
//! Two delivery models are covered:
//!
//! - [`tile_waste`] - whole-tile delivery: the client fetches every tile
//!   intersecting its viewport's top-left-anchored footprint
//! - [`single_asset_waste`] - breakpoint delivery: the client fetches the
//!   smallest pre-rendered variant covering its viewport
//!
//! Plus the catalog-level aggregates [`tiled_waste_stats`] and
//! [`variant_waste_stats`] the optimizer and the strategy comparison are
//! built on.
//!
//! Everything here is stateless and total; a viewport no variant covers is
//! reported as [`Coverage::Uncovered`], never as an error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod single;
mod tiled;

pub use single::{single_asset_waste, variant_waste_stats, AssetWaste, Coverage, VariantWaste};
pub use tiled::{tile_waste, tiled_waste_stats, TiledWaste};

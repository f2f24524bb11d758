//! # pruner-opt
//!
//! The tile optimizer: given a viewport catalog and a source image, find the
//! uniform tile size that minimizes whole-tile over-delivery, derive the
//! grid it induces, and scale that grid to higher device densities.
//!
//! # Modules
//!
//! - [`divisors`] / [`candidate_tiles`] - candidate generation from
//!   catalog-dimension divisors
//! - [`optimal_tile_size`] - the search itself
//! - [`scale_tile_grid`] - density scaling by grid re-division
//! - [`StrategyReport`] / [`StrategyComparison`] - waste comparison across
//!   delivery strategies
//!
//! # Example
//!
//! ```rust
//! use pruner_core::{Density, ImageDims, Viewport};
//! use pruner_opt::{optimal_tile_size, scale_tile_grid};
//!
//! let priority = [Viewport::new(240, 240)];
//! let secondary = [Viewport::new(360, 360)];
//! let image = ImageDims::new(720, 720);
//!
//! let best = optimal_tile_size(image, &priority, &secondary, 120)?;
//! let scaled = scale_tile_grid(best.tile, image, Density::X2);
//! assert_eq!(scaled.image_width, 1440.0);
//! # Ok::<(), pruner_opt::OptError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - score candidates with rayon (enabled by default). The
//!   serial and parallel paths select the same winner.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod candidates;
mod compare;
mod divisors;
mod error;
mod optimize;
mod scale;

pub use candidates::candidate_tiles;
pub use compare::{StrategyComparison, StrategyReport};
pub use divisors::divisors;
pub use error::{OptError, OptResult};
pub use optimize::{optimal_tile_size, Optimization};
pub use scale::{density_or_default, scale_tile_grid, ScaledGrid};

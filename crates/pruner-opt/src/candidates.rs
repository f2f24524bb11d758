//! Candidate tile generation.
//!
//! A tile dimension is only usable if it divides some catalog dimension on
//! its axis; otherwise every viewport on that axis pays avoidable overshoot.
//! Candidate widths are therefore the divisors of any catalog width at or
//! above the floor, candidate heights likewise from catalog heights, and the
//! candidate set is their full cross product: a width earned against one
//! viewport may pair with a height earned against another.

use std::collections::BTreeSet;

use pruner_core::{TileSize, Viewport};

use crate::divisors::divisors;

/// Enumerates candidate tiles for a viewport catalog.
///
/// The result is sorted ascending by `(width, height)` and duplicate-free;
/// the search relies on that order for reproducible tie-breaking. Empty when
/// no catalog dimension has a divisor at or above `min_tile_size`.
///
/// # Example
///
/// ```rust
/// use pruner_core::{TileSize, Viewport};
/// use pruner_opt::candidate_tiles;
///
/// let tiles = candidate_tiles(&[Viewport::new(240, 240)], 120);
/// assert_eq!(tiles, vec![
///     TileSize::new(120, 120),
///     TileSize::new(120, 240),
///     TileSize::new(240, 120),
///     TileSize::new(240, 240),
/// ]);
/// ```
pub fn candidate_tiles(viewports: &[Viewport], min_tile_size: u32) -> Vec<TileSize> {
    let mut widths = BTreeSet::new();
    let mut heights = BTreeSet::new();

    for vp in viewports {
        widths.extend(divisors(vp.width).into_iter().filter(|&d| d >= min_tile_size));
        heights.extend(divisors(vp.height).into_iter().filter(|&d| d >= min_tile_size));
    }

    let mut tiles = Vec::with_capacity(widths.len() * heights.len());
    for &w in &widths {
        for &h in &heights {
            tiles.push(TileSize::new(w, h));
        }
    }
    tiles
}

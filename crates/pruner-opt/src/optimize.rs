//! Uniform tile-size search.
//!
//! Scores every candidate tile by its summed whole-tile waste over the
//! concatenated priority and secondary catalogs (both lists weigh the same)
//! and keeps the minimum. Scoring compares integer totals, not float
//! averages, so ties are exact; among equally wasteful candidates the
//! lexicographically smallest `(width, height)` wins.

use tracing::{debug, info};

use pruner_core::{ImageDims, TileGrid, TileSize, Viewport};
use pruner_waste::tile_waste;

use crate::candidates::candidate_tiles;
use crate::error::{OptError, OptResult};

/// Outcome of the tile search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimization {
    /// The winning tile size, in 1x pixels.
    pub tile: TileSize,
    /// Grid the winner induces over the source image.
    pub grid: TileGrid,
    /// Mean pixel waste per catalog viewport.
    pub average_waste: f64,
    /// Waste as a percentage of the summed catalog viewport area.
    pub percent_waste: f64,
}

/// Searches for the uniform tile size minimizing catalog-wide waste.
///
/// Candidates are catalog-dimension divisors at or above `min_tile_size`
/// (see [`candidate_tiles`]); every candidate is scored against priority and
/// secondary viewports with equal weight. The returned grid covers `image`
/// with whole tiles of the winner.
///
/// # Errors
///
/// [`OptError::InvalidDimensions`] if either image dimension is zero;
/// [`OptError::NoTileSize`] if the floor eliminates every candidate, in
/// which case the caller must widen the catalog or lower the floor.
///
/// # Example
///
/// ```rust
/// use pruner_core::{ImageDims, Viewport};
/// use pruner_opt::optimal_tile_size;
///
/// let priority = [Viewport::new(240, 240)];
/// let secondary = [Viewport::new(360, 360)];
/// let best = optimal_tile_size(ImageDims::new(720, 720), &priority, &secondary, 120).unwrap();
/// // 120 divides both 240 and 360: zero waste
/// assert_eq!((best.tile.width, best.tile.height), (120, 120));
/// assert_eq!(best.average_waste, 0.0);
/// ```
pub fn optimal_tile_size(
    image: ImageDims,
    priority: &[Viewport],
    secondary: &[Viewport],
    min_tile_size: u32,
) -> OptResult<Optimization> {
    if image.width == 0 || image.height == 0 {
        return Err(OptError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let mut viewports = priority.to_vec();
    viewports.extend_from_slice(secondary);

    let candidates = candidate_tiles(&viewports, min_tile_size);
    debug!(candidates = candidates.len(), min_tile_size, "scoring candidate tiles");

    let (tile, total) = best_candidate(&candidates, &viewports)
        .ok_or(OptError::NoTileSize { min_tile_size })?;

    let grid = TileGrid::cover(image, tile);
    let viewport_area: u64 = viewports.iter().map(Viewport::area).sum();
    let average_waste = total as f64 / viewports.len() as f64;
    let percent_waste = total as f64 / viewport_area as f64 * 100.0;
    info!(%tile, %grid, average_waste, "selected tile size");

    Ok(Optimization {
        tile,
        grid,
        average_waste,
        percent_waste,
    })
}

fn total_waste(viewports: &[Viewport], tile: TileSize) -> u64 {
    viewports.iter().map(|&v| tile_waste(v, tile)).sum()
}

/// Minimum by `(total waste, tile)`; tiles are unique, so the key is too and
/// the serial and parallel paths agree on the winner.
#[cfg(feature = "parallel")]
fn best_candidate(candidates: &[TileSize], viewports: &[Viewport]) -> Option<(TileSize, u64)> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|&tile| (tile, total_waste(viewports, tile)))
        .min_by_key(|&(tile, total)| (total, tile))
}

#[cfg(not(feature = "parallel"))]
fn best_candidate(candidates: &[TileSize], viewports: &[Viewport]) -> Option<(TileSize, u64)> {
    candidates
        .iter()
        .map(|&tile| (tile, total_waste(viewports, tile)))
        .min_by_key(|&(tile, total)| (total, tile))
}

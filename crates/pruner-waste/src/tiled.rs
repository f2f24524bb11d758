//! Whole-tile delivery waste.
//!
//! A viewport anchored at the image's top-left corner needs
//! `ceil(vw / tw) * ceil(vh / th)` whole tiles. The delivered strip beyond
//! the right edge is `waste_x` wide, the strip below is `waste_y` tall, and
//! the corner where both overshoot would otherwise be counted twice:
//!
//! ```text
//! covered_w = ceil(vw/tw) * tw          waste_x = covered_w - vw
//! covered_h = ceil(vh/th) * th          waste_y = covered_h - vh
//! waste = waste_x*vh + waste_y*vw - waste_x*waste_y
//! ```
//!
//! The result is exact for every boundary case: zero when both dimensions
//! divide, the plain strip area when only one axis overshoots.

use pruner_core::{TileSize, Viewport};

/// Pixel waste of delivering whole tiles of `tile` to cover `viewport`.
///
/// For a tile overshooting the viewport by more than the viewport's own
/// extent on both axes the corner correction exceeds the strips and the
/// result saturates at zero; divisor-derived candidates never reach that
/// regime.
///
/// # Example
///
/// ```rust
/// use pruner_core::{TileSize, Viewport};
/// use pruner_waste::tile_waste;
///
/// // 10x6 grid of 200px tiles covers 2000x1200 for a 1920x1080 viewport
/// let waste = tile_waste(Viewport::new(1920, 1080), TileSize::new(200, 200));
/// assert_eq!(waste, 307_200);
/// ```
#[inline]
pub fn tile_waste(viewport: Viewport, tile: TileSize) -> u64 {
    let vw = viewport.width as u64;
    let vh = viewport.height as u64;
    let tiles_x = viewport.width.div_ceil(tile.width) as u64;
    let tiles_y = viewport.height.div_ceil(tile.height) as u64;

    let waste_x = tiles_x * tile.width as u64 - vw;
    let waste_y = tiles_y * tile.height as u64 - vh;

    let strips = waste_x * vh + waste_y * vw;
    let corner = waste_x * waste_y;
    strips.saturating_sub(corner)
}

/// Aggregate tiled waste for one candidate tile over a viewport catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiledWaste {
    /// Summed pixel waste over the catalog.
    pub total: u64,
    /// Mean pixel waste per viewport.
    pub average: f64,
    /// Waste as a percentage of the summed viewport area.
    pub percent: f64,
}

/// Computes [`TiledWaste`] for `tile` over every viewport in `viewports`.
///
/// Order-independent up to floating rounding. An empty catalog yields all
/// zeroes.
pub fn tiled_waste_stats(viewports: &[Viewport], tile: TileSize) -> TiledWaste {
    if viewports.is_empty() {
        return TiledWaste {
            total: 0,
            average: 0.0,
            percent: 0.0,
        };
    }

    let total: u64 = viewports.iter().map(|&v| tile_waste(v, tile)).sum();
    let area: u64 = viewports.iter().map(Viewport::area).sum();

    TiledWaste {
        total,
        average: total as f64 / viewports.len() as f64,
        percent: if area == 0 {
            0.0
        } else {
            total as f64 / area as f64 * 100.0
        },
    }
}

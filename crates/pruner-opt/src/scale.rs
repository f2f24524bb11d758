//! Density scaling of a tile grid.
//!
//! Higher-density variants keep the 1x grid cardinality and re-divide the
//! scaled canvas, so a 15x7 grid stays 15x7 at 2x and each tile doubles.
//! Re-division means the reported tile dimensions are exact fractions of the
//! scaled canvas (columns x tile_width == image_width always holds), and it
//! also means they are not clamped: the minimum-tile floor binds candidate
//! generation at 1x only, and the re-divided width can sit below it.

use tracing::warn;

use pruner_core::{Density, ImageDims, TileGrid, TileSize};

/// A tile grid re-divided over a density-scaled canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledGrid {
    /// Tile columns (unchanged from 1x).
    pub columns: u32,
    /// Tile rows (unchanged from 1x).
    pub rows: u32,
    /// Scaled canvas width in physical pixels.
    pub image_width: f64,
    /// Scaled canvas height in physical pixels.
    pub image_height: f64,
    /// Scaled tile width: `image_width / columns`.
    pub tile_width: f64,
    /// Scaled tile height: `image_height / rows`.
    pub tile_height: f64,
}

/// Scales the grid `tile` induces over `image` to the given density.
///
/// Both image dimensions must be positive, which keeps the derived grid
/// counts at least 1.
///
/// # Example
///
/// ```rust
/// use pruner_core::{Density, ImageDims, TileSize};
/// use pruner_opt::scale_tile_grid;
///
/// let scaled = scale_tile_grid(TileSize::new(131, 156), ImageDims::new(1920, 1080), Density::X2);
/// assert_eq!((scaled.columns, scaled.rows), (15, 7));
/// assert_eq!(scaled.image_width, 3840.0);
/// assert_eq!(scaled.tile_width, 256.0);
/// ```
pub fn scale_tile_grid(tile: TileSize, image: ImageDims, density: Density) -> ScaledGrid {
    debug_assert!(image.width > 0 && image.height > 0);
    let grid = TileGrid::cover(image, tile);

    let image_width = image.width as f64 * density.factor();
    let image_height = image.height as f64 * density.factor();

    ScaledGrid {
        columns: grid.columns,
        rows: grid.rows,
        image_width,
        image_height,
        tile_width: image_width / grid.columns as f64,
        tile_height: image_height / grid.rows as f64,
    }
}

/// Parses a density input, logging and defaulting to 1x when it is invalid.
///
/// The strict path is `Density`'s `FromStr`; delivery pipelines that would
/// rather render something than fail use this.
pub fn density_or_default(input: &str) -> Density {
    input.parse().unwrap_or_else(|err| {
        warn!(%err, "invalid density input, defaulting to 1x");
        Density::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TILE: TileSize = TileSize::new(131, 156);
    const IMAGE: ImageDims = ImageDims::new(1920, 1080);

    #[test]
    fn test_identity_at_1x() {
        let scaled = scale_tile_grid(TILE, IMAGE, Density::X1);
        assert_eq!((scaled.columns, scaled.rows), (15, 7));
        assert_eq!(scaled.image_width, 1920.0);
        assert_eq!(scaled.image_height, 1080.0);
        assert_eq!(scaled.tile_width, 1920.0 / 15.0);
        assert_relative_eq!(scaled.tile_height, 1080.0 / 7.0);
    }

    #[test]
    fn test_grid_cardinality_fixed_across_densities() {
        for density in [Density::X1, Density::X1_5, Density::X2] {
            let scaled = scale_tile_grid(TILE, IMAGE, density);
            assert_eq!((scaled.columns, scaled.rows), (15, 7));
            // Re-division keeps tiles exact fractions of the canvas
            assert_relative_eq!(
                scaled.tile_width * scaled.columns as f64,
                scaled.image_width,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                scaled.tile_height * scaled.rows as f64,
                scaled.image_height,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_scaled_dimensions() {
        let scaled = scale_tile_grid(TILE, IMAGE, Density::X1_5);
        assert_eq!(scaled.image_width, 2880.0);
        assert_eq!(scaled.image_height, 1620.0);
        assert_eq!(scaled.tile_width, 192.0);
        assert_relative_eq!(scaled.tile_height, 1620.0 / 7.0);

        let scaled = scale_tile_grid(TILE, IMAGE, Density::X2);
        assert_eq!(scaled.tile_width, 256.0);
        assert_relative_eq!(scaled.tile_height, 2160.0 / 7.0);
    }

    #[test]
    fn test_redivision_may_undershoot_candidate_floor() {
        // The 1x tile width re-divides to 128.0, below the 131 candidate
        let scaled = scale_tile_grid(TILE, IMAGE, Density::X1);
        assert_eq!(scaled.tile_width, 128.0);
        assert!(scaled.tile_width < TILE.width as f64);
    }

    #[test]
    fn test_density_or_default() {
        assert_eq!(density_or_default("1.5x"), Density::X1_5);
        assert_eq!(density_or_default("nonsense"), Density::X1);
        assert_eq!(density_or_default(""), Density::X1);
    }
}

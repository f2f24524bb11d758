//! Tile and tile-grid types.
//!
//! A [`TileSize`] is a candidate uniform tile in 1x source-image pixels; a
//! [`TileGrid`] is the column/row grid that tile induces over a source image
//! when every tile must be whole (ceiling division, so the grid may overshoot
//! the image bounds on the last column/row).

use serde::{Deserialize, Serialize};

use crate::viewport::ImageDims;

/// A uniform tile dimension, in native (1x) source-image pixels.
///
/// Ordering is lexicographic by `(width, height)`; the optimizer scores
/// candidates in ascending order so that ties resolve to the smallest pair.
///
/// # Example
///
/// ```rust
/// use pruner_core::TileSize;
///
/// let tile = TileSize::new(131, 156);
/// assert_eq!(tile.area(), 20_436);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct TileSize {
    /// Tile width in pixels.
    pub width: u32,
    /// Tile height in pixels.
    pub height: u32,
}

impl TileSize {
    /// Creates a tile size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the tile area in pixels, widened to avoid overflow.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<(u32, u32)> for TileSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<TileSize> for (u32, u32) {
    fn from(t: TileSize) -> Self {
        (t.width, t.height)
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The column/row grid a uniform tile induces over a source image.
///
/// `columns = ceil(image_width / tile_width)` and likewise for rows, so the
/// grid always covers the image; the last column/row may extend past the
/// image edge. A real slicer crops those tiles, the waste model assumes
/// whole-tile delivery.
///
/// # Example
///
/// ```rust
/// use pruner_core::{ImageDims, TileGrid, TileSize};
///
/// let grid = TileGrid::cover(ImageDims::new(1920, 1080), TileSize::new(131, 156));
/// assert_eq!((grid.columns, grid.rows), (15, 7));
/// assert_eq!(grid.tile_count(), 105);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct TileGrid {
    /// Number of tile columns.
    pub columns: u32,
    /// Number of tile rows.
    pub rows: u32,
}

impl TileGrid {
    /// Creates a grid from explicit column/row counts.
    #[inline]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Derives the grid covering `image` with whole tiles of size `tile`.
    ///
    /// Ceiling division on both axes; for positive inputs both counts are
    /// at least 1.
    #[inline]
    pub const fn cover(image: ImageDims, tile: TileSize) -> Self {
        Self {
            columns: image.width.div_ceil(tile.width),
            rows: image.height.div_ceil(tile.height),
        }
    }

    /// Total number of tiles in the grid.
    #[inline]
    pub const fn tile_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}

impl std::fmt::Display for TileGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_exact_division() {
        let grid = TileGrid::cover(ImageDims::new(1920, 1080), TileSize::new(192, 216));
        assert_eq!(grid, TileGrid::new(10, 5));
        assert_eq!(grid.tile_count(), 50);
    }

    #[test]
    fn test_cover_rounds_up() {
        let grid = TileGrid::cover(ImageDims::new(1920, 1080), TileSize::new(131, 156));
        assert_eq!(grid, TileGrid::new(15, 7));
        // Whole tiles overshoot the image on both axes
        assert!(grid.columns * 131 >= 1920);
        assert!(grid.rows * 156 >= 1080);
    }

    #[test]
    fn test_cover_tile_larger_than_image() {
        let grid = TileGrid::cover(ImageDims::new(100, 100), TileSize::new(300, 300));
        assert_eq!(grid, TileGrid::new(1, 1));
    }

    #[test]
    fn test_tile_ordering() {
        let mut tiles = vec![
            TileSize::new(144, 180),
            TileSize::new(120, 156),
            TileSize::new(120, 135),
            TileSize::new(131, 156),
        ];
        tiles.sort();
        assert_eq!(tiles[0], TileSize::new(120, 135));
        assert_eq!(tiles[3], TileSize::new(144, 180));
    }
}

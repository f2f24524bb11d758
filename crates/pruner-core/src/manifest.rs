//! Tile manifest descriptor.
//!
//! The optimizer's output has two consumers outside this workspace: the
//! slicer that crops the source image into tiles, and the markup generator
//! that embeds a descriptor for viewport-aware client logic. Both agree on
//! the shape defined here: a grid plus a per-tile asset naming scheme.
//!
//! # Serialized Form
//!
//! The descriptor is embedded in markup as a compact JSON object; the grid
//! travels as a single `"columns rows"` attribute string:
//!
//! ```json
//! {"name":"harbor-dusk-pier","tile":"15 7","path":""}
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tile::TileGrid;

/// Descriptor tying a tile grid to the assets sliced from one image.
///
/// Tile assets are named `{name}-{index}.webp` with row-major, 1-based
/// indices: the tile at column `c`, row `r` has index
/// `r * columns + c + 1`.
///
/// # Example
///
/// ```rust
/// use pruner_core::{TileGrid, TileManifest};
///
/// let manifest = TileManifest::new("harbor-dusk-pier", TileGrid::new(15, 7));
/// assert_eq!(manifest.tile_name(1), "harbor-dusk-pier-1.webp");
/// assert_eq!(manifest.tile_name_at(0, 1), "harbor-dusk-pier-16.webp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileManifest {
    /// Base asset name shared by every tile.
    pub name: String,
    /// The tile grid, serialized as a `"columns rows"` attribute.
    #[serde(
        rename = "tile",
        serialize_with = "grid_to_attr",
        deserialize_with = "grid_from_attr"
    )]
    pub grid: TileGrid,
    /// Directory prefix the client prepends to tile names (may be empty).
    #[serde(default)]
    pub path: String,
}

impl TileManifest {
    /// Creates a manifest with an empty path prefix.
    pub fn new(name: impl Into<String>, grid: TileGrid) -> Self {
        Self {
            name: name.into(),
            grid,
            path: String::new(),
        }
    }

    /// Sets the directory prefix.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Row-major, 1-based index of the tile at (`column`, `row`).
    #[inline]
    pub fn tile_index(&self, column: u32, row: u32) -> u64 {
        debug_assert!(column < self.grid.columns && row < self.grid.rows);
        row as u64 * self.grid.columns as u64 + column as u64 + 1
    }

    /// Asset name for the tile with the given 1-based index.
    pub fn tile_name(&self, index: u64) -> String {
        format!("{}-{}.webp", self.name, index)
    }

    /// Asset name for the tile at (`column`, `row`).
    pub fn tile_name_at(&self, column: u32, row: u32) -> String {
        self.tile_name(self.tile_index(column, row))
    }

    /// All tile asset names in slicing order (row-major).
    pub fn tile_names(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.grid.tile_count()).map(|i| self.tile_name(i))
    }
}

fn grid_to_attr<S: Serializer>(grid: &TileGrid, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&format!("{} {}", grid.columns, grid.rows))
}

fn grid_from_attr<'de, D: Deserializer<'de>>(de: D) -> Result<TileGrid, D::Error> {
    let attr = String::deserialize(de)?;
    let mut parts = attr.split_whitespace();
    let grid = match (parts.next(), parts.next(), parts.next()) {
        (Some(c), Some(r), None) => {
            let columns = c.parse().map_err(D::Error::custom)?;
            let rows = r.parse().map_err(D::Error::custom)?;
            TileGrid::new(columns, rows)
        }
        _ => return Err(D::Error::custom(format!("invalid tile attribute: {attr:?}"))),
    };
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let manifest = TileManifest::new("harbor-dusk-pier", TileGrid::new(15, 7));
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(json, r#"{"name":"harbor-dusk-pier","tile":"15 7","path":""}"#);
    }

    #[test]
    fn test_json_roundtrip_and_default_path() {
        let json = r#"{"name":"img","tile":"3 2"}"#;
        let manifest: TileManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.grid, TileGrid::new(3, 2));
        assert_eq!(manifest.path, "");

        let back: TileManifest =
            serde_json::from_str(&serde_json::to_string(&manifest).unwrap()).unwrap();
        assert_eq!(back, manifest);
    }

    #[test]
    fn test_rejects_malformed_tile_attr() {
        for bad in [r#"{"name":"a","tile":"3"}"#, r#"{"name":"a","tile":"3 2 1"}"#] {
            assert!(serde_json::from_str::<TileManifest>(bad).is_err());
        }
    }

    #[test]
    fn test_tile_naming_is_row_major() {
        let manifest = TileManifest::new("img", TileGrid::new(3, 2));
        let names: Vec<_> = manifest.tile_names().collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "img-1.webp");
        assert_eq!(names[5], "img-6.webp");
        // Second row starts after a full first row
        assert_eq!(manifest.tile_name_at(0, 1), "img-4.webp");
        assert_eq!(manifest.tile_name_at(2, 1), "img-6.webp");
    }
}

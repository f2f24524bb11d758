//! Error types for the tile search.

use thiserror::Error;

/// Error type for optimizer operations.
#[derive(Error, Debug)]
pub enum OptError {
    /// No catalog dimension has a divisor at or above the minimum tile size.
    ///
    /// Terminal for the invocation: the caller must widen the viewport
    /// catalog or lower the floor.
    #[error("no tile size satisfies the {min_tile_size}px floor for any catalog dimension")]
    NoTileSize {
        /// The floor that eliminated every candidate.
        min_tile_size: u32,
    },

    /// Source image dimensions must be positive.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Offending width.
        width: u32,
        /// Offending height.
        height: u32,
    },
}

/// Result type for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

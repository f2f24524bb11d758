//! Viewport and image dimension types.
//!
//! Two structurally identical but semantically distinct pairs of pixel
//! dimensions:
//!
//! - [`Viewport`] - what a device *requests*, in CSS pixels
//! - [`ImageDims`] - what an asset *delivers*, in native image pixels
//!
//! Keeping them separate stops a breakpoint variant from being compared
//! against another variant, or a viewport against a viewport, in the waste
//! formulas downstream.
//!
//! # Serialized Form
//!
//! Both types round-trip through serde as a `[width, height]` pair, which is
//! the shape viewport catalogs use on disk:
//!
//! ```yaml
//! priority:
//!   - [1920, 1080]
//!   - [1366, 768]
//! ```

use serde::{Deserialize, Serialize};

/// A target device screen size, in CSS pixels.
///
/// Immutable. Ordering is lexicographic by `(width, height)`, which is the
/// sort key the single-asset selection contract relies on.
///
/// # Invariants
///
/// Both dimensions are expected to be positive; a zero dimension is rejected
/// at the configuration layer rather than here.
///
/// # Example
///
/// ```rust
/// use pruner_core::Viewport;
///
/// let vp = Viewport::new(1366, 768);
/// assert_eq!(vp.area(), 1_049_088);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport with the given dimensions.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the viewport area in pixels, widened to avoid overflow.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<(u32, u32)> for Viewport {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Viewport> for (u32, u32) {
    fn from(v: Viewport) -> Self {
        (v.width, v.height)
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Native pixel dimensions of a source image or a pre-rendered variant.
///
/// Used both for the source image the tile grid is derived from and for the
/// breakpoint variants the single-asset waste model selects among.
///
/// # Example
///
/// ```rust
/// use pruner_core::{ImageDims, Viewport};
///
/// let variant = ImageDims::new(1920, 1080);
/// assert!(variant.covers(Viewport::new(1366, 768)));
/// assert!(!variant.covers(Viewport::new(2560, 1440)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct ImageDims {
    /// Width in native pixels.
    pub width: u32,
    /// Height in native pixels.
    pub height: u32,
}

impl ImageDims {
    /// Creates image dimensions.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the image area in pixels, widened to avoid overflow.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if this asset fully covers the viewport on both axes.
    #[inline]
    pub const fn covers(&self, viewport: Viewport) -> bool {
        self.width >= viewport.width && self.height >= viewport.height
    }
}

impl From<(u32, u32)> for ImageDims {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<ImageDims> for (u32, u32) {
    fn from(d: ImageDims) -> Self {
        (d.width, d.height)
    }
}

impl std::fmt::Display for ImageDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

//! Built-in viewport catalogs and variant sets.
//!
//! The numbers are common device screen sizes; the priority list doubles as
//! the five-breakpoint variant set so the tiled strategy is judged against
//! the same devices the breakpoint strategies are rendered for.

use pruner_core::{ImageDims, Viewport};

/// Minimum usable tile dimension, in 1x pixels.
///
/// Tiles below this bound produce too many requests to be worth the saved
/// pixels; candidate generation drops any divisor under it.
pub const DEFAULT_MIN_TILE_SIZE: u32 = 120;

/// Uncompressed-RGB estimate used to convert pixel waste to byte waste.
pub const DEFAULT_BYTES_PER_PIXEL: u64 = 3;

/// Native dimensions of the reference source image.
pub const DEFAULT_SOURCE_DIMS: ImageDims = ImageDims::new(1920, 1080);

const PRIORITY: [(u32, u32); 5] = [
    (1920, 1080),
    (1366, 768),
    (768, 1024),
    (412, 915),
    (360, 800),
];

const SECONDARY: [(u32, u32); 16] = [
    (1536, 864),
    (390, 844),
    (393, 873),
    (414, 896),
    (1280, 720),
    (360, 780),
    (1440, 900),
    (375, 812),
    (385, 854),
    (428, 926),
    (360, 640),
    (393, 852),
    (430, 932),
    (360, 760),
    (375, 667),
    (393, 851),
];

const THREE_BREAKPOINT: [(u32, u32); 3] = [(1920, 1080), (768, 1024), (360, 800)];

/// The five breakpoints also used for picture/srcset variants.
pub fn priority_viewports() -> Vec<Viewport> {
    PRIORITY.iter().map(|&d| d.into()).collect()
}

/// Sixteen further common device sizes for broader coverage.
pub fn secondary_viewports() -> Vec<Viewport> {
    SECONDARY.iter().map(|&d| d.into()).collect()
}

/// Priority and secondary catalogs concatenated, priority first.
///
/// Despite the naming, every strategy weights the two lists identically;
/// the split only records which sizes the breakpoint variants target.
pub fn common_viewports() -> Vec<Viewport> {
    let mut all = priority_viewports();
    all.extend(secondary_viewports());
    all
}

/// The three-breakpoint variant set.
pub fn three_breakpoint_variants() -> Vec<ImageDims> {
    THREE_BREAKPOINT.iter().map(|&d| d.into()).collect()
}

/// The five-breakpoint variant set (one variant per priority viewport).
pub fn five_breakpoint_variants() -> Vec<ImageDims> {
    PRIORITY.iter().map(|&d| d.into()).collect()
}

/// The single full-resolution benchmark image.
pub const fn benchmark_variant() -> ImageDims {
    DEFAULT_SOURCE_DIMS
}

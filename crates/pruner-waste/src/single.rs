//! Breakpoint (single-asset) delivery waste.
//!
//! The client fetches exactly one pre-rendered variant: the smallest one in
//! the catalog covering its viewport on both axes, with the catalog ordered
//! ascending by `(width, height)`. Waste is the delivered area beyond the
//! viewport; byte waste applies a flat uncompressed-RGB estimate per pixel,
//! a deliberately simple proxy rather than a file-size prediction.

use pruner_core::{ImageDims, Viewport};

/// Waste of the one variant selected for a covered viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetWaste {
    /// The selected variant.
    pub variant: ImageDims,
    /// Delivered pixels beyond the viewport area.
    pub pixel_waste: u64,
    /// `pixel_waste` times the bytes-per-pixel estimate.
    pub byte_waste: u64,
}

/// Outcome of matching one viewport against a variant catalog.
///
/// A viewport no variant covers is a data point, not an error: aggregates
/// exclude it from both waste and area totals but report it, so incomplete
/// catalog coverage is visible instead of silently shrinking the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Some variant covers the viewport.
    Covered(AssetWaste),
    /// No variant covers the viewport on both axes.
    Uncovered,
}

impl Coverage {
    /// Returns `true` if a variant was selected.
    #[inline]
    pub const fn is_covered(&self) -> bool {
        matches!(self, Coverage::Covered(_))
    }

    /// The selected variant's waste, if any.
    #[inline]
    pub fn waste(&self) -> Option<AssetWaste> {
        match self {
            Coverage::Covered(w) => Some(*w),
            Coverage::Uncovered => None,
        }
    }
}

/// Selects the smallest covering variant and computes its waste.
///
/// `variants` may be in any order; selection sorts a copy ascending by
/// `(width, height)` and picks the first entry with both dimensions at
/// least the viewport's.
///
/// # Example
///
/// ```rust
/// use pruner_core::{ImageDims, Viewport};
/// use pruner_waste::{single_asset_waste, Coverage};
///
/// let variants = [ImageDims::new(1920, 1080), ImageDims::new(360, 800)];
/// let got = single_asset_waste(&variants, Viewport::new(1366, 768), 3);
/// match got {
///     Coverage::Covered(w) => {
///         assert_eq!(w.variant, ImageDims::new(1920, 1080));
///         assert_eq!(w.pixel_waste, 1_024_512);
///         assert_eq!(w.byte_waste, 3_073_536);
///     }
///     Coverage::Uncovered => unreachable!(),
/// }
/// ```
pub fn single_asset_waste(
    variants: &[ImageDims],
    viewport: Viewport,
    bytes_per_pixel: u64,
) -> Coverage {
    let mut sorted = variants.to_vec();
    sorted.sort();
    select_sorted(&sorted, viewport, bytes_per_pixel)
}

fn select_sorted(sorted: &[ImageDims], viewport: Viewport, bytes_per_pixel: u64) -> Coverage {
    for &variant in sorted {
        if variant.covers(viewport) {
            let pixel_waste = variant.area() - viewport.area();
            return Coverage::Covered(AssetWaste {
                variant,
                pixel_waste,
                byte_waste: pixel_waste * bytes_per_pixel,
            });
        }
    }
    Coverage::Uncovered
}

/// Aggregate single-asset waste for a variant catalog over a viewport list.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantWaste {
    /// Summed pixel waste over covered viewports.
    pub total_waste: u64,
    /// Summed byte waste over covered viewports.
    pub total_byte_waste: u64,
    /// Summed *delivered* (selected variant) area over covered viewports.
    pub total_area: u64,
    /// Waste as a percentage of the delivered area.
    pub percent: f64,
    /// Number of viewports some variant covered.
    pub covered: usize,
    /// Viewports no variant covered, excluded from every total above.
    pub skipped: Vec<Viewport>,
}

/// Computes [`VariantWaste`] for `variants` over every viewport in
/// `viewports`.
///
/// The percentage denominator is the delivered area, not the viewport area:
/// it answers "what share of the bytes we shipped was never displayed".
pub fn variant_waste_stats(
    variants: &[ImageDims],
    viewports: &[Viewport],
    bytes_per_pixel: u64,
) -> VariantWaste {
    let mut sorted = variants.to_vec();
    sorted.sort();

    let mut stats = VariantWaste {
        total_waste: 0,
        total_byte_waste: 0,
        total_area: 0,
        percent: 0.0,
        covered: 0,
        skipped: Vec::new(),
    };

    for &viewport in viewports {
        match select_sorted(&sorted, viewport, bytes_per_pixel) {
            Coverage::Covered(w) => {
                stats.total_waste += w.pixel_waste;
                stats.total_byte_waste += w.byte_waste;
                stats.total_area += w.variant.area();
                stats.covered += 1;
            }
            Coverage::Uncovered => stats.skipped.push(viewport),
        }
    }

    if stats.total_area > 0 {
        stats.percent = stats.total_waste as f64 / stats.total_area as f64 * 100.0;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BPP: u64 = 3;

    fn three_breakpoint() -> Vec<ImageDims> {
        vec![
            ImageDims::new(1920, 1080),
            ImageDims::new(768, 1024),
            ImageDims::new(360, 800),
        ]
    }

    #[test]
    fn test_selects_smallest_covering_variant() {
        let variants = three_breakpoint();
        let w = single_asset_waste(&variants, Viewport::new(412, 915), BPP)
            .waste()
            .unwrap();
        assert_eq!(w.variant, ImageDims::new(768, 1024));
        assert_eq!(w.pixel_waste, 409_452);

        let exact = single_asset_waste(&variants, Viewport::new(768, 1024), BPP)
            .waste()
            .unwrap();
        assert_eq!(exact.pixel_waste, 0);
        assert_eq!(exact.byte_waste, 0);
    }

    #[test]
    fn test_first_covering_in_sort_order_wins() {
        let variants = three_breakpoint();
        let w = single_asset_waste(&variants, Viewport::new(360, 640), BPP)
            .waste()
            .unwrap();
        assert_eq!(w.variant, ImageDims::new(360, 800));
        assert_eq!(w.pixel_waste, 57_600);
    }

    #[test]
    fn test_uncovered_viewport() {
        let variants = [ImageDims::new(1920, 1080)];
        let got = single_asset_waste(&variants, Viewport::new(2560, 1440), BPP);
        assert_eq!(got, Coverage::Uncovered);
        assert!(got.waste().is_none());
    }

    #[test]
    fn test_stats_exclude_uncovered_from_both_totals() {
        let variants = [ImageDims::new(1920, 1080)];
        let viewports = [Viewport::new(1366, 768), Viewport::new(2560, 1440)];
        let stats = variant_waste_stats(&variants, &viewports, BPP);

        assert_eq!(stats.covered, 1);
        assert_eq!(stats.skipped, vec![Viewport::new(2560, 1440)]);
        assert_eq!(stats.total_waste, 1_024_512);
        assert_eq!(stats.total_byte_waste, 3 * 1_024_512);
        assert_eq!(stats.total_area, 1920 * 1080);
        assert_relative_eq!(stats.percent, 1_024_512.0 / 2_073_600.0 * 100.0);
    }

    #[test]
    fn test_stats_no_variants_covers_nothing() {
        let stats = variant_waste_stats(&[], &[Viewport::new(360, 640)], BPP);
        assert_eq!(stats.covered, 0);
        assert_eq!(stats.skipped.len(), 1);
        assert_eq!(stats.percent, 0.0);
    }
}

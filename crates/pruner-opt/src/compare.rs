//! Delivery-strategy comparison.
//!
//! Lines the breakpoint strategies (fixed variant sets picked per viewport)
//! and the tiled strategy up against one catalog, each reduced to a single
//! waste percentage. The breakpoint percentage is waste over *delivered*
//! area, the tiled percentage waste over *viewport* area; both answer "how
//! much of what reached the device was never shown" for their delivery
//! model.

use pruner_core::{ImageDims, TileSize, Viewport};
use pruner_waste::{tiled_waste_stats, variant_waste_stats};

/// One strategy's aggregate waste over a viewport catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport {
    /// Human-readable strategy label.
    pub label: String,
    /// Aggregate waste percentage.
    pub percent: f64,
    /// Viewports the strategy served.
    pub covered: usize,
    /// Viewports no variant covered (always empty for the tiled strategy).
    pub skipped: Vec<Viewport>,
}

impl StrategyReport {
    /// Scores a breakpoint strategy: each viewport fetches the smallest
    /// covering variant.
    pub fn breakpoints(
        label: impl Into<String>,
        variants: &[ImageDims],
        viewports: &[Viewport],
        bytes_per_pixel: u64,
    ) -> Self {
        let stats = variant_waste_stats(variants, viewports, bytes_per_pixel);
        Self {
            label: label.into(),
            percent: stats.percent,
            covered: stats.covered,
            skipped: stats.skipped,
        }
    }

    /// Scores the tiled strategy: each viewport fetches the whole tiles
    /// intersecting its footprint.
    pub fn tiled(label: impl Into<String>, tile: TileSize, viewports: &[Viewport]) -> Self {
        let stats = tiled_waste_stats(viewports, tile);
        Self {
            label: label.into(),
            percent: stats.percent,
            covered: viewports.len(),
            skipped: Vec::new(),
        }
    }
}

/// An ordered collection of strategy reports over the same catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategyComparison {
    reports: Vec<StrategyReport>,
}

impl StrategyComparison {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a report.
    pub fn push(&mut self, report: StrategyReport) {
        self.reports.push(report);
    }

    /// All reports, in insertion order.
    pub fn reports(&self) -> &[StrategyReport] {
        &self.reports
    }

    /// The report with the lowest waste percentage; first wins ties.
    pub fn best(&self) -> Option<&StrategyReport> {
        self.reports.iter().reduce(|best, r| {
            if r.percent < best.percent { r } else { best }
        })
    }
}

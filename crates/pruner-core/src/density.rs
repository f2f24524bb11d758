//! Device pixel ratio.
//!
//! Three densities are supported, matching the 1x/1.5x/2x variants the
//! delivery pipeline renders. Parsing is strict here; the tolerant
//! parse-with-default lives with the scaling code in `pruner-opt`, where the
//! fallback can be logged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Device pixel ratio multiplier.
///
/// Converts CSS pixels to physical device pixels. The grid cardinality is
/// always fixed at 1x; density only scales the canvas the grid is re-divided
/// over.
///
/// # Example
///
/// ```rust
/// use pruner_core::Density;
///
/// let d: Density = "1.5x".parse().unwrap();
/// assert_eq!(d, Density::X1_5);
/// assert_eq!(d.factor(), 1.5);
/// assert!("3x".parse::<Density>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Density {
    /// 1.0 - standard displays.
    #[default]
    X1,
    /// 1.5 - mid-density displays.
    X1_5,
    /// 2.0 - high-density ("retina") displays.
    X2,
}

impl Density {
    /// Returns the scalar multiplier for this density.
    #[inline]
    pub const fn factor(&self) -> f64 {
        match self {
            Density::X1 => 1.0,
            Density::X1_5 => 1.5,
            Density::X2 => 2.0,
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Density::X1 => "1x",
            Density::X1_5 => "1.5x",
            Density::X2 => "2x",
        };
        f.write_str(s)
    }
}

/// Error returned when a density string is not one of `1x`, `1.5x`, `2x`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid density: {input:?} (expected 1x, 1.5x, or 2x)")]
pub struct ParseDensityError {
    /// The rejected input.
    pub input: String,
}

impl std::str::FromStr for Density {
    type Err = ParseDensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1x" => Ok(Density::X1),
            "1.5x" => Ok(Density::X1_5),
            "2x" => Ok(Density::X2),
            _ => Err(ParseDensityError { input: s.to_owned() }),
        }
    }
}

//! Deviation score to fill color.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{HeatmapError, HeatmapResult};

/// Default palette, blue (low) through yellow to red (high), fully opaque.
pub const DEFAULT_PALETTE: [Rgba8; 9] = [
    Rgba8::opaque(0, 0, 255),
    Rgba8::opaque(102, 102, 255),
    Rgba8::opaque(204, 204, 0),
    Rgba8::opaque(255, 255, 0),
    Rgba8::opaque(255, 204, 0),
    Rgba8::opaque(255, 153, 0),
    Rgba8::opaque(255, 102, 0),
    Rgba8::opaque(255, 51, 0),
    Rgba8::opaque(255, 0, 0),
];

/// Default amount subtracted from a deviation score before binning.
pub const DEFAULT_BASELINE: f64 = 2.0;

/// Binning policy from deviation score to palette color.
///
/// `bucket(score)` is `None` below the baseline, otherwise `floor(score - baseline)` clipped to
/// the last palette entry. The mapping is monotonic non-decreasing in `score`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    baseline: f64,
    palette: Vec<Rgba8>,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ColorScale {
    /// Create a scale with a custom baseline and palette.
    pub fn new(baseline: f64, palette: Vec<Rgba8>) -> HeatmapResult<Self> {
        if !baseline.is_finite() {
            return Err(HeatmapError::config("color baseline must be finite"));
        }
        if palette.is_empty() {
            return Err(HeatmapError::config("palette must contain at least one color"));
        }
        Ok(Self { baseline, palette })
    }

    /// Parse a comma-separated list of hex colors.
    pub fn parse_palette(list: &str) -> HeatmapResult<Vec<Rgba8>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Rgba8::from_hex)
            .collect()
    }

    /// Score offset applied before binning.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Palette colors, lowest bucket first.
    pub fn palette(&self) -> &[Rgba8] {
        &self.palette
    }

    /// Bucket index for `score`, or `None` when the score is below the baseline.
    pub fn bucket(&self, score: f64) -> Option<usize> {
        let normalized = score - self.baseline;
        if normalized.is_nan() || normalized < 0.0 {
            return None;
        }
        let last = self.palette.len() - 1;
        if normalized >= last as f64 {
            return Some(last);
        }
        Some(normalized.floor() as usize)
    }

    /// Fill color for `score`, or `None` when the record should not be drawn.
    pub fn color_for(&self, score: f64) -> Option<Rgba8> {
        self.bucket(score).map(|i| self.palette[i])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/palette.rs"]
mod tests;

//! Sequential color scales for value-coded bars.

use crate::stats::{DistributionCalculator, RescaleError};
use egui::Color32;

/// ColorBrewer YlOrRd, nine classes from light to dark
const YL_OR_RD_ANCHORS: [[u8; 3]; 9] = [
    [255, 255, 204], // #ffffcc
    [255, 237, 160], // #ffeda0
    [254, 217, 118], // #fed976
    [254, 178, 76],  // #feb24c
    [253, 141, 60],  // #fd8d3c
    [252, 78, 42],   // #fc4e2a
    [227, 26, 28],   // #e31a1c
    [189, 0, 38],    // #bd0026
    [128, 0, 38],    // #800026
];

/// A color scale that runs from a light low end to a saturated high end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialColorMap {
    pub name: &'static str,
    anchors: &'static [[u8; 3]],
}

impl SequentialColorMap {
    pub const YL_OR_RD: SequentialColorMap = SequentialColorMap {
        name: "YlOrRd",
        anchors: &YL_OR_RD_ANCHORS,
    };

    /// Color at position `t` in [0, 1], linearly interpolated between anchors.
    /// Out-of-range positions are clamped and NaN maps to the low end.
    pub fn color_at(&self, t: f64) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let last = self.anchors.len() - 1;
        let pos = t * last as f64;
        let lower = (pos.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let frac = pos - lower as f64;

        let lo = self.anchors[lower];
        let hi = self.anchors[upper];
        let channel = |i: usize| (lo[i] as f64 + (hi[i] as f64 - lo[i] as f64) * frac).round() as u8;

        Color32::from_rgb(channel(0), channel(1), channel(2))
    }

    /// Rescale `values` to [0, 1] and map each one onto the scale.
    pub fn colors_for(&self, values: &[f64]) -> Result<Vec<Color32>, RescaleError> {
        let scaled = DistributionCalculator::rescale(values)?;
        Ok(scaled.into_iter().map(|t| self.color_at(t)).collect())
    }
}

impl Default for SequentialColorMap {
    fn default() -> Self {
        Self::YL_OR_RD
    }
}

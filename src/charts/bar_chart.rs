//! Bar Chart Model
//! Turns a distribution and its captions into colored, rounded, labelled bars.

use crate::charts::geometry::{round_bars, BoundingBox, RoundedRect};
use crate::charts::style::ChartStyle;
use crate::stats::{Distribution, RescaleError};
use egui::Color32;
use thiserror::Error;

/// Room above the captions for a two-line caption
const CAPTION_HEADROOM: f64 = 2.5;
/// Room below the bars for the sum labels
const TICK_ROOM: f64 = 1.2;
/// Horizontal margin left and right of the outer bars
const X_MARGIN: f64 = 0.7;

/// One caption word per bar, read left to right.
pub const DEFAULT_CAPTIONS: [&str; 11] = [
    "the",
    "probability",
    "for",
    "each",
    "possible",
    "result",
    "when",
    "rolling",
    "two",
    "dice",
    "simulta\n-neously",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Got {values} values but {captions} captions")]
    LengthMismatch { values: usize, captions: usize },
    #[error("Cannot color bars: {0}")]
    Rescale(#[from] RescaleError),
}

/// A single bar, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Dice sum, also the x position
    pub position: u32,
    pub value: f64,
    pub color: Color32,
    pub bounds: BoundingBox,
    pub shape: RoundedRect,
    pub value_label: String,
    pub caption: String,
}

impl Bar {
    /// Anchor for the value label, centred inside the bar.
    pub fn value_anchor(&self) -> [f64; 2] {
        self.bounds.center()
    }

    /// Anchor for the caption, above the rounded top.
    pub fn caption_anchor(&self, padding: f64) -> [f64; 2] {
        [self.position as f64, self.shape.outer.y_max() + padding]
    }

    /// Anchor for the sum label, below the rounded bottom.
    pub fn tick_anchor(&self, padding: f64) -> [f64; 2] {
        [self.position as f64, self.shape.outer.y_min - padding]
    }
}

/// Chart data for the whole figure.
///
/// Always holds at least two bars: `new` rejects empty and constant
/// distributions because they cannot be colored.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub style: ChartStyle,
}

impl BarChart {
    /// Build one bar per distribution value.
    ///
    /// Captions pair with values by position, so both must have the same length.
    pub fn new<S: AsRef<str>>(
        distribution: &Distribution,
        captions: &[S],
        style: ChartStyle,
    ) -> Result<Self, ChartError> {
        if distribution.len() != captions.len() {
            return Err(ChartError::LengthMismatch {
                values: distribution.len(),
                captions: captions.len(),
            });
        }

        let captions: Vec<&str> = captions.iter().map(AsRef::as_ref).collect();
        let colors = style.color_map.colors_for(distribution.values())?;

        let bounds: Vec<BoundingBox> = distribution
            .iter()
            .map(|(sum, value)| BoundingBox::bar(sum as f64, style.bar_width, value))
            .collect();
        let shapes = round_bars(&bounds, &style.rounding);

        let bars: Vec<Bar> = distribution
            .iter()
            .zip(captions.iter())
            .zip(colors)
            .zip(bounds.into_iter().zip(shapes))
            .map(|((((position, value), caption), color), (bounds, shape))| Bar {
                position,
                value,
                color,
                bounds,
                shape,
                value_label: format!("{}%", value),
                caption: caption.to_string(),
            })
            .collect();

        for bar in &bars {
            tracing::debug!(
                sum = bar.position,
                value = bar.value,
                color = ?bar.color,
                "bar laid out"
            );
        }

        Ok(Self { bars, style })
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Horizontal plot bounds with a margin around the outer bars.
    pub fn x_range(&self) -> (f64, f64) {
        let min = self
            .bars
            .iter()
            .map(|b| b.shape.outer.x_min)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .bars
            .iter()
            .map(|b| b.shape.outer.x_max())
            .fold(f64::NEG_INFINITY, f64::max);

        (min - X_MARGIN, max + X_MARGIN)
    }

    /// Vertical plot bounds that fit rounded shapes, captions and sum labels.
    pub fn y_range(&self) -> (f64, f64) {
        let bottom = self
            .bars
            .iter()
            .map(|b| b.shape.outer.y_min)
            .fold(0.0, f64::min);
        let top = self
            .bars
            .iter()
            .map(|b| b.shape.outer.y_max())
            .fold(f64::NEG_INFINITY, f64::max);

        (
            bottom - self.style.tick_padding - TICK_ROOM,
            top + self.style.caption_padding + CAPTION_HEADROOM,
        )
    }
}

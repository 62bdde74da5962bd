//! Presentation settings for the bar chart.

use crate::charts::colormap::SequentialColorMap;
use crate::charts::geometry::RoundBoxStyle;
use egui::Color32;

/// Look of the rendered chart. Distances are in data units (x = one sum, y = one percent).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Bar width, below 1.0 so neighbouring bars are spaced
    pub bar_width: f64,
    pub color_map: SequentialColorMap,
    pub rounding: RoundBoxStyle,
    /// Bezier samples per rounded corner
    pub corner_segments: usize,
    /// Gap between the top of a bar and its caption
    pub caption_padding: f64,
    /// Gap between the bottom of a bar and its sum label
    pub tick_padding: f64,
    pub value_font_size: f32,
    pub caption_font_size: f32,
    /// Horizontal shift of the second caption pass; the overlap thickens the strokes
    pub caption_bold_offset: f64,
    pub tick_font_size: f32,
    pub label_color: Color32,
    pub background: Color32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 0.6,
            color_map: SequentialColorMap::YL_OR_RD,
            rounding: RoundBoxStyle::default(),
            corner_segments: 8,
            caption_padding: 0.6,
            tick_padding: 0.3,
            value_font_size: 14.0,
            caption_font_size: 20.0,
            caption_bold_offset: 0.008,
            tick_font_size: 14.0,
            label_color: Color32::BLACK,
            background: Color32::WHITE,
        }
    }
}

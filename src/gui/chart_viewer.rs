//! Chart Viewer Widget
//! Central area holding the rounded bar chart.

use crate::charts::{BarChart, ChartPlotter};

/// Inner margin around the plot
const CHART_MARGIN: f32 = 24.0;

/// Shows a single bar chart filling the available space.
pub struct ChartViewer {
    pub chart: BarChart,
}

impl ChartViewer {
    pub fn new(chart: BarChart) -> Self {
        Self { chart }
    }

    /// Draw the chart on its background color.
    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.chart.style.background)
            .inner_margin(CHART_MARGIN)
            .show(ui, |ui| {
                ChartPlotter::draw_bar_chart(ui, &self.chart);
            });
    }
}

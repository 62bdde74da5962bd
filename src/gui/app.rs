//! Dice Chart Main Application
//! Window that shows the distribution chart until it is closed.

use crate::charts::BarChart;
use crate::gui::ChartViewer;

/// Window title
pub const WINDOW_TITLE: &str = "Two Dice Probabilities";
/// Inner window size in logical points, 16:9 like the figure it mirrors
pub const WINDOW_SIZE: [f32; 2] = [1600.0, 900.0];

/// Main application window.
pub struct DiceChartApp {
    chart_viewer: ChartViewer,
    first_frame: bool,
}

impl DiceChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: BarChart) -> Self {
        Self::with_chart(chart)
    }

    /// Build the app without a creation context.
    pub fn with_chart(chart: BarChart) -> Self {
        Self {
            chart_viewer: ChartViewer::new(chart),
            first_frame: true,
        }
    }

    /// Native options sized for eleven bars.
    pub fn native_options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE)
                .with_min_inner_size([800.0, 450.0])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        }
    }

    /// Draw one frame into the given context.
    pub fn ui(&mut self, ctx: &egui::Context) {
        if self.first_frame {
            tracing::info!(bars = self.chart_viewer.chart.bar_count(), "chart window shown");
            self.first_frame = false;
        }

        let background = self.chart_viewer.chart.style.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| {
                self.chart_viewer.show(ui);
            });
    }
}

impl eframe::App for DiceChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

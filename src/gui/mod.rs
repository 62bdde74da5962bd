//! GUI module - Native window and chart area

mod app;
mod chart_viewer;

pub use app::{DiceChartApp, WINDOW_SIZE, WINDOW_TITLE};
pub use chart_viewer::ChartViewer;

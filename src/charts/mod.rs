//! Charts module - Bar chart model, geometry and rendering

mod bar_chart;
mod colormap;
mod geometry;
mod plotter;
mod style;

pub use bar_chart::{Bar, BarChart, ChartError, DEFAULT_CAPTIONS};
pub use colormap::SequentialColorMap;
pub use geometry::{round_bars, BoundingBox, RoundBoxStyle, RoundedRect};
pub use plotter::{ChartPlotter, LabelKind, PlotLabel};
pub use style::ChartStyle;

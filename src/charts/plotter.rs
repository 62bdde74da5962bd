//! Chart Plotter Module
//! Draws the rounded bar chart using egui_plot.

use crate::charts::BarChart;
use egui::{Align2, RichText, Stroke};
use egui_plot::{Plot, PlotPoint, PlotPoints, Polygon, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Value,
    Caption,
    Tick,
}

/// One text item placed in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLabel {
    pub kind: LabelKind,
    pub position: [f64; 2],
    pub text: String,
    pub size: f32,
    pub anchor: Align2,
}

/// Draws a [`BarChart`] into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Every text item of the chart, bar by bar.
    ///
    /// egui has no bold face by default, so each caption is emitted twice with
    /// a small horizontal shift and the overlapping glyphs read as bold.
    pub fn labels(chart: &BarChart) -> Vec<PlotLabel> {
        let style = &chart.style;
        let mut labels = Vec::with_capacity(chart.bars.len() * 4);

        for bar in &chart.bars {
            labels.push(PlotLabel {
                kind: LabelKind::Value,
                position: bar.value_anchor(),
                text: bar.value_label.clone(),
                size: style.value_font_size,
                anchor: Align2::CENTER_CENTER,
            });

            let [cx, cy] = bar.caption_anchor(style.caption_padding);
            for shift in [0.0, style.caption_bold_offset] {
                labels.push(PlotLabel {
                    kind: LabelKind::Caption,
                    position: [cx + shift, cy],
                    text: bar.caption.clone(),
                    size: style.caption_font_size,
                    anchor: Align2::CENTER_BOTTOM,
                });
            }

            labels.push(PlotLabel {
                kind: LabelKind::Tick,
                position: bar.tick_anchor(style.tick_padding),
                text: bar.position.to_string(),
                size: style.tick_font_size,
                anchor: Align2::CENTER_TOP,
            });
        }

        labels
    }

    /// Draw every bar as a filled rounded shape with its labels.
    /// Axes, grid and interaction are turned off. Returns the number of bars drawn.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChart) -> usize {
        let style = &chart.style;
        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range();
        let labels = Self::labels(chart);

        Plot::new("dice_bar_chart")
            .show_axes(false)
            .show_grid(false)
            .show_background(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .show(ui, |plot_ui| {
                let mut drawn = 0;

                // Index order is stacking order.
                for bar in &chart.bars {
                    let outline = bar.shape.outline(style.corner_segments);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(outline))
                            .fill_color(bar.color)
                            .stroke(Stroke::NONE)
                            .name(format!("{}", bar.position)),
                    );
                    drawn += 1;
                }

                // Labels go on top of every bar.
                for label in labels {
                    let [x, y] = label.position;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(label.text)
                                .size(label.size)
                                .color(style.label_color),
                        )
                        .anchor(label.anchor),
                    );
                }

                drawn
            })
            .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartStyle, DEFAULT_CAPTIONS};
    use crate::stats::DistributionCalculator;

    fn default_chart() -> BarChart {
        let dist = DistributionCalculator::get_probabilities();
        BarChart::new(&dist, &DEFAULT_CAPTIONS, ChartStyle::default()).unwrap()
    }

    #[test]
    fn draws_every_bar_headless() {
        let chart = default_chart();

        let ctx = egui::Context::default();
        let mut drawn = 0;
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                drawn = ChartPlotter::draw_bar_chart(ui, &chart);
            });
        });

        assert_eq!(drawn, 11);
        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn captions_are_drawn_heavier_than_value_labels() {
        let chart = default_chart();
        let labels = ChartPlotter::labels(&chart);
        let count = |kind: LabelKind| labels.iter().filter(|l| l.kind == kind).count();

        assert_eq!(count(LabelKind::Value), 11);
        assert_eq!(count(LabelKind::Tick), 11);
        assert_eq!(count(LabelKind::Caption), 22);

        for bar in &chart.bars {
            let passes: Vec<&PlotLabel> = labels
                .iter()
                .filter(|l| l.kind == LabelKind::Caption && l.text == bar.caption)
                .collect();
            assert_eq!(passes.len(), 2, "caption {:?}", bar.caption);
            assert_eq!(passes[0].position[1], passes[1].position[1]);
            let shift = passes[1].position[0] - passes[0].position[0];
            assert!((shift - chart.style.caption_bold_offset).abs() < 1e-12);
            assert!(shift > 0.0);
        }

        let value = labels.iter().find(|l| l.kind == LabelKind::Value).unwrap();
        let caption = labels.iter().find(|l| l.kind == LabelKind::Caption).unwrap();
        assert!(caption.size > value.size);
    }

    #[test]
    fn labels_follow_bar_order() {
        let chart = default_chart();
        let ticks: Vec<String> = ChartPlotter::labels(&chart)
            .into_iter()
            .filter(|l| l.kind == LabelKind::Tick)
            .map(|l| l.text)
            .collect();
        let expected: Vec<String> = (2..=12).map(|s: u32| s.to_string()).collect();
        assert_eq!(ticks, expected);
    }
}

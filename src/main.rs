//! Dice Chart - Two-dice sum probabilities as a rounded bar chart
//!
//! Computes the distribution of the sum of two fair dice and shows it in a window.

use anyhow::Context;
use dice_chart::charts::{BarChart, ChartStyle, DEFAULT_CAPTIONS};
use dice_chart::gui::{DiceChartApp, WINDOW_TITLE};
use dice_chart::stats::DistributionCalculator;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();

    let distribution = DistributionCalculator::get_probabilities();
    tracing::info!(
        sums = distribution.len(),
        total = distribution.total(),
        "computed two-dice distribution"
    );

    let chart = BarChart::new(&distribution, &DEFAULT_CAPTIONS, ChartStyle::default())
        .context("failed to build bar chart")?;

    // Blocks until the window is closed
    eframe::run_native(
        WINDOW_TITLE,
        DiceChartApp::native_options(),
        Box::new(|cc| Ok(Box::new(DiceChartApp::new(cc, chart)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open chart window: {e}"))?;

    tracing::info!("chart window closed");
    Ok(())
}

/// Console logging, `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

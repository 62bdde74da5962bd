//! Dice Chart - probability of every two-dice sum, drawn as a rounded bar chart.
//!
//! - [`stats`]: outcome table, sum distribution and min-max rescaling
//! - [`charts`]: bar model, color scale, rounded-corner geometry and plotting
//! - [`gui`]: the native window

pub mod charts;
pub mod gui;
pub mod stats;

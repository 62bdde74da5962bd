//! Statistics module - Dice sum distribution

mod calculator;

pub use calculator::{
    Distribution, DistributionCalculator, RescaleError, DIE_FACES, MAX_SUM, MIN_SUM,
    OUTCOME_COUNT,
};

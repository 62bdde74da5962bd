//! Distribution Calculator Module
//! Enumerates two-dice outcomes and converts sum counts to percentages.

use std::collections::BTreeMap;
use thiserror::Error;

/// Faces on a single die
pub const DIE_FACES: u32 = 6;
/// Number of equally likely ordered outcomes for two dice
pub const OUTCOME_COUNT: u32 = DIE_FACES * DIE_FACES;
/// Smallest possible sum
pub const MIN_SUM: u32 = 2;
/// Largest possible sum
pub const MAX_SUM: u32 = 2 * DIE_FACES;

/// Decimal places kept in every percentage
const PERCENT_DECIMALS: i32 = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RescaleError {
    #[error("Cannot rescale an empty sequence")]
    Empty,
    #[error("Cannot rescale a constant sequence (every value is {value})")]
    ZeroRange { value: f64 },
}

/// Probability of every two-dice sum, in percent, ordered by sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    values: Vec<f64>,
}

impl Distribution {
    /// Wrap precomputed percentages, the first one belonging to sum 2.
    pub fn from_percentages(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Percentages ordered from sum 2 to sum 12.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Percentage for a given sum, `None` outside 2..=12.
    pub fn get(&self, sum: u32) -> Option<f64> {
        if sum < MIN_SUM {
            return None;
        }
        self.values.get((sum - MIN_SUM) as usize).copied()
    }

    /// Iterate `(sum, percentage)` pairs in ascending order of sum.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (MIN_SUM..).zip(self.values.iter().copied())
    }

    /// Sum of all percentages (100 up to rounding).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Most likely sum and its percentage.
    pub fn peak(&self) -> Option<(u32, f64)> {
        self.iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Handles the dice probability computations.
pub struct DistributionCalculator;

impl DistributionCalculator {
    /// Full table of sums, entry `[i][j]` is `(i + 1) + (j + 1)`.
    pub fn sum_table() -> [[u32; DIE_FACES as usize]; DIE_FACES as usize] {
        let mut table = [[0; DIE_FACES as usize]; DIE_FACES as usize];
        for (i, row) in table.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (i as u32 + 1) + (j as u32 + 1);
            }
        }
        table
    }

    /// Count how often each sum occurs in the table.
    pub fn count_sums(
        table: &[[u32; DIE_FACES as usize]; DIE_FACES as usize],
    ) -> BTreeMap<u32, usize> {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for &sum in table.iter().flatten() {
            *counts.entry(sum).or_default() += 1;
        }
        counts
    }

    /// Probability of every sum 2..=12 in percent, rounded to two decimals.
    pub fn get_probabilities() -> Distribution {
        let counts = Self::count_sums(&Self::sum_table());

        let values = (MIN_SUM..=MAX_SUM)
            .map(|sum| {
                let count = counts.get(&sum).copied().unwrap_or(0);
                Self::round_to(count as f64 / OUTCOME_COUNT as f64 * 100.0, PERCENT_DECIMALS)
            })
            .collect();

        Distribution { values }
    }

    /// Linearly rescale every value to [0, 1] using `(x - min) / (max - min)`.
    ///
    /// A constant input has no range to divide by and is rejected, as is an
    /// empty one.
    pub fn rescale(values: &[f64]) -> Result<Vec<f64>, RescaleError> {
        if values.is_empty() {
            return Err(RescaleError::Empty);
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range == 0.0 {
            return Err(RescaleError::ZeroRange { value: min });
        }

        Ok(values.iter().map(|x| (x - min) / range).collect())
    }

    fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }
}

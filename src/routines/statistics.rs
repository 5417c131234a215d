//! Per-day aggregate statistics across all patients
//!
//! Each function reduces one column (day) of a [Matrix] at a time. A day with any missing
//! reading has no defined statistic and yields `None`, as does every day of a matrix without patients.
//! A reduction that comes out as NaN, such as the spread of a day holding an infinite reading,
//! is reported as `None` as well.

use crate::structs::matrix::Matrix;
use ndarray::{Array1, ArrayView1};
use ndarray_stats::QuantileExt;
use serde_derive::{Deserialize, Serialize};

/// Arithmetic mean of each day across patients
pub fn daily_mean(matrix: &Matrix) -> Array1<Option<f64>> {
    reduce_days(matrix, |day| day.mean())
}

/// Highest reading of each day across patients
pub fn daily_max(matrix: &Matrix) -> Array1<Option<f64>> {
    reduce_days(matrix, |day| day.max().ok().copied())
}

/// Lowest reading of each day across patients
pub fn daily_min(matrix: &Matrix) -> Array1<Option<f64>> {
    reduce_days(matrix, |day| day.min().ok().copied())
}

/// Population standard deviation of each day across patients (no Bessel correction)
pub fn daily_std(matrix: &Matrix) -> Array1<Option<f64>> {
    reduce_days(matrix, |day| (!day.is_empty()).then(|| day.std(0.0)))
}

fn reduce_days<F>(matrix: &Matrix, reduce: F) -> Array1<Option<f64>>
where
    F: Fn(&Array1<f64>) -> Option<f64>,
{
    matrix
        .days()
        .map(|day| {
            complete_day(day)
                .and_then(|values| reduce(&values))
                .filter(|statistic| !statistic.is_nan())
        })
        .collect()
}

/// The readings of a day, or `None` if any of them is missing
fn complete_day(day: ArrayView1<'_, Option<f64>>) -> Option<Array1<f64>> {
    day.iter()
        .copied()
        .collect::<Option<Vec<f64>>>()
        .map(Array1::from)
}

/// The four daily statistics of a [Matrix], as handed to reporting and plotting code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub mean: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
    pub min: Vec<Option<f64>>,
    pub std: Vec<Option<f64>>,
}

impl DailySummary {
    pub fn new(matrix: &Matrix) -> Self {
        DailySummary {
            mean: daily_mean(matrix).to_vec(),
            max: daily_max(matrix).to_vec(),
            min: daily_min(matrix).to_vec(),
            std: daily_std(matrix).to_vec(),
        }
    }

    /// Number of days covered by the summary
    pub fn ndays(&self) -> usize {
        self.mean.len()
    }
}

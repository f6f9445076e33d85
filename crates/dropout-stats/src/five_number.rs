//! Five-number summaries (minimum, quartiles, maximum) for boxplots.

use serde::Serialize;

use crate::percentiles::{compute_percentile, sorted_copy};

/// Five-number summary of a dataset: minimum, quartiles and maximum.
///
/// These are the inputs of a boxplot. The quartiles use linearly
/// interpolated percentiles, so `min <= q1 <= median <= q3 <= max` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Computes the summary of unsorted values.
    ///
    /// Returns `None` for an empty input, since minimum and maximum are
    /// undefined there.
    ///
    /// # Examples
    ///
    /// ```
    /// use dropout_stats::five_number::FiveNumberSummary;
    ///
    /// let summary = FiveNumberSummary::new(&[2.0, 1.5]).unwrap();
    /// assert_eq!(summary.min, 1.5);
    /// assert_eq!(summary.q1, 1.625);
    /// assert_eq!(summary.median, 1.75);
    /// assert_eq!(summary.q3, 1.875);
    /// assert_eq!(summary.max, 2.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        Self::from_sorted(&sorted_copy(values))
    }

    /// Computes the summary of pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        Some(Self {
            min: *sorted_values.first()?,
            q1: compute_percentile(sorted_values, 25.0),
            median: compute_percentile(sorted_values, 50.0),
            q3: compute_percentile(sorted_values, 75.0),
            max: *sorted_values.last()?,
        })
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

use serde::Serialize;

use crate::percentiles::{self, compute_percentile};

/// Descriptive statistics summarizing a dataset.
///
/// The layout follows the familiar `count / mean / std / min / 25% / 50% /
/// 75% / max` table. Quartiles use linear interpolation, see
/// [`compute_percentile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sample standard deviation (`n - 1` denominator).
    ///
    /// Zero for a single observation.
    pub std_dev: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The first quartile.
    pub p25: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The third quartile.
    pub p75: f64,
    /// The maximum value in the dataset.
    pub max: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use dropout_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        Self::from_sorted(&percentiles::sorted_copy(&values))
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().copied().sum::<f64>() / n;
        let std_dev = if count > 1 {
            let squared = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (squared / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            p25: compute_percentile(sorted_values, 25.0),
            median: compute_percentile(sorted_values, 50.0),
            p75: compute_percentile(sorted_values, 75.0),
            max,
        })
    }
}

/// Arithmetic mean with left-to-right accumulation.
///
/// Returns `None` for an empty input.
///
/// # Examples
///
/// ```
/// # use dropout_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(std::iter::empty()), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new([]).is_none());
        assert!(mean([]).is_none());
    }

    #[test]
    fn test_sample_std_dev() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        // sum of squared deviations is 32, sample variance 32 / 7
        assert!((stats.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
        assert!((stats.mean - 5.0).abs() < f64::EPSILON);
        assert!((stats.p25 - 4.0).abs() < f64::EPSILON);
        assert!((stats.median - 4.5).abs() < f64::EPSILON);
        assert!((stats.p75 - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let stats = DescriptiveStats::new([3.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert!(stats.std_dev.abs() < f64::EPSILON);
        assert!((stats.min - stats.max).abs() < f64::EPSILON);
    }
}

//! Linear-interpolation percentiles.

/// Computes a percentile of unsorted values.
///
/// Sorts a copy of the input and delegates to [`compute_percentile`].
/// Returns `0.0` for an empty input.
///
/// # Examples
///
/// ```
/// use dropout_stats::percentiles::percentile;
///
/// assert_eq!(percentile(&[2.0, 1.5], 25.0), 1.625);
/// assert_eq!(percentile(&[], 50.0), 0.0);
/// ```
#[must_use]
pub fn percentile(values: &[f64], percentile: f64) -> f64 {
    compute_percentile(&sorted_copy(values), percentile)
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two closest ranks (the R-7 method,
/// also the `numpy` default). The position of the `p`-th percentile is
/// `p / 100 * (n - 1)`; the result is the weighted mean of the elements at the
/// floor and ceiling of that position.
///
/// Returns `0.0` if the input is empty.
///
/// # Examples
///
/// ```
/// use dropout_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }
    let last = sorted_values.len() - 1;
    let position = (percentile / 100.0 * last as f64).clamp(0.0, last as f64);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position.fract();
    sorted_values[lower] * (1.0 - weight) + sorted_values[upper] * weight
}

pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

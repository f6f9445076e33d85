//! Pearson product-moment correlation.

/// Computes Pearson's correlation coefficient of two paired series.
///
/// Uses the single-pass sum formulation
/// `(n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)(n·Σy² − (Σy)²))`
/// with left-to-right accumulation, so identical inputs give identical bits.
///
/// Returns `0.0` when either series is constant or the input is empty.
/// Constancy is checked on the values themselves, because the sum formulation
/// leaves a tiny nonzero variance for constants such as `0.1`. The result is
/// clamped to `[-1, 1]` to absorb rounding.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
///
/// # Examples
///
/// ```
/// use dropout_stats::correlation::pearson_correlation;
///
/// let x = [1.0, 2.0, 3.0];
/// assert!((pearson_correlation(&x, &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-12);
/// assert!((pearson_correlation(&x, &[3.0, 2.0, 1.0]) + 1.0).abs() < 1e-12);
/// assert_eq!(pearson_correlation(&x, &[0.0, 0.0, 0.0]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "paired series must have the same length");
    if x.is_empty() || is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 || denominator.is_nan() {
        return 0.0;
    }
    (numerator / denominator).clamp(-1.0, 1.0)
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0].total_cmp(&w[1]).is_eq())
}

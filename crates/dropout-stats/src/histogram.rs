use std::ops::RangeInclusive;

/// Equal-width bins spanning the observed range of a dataset.
///
/// Bin `i` covers `[min + i * step, min + (i + 1) * step]` where
/// `step = (max - min) / num_bins`. Bounds are computed by multiplying the
/// step, not by re-deriving the last edge from `max`, so the final upper edge
/// can differ from `max` by floating-point rounding.
///
/// # Boundary Handling
///
/// Every bin is **closed on both ends**. A value lying exactly on an interior
/// edge therefore belongs to two adjacent bins, and the counts produced by
/// [`FixedWidthBins::count_inclusive`] can sum to more than the number of
/// values. Consumers of the dashboard histograms rely on these counts as-is.
///
/// A constant dataset has `step == 0`; all bins collapse to `[min, min]` and
/// every value is counted in every bin.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWidthBins {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
    /// Width of each bin.
    pub step: f64,
    /// Closed bin ranges in ascending order.
    pub bins: Vec<RangeInclusive<f64>>,
}

impl FixedWidthBins {
    /// Builds `num_bins` bins spanning the range of `values`.
    ///
    /// Returns `None` if `values` is empty or `num_bins` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dropout_stats::histogram::FixedWidthBins;
    ///
    /// let bins = FixedWidthBins::from_values([0.0, 10.0, 4.0], 10).unwrap();
    /// assert_eq!(bins.bins.len(), 10);
    /// assert_eq!(bins.step, 1.0);
    /// assert_eq!(*bins.bins[4].start(), 4.0);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I, num_bins: usize) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        Self::with_bounds(min, max, num_bins)
    }

    /// Builds `num_bins` bins between explicit bounds.
    ///
    /// Returns `None` if `num_bins` is zero.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn with_bounds(min: f64, max: f64, num_bins: usize) -> Option<Self> {
        if num_bins == 0 {
            return None;
        }
        let step = (max - min) / num_bins as f64;
        let bins = (0..num_bins)
            .map(|i| {
                let start = min + step * i as f64;
                let end = min + step * (i + 1) as f64;
                start..=end
            })
            .collect();
        Some(Self {
            min,
            max,
            step,
            bins,
        })
    }

    /// Counts the values contained in each bin, bounds inclusive.
    ///
    /// Values outside `[min, max]` are not counted anywhere.
    #[must_use]
    pub fn count_inclusive(&self, values: &[f64]) -> Vec<usize> {
        self.bins
            .iter()
            .map(|bin| values.iter().filter(|&&v| bin.contains(&v)).count())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_or_zero_bins() {
        assert!(FixedWidthBins::from_values([], 10).is_none());
        assert!(FixedWidthBins::from_values([1.0, 2.0], 0).is_none());
    }

    #[test]
    fn test_bins_are_contiguous() {
        let bins = FixedWidthBins::from_values([1.5, 3.5, 2.0], 10).unwrap();
        assert!((bins.min - 1.5).abs() < f64::EPSILON);
        assert!((bins.max - 3.5).abs() < f64::EPSILON);
        assert!((bins.step - 0.2).abs() < 1e-12);
        for pair in bins.bins.windows(2) {
            assert!((pair[0].end() - pair[1].start()).abs() < 1e-12);
        }
        assert!((bins.bins[9].end() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_interior_boundary_counted_twice() {
        // step is exactly 1.0, so 4.0 is the shared edge of bins 3 and 4
        let values = [0.0, 4.0, 10.0];
        let bins = FixedWidthBins::from_values(values, 10).unwrap();
        let counts = bins.count_inclusive(&values);
        assert_eq!(counts[3], 1);
        assert_eq!(counts[4], 1);
        assert_eq!(counts.iter().filter(|&&c| c > 0).count(), 4);
        assert_eq!(counts.iter().sum::<usize>(), values.len() + 1);
    }

    #[test]
    fn test_extremes_are_counted() {
        let values = [0.0, 10.0];
        let bins = FixedWidthBins::from_values(values, 10).unwrap();
        let counts = bins.count_inclusive(&values);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn test_constant_values_fill_every_bin() {
        let values = [2.0, 2.0];
        let bins = FixedWidthBins::from_values(values, 10).unwrap();
        assert!(bins.step.abs() < f64::EPSILON);
        assert!(bins.count_inclusive(&values).iter().all(|&c| c == 2));
    }
}

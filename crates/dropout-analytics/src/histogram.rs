//! Per-outcome histograms over fixed-width bins.
//!
//! Bins span the observed range of the **whole** record set and are then
//! filled separately for each outcome, so the two series share one x axis.
//!
//! # Boundary Quirk
//!
//! Bins are closed on both ends (see [`FixedWidthBins`]). A record whose value
//! lies exactly on an interior edge is counted in both adjacent bins, so the
//! per-outcome counts may add up to more than the partition size. Dashboards
//! built on this output already account for it; it is kept as is.

use dropout_stats::{fixed, histogram::FixedWidthBins};
use serde::Serialize;

use crate::{
    error::AnalyticsError,
    record::{Feature, Outcome, RecordSet},
};

/// One bin with a count per outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeHistogramBin {
    /// Display label, bounds with one decimal digit, e.g. `"1.5-1.7"`.
    pub range: String,
    pub min: f64,
    pub max: f64,
    pub non_dropout: usize,
    pub dropout: usize,
}

/// Histogram of one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureHistogram {
    pub feature: Feature,
    pub bins: Vec<OutcomeHistogramBin>,
}

/// Builds `num_bins` equal-width bins per feature and counts each outcome.
///
/// Fails on an empty record set (no range to span) or when `num_bins` is zero.
pub fn histograms(
    records: &RecordSet,
    features: &[Feature],
    num_bins: usize,
) -> Result<Vec<FeatureHistogram>, AnalyticsError> {
    if num_bins == 0 {
        return Err(AnalyticsError::InvalidHistogramBins);
    }
    let partition = records.partition();
    features
        .iter()
        .map(|&feature| {
            let bins = FixedWidthBins::from_values(records.values(feature), num_bins)
                .ok_or(AnalyticsError::EmptyRecordSet)?;
            let non_dropout = bins.count_inclusive(&partition.values(Outcome::Retained, feature));
            let dropout = bins.count_inclusive(&partition.values(Outcome::Dropout, feature));
            let bins = bins
                .bins
                .iter()
                .zip(non_dropout.into_iter().zip(dropout))
                .map(|(range, (non_dropout, dropout))| OutcomeHistogramBin {
                    range: format!(
                        "{}-{}",
                        fixed::to_fixed(*range.start(), 1),
                        fixed::to_fixed(*range.end(), 1)
                    ),
                    min: *range.start(),
                    max: *range.end(),
                    non_dropout,
                    dropout,
                })
                .collect();
            Ok(FeatureHistogram { feature, bins })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DEFAULT_HISTOGRAM_BINS,
        record::tests::{scenario, student},
    };

    #[test]
    fn test_ten_bins_over_full_range() {
        let result = histograms(&scenario(), &[Feature::Gpa], DEFAULT_HISTOGRAM_BINS).unwrap();
        let bins = &result[0].bins;
        assert_eq!(bins.len(), 10);
        assert!((bins[0].min - 1.5).abs() < f64::EPSILON);
        assert!((bins[9].max - 3.5).abs() < 1e-9);
        assert_eq!(bins[0].range, "1.5-1.7");
        // gpa 1.5 (dropout) in the first bin, 3.5 (retained) in the last
        assert_eq!(bins[0].dropout, 1);
        assert_eq!(bins[9].non_dropout, 1);
    }

    #[test]
    fn test_range_labels_round_ties_up() {
        // step 0.25 puts edges at 2.25 and 2.75
        let records =
            RecordSet::new(vec![student(2.0, 70.0, 0, 0), student(3.0, 80.0, 0, 1)]).unwrap();
        let result = histograms(&records, &[Feature::Gpa], 4).unwrap();
        let labels = result[0]
            .bins
            .iter()
            .map(|b| b.range.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["2.0-2.3", "2.3-2.5", "2.5-2.8", "2.8-3.0"]);
    }

    #[test]
    fn test_outcomes_counted_separately() {
        let result =
            histograms(&scenario(), &[Feature::Attendance], DEFAULT_HISTOGRAM_BINS).unwrap();
        let dropout = result[0].bins.iter().map(|b| b.dropout).sum::<usize>();
        let non_dropout = result[0].bins.iter().map(|b| b.non_dropout).sum::<usize>();
        // attendance 50..90 has step 4; 60 is not on an edge
        assert_eq!(dropout, 2);
        assert_eq!(non_dropout, 1);
    }

    #[test]
    fn test_interior_boundary_counted_in_two_bins() {
        // range 0..10 gives step 1.0, so attendance 4.0 sits on the edge of bins 3 and 4
        let records = RecordSet::new(vec![
            student(2.0, 0.0, 0, 0),
            student(2.0, 4.0, 0, 1),
            student(2.0, 10.0, 0, 0),
        ])
        .unwrap();
        let result = histograms(&records, &[Feature::Attendance], 10).unwrap();
        let bins = &result[0].bins;
        assert_eq!(bins[3].dropout, 1);
        assert_eq!(bins[4].dropout, 1);
        let dropout_total = bins.iter().map(|b| b.dropout).sum::<usize>();
        assert_eq!(dropout_total, 2);
        let total = bins.iter().map(|b| b.dropout + b.non_dropout).sum::<usize>();
        assert_eq!(total, records.len() + 1);
    }

    #[test]
    fn test_empty_record_set() {
        assert_eq!(
            histograms(&RecordSet::default(), &[Feature::Gpa], 10),
            Err(AnalyticsError::EmptyRecordSet)
        );
        assert_eq!(
            histograms(&scenario(), &[Feature::Gpa], 0),
            Err(AnalyticsError::InvalidHistogramBins)
        );
    }
}

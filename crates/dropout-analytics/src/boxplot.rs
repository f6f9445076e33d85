//! Five-number summaries split by outcome.

use dropout_stats::five_number::FiveNumberSummary;
use serde::Serialize;

use crate::record::{Feature, Outcome, RecordSet};

/// Boxplot inputs of one feature for both outcomes.
///
/// A side is `None` when no record has that outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxplotSummary {
    pub feature: Feature,
    pub non_dropout: Option<FiveNumberSummary>,
    pub dropout: Option<FiveNumberSummary>,
}

/// Computes per-outcome five-number summaries of each feature.
///
/// Records are partitioned by outcome first; the two summaries never mix
/// values from different outcomes.
#[must_use]
pub fn boxplot_summaries(records: &RecordSet, features: &[Feature]) -> Vec<BoxplotSummary> {
    let partition = records.partition();
    features
        .iter()
        .map(|&feature| BoxplotSummary {
            feature,
            non_dropout: FiveNumberSummary::new(&partition.values(Outcome::Retained, feature)),
            dropout: FiveNumberSummary::new(&partition.values(Outcome::Dropout, feature)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::{scenario, student};

    #[test]
    fn test_scenario_gpa_dropout_summary() {
        let summaries = boxplot_summaries(&scenario(), &[Feature::Gpa]);
        let dropout = summaries[0].dropout.unwrap();
        assert_eq!(
            dropout,
            FiveNumberSummary {
                min: 1.5,
                q1: 1.625,
                median: 1.75,
                q3: 1.875,
                max: 2.0,
            }
        );
        let retained = summaries[0].non_dropout.unwrap();
        assert!((retained.min - 3.5).abs() < f64::EPSILON);
        assert!((retained.max - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_outcome_side() {
        let records = RecordSet::new(vec![student(2.0, 70.0, 1, 1)]).unwrap();
        let summaries = boxplot_summaries(&records, &[Feature::Attendance]);
        assert!(summaries[0].non_dropout.is_none());
        assert!(summaries[0].dropout.is_some());
    }

    #[test]
    fn test_summaries_are_monotonic() {
        let summaries = boxplot_summaries(&scenario(), &Feature::ALL);
        for summary in summaries.iter().flat_map(|s| [s.dropout, s.non_dropout]).flatten() {
            assert!(summary.min <= summary.q1);
            assert!(summary.q1 <= summary.median);
            assert!(summary.median <= summary.q3);
            assert!(summary.q3 <= summary.max);
        }
    }
}

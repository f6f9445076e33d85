//! Per-feature descriptive statistics.

use dropout_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{
    error::AnalyticsError,
    record::{Feature, RecordSet},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDescription {
    pub feature: Feature,
    #[serde(flatten)]
    pub stats: DescriptiveStats,
}

/// Describes each feature in request order.
///
/// Fails on an empty record set.
pub fn describe(
    records: &RecordSet,
    features: &[Feature],
) -> Result<Vec<FeatureDescription>, AnalyticsError> {
    features
        .iter()
        .map(|&feature| {
            let stats = DescriptiveStats::new(records.values(feature))
                .ok_or(AnalyticsError::EmptyRecordSet)?;
            Ok(FeatureDescription { feature, stats })
        })
        .collect()
}

/// Describes the dropout label as a `0.0` / `1.0` column.
///
/// The mean is the dropout share.
pub fn describe_outcome(records: &RecordSet) -> Result<DescriptiveStats, AnalyticsError> {
    DescriptiveStats::new(records.outcome_values()).ok_or(AnalyticsError::EmptyRecordSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::scenario;

    #[test]
    fn test_describe_scenario() {
        let descriptions =
            describe(&scenario(), &[Feature::Gpa, Feature::FailedCourses]).unwrap();
        assert_eq!(descriptions.len(), 2);

        let gpa = &descriptions[0].stats;
        assert_eq!(gpa.count, 3);
        assert!((gpa.mean - 7.0 / 3.0).abs() < 1e-12);
        assert!((gpa.min - 1.5).abs() < f64::EPSILON);
        assert!((gpa.median - 2.0).abs() < f64::EPSILON);
        assert!((gpa.max - 3.5).abs() < f64::EPSILON);

        assert_eq!(descriptions[1].feature, Feature::FailedCourses);
    }

    #[test]
    fn test_describe_flattens_stats() {
        let descriptions = describe(&scenario(), &[Feature::Attendance]).unwrap();
        let json = serde_json::to_value(&descriptions[0]).unwrap();
        assert_eq!(json["feature"], "attendance");
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn test_describe_outcome() {
        let stats = describe_outcome(&scenario()).unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 2.0 / 3.0).abs() < 1e-12);
        assert!(stats.min.abs() < f64::EPSILON);
        assert!((stats.median - 1.0).abs() < f64::EPSILON);
        assert!((stats.max - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            describe_outcome(&RecordSet::default()),
            Err(AnalyticsError::EmptyRecordSet)
        );
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(
            describe(&RecordSet::default(), &[Feature::Gpa]),
            Err(AnalyticsError::EmptyRecordSet)
        );
        assert_eq!(describe(&RecordSet::default(), &[]), Ok(vec![]));
    }
}

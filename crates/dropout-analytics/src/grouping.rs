//! Group-wise aggregates by an ordinal key.

use std::collections::BTreeMap;

use dropout_stats::descriptive;
use serde::Serialize;

use crate::{
    error::AnalyticsError,
    record::{Feature, FeatureKind, RecordSet, StudentRecord},
    summary::FeatureMean,
};

/// Aggregates of one group of records sharing a key value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: u32,
    /// Number of records in the group.
    pub count: usize,
    /// Means of the averaged features, in request order.
    pub averages: [FeatureMean; 2],
    /// Dropout percentage within the group.
    pub dropout_rate: f64,
}

/// All groups of a record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub key: Feature,
    /// Groups in ascending key order.
    pub groups: Vec<GroupSummary>,
}

/// Groups records by exact value of `key` and aggregates each group.
///
/// Every record belongs to exactly one group, so group counts sum to the
/// number of records. Only key values that occur produce a group.
pub fn group_by_key(
    records: &RecordSet,
    key: Feature,
    averages: [Feature; 2],
) -> Result<GroupedSummary, AnalyticsError> {
    if key.kind() != FeatureKind::Discrete {
        return Err(AnalyticsError::NotDiscrete { feature: key });
    }

    let mut groups = BTreeMap::<u32, Vec<&StudentRecord>>::new();
    for record in records.iter() {
        let value = record
            .count(key)
            .ok_or(AnalyticsError::NotDiscrete { feature: key })?;
        groups.entry(value).or_default().push(record);
    }

    let groups = groups
        .into_iter()
        .map(|(value, members)| summarize_group(value, &members, averages))
        .collect();
    Ok(GroupedSummary { key, groups })
}

#[expect(clippy::cast_precision_loss)]
fn summarize_group(key: u32, members: &[&StudentRecord], averages: [Feature; 2]) -> GroupSummary {
    let average = |feature: Feature| FeatureMean {
        feature,
        // groups are never empty
        mean: descriptive::mean(members.iter().map(|r| r.value(feature))).unwrap_or(0.0),
    };
    let dropouts = members.iter().filter(|r| r.dropout.is_dropout()).count();
    GroupSummary {
        key,
        count: members.len(),
        averages: averages.map(average),
        dropout_rate: dropouts as f64 / members.len() as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Outcome, StudentRecord};

    fn enrolled(semester: u32, gpa: f64, attendance: f64, dropout: Outcome) -> StudentRecord {
        StudentRecord {
            semester,
            gpa,
            attendance,
            dropout,
            ..StudentRecord::default()
        }
    }

    fn records() -> RecordSet {
        RecordSet::new(vec![
            enrolled(3, 2.0, 70.0, Outcome::Dropout),
            enrolled(1, 3.0, 90.0, Outcome::Retained),
            enrolled(3, 3.0, 80.0, Outcome::Retained),
            enrolled(7, 1.5, 55.0, Outcome::Dropout),
            enrolled(1, 3.5, 95.0, Outcome::Retained),
        ])
        .unwrap()
    }

    #[test]
    fn test_groups_sorted_and_complete() {
        let records = records();
        let grouped =
            group_by_key(&records, Feature::Semester, [Feature::Gpa, Feature::Attendance])
                .unwrap();
        let keys = grouped.groups.iter().map(|g| g.key).collect::<Vec<_>>();
        assert_eq!(keys, vec![1, 3, 7]);
        let total = grouped.groups.iter().map(|g| g.count).sum::<usize>();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_group_aggregates() {
        let grouped =
            group_by_key(&records(), Feature::Semester, [Feature::Gpa, Feature::Attendance])
                .unwrap();
        let third = &grouped.groups[1];
        assert_eq!(third.count, 2);
        assert_eq!(third.averages[0].feature, Feature::Gpa);
        assert!((third.averages[0].mean - 2.5).abs() < 1e-12);
        assert!((third.averages[1].mean - 75.0).abs() < 1e-12);
        assert!((third.dropout_rate - 50.0).abs() < 1e-12);
        assert!(grouped.groups[0].dropout_rate.abs() < f64::EPSILON);
        assert!((grouped.groups[2].dropout_rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_continuous_key_is_rejected() {
        let err = group_by_key(&records(), Feature::Gpa, [Feature::Gpa, Feature::Attendance])
            .unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::NotDiscrete {
                feature: Feature::Gpa
            }
        );
    }

    #[test]
    fn test_empty_record_set_has_no_groups() {
        let grouped = group_by_key(
            &RecordSet::default(),
            Feature::Semester,
            [Feature::Gpa, Feature::Attendance],
        )
        .unwrap();
        assert!(grouped.groups.is_empty());
    }
}

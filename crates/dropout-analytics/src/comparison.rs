//! Per-outcome feature means.

use dropout_stats::descriptive;
use serde::Serialize;

use crate::record::{Feature, Outcome, OutcomePartition, RecordSet};

/// Mean of a feature among dropouts versus retained students.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureComparison {
    pub feature: Feature,
    pub dropout_avg: f64,
    pub non_dropout_avg: f64,
}

/// Compares feature means across the two outcome partitions.
///
/// Each mean is computed over its own partition only. An empty partition
/// reports a mean of `0.0`.
#[must_use]
pub fn feature_comparisons(records: &RecordSet, features: &[Feature]) -> Vec<FeatureComparison> {
    let partition = records.partition();
    features
        .iter()
        .map(|&feature| FeatureComparison {
            feature,
            dropout_avg: partition_mean(&partition, Outcome::Dropout, feature),
            non_dropout_avg: partition_mean(&partition, Outcome::Retained, feature),
        })
        .collect()
}

fn partition_mean(partition: &OutcomePartition<'_>, outcome: Outcome, feature: Feature) -> f64 {
    descriptive::mean(partition.values(outcome, feature)).unwrap_or(0.0)
}

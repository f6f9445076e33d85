//! Feature-outcome correlation ranking and the full correlation matrix.

use dropout_stats::correlation::pearson_correlation;
use serde::Serialize;

use crate::record::{Feature, RecordSet};

/// Strength of association between one feature and the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureCorrelation {
    pub feature: Feature,
    /// Absolute Pearson coefficient against the outcome label.
    pub correlation: f64,
}

/// Ranks features by the magnitude of their correlation with the outcome.
///
/// The sign is discarded: the ranking measures how strongly a feature is
/// associated with dropout, not in which direction. Output is sorted by
/// magnitude, largest first; ties keep the input order.
#[must_use]
pub fn rank_correlations(records: &RecordSet, features: &[Feature]) -> Vec<FeatureCorrelation> {
    let outcomes = records.outcome_values();
    let mut ranked = features
        .iter()
        .map(|&feature| FeatureCorrelation {
            feature,
            correlation: pearson_correlation(&records.values(feature), &outcomes).abs(),
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.correlation.total_cmp(&a.correlation));
    ranked
}

/// Label of the outcome row and column in a [`CorrelationMatrix`].
pub const OUTCOME_LABEL: &str = "dropout";

/// Signed pairwise Pearson coefficients.
///
/// Rows and columns follow `labels`: the requested features, then the outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficient between the two labelled columns.
    #[must_use]
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == column)?;
        Some(self.values[i][j])
    }
}

/// Computes the correlation matrix of `features` plus the outcome label.
///
/// The diagonal is `1.0` except for constant columns, whose coefficients are
/// all `0.0`.
#[must_use]
pub fn correlation_matrix(records: &RecordSet, features: &[Feature]) -> CorrelationMatrix {
    let mut labels = features
        .iter()
        .map(|f| f.id().to_owned())
        .collect::<Vec<_>>();
    labels.push(OUTCOME_LABEL.to_owned());

    let mut columns = features
        .iter()
        .map(|&f| records.values(f))
        .collect::<Vec<_>>();
    columns.push(records.outcome_values());

    let values = columns
        .iter()
        .map(|x| columns.iter().map(|y| pearson_correlation(x, y)).collect())
        .collect();
    CorrelationMatrix { labels, values }
}

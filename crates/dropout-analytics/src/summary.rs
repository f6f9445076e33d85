//! Scalar summaries of a record set.

use dropout_stats::{descriptive, fixed};
use serde::Serialize;

use crate::{
    error::AnalyticsError,
    record::{Feature, RecordSet},
};

/// Record count and dropout share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeRate {
    /// Number of records.
    pub count: usize,
    /// Number of records labelled dropout.
    pub dropouts: usize,
    /// `dropouts / count * 100`.
    pub rate: f64,
}

impl OutcomeRate {
    /// Rate as a percentage string with one decimal digit, e.g. `"66.7"`.
    ///
    /// Exact ties round up: 1 dropout in 16 records shows as `"6.3"`.
    #[must_use]
    pub fn rate_display(&self) -> String {
        fixed::to_fixed(self.rate, 1)
    }
}

/// Counts records and computes the dropout percentage.
///
/// Fails on an empty record set rather than dividing by zero.
#[expect(clippy::cast_precision_loss)]
pub fn count_and_rate(records: &RecordSet) -> Result<OutcomeRate, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyRecordSet);
    }
    let count = records.len();
    let dropouts = records.iter().filter(|r| r.dropout.is_dropout()).count();
    Ok(OutcomeRate {
        count,
        dropouts,
        rate: dropouts as f64 / count as f64 * 100.0,
    })
}

/// Mean of a feature over the whole record set.
pub fn feature_mean(records: &RecordSet, feature: Feature) -> Result<f64, AnalyticsError> {
    descriptive::mean(records.iter().map(|r| r.value(feature)))
        .ok_or(AnalyticsError::EmptyRecordSet)
}

/// Mean of one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureMean {
    pub feature: Feature,
    pub mean: f64,
}

/// Means of every feature, in column order.
pub fn feature_means(records: &RecordSet) -> Result<Vec<FeatureMean>, AnalyticsError> {
    Feature::ALL
        .into_iter()
        .map(|feature| {
            Ok(FeatureMean {
                feature,
                mean: feature_mean(records, feature)?,
            })
        })
        .collect()
}

/// Dataset overview card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overview {
    pub total_records: usize,
    /// Number of numeric feature columns ([`Feature::ALL`]).
    ///
    /// The student identifier and the dropout outcome are not features and
    /// are not counted, so a full record set reports 15.
    pub total_features: usize,
    /// Dropout percentage rounded to one decimal place.
    pub dropout_rate: f64,
}

pub fn overview(records: &RecordSet) -> Result<Overview, AnalyticsError> {
    let rate = count_and_rate(records)?;
    Ok(Overview {
        total_records: rate.count,
        total_features: Feature::ALL.len(),
        dropout_rate: (rate.rate * 10.0).round() / 10.0,
    })
}

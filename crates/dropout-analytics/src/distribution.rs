//! Banded and value-count distributions of single features.

use dropout_stats::binning::{self, BandSet};
use serde::Serialize;

use crate::{
    error::AnalyticsError,
    record::{Feature, FeatureKind, RecordSet},
};

/// Number of records falling in one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub range: String,
    pub count: usize,
}

/// Band counts of one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandDistribution {
    pub feature: Feature,
    pub bands: Vec<BandCount>,
}

/// Counts records per band of `feature`, in band order.
///
/// See [`BandSet`] for boundary rules. When the bands cover every value of the
/// feature, the counts sum to the number of records.
#[must_use]
pub fn bucketize(records: &RecordSet, feature: Feature, bands: &BandSet) -> BandDistribution {
    let bands = bands
        .bucketize(records.iter().map(|r| r.value(feature)))
        .into_iter()
        .map(|(range, count)| BandCount { range, count })
        .collect();
    BandDistribution { feature, bands }
}

/// Number of records holding one value of a discrete feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: u32,
    pub count: usize,
}

/// Value counts of one discrete feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountDistribution {
    pub feature: Feature,
    pub counts: Vec<ValueCount>,
}

/// Counts records per distinct value of a discrete feature.
///
/// Values appear in ascending order and only if at least one record holds
/// them.
pub fn group_counts(
    records: &RecordSet,
    feature: Feature,
) -> Result<CountDistribution, AnalyticsError> {
    if feature.kind() != FeatureKind::Discrete {
        return Err(AnalyticsError::NotDiscrete { feature });
    }
    let values = records
        .iter()
        .map(|r| r.count(feature))
        .collect::<Option<Vec<_>>>()
        .ok_or(AnalyticsError::NotDiscrete { feature })?;
    let counts = binning::count_values(values)
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    Ok(CountDistribution { feature, counts })
}

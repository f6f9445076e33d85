use crate::record::Feature;

/// Errors raised by the analytics engine.
///
/// Degenerate subsets (an empty outcome partition, a constant column) are not
/// errors; they map to documented sentinel values instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalyticsError {
    #[display("record set is empty")]
    EmptyRecordSet,
    #[display("feature '{feature}' is not discrete and cannot be used as a group key")]
    NotDiscrete { feature: Feature },
    #[display("record {row}: value of '{feature}' is not a finite number")]
    NonFiniteValue { row: usize, feature: Feature },
    #[display("histogram must have at least one bin")]
    InvalidHistogramBins,
}

/// Error returned when parsing an unknown feature identifier.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown feature '{id}'")]
pub struct ParseFeatureError {
    pub id: String,
}

/// Error returned for an outcome label other than 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("outcome label must be 0 or 1, got {value}")]
pub struct InvalidOutcome {
    pub value: u8,
}

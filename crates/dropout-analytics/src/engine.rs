//! The analytics entry point.
//!
//! [`compute_analytics`] runs every section over one record set and bundles
//! the outputs into an [`AnalyticsResult`]. The result owns all of its data,
//! so it can outlive the records and be serialized as is.

use dropout_stats::{descriptive::DescriptiveStats, fixed};
use serde::Serialize;

use crate::{
    boxplot::{self, BoxplotSummary},
    comparison::{self, FeatureComparison},
    config::{AnalyticsConfig, ScatterAxes},
    correlation::{self, CorrelationMatrix, FeatureCorrelation},
    describe::{self, FeatureDescription},
    distribution::{self, BandDistribution, CountDistribution},
    error::AnalyticsError,
    grouping::{self, GroupedSummary},
    histogram::{self, FeatureHistogram},
    record::{Feature, RecordSet},
    risk::{self, RiskCategory, RiskGroup},
    summary::{self, FeatureMean, Overview},
};

/// One point of the scatter section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Outcome label, `0` or `1`.
    pub dropout: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub axes: ScatterAxes,
    /// One point per record, in record order.
    pub points: Vec<ScatterPoint>,
}

/// Everything the dashboard shows for one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResult {
    pub total_students: usize,
    /// Dropout percentage with one decimal digit.
    pub dropout_rate: String,
    /// Mean GPA with two decimal digits.
    pub average_gpa: String,
    /// Mean attendance with one decimal digit.
    pub average_attendance: String,
    pub feature_means: Vec<FeatureMean>,
    pub distributions: Vec<BandDistribution>,
    pub count_distribution: CountDistribution,
    pub scatter: Scatter,
    /// Sorted by magnitude, largest first.
    pub correlations: Vec<FeatureCorrelation>,
    pub groups: GroupedSummary,
    pub boxplots: Vec<BoxplotSummary>,
    pub comparisons: Vec<FeatureComparison>,
    pub histograms: Vec<FeatureHistogram>,
    pub overview: Overview,
    pub descriptions: Vec<FeatureDescription>,
    /// Descriptive statistics of the 0/1 dropout label.
    pub outcome_description: DescriptiveStats,
    pub correlation_matrix: CorrelationMatrix,
    /// One group per risk category, lowest first.
    pub risk: Vec<RiskGroup>,
}

/// Computes all analytics sections.
///
/// Pure apart from debug-level tracing: the same records and configuration
/// always yield the same result.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptyRecordSet`] when `records` is empty,
/// [`AnalyticsError::NotDiscrete`] when the configured count feature or group
/// key is continuous, and [`AnalyticsError::InvalidHistogramBins`] when the
/// configuration asks for zero histogram bins.
pub fn compute_analytics(
    records: &RecordSet,
    config: &AnalyticsConfig,
) -> Result<AnalyticsResult, AnalyticsError> {
    let rate = summary::count_and_rate(records)?;
    tracing::debug!(
        records = rate.count,
        dropouts = rate.dropouts,
        "computing analytics"
    );

    let average_gpa = summary::feature_mean(records, Feature::Gpa)?;
    let average_attendance = summary::feature_mean(records, Feature::Attendance)?;
    let feature_means = summary::feature_means(records)?;

    let distributions = config
        .band_distributions
        .iter()
        .map(|banded| distribution::bucketize(records, banded.feature, &banded.bands))
        .collect::<Vec<_>>();
    let count_distribution = distribution::group_counts(records, config.count_feature)?;
    tracing::debug!(
        bands = distributions.len(),
        distinct_values = count_distribution.counts.len(),
        "distributions computed"
    );

    let scatter = scatter_points(records, config.scatter_axes);

    let correlations = correlation::rank_correlations(records, &config.correlation_features);
    if let Some(top) = correlations.first() {
        tracing::debug!(
            feature = %top.feature,
            correlation = top.correlation,
            "strongest correlation"
        );
    }

    let groups = grouping::group_by_key(records, config.group_key, config.group_averages)?;
    tracing::debug!(key = %groups.key, groups = groups.groups.len(), "groups computed");

    let boxplots = boxplot::boxplot_summaries(records, &config.boxplot_features);
    let comparisons = comparison::feature_comparisons(records, &config.comparison_features);
    let histograms =
        histogram::histograms(records, &config.histogram_features, config.histogram_bins)?;
    tracing::debug!(
        boxplots = boxplots.len(),
        comparisons = comparisons.len(),
        histograms = histograms.len(),
        "partitioned sections computed"
    );

    let overview = summary::overview(records)?;
    let descriptions = describe::describe(records, &Feature::ALL)?;
    let outcome_description = describe::describe_outcome(records)?;
    let correlation_matrix = correlation::correlation_matrix(records, &Feature::ALL);
    tracing::debug!(
        columns = correlation_matrix.labels.len(),
        "statistics overview computed"
    );

    let risk = risk::risk_groups(records);
    let high_risk = risk
        .iter()
        .filter(|g| g.category >= RiskCategory::High)
        .map(|g| g.count)
        .sum::<usize>();
    tracing::debug!(high_risk, "risk categories computed");

    Ok(AnalyticsResult {
        total_students: rate.count,
        dropout_rate: rate.rate_display(),
        average_gpa: fixed::to_fixed(average_gpa, 2),
        average_attendance: fixed::to_fixed(average_attendance, 1),
        feature_means,
        distributions,
        count_distribution,
        scatter,
        correlations,
        groups,
        boxplots,
        comparisons,
        histograms,
        overview,
        descriptions,
        outcome_description,
        correlation_matrix,
        risk,
    })
}

fn scatter_points(records: &RecordSet, axes: ScatterAxes) -> Scatter {
    let points = records
        .iter()
        .map(|r| ScatterPoint {
            x: r.value(axes.x),
            y: r.value(axes.y),
            dropout: r.dropout.into(),
        })
        .collect();
    Scatter { axes, points }
}

//! Engine configuration
//!
//! [`AnalyticsConfig`] selects which features feed each section of the
//! [`AnalyticsResult`](crate::engine::AnalyticsResult). The defaults reproduce
//! the dashboard layout; every field may be overridden from JSON, and missing
//! fields fall back to their defaults:
//!
//! ```json
//! {
//!   "boxplot_features": ["gpa", "late_assignments"],
//!   "histogram_bins": 10
//! }
//! ```

use dropout_stats::binning::{Band, BandSet, UpperBound};
use serde::{Deserialize, Serialize};

use crate::record::Feature;

/// Number of histogram bins used by the dashboard.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// A feature together with the bands it is bucketized into.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BandedFeature {
    pub feature: Feature,
    pub bands: BandSet,
}

/// The two features plotted against each other in the scatter section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScatterAxes {
    pub x: Feature,
    pub y: Feature,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Band distributions, in output order.
    pub band_distributions: Vec<BandedFeature>,
    /// Discrete feature whose distinct values are counted.
    pub count_feature: Feature,
    pub scatter_axes: ScatterAxes,
    /// Features ranked by correlation magnitude against the outcome.
    pub correlation_features: Vec<Feature>,
    /// Discrete feature used as the group key.
    pub group_key: Feature,
    /// Features averaged within each group.
    pub group_averages: [Feature; 2],
    pub boxplot_features: Vec<Feature>,
    pub comparison_features: Vec<Feature>,
    pub histogram_features: Vec<Feature>,
    pub histogram_bins: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            band_distributions: vec![
                BandedFeature {
                    feature: Feature::Gpa,
                    bands: gpa_bands(),
                },
                BandedFeature {
                    feature: Feature::Attendance,
                    bands: attendance_bands(),
                },
            ],
            count_feature: Feature::FailedCourses,
            scatter_axes: ScatterAxes {
                x: Feature::Gpa,
                y: Feature::Attendance,
            },
            correlation_features: vec![
                Feature::Gpa,
                Feature::Attendance,
                Feature::FailedCourses,
                Feature::FeedbackEngagement,
                Feature::ClicksPerWeek,
            ],
            group_key: Feature::Semester,
            group_averages: [Feature::Gpa, Feature::Attendance],
            boxplot_features: vec![
                Feature::Gpa,
                Feature::Attendance,
                Feature::FeedbackEngagement,
                Feature::ClicksPerWeek,
            ],
            comparison_features: vec![
                Feature::Gpa,
                Feature::Attendance,
                Feature::FeedbackEngagement,
                Feature::ClicksPerWeek,
                Feature::FailedCourses,
            ],
            histogram_features: vec![
                Feature::Gpa,
                Feature::Attendance,
                Feature::FailedCourses,
                Feature::FeedbackEngagement,
                Feature::ClicksPerWeek,
            ],
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

/// Four one-point GPA bands on the 0-4 scale.
///
/// A GPA exactly on a boundary is counted in the lower band.
#[must_use]
pub fn gpa_bands() -> BandSet {
    BandSet::new(
        UpperBound::Inclusive,
        vec![
            Band::new("0-1", 1.0),
            Band::new("1-2", 2.0),
            Band::new("2-3", 3.0),
            Band::catch_all("3-4"),
        ],
    )
}

/// Five ten-point attendance bands from 50 %.
///
/// Attendance exactly on a boundary is counted in the upper band; everything
/// below 60 lands in the first band.
///
/// This differs from [`gpa_bands`] on purpose: the dashboard tests
/// attendance edges with `<` and GPA edges with `<=`, so 60 % attendance
/// counts as `"60-70"` while a 2.0 GPA counts as `"1-2"`.
#[must_use]
pub fn attendance_bands() -> BandSet {
    BandSet::new(
        UpperBound::Exclusive,
        vec![
            Band::new("50-60", 60.0),
            Band::new("60-70", 70.0),
            Band::new("70-80", 80.0),
            Band::new("80-90", 90.0),
            Band::catch_all("90-100"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_differ_by_feature() {
        // 50-60, 60-70, ... and 0-1, 1-2, 2-3, ...
        assert_eq!(attendance_bands().band_index(60.0), Some(1));
        assert_eq!(attendance_bands().band_index(59.99), Some(0));
        assert_eq!(gpa_bands().band_index(2.0), Some(1));
        assert_eq!(gpa_bands().band_index(2.01), Some(2));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"boxplot_features": ["gpa", "late_assignments"], "histogram_bins": 5}"#;
        let config: AnalyticsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.boxplot_features,
            vec![Feature::Gpa, Feature::LateAssignments]
        );
        assert_eq!(config.histogram_bins, 5);
        assert_eq!(config.group_key, Feature::Semester);
        assert_eq!(config.band_distributions, AnalyticsConfig::default().band_distributions);
    }

    #[test]
    fn test_unknown_feature_is_rejected() {
        let json = r#"{"correlation_features": ["gpa", "shoe_size"]}"#;
        assert!(serde_json::from_str::<AnalyticsConfig>(json).is_err());
    }
}

//! Dropout analytics over validated student records
//!
//! This crate turns a batch of student records into the statistics behind the
//! dropout dashboard: rates, band distributions, per-semester aggregates,
//! correlations, boxplots and histograms.
//!
//! # Overview
//!
//! 1. **Validate Records** ([`record::RecordSet`]): Wrap parsed
//!    [`record::StudentRecord`]s, rejecting non-finite values
//! 2. **Configure Sections** ([`config::AnalyticsConfig`]): Choose bands and
//!    features per section, or use the dashboard defaults
//! 3. **Compute** ([`engine::compute_analytics`]): Run every section and collect
//!    the outputs in an [`engine::AnalyticsResult`]
//!
//! Each section is also available on its own:
//!
//! - [`summary`]: Count, dropout rate, feature means, overview card
//! - [`distribution`]: Banded counts and distinct-value counts
//! - [`correlation`]: Correlation ranking and the full correlation matrix
//! - [`grouping`]: Aggregates per value of a discrete key
//! - [`boxplot`]: Five-number summaries split by outcome
//! - [`comparison`]: Mean per outcome
//! - [`histogram`]: Fixed-width histograms split by outcome
//! - [`describe`]: Descriptive statistics per feature
//! - [`risk`]: Rule-based risk scores and risk categories
//!
//! # Examples
//!
//! ```
//! use dropout_analytics::{
//!     config::AnalyticsConfig,
//!     engine::compute_analytics,
//!     record::{Outcome, RecordSet, StudentRecord},
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let records = RecordSet::new(vec![
//!     StudentRecord { gpa: 2.0, attendance: 60.0, dropout: Outcome::Dropout, ..Default::default() },
//!     StudentRecord { gpa: 3.5, attendance: 90.0, ..Default::default() },
//!     StudentRecord { gpa: 1.5, attendance: 50.0, dropout: Outcome::Dropout, ..Default::default() },
//! ])?;
//! let result = compute_analytics(&records, &AnalyticsConfig::default())?;
//! assert_eq!(result.dropout_rate, "66.7");
//! assert_eq!(result.average_gpa, "2.33");
//! # Ok(())
//! # }
//! ```

pub mod boxplot;
pub mod comparison;
pub mod config;
pub mod correlation;
pub mod describe;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod histogram;
pub mod record;
pub mod risk;
pub mod summary;

pub use self::{
    config::AnalyticsConfig,
    engine::{AnalyticsResult, compute_analytics},
    error::AnalyticsError,
    record::{Feature, Outcome, RecordSet, StudentRecord},
};

//! Numeric building blocks for the dropout analytics engine.
//!
//! This crate knows nothing about students; it works on plain `f64` slices and
//! iterators:
//!
//! - **Percentiles**: linear-interpolation (R-7) percentiles
//! - **Five-number summaries**: boxplot inputs (min, quartiles, max)
//! - **Descriptive statistics**: count, mean, sample standard deviation, quartiles
//! - **Correlation**: Pearson's product-moment coefficient
//! - **Binning**: labelled bands and distinct-value counts
//! - **Histograms**: equal-width, closed-interval bins
//! - **Fixed decimals**: display strings that round exact ties away from zero
//!
//! # Modules
//!
//! - [`percentiles`]: Percentile computation
//! - [`five_number`]: Five-number summaries
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`correlation`]: Pearson correlation of paired series
//! - [`binning`]: Band assignment and value counting
//! - [`histogram`]: Fixed-width histogram bins
//! - [`fixed`]: Fixed-point decimal rendering
//!
//! # Examples
//!
//! ## Computing a boxplot summary
//!
//! ```
//! use dropout_stats::five_number::FiveNumberSummary;
//!
//! let summary = FiveNumberSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(summary.q1, 2.0);
//! assert_eq!(summary.median, 3.0);
//! ```
//!
//! ## Ranking association strength
//!
//! ```
//! use dropout_stats::correlation::pearson_correlation;
//!
//! let hours = [1.0, 2.0, 3.0, 4.0];
//! let dropped = [1.0, 1.0, 0.0, 0.0];
//! assert!(pearson_correlation(&hours, &dropped) < 0.0);
//! ```

pub mod binning;
pub mod correlation;
pub mod descriptive;
pub mod fixed;
pub mod five_number;
pub mod histogram;
pub mod percentiles;

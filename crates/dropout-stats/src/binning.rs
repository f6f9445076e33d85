//! Labelled band binning and value counting
//!
//! This module provides the two discrete views of a numeric column used by
//! dashboards:
//!
//! - [`BandSet`]: a small, ordered list of human-readable bands (e.g. `"0-1"`,
//!   `"1-2"`, ...) that partition a continuous value range
//! - [`count_values`]: the number of occurrences of each distinct value of a
//!   discrete column
//!
//! # Band Assignment
//!
//! Bands are tested in ascending order. A value belongs to the first band whose
//! upper bound it does not exceed, so a value lying exactly on a boundary
//! belongs to the **lower** band. The last band has no upper test at all and
//! catches every remaining value.
//!
//! Some band sets test with a strict `<` instead; see [`UpperBound`].
//!
//! # Examples
//!
//! ```
//! use dropout_stats::binning::{Band, BandSet, UpperBound};
//!
//! let bands = BandSet::new(
//!     UpperBound::Inclusive,
//!     vec![
//!         Band::new("low", 1.0),
//!         Band::new("mid", 2.0),
//!         Band::catch_all("high"),
//!     ],
//! );
//!
//! let counts = bands.bucketize([0.5, 1.0, 1.5, 2.0, 9.0]);
//! assert_eq!(
//!     counts,
//!     vec![("low".to_owned(), 2), ("mid".to_owned(), 2), ("high".to_owned(), 1)]
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a band's upper bound is compared against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpperBound {
    /// `value <= upper` selects the band.
    #[default]
    Inclusive,
    /// `value < upper` selects the band.
    Exclusive,
}

impl UpperBound {
    fn admits(self, value: f64, upper: f64) -> bool {
        match self {
            UpperBound::Inclusive => value <= upper,
            UpperBound::Exclusive => value < upper,
        }
    }
}

/// A single labelled band.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Band {
    /// Display label, e.g. `"2-3"`.
    pub label: String,
    /// Upper bound of the band. Ignored for the last band of a set.
    #[serde(default)]
    pub upper: Option<f64>,
}

impl Band {
    #[must_use]
    pub fn new(label: impl Into<String>, upper: f64) -> Self {
        Self {
            label: label.into(),
            upper: Some(upper),
        }
    }

    /// A band without an upper bound, meant to close a [`BandSet`].
    #[must_use]
    pub fn catch_all(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            upper: None,
        }
    }
}

/// An ordered set of bands covering a value range.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BandSet {
    #[serde(default)]
    pub upper_bound: UpperBound,
    pub bands: Vec<Band>,
}

impl BandSet {
    #[must_use]
    pub fn new(upper_bound: UpperBound, bands: Vec<Band>) -> Self {
        Self { upper_bound, bands }
    }

    /// Returns the index of the band `value` falls into.
    ///
    /// Returns `None` only for an empty band set.
    #[must_use]
    pub fn band_index(&self, value: f64) -> Option<usize> {
        let last = self.bands.len().checked_sub(1)?;
        let idx = self.bands[..last]
            .iter()
            .position(|band| {
                band.upper
                    .is_some_and(|upper| self.upper_bound.admits(value, upper))
            })
            .unwrap_or(last);
        Some(idx)
    }

    /// Counts values per band, in band order.
    ///
    /// Every band appears in the output, including empty ones.
    #[must_use]
    pub fn bucketize<I>(&self, values: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut counts = vec![0; self.bands.len()];
        for value in values {
            if let Some(idx) = self.band_index(value) {
                counts[idx] += 1;
            }
        }
        self.bands
            .iter()
            .zip(counts)
            .map(|(band, count)| (band.label.clone(), count))
            .collect()
    }
}

/// Counts occurrences of each distinct value.
///
/// Only values that actually occur appear in the result; gaps between the
/// smallest and largest value are not filled with zeros. Keys iterate in
/// ascending order.
///
/// # Examples
///
/// ```
/// use dropout_stats::binning::count_values;
///
/// let counts = count_values([1_u32, 0, 3, 1, 1]);
/// assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(0, 1), (1, 3), (3, 1)]);
/// ```
#[must_use]
pub fn count_values<K, I>(values: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut value_counts = BTreeMap::new();
    for value in values {
        *value_counts.entry(value).or_insert(0) += 1;
    }
    value_counts
}

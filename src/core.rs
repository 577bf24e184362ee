//! Core types shared by the analyzer, the selector and the sort engine.
//!
//! This module defines:
//! - [`Strategy`]: The closed set of algorithms the engine can dispatch to.
//! - [`DistributionType`]: Quartile-based shape tag of an analyzed sequence.
//! - [`SmartSortConfig`]: Selection thresholds.
//! - [`SortError`]: Contract violations reported by the public API.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Segments at or below this size are always insertion sorted.
pub const INSERTION_THRESHOLD: usize = 20;

/// Presortedness at or above this value selects insertion sort.
pub const PRESORTED_THRESHOLD: f64 = 0.7;

/// Minimum range density for radix sort to be considered.
pub const RADIX_DENSITY_THRESHOLD: f64 = 0.01;

/// Radix sort requires `max - min < size * RADIX_RANGE_FACTOR`.
pub const RADIX_RANGE_FACTOR: i128 = 10;

/// Sorting algorithm chosen for a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    InsertionSort,
    MergeSort,
    RadixSort,
}

impl Strategy {
    /// Name used in reports and serialized statistics.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::InsertionSort => "InsertionSort",
            Strategy::MergeSort => "MergeSort",
            Strategy::RadixSort => "RadixSort",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a value distribution, derived from its quartile spread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    /// Every value is equal, or the interquartile range is zero.
    Uniform,
    /// Fewer than ten elements; too few for quartiles to mean anything.
    Small,
    /// skew < 0.2
    Normal,
    /// 0.2 <= skew < 0.5
    SlightlySkewed,
    /// skew >= 0.5
    HighlySkewed,
}

impl DistributionType {
    /// Snake-case tag used in reports and serialized characteristics.
    pub fn as_str(self) -> &'static str {
        match self {
            DistributionType::Uniform => "uniform",
            DistributionType::Small => "small",
            DistributionType::Normal => "normal",
            DistributionType::SlightlySkewed => "slightly_skewed",
            DistributionType::HighlySkewed => "highly_skewed",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by the public API.
///
/// Every variant is a caller contract violation; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    #[error("radix sort requires non-negative keys, found {value} at index {index}")]
    NegativeRadixKey { index: usize, value: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Thresholds used by the strategy selector and the engine.
///
/// The defaults reproduce the stock selection rules. Use
/// [`SmartSort::with_config`](crate::SmartSort::with_config) to run with different ones.
///
/// # Examples
///
/// ```
/// use smartsort::{SmartSort, SmartSortConfig};
///
/// let config = SmartSortConfig {
///     insertion_threshold: 8,
///     ..SmartSortConfig::default()
/// };
/// let mut sorter = SmartSort::with_config(config).unwrap();
/// assert_eq!(sorter.sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmartSortConfig {
    /// Segments of at most this many elements go straight to insertion sort.
    pub insertion_threshold: usize,
    /// Presortedness at or above this selects insertion sort.
    pub presorted_threshold: f64,
    /// Minimum range density for radix sort.
    pub radix_density_threshold: f64,
    /// Radix sort requires `max - min < size * radix_range_factor`.
    pub radix_range_factor: i128,
}

impl Default for SmartSortConfig {
    fn default() -> Self {
        Self {
            insertion_threshold: INSERTION_THRESHOLD,
            presorted_threshold: PRESORTED_THRESHOLD,
            radix_density_threshold: RADIX_DENSITY_THRESHOLD,
            radix_range_factor: RADIX_RANGE_FACTOR,
        }
    }
}

impl SmartSortConfig {
    /// Checks that every threshold is usable.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.insertion_threshold == 0 {
            return Err(SortError::InvalidConfig(
                "insertion_threshold must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.presorted_threshold) {
            return Err(SortError::InvalidConfig(format!(
                "presorted_threshold must be within [0, 1], got {}",
                self.presorted_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.radix_density_threshold) {
            return Err(SortError::InvalidConfig(format!(
                "radix_density_threshold must be within [0, 1], got {}",
                self.radix_density_threshold
            )));
        }
        if self.radix_range_factor <= 0 {
            return Err(SortError::InvalidConfig(format!(
                "radix_range_factor must be positive, got {}",
                self.radix_range_factor
            )));
        }
        Ok(())
    }
}

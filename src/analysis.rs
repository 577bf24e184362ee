//! Input characteristics used to pick a sorting strategy.
//!
//! An [`InputCharacteristics`] value is a snapshot of one sequence (or one sub-range of it).
//! It is computed once and never updated; the engine takes a fresh snapshot every time it
//! looks at a different range.

use crate::core::DistributionType;
use serde::Serialize;
use std::fmt;

/// Descriptive statistics of a sequence of integers.
///
/// # Examples
///
/// ```
/// use smartsort::InputCharacteristics;
///
/// let chars = InputCharacteristics::analyze(&[1, 2, 3, 5, 4]);
/// assert_eq!(chars.size(), 5);
/// assert!(chars.presortedness() > 0.85);
/// assert_eq!(chars.data_range(), (1, 5));
/// assert!(!chars.has_duplicates());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputCharacteristics {
    size: usize,
    presortedness: f64,
    range_density: f64,
    distribution_type: DistributionType,
    has_duplicates: bool,
    data_range: (i64, i64),
}

impl InputCharacteristics {
    /// Analyzes `data` without modifying it.
    ///
    /// Runs in O(n log n): inversions are counted during a merge pass and the
    /// distribution is read from a sorted copy.
    pub fn analyze(data: &[i64]) -> Self {
        let size = data.len();

        let mut sorted = data.to_vec();
        sorted.sort_unstable();

        let data_range = match (sorted.first(), sorted.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };

        let unique_count = count_unique(&sorted);

        Self {
            size,
            presortedness: presortedness(data),
            range_density: range_density(unique_count, data_range),
            distribution_type: distribution_type(&sorted, unique_count),
            has_duplicates: unique_count < size,
            data_range,
        }
    }

    /// Number of elements analyzed.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `1 - inversions / max_inversions`, in `[0, 1]`.
    pub fn presortedness(&self) -> f64 {
        self.presortedness
    }

    /// `unique_count / (max - min + 1)`, or 1.0 when every value is equal.
    pub fn range_density(&self) -> f64 {
        self.range_density
    }

    pub fn distribution_type(&self) -> DistributionType {
        self.distribution_type
    }

    pub fn has_duplicates(&self) -> bool {
        self.has_duplicates
    }

    /// `(min, max)`, or `(0, 0)` for an empty sequence.
    pub fn data_range(&self) -> (i64, i64) {
        self.data_range
    }

    /// `max - min`, widened so that it cannot overflow.
    pub fn value_range(&self) -> i128 {
        let (min, max) = self.data_range;
        max as i128 - min as i128
    }
}

impl fmt::Display for InputCharacteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InputCharacteristics(size={}, presortedness={:.2}, range_density={:.2}, distribution={}, duplicates={})",
            self.size,
            self.presortedness,
            self.range_density,
            self.distribution_type,
            self.has_duplicates
        )
    }
}

fn count_unique(sorted: &[i64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}

fn presortedness(data: &[i64]) -> f64 {
    let n = data.len() as u64;
    let max_inversions = n * n.saturating_sub(1) / 2;
    if max_inversions == 0 {
        return 1.0;
    }
    1.0 - count_inversions(data) as f64 / max_inversions as f64
}

fn range_density(unique_count: usize, (min, max): (i64, i64)) -> f64 {
    let value_range = max as i128 - min as i128;
    if value_range == 0 {
        return 1.0;
    }
    unique_count as f64 / (value_range + 1) as f64
}

fn distribution_type(sorted: &[i64], unique_count: usize) -> DistributionType {
    let n = sorted.len();
    if unique_count == 1 {
        return DistributionType::Uniform;
    }
    if n < 10 {
        return DistributionType::Small;
    }

    let q1 = sorted[n / 4] as i128;
    let q2 = sorted[n / 2] as i128;
    let q3 = sorted[3 * n / 4] as i128;

    let iqr = q3 - q1;
    if iqr == 0 {
        return DistributionType::Uniform;
    }

    let skew = ((q2 - q1) - (q3 - q2)).abs() as f64 / iqr as f64;
    if skew < 0.2 {
        DistributionType::Normal
    } else if skew < 0.5 {
        DistributionType::SlightlySkewed
    } else {
        DistributionType::HighlySkewed
    }
}

/// Counts pairs `i < j` with `data[i] > data[j]` using a bottom-up merge.
///
/// Equal elements are not inversions, so ties are taken from the left run.
pub(crate) fn count_inversions(data: &[i64]) -> u64 {
    let n = data.len();
    let mut src = data.to_vec();
    let mut dst = vec![0i64; n];
    let mut inversions = 0u64;

    let mut width = 1;
    while width < n {
        let mut left = 0;
        while left < n {
            let mid = (left + width).min(n);
            let right = (left + 2 * width).min(n);

            let (mut i, mut j, mut k) = (left, mid, left);
            while i < mid && j < right {
                if src[i] <= src[j] {
                    dst[k] = src[i];
                    i += 1;
                } else {
                    dst[k] = src[j];
                    j += 1;
                    // Everything still waiting in the left run is larger.
                    inversions += (mid - i) as u64;
                }
                k += 1;
            }
            dst[k..k + (mid - i)].copy_from_slice(&src[i..mid]);
            k += mid - i;
            dst[k..right].copy_from_slice(&src[j..right]);

            left = right;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    inversions
}

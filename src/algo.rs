//! Strategy selection, the three sorting algorithms and the adaptive engine.
//!
//! The engine combines:
//! - **Insertion Sort**: For small or nearly ordered segments.
//! - **Merge Sort**: General fallback. Each half is re-analyzed and may pick its own strategy.
//! - **LSD Radix Sort**: Base 10, for dense non-negative value ranges.
//!
//! The main entry point is [`SmartSort::sort`]. The algorithms are also exported on their own
//! so they can be measured in isolation.

use crate::analysis::InputCharacteristics;
use crate::core::{SmartSortConfig, SortError, Strategy};
use crate::stats::SortStatistics;
use cuneiform::cuneiform;
use std::time::Instant;

impl SmartSortConfig {
    /// Picks a strategy for a segment. The first matching rule wins:
    ///
    /// 1. `size <= insertion_threshold` selects insertion sort.
    /// 2. `presortedness >= presorted_threshold` selects insertion sort.
    /// 3. A non-empty, non-negative value range that is dense enough and smaller than
    ///    `size * radix_range_factor` selects radix sort. A product that overflows
    ///    places no bound on the range.
    /// 4. Anything else selects merge sort.
    pub fn select(&self, characteristics: &InputCharacteristics) -> Strategy {
        let size = characteristics.size();

        if size <= self.insertion_threshold {
            return Strategy::InsertionSort;
        }

        if characteristics.presortedness() >= self.presorted_threshold {
            return Strategy::InsertionSort;
        }

        let (min, _) = characteristics.data_range();
        let value_range = characteristics.value_range();

        if value_range > 0
            && characteristics.range_density() >= self.radix_density_threshold
            && (size as i128)
                .checked_mul(self.radix_range_factor)
                .is_none_or(|limit| value_range < limit)
            && min >= 0
        {
            return Strategy::RadixSort;
        }

        Strategy::MergeSort
    }
}

/// Picks a strategy using the default thresholds.
///
/// # Examples
///
/// ```
/// use smartsort::{InputCharacteristics, Strategy, select_strategy};
///
/// let chars = InputCharacteristics::analyze(&[5, 2, 8, 1, 9]);
/// assert_eq!(select_strategy(&chars), Strategy::InsertionSort);
/// ```
pub fn select_strategy(characteristics: &InputCharacteristics) -> Strategy {
    SmartSortConfig::default().select(characteristics)
}

/// Adaptive sorting engine.
///
/// Each call to [`sort`](Self::sort) analyzes the input, selects a strategy and runs it.
/// When merge sort is selected, both halves are analyzed again and may switch to a
/// different strategy. Counters and the decision log of the most recent call are
/// available through [`get_stats`](Self::get_stats).
///
/// A `SmartSort` is not meant to be shared between threads while sorting; every call
/// resets and then fills the same statistics.
///
/// # Examples
///
/// ```
/// use smartsort::{SmartSort, Strategy};
///
/// let mut sorter = SmartSort::new();
/// let sorted = sorter.sort(&[5, 2, 8, 1, 9]);
/// assert_eq!(sorted, vec![1, 2, 5, 8, 9]);
///
/// let stats = sorter.get_stats();
/// assert!(stats.comparisons() > 0);
/// assert_eq!(stats.strategy_switches()[0].strategy, Strategy::InsertionSort);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SmartSort {
    config: SmartSortConfig,
    stats: SortStatistics,
}

impl SmartSort {
    /// Creates an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom thresholds.
    ///
    /// Returns [`SortError::InvalidConfig`] if any threshold is out of range.
    pub fn with_config(config: SmartSortConfig) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SortStatistics::default(),
        })
    }

    /// Thresholds this engine selects with.
    pub fn config(&self) -> &SmartSortConfig {
        &self.config
    }

    /// Returns a sorted copy of `data`. The input is left untouched.
    ///
    /// Empty and single-element inputs are copied as-is: no comparisons, no logged strategy.
    pub fn sort(&mut self, data: &[i64]) -> Vec<i64> {
        let start = Instant::now();
        self.stats = SortStatistics::new();

        let mut buffer = data.to_vec();
        let len = buffer.len();

        if len > 1 {
            let characteristics = InputCharacteristics::analyze(&buffer);
            tracing::debug!(%characteristics, "analyzed input");

            let strategy = self.config.select(&characteristics);
            self.stats.log_strategy(strategy, 0, len);

            let mut dispatcher = Dispatcher {
                config: &self.config,
                stats: &mut self.stats,
            };
            dispatcher.execute(strategy, &mut buffer, 0, len);
        }

        self.stats.set_execution_time(start.elapsed());
        tracing::debug!(
            comparisons = self.stats.comparisons(),
            swaps = self.stats.swaps(),
            decisions = self.stats.strategy_switches().len(),
            elapsed = ?self.stats.execution_time(),
            "sort finished"
        );

        buffer
    }

    /// Returns a copy of the statistics of the most recent [`sort`](Self::sort) call.
    ///
    /// Before the first call every counter is zero and the decision log is empty.
    pub fn get_stats(&self) -> SortStatistics {
        self.stats.clone()
    }
}

/// Range-scoped recursive dispatch over one working buffer.
///
/// Ranges are half-open and absolute within the buffer, so logged decisions
/// refer to positions in the caller's sequence.
struct Dispatcher<'a> {
    config: &'a SmartSortConfig,
    stats: &'a mut SortStatistics,
}

impl Dispatcher<'_> {
    /// Chooses and runs a strategy for a merge-sort half.
    fn dispatch(&mut self, buffer: &mut [i64], left: usize, right: usize) {
        let size = right - left;
        if size <= 1 {
            return;
        }

        if size <= self.config.insertion_threshold {
            self.stats.log_strategy(Strategy::InsertionSort, left, right);
            insertion_sort(&mut buffer[left..right], self.stats);
            return;
        }

        // Never inherit the parent's snapshot.
        let characteristics = InputCharacteristics::analyze(&buffer[left..right]);
        tracing::trace!(left, right, %characteristics, "re-analyzed sub-range");

        let strategy = self.config.select(&characteristics);
        self.stats.log_strategy(strategy, left, right);
        self.execute(strategy, buffer, left, right);
    }

    fn execute(&mut self, strategy: Strategy, buffer: &mut [i64], left: usize, right: usize) {
        match strategy {
            Strategy::InsertionSort => insertion_sort(&mut buffer[left..right], self.stats),
            Strategy::RadixSort => {
                // Selection only picks radix sort when min >= 0.
                let sorted = lsd_radix_sort(&buffer[left..right], self.stats);
                buffer[left..right].copy_from_slice(&sorted);
            }
            Strategy::MergeSort => {
                let mid = (left + right) / 2;
                self.dispatch(buffer, left, mid);
                self.dispatch(buffer, mid, right);
                merge(&mut buffer[left..right], mid - left, self.stats);
            }
        }
    }
}

/// Stable in-place insertion sort.
///
/// Counts one comparison per predecessor examined, including the one that stops the
/// shift. Reaching the start of the slice ends the shift without a comparison.
/// Counts one swap per element shifted right.
pub fn insertion_sort(data: &mut [i64], stats: &mut SortStatistics) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        while j > 0 {
            stats.add_comparisons(1);
            if data[j - 1] <= key {
                break;
            }
            data[j] = data[j - 1];
            stats.add_swaps(1);
            j -= 1;
        }

        data[j] = key;
    }
}

/// Top-down merge sort that hands segments of at most `insertion_threshold`
/// elements to [`insertion_sort`].
///
/// Unlike the engine, this never re-analyzes its halves.
pub fn merge_sort(data: &mut [i64], insertion_threshold: usize, stats: &mut SortStatistics) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    if len <= insertion_threshold {
        insertion_sort(data, stats);
        return;
    }

    let mid = len / 2;
    merge_sort(&mut data[..mid], insertion_threshold, stats);
    merge_sort(&mut data[mid..], insertion_threshold, stats);
    merge(data, mid, stats);
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]`.
///
/// Ties take the left element first. Every element written back counts as a swap.
fn merge(data: &mut [i64], mid: usize, stats: &mut SortStatistics) {
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        stats.add_comparisons(1);
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    let rest = left.len() - i;
    data[k..k + rest].copy_from_slice(&left[i..]);
    k += rest;
    data[k..].copy_from_slice(&right[j..]);

    stats.add_swaps(data.len() as u64);
}

/// Number of buckets for decimal digits.
const RADIX_BUCKETS: usize = 10;

// Cache-aligned counts struct.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX_BUCKETS],
}

/// LSD radix sort, base 10, returning a new sorted vector.
///
/// Every key must be non-negative. A negative key is reported as
/// [`SortError::NegativeRadixKey`] before any work is done.
///
/// # Examples
///
/// ```
/// use smartsort::{SortError, SortStatistics, radix_sort};
///
/// let mut stats = SortStatistics::new();
/// let sorted = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66], &mut stats).unwrap();
/// assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
///
/// let err = radix_sort(&[3, -1], &mut stats).unwrap_err();
/// assert_eq!(err, SortError::NegativeRadixKey { index: 1, value: -1 });
/// ```
pub fn radix_sort(data: &[i64], stats: &mut SortStatistics) -> Result<Vec<i64>, SortError> {
    if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v < 0) {
        return Err(SortError::NegativeRadixKey { index, value });
    }
    Ok(lsd_radix_sort(data, stats))
}

/// Caller guarantees that no key is negative.
fn lsd_radix_sort(data: &[i64], stats: &mut SortStatistics) -> Vec<i64> {
    debug_assert!(data.iter().all(|&v| v >= 0));

    let mut keys = data.to_vec();
    let Some(&max_val) = keys.iter().max() else {
        return keys;
    };

    let mut exp: i64 = 1;
    while max_val / exp > 0 {
        keys = counting_sort_by_digit(&keys, exp, stats);
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }

    keys
}

/// One stable counting pass keyed on the digit `(value / exp) % 10`.
///
/// 1. Counts digit frequencies (one comparison per element).
/// 2. Computes prefix sums to find each bucket's start.
/// 3. Places elements into a new buffer in bucket order (one swap per element).
fn counting_sort_by_digit(keys: &[i64], exp: i64, stats: &mut SortStatistics) -> Vec<i64> {
    let digit = |v: i64| ((v / exp) % 10) as usize;

    let mut counts = DigitCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    keys.iter().for_each(|&v| counts[digit(v)] += 1);
    stats.add_comparisons(keys.len() as u64);

    let mut offsets = [0usize; RADIX_BUCKETS];
    let mut sum = 0;
    offsets
        .iter_mut()
        .zip(counts.iter())
        .for_each(|(offset, &count)| {
            *offset = sum;
            sum += count;
        });

    let mut output = vec![0i64; keys.len()];
    keys.iter().for_each(|&v| {
        let bucket = digit(v);
        output[offsets[bucket]] = v;
        offsets[bucket] += 1;
    });
    stats.add_swaps(keys.len() as u64);

    output
}

//! # SmartSort
//!
//! `smartsort` is an adaptive sorting engine for integer sequences. It inspects the input,
//! picks the algorithm that suits it, and keeps re-deciding as it recurses.
//!
//! ## How it decides
//!
//! Every segment is described by an [`InputCharacteristics`] snapshot:
//! presortedness (based on the inversion count), range density, distribution shape,
//! duplicates and the value range. The selector then applies these rules in order:
//!
//! - **Insertion Sort** for segments of at most 20 elements, or with presortedness >= 0.7.
//! - **Radix Sort** (LSD, base 10) when values are non-negative, dense enough, and span
//!   less than ten times the segment length.
//! - **Merge Sort** otherwise. Each half is analyzed again and may switch strategy, so one
//!   sort can mix all three algorithms.
//!
//! ## Usage
//!
//! ```rust
//! use smartsort::{SmartSort, Strategy};
//!
//! let mut sorter = SmartSort::new();
//! let data = [5, 2, 8, 1, 9, 3, 7, 4, 6, 0].repeat(5);
//! let sorted = sorter.sort(&data);
//!
//! assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
//!
//! let stats = sorter.get_stats();
//! assert!(stats.used(Strategy::RadixSort));
//! println!("{stats}");
//! ```
//!
//! ## Statistics
//!
//! Each [`SmartSort::sort`] call records comparisons, element moves, every strategy decision
//! with the range it applied to, and the wall-clock time. [`SortStatistics`] implements
//! `serde::Serialize` for external reporting.
//!
//! Strategy decisions are also emitted as `tracing` events at debug level.

pub mod algo;
pub mod analysis;
pub mod core;
pub mod stats;

pub use algo::{SmartSort, insertion_sort, merge_sort, radix_sort, select_strategy};
pub use analysis::InputCharacteristics;
pub use core::{DistributionType, SmartSortConfig, SortError, Strategy};
pub use stats::{SortStatistics, StrategySwitch};

pub mod prelude {
    pub use crate::algo::{SmartSort, select_strategy};
    pub use crate::analysis::InputCharacteristics;
    pub use crate::core::{DistributionType, SmartSortConfig, SortError, Strategy};
    pub use crate::stats::{SortStatistics, StrategySwitch};
}

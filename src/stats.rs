//! Performance counters and the strategy decision log.

use crate::core::Strategy;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// One strategy decision: the algorithm chosen and the half-open range it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StrategySwitch {
    pub strategy: Strategy,
    pub range: (usize, usize),
    pub size: usize,
}

/// Counters accumulated by a single sort call.
///
/// The engine owns one instance per call and hands out copies through
/// [`SmartSort::get_stats`](crate::SmartSort::get_stats). The standalone algorithms in
/// [`algo`](crate::algo) accept one by `&mut` so they can be measured in isolation.
///
/// Serializes to `{comparisons, swaps, strategy_switches, execution_time}` with the
/// execution time in seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SortStatistics {
    comparisons: u64,
    swaps: u64,
    strategy_switches: Vec<StrategySwitch>,
    #[serde(serialize_with = "serialize_secs")]
    execution_time: Duration,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl SortStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element comparisons performed by every algorithm branch.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Element relocations into the working buffer.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Every strategy decision, in the order it was made.
    pub fn strategy_switches(&self) -> &[StrategySwitch] {
        &self.strategy_switches
    }

    /// Wall-clock duration of the top-level sort call.
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Strategies in decision order.
    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.strategy_switches.iter().map(|s| s.strategy)
    }

    /// Returns `true` if `strategy` was chosen for at least one range.
    pub fn used(&self, strategy: Strategy) -> bool {
        self.strategies().any(|s| s == strategy)
    }

    /// How many times each strategy was chosen, in order of first use.
    pub fn strategy_usage(&self) -> Vec<(Strategy, usize)> {
        let mut usage: Vec<(Strategy, usize)> = Vec::with_capacity(3);
        for strategy in self.strategies() {
            match usage.iter_mut().find(|(s, _)| *s == strategy) {
                Some((_, count)) => *count += 1,
                None => usage.push((strategy, 1)),
            }
        }
        usage
    }

    #[inline(always)]
    pub(crate) fn add_comparisons(&mut self, n: u64) {
        self.comparisons += n;
    }

    #[inline(always)]
    pub(crate) fn add_swaps(&mut self, n: u64) {
        self.swaps += n;
    }

    pub(crate) fn log_strategy(&mut self, strategy: Strategy, left: usize, right: usize) {
        tracing::debug!(
            strategy = strategy.name(),
            left,
            right,
            size = right - left,
            "using {strategy} for range [{left}:{right}]"
        );
        self.strategy_switches.push(StrategySwitch {
            strategy,
            range: (left, right),
            size: right - left,
        });
    }

    pub(crate) fn set_execution_time(&mut self, elapsed: Duration) {
        self.execution_time = elapsed;
    }
}

impl fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SmartSort Statistics ===")?;
        writeln!(
            f,
            "Execution Time: {:.6} seconds",
            self.execution_time.as_secs_f64()
        )?;
        writeln!(f, "Comparisons: {}", self.comparisons)?;
        writeln!(f, "Swaps: {}", self.swaps)?;
        write!(f, "\nStrategy Usage:")?;
        for (strategy, count) in self.strategy_usage() {
            write!(f, "\n  {strategy}: {count} time(s)")?;
        }
        Ok(())
    }
}

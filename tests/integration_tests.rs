use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smartsort::prelude::*;

fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

fn sorted_copy(data: &[i64]) -> Vec<i64> {
    let mut expected = data.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_empty() {
    let mut sorter = SmartSort::new();
    assert!(sorter.sort(&[]).is_empty());

    let stats = sorter.get_stats();
    assert_eq!(stats.comparisons(), 0);
    assert_eq!(stats.swaps(), 0);
    assert!(stats.strategy_switches().is_empty());
}

#[test]
fn test_single_element() {
    let mut sorter = SmartSort::new();
    assert_eq!(sorter.sort(&[42]), vec![42]);

    let stats = sorter.get_stats();
    assert_eq!(stats.comparisons(), 0);
    assert!(stats.strategy_switches().is_empty());
}

#[test]
fn test_stats_before_first_sort() {
    let sorter = SmartSort::new();
    let stats = sorter.get_stats();
    assert_eq!(stats, SortStatistics::default());
}

#[test]
fn test_basic_cases() {
    let mut sorter = SmartSort::new();

    let cases: Vec<Vec<i64>> = vec![
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
        vec![64, 34, 25, 12, 22, 11, 90, 88, 45, 50],
        vec![5, 2, 8, 2, 9, 1, 5, 5],
        vec![3, -1, 4, -5, 2, -3, 0],
        vec![1, 2, 3, 4, 5, 7, 6, 8, 9, 10],
        vec![5, 2, 8, 1, 9, 3, 7, 4, 6, 0],
        vec![1000, 50, 2000, 100, 3000, 150, 4000, 200],
        vec![i64::MAX, i64::MIN, 0, -1, 1, i64::MIN, i64::MAX],
    ];

    for case in cases {
        assert_eq!(sorter.sort(&case), sorted_copy(&case), "input {case:?}");
    }
}

#[test]
fn test_large_reversed() {
    let data: Vec<i64> = (1..=1000).rev().collect();
    let mut sorter = SmartSort::new();
    assert_eq!(sorter.sort(&data), (1..=1000).collect::<Vec<i64>>());
}

#[test]
fn test_reverse_twenty_routes_through_insertion_sort() {
    let data: Vec<i64> = (1..=20).rev().collect();
    let mut sorter = SmartSort::new();
    assert_eq!(sorter.sort(&data), (1..=20).collect::<Vec<i64>>());

    let stats = sorter.get_stats();
    assert!(stats.strategies().all(|s| s == Strategy::InsertionSort));
    assert_eq!(stats.strategy_switches()[0].range, (0, 20));
    // Every element shifts all the way to the front: 0 + 1 + ... + 19.
    assert_eq!(stats.comparisons(), 190);
    assert_eq!(stats.swaps(), 190);
}

#[test]
fn test_input_is_not_mutated() {
    let original = vec![5, 2, 8, 1, 9];
    let data = original.clone();
    let mut sorter = SmartSort::new();
    let _ = sorter.sort(&data);
    assert_eq!(data, original);
}

#[test]
fn test_small_input_logs_insertion_only() {
    let mut sorter = SmartSort::new();
    sorter.sort(&[5, 2, 8, 1, 9]);

    let stats = sorter.get_stats();
    assert_eq!(
        stats.strategy_switches(),
        &[StrategySwitch {
            strategy: Strategy::InsertionSort,
            range: (0, 5),
            size: 5,
        }]
    );
    assert!(stats.comparisons() > 0);
    assert!(stats.swaps() > 0);
}

#[test]
fn test_nearly_sorted_uses_insertion() {
    let data = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21,
    ];
    let mut sorter = SmartSort::new();
    sorter.sort(&data);
    assert!(sorter.get_stats().used(Strategy::InsertionSort));
}

#[test]
fn test_random_sparse_uses_merge() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let data: Vec<i64> = (0..100).map(|_| rng.random_range(1..=10_000)).collect();
        let mut sorter = SmartSort::new();
        let sorted = sorter.sort(&data);
        assert_eq!(sorted, sorted_copy(&data));
        assert!(sorter.get_stats().used(Strategy::MergeSort));
    }
}

#[test]
fn test_dense_range_uses_radix() {
    let data = [5, 2, 8, 1, 9, 3, 7, 4, 6, 0].repeat(5);
    let mut sorter = SmartSort::new();
    let sorted = sorter.sort(&data);
    assert_eq!(sorted, sorted_copy(&data));

    let stats = sorter.get_stats();
    assert!(stats.used(Strategy::RadixSort));
    assert_eq!(stats.strategy_switches()[0].range, (0, 50));
}

#[test]
fn test_halves_pick_their_own_strategy() {
    // Dense non-negative left half, sparse negative right half.
    let mut data = [5, 2, 8, 1, 9, 3, 7, 4, 6, 0].repeat(5);
    data.extend((0..50).map(|i: i64| -((i * 7919) % 10_007) * 100));

    let mut sorter = SmartSort::new();
    assert_eq!(sorter.sort(&data), sorted_copy(&data));

    let stats = sorter.get_stats();
    let switches = stats.strategy_switches();
    assert_eq!(switches[0].strategy, Strategy::MergeSort);
    assert_eq!(switches[0].range, (0, 100));
    assert_eq!(switches[1].strategy, Strategy::RadixSort);
    assert_eq!(switches[1].range, (0, 50));
    assert_eq!(switches[2].strategy, Strategy::MergeSort);
    assert_eq!(switches[2].range, (50, 100));
    assert!(stats.used(Strategy::InsertionSort));
}

#[test]
fn test_stats_reset_between_calls() {
    let mut sorter = SmartSort::new();
    let data: Vec<i64> = (0..500).rev().collect();
    sorter.sort(&data);
    let first = sorter.get_stats();

    sorter.sort(&[2, 1]);
    let second = sorter.get_stats();
    assert!(second.comparisons() < first.comparisons());
    assert_eq!(second.strategy_switches().len(), 1);
}

#[test]
fn test_returned_stats_are_a_copy() {
    let mut sorter = SmartSort::new();
    sorter.sort(&[3, 2, 1]);
    let snapshot = sorter.get_stats();

    sorter.sort(&[]);
    assert_eq!(snapshot.strategy_switches().len(), 1);
    assert!(sorter.get_stats().strategy_switches().is_empty());
}

#[test]
fn test_custom_config() {
    let config = SmartSortConfig {
        insertion_threshold: 4,
        presorted_threshold: 1.0,
        ..SmartSortConfig::default()
    };
    let mut sorter = SmartSort::with_config(config).unwrap();
    let data: Vec<i64> = (0..64).map(|i| (i * 37) % 101 - 50).collect();
    assert_eq!(sorter.sort(&data), sorted_copy(&data));
    assert!(
        sorter
            .get_stats()
            .strategy_switches()
            .iter()
            .filter(|s| s.strategy == Strategy::InsertionSort)
            .all(|s| s.size <= 4)
    );

    let invalid = SmartSortConfig {
        presorted_threshold: 2.0,
        ..SmartSortConfig::default()
    };
    assert!(matches!(
        SmartSort::with_config(invalid),
        Err(SortError::InvalidConfig(_))
    ));
}

#[test]
fn test_serialized_statistics_shape() {
    let mut sorter = SmartSort::new();
    sorter.sort(&[5, 2, 8, 1, 9]);

    let json = serde_json::to_value(sorter.get_stats()).unwrap();
    assert!(json["comparisons"].as_u64().unwrap() > 0);
    assert!(json["swaps"].is_u64());
    assert!(json["execution_time"].is_f64());

    let switch = &json["strategy_switches"][0];
    assert_eq!(switch["strategy"], "InsertionSort");
    assert_eq!(switch["range"], serde_json::json!([0, 5]));
    assert_eq!(switch["size"], 5);
}

#[test]
fn test_serialized_characteristics() {
    let chars = InputCharacteristics::analyze(&[4, 4, 4]);
    let json = serde_json::to_value(&chars).unwrap();
    assert_eq!(json["distribution_type"], "uniform");
    assert_eq!(json["has_duplicates"], true);
    assert_eq!(json["data_range"], serde_json::json!([4, 4]));
}

#[test]
fn test_fuzz_random() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sorter = SmartSort::new();

    for _ in 0..300 {
        let len = rng.random_range(0..2000);
        let span: i64 = match rng.random_range(0..4) {
            0 => 10,
            1 => len as i64 + 1,
            2 => 100_000,
            _ => i64::MAX / 2,
        };
        let allow_negative = rng.random_bool(0.5);
        let data: Vec<i64> = (0..len)
            .map(|_| {
                if allow_negative {
                    rng.random_range(-span..=span)
                } else {
                    rng.random_range(0..=span)
                }
            })
            .collect();

        let sorted = sorter.sort(&data);
        assert_eq!(sorted, sorted_copy(&data));
        assert_eq!(sorter.sort(&sorted), sorted, "sorting is idempotent");

        let stats = sorter.get_stats();
        if len >= 1 {
            assert_eq!(stats.strategy_switches().is_empty(), len == 1);
        }
    }
}

#[test]
fn test_fuzz_structured() {
    let mut rng = rand::rng();
    let mut sorter = SmartSort::new();

    for _ in 0..50 {
        let len = rng.random_range(21..1500);

        // Nearly sorted.
        let mut data: Vec<i64> = (0..len as i64).collect();
        for _ in 0..5 {
            let (i, j) = (rng.random_range(0..len), rng.random_range(0..len));
            data.swap(i, j);
        }
        let sorted = sorter.sort(&data);
        assert!(is_sorted(&sorted));
        assert_eq!(sorted, sorted_copy(&data));

        // Many duplicates.
        let data: Vec<i64> = (0..len).map(|_| rng.random_range(0..4)).collect();
        assert_eq!(sorter.sort(&data), sorted_copy(&data));

        // Organ pipe.
        let half = len as i64 / 2;
        let data: Vec<i64> = (0..half).chain((0..half).rev()).collect();
        assert_eq!(sorter.sort(&data), sorted_copy(&data));
    }
}

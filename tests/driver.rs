//! Tests of the benchmark driver and averaging harness.

use test_case::test_case;

use linear_search_bench::averager::average;
use linear_search_bench::search::{self, Algorithm, SearchError};
use linear_search_bench::{BenchConfig, BenchError, BenchmarkDriver};

fn quick_config() -> BenchConfig {
    BenchConfig {
        repetitions: 3,
        ..BenchConfig::default()
    }
}

#[test]
fn dummy_prices_single_size() {
    let prices = vec![1_000_000, 1_200_000, 1_500_000];
    let report = BenchmarkDriver::new(prices, 1_200_000, quick_config())
        .with_sizes(vec![3])
        .run()
        .unwrap();

    assert_eq!(report.target, 1_200_000);
    assert_eq!(report.sizes, vec![3]);
    assert_eq!(report.found, vec![Some(1)]);
    assert_eq!(report.iterative_secs.len(), 1);
    assert_eq!(report.recursive_secs.len(), 1);
    assert!(report.iterative_secs[0] >= 0.0);
    assert!(report.recursive_secs[0] >= 0.0);
}

#[test]
fn short_list_measured_once_at_full_length() {
    let prices = vec![1_000_000, 1_200_000, 1_500_000];
    let report = BenchmarkDriver::new(prices, 1_500_000, quick_config())
        .run()
        .unwrap();
    assert_eq!(report.sizes, vec![3]);
    assert_eq!(report.found, vec![Some(2)]);
}

#[test]
fn empty_prices_is_a_trivial_run() {
    let report = BenchmarkDriver::new(Vec::new(), 1_000_000, quick_config())
        .run()
        .unwrap();
    assert!(report.is_empty());
    assert!(report.iterative_secs.is_empty());
    assert!(report.recursive_secs.is_empty());
    assert!(report.found.is_empty());
}

#[test]
fn series_stay_parallel() {
    let prices: Vec<i64> = (0..1200).map(|i| 1_000_000 + i).collect();
    let config = BenchConfig {
        repetitions: 2,
        size_min: 10,
        size_step: 100,
        ..BenchConfig::default()
    };
    let report = BenchmarkDriver::new(prices, 1_000_050, config).run().unwrap();
    assert_eq!(report.len(), 12);
    assert_eq!(report.iterative_secs.len(), report.len());
    assert_eq!(report.recursive_secs.len(), report.len());
    assert_eq!(report.found[0], None);
    assert!(report.found[1..].iter().all(|&f| f == Some(50)));
}

#[test]
fn absent_target_never_matches_and_recursion_fails_loudly() {
    let prices: Vec<i64> = (0..2000).map(|i| 2_000_000 + i).collect();
    let driver = BenchmarkDriver::new(prices, 7, quick_config());
    // 7 is absent, so the default target stands in, and it is absent too
    assert_eq!(driver.target(), 1_000_000);

    for size in [10, 500, 2000] {
        let prefix = &driver.prices()[..size];
        assert_eq!(search::search_iterative(prefix, &driver.target()), None);
    }

    match driver.with_sizes(vec![10, 500, 2000]).run() {
        Ok(report) => assert!(report.found.iter().all(Option::is_none)),
        Err(BenchError::SearchFailed { algorithm, size, source }) => {
            assert_eq!(algorithm, Algorithm::Recursive);
            assert_eq!(size, 2000);
            assert!(matches!(source, SearchError::RecursionLimitExceeded { .. }));
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failure_message_names_algorithm_and_size() {
    let prices: Vec<i64> = (0..100).collect();
    let config = BenchConfig {
        recursion_limit: 20,
        ..quick_config()
    };
    let err = BenchmarkDriver::new(prices, 99, config)
        .with_sizes(vec![10, 100])
        .run()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "recursive search failed at input size 100: maximum recursion depth of 20 exceeded at position 20"
    );
}

#[test_case(BenchConfig { repetitions: 0, ..BenchConfig::default() }, BenchError::ZeroRepetitions; "repetitions")]
#[test_case(BenchConfig { size_step: 0, ..BenchConfig::default() }, BenchError::ZeroSizeStep; "step")]
#[test_case(BenchConfig { recursion_limit: 0, ..BenchConfig::default() }, BenchError::ZeroRecursionLimit; "limit")]
fn bad_config_fails_before_measuring(config: BenchConfig, expected: BenchError) {
    let err = BenchmarkDriver::new(vec![1, 2, 3], 2, config).run().unwrap_err();
    assert_eq!(err, expected);
    assert!(err.is_config());
}

#[test]
fn averaging_contract() {
    let prices = vec![1_000_000, 1_200_000, 1_500_000];
    let iterative = |items: &[i64], target: &i64| -> Result<Option<usize>, SearchError> {
        Ok(search::search_iterative(items, target))
    };

    assert_eq!(
        average(iterative, &prices, &1_200_000, 0),
        Err(BenchError::ZeroRepetitions)
    );

    let one = average(iterative, &prices, &1_200_000, 1).unwrap();
    assert_eq!(one.samples, 1);
    assert_eq!(one.found, Some(1));

    for n in [1, 5, 10] {
        let m = average(iterative, &prices, &1_200_000, n).unwrap();
        assert!(m.mean_secs >= 0.0);
        assert_eq!(m.samples, n);
    }
}

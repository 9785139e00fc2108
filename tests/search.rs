//! Tests of the two linear search variants.

use rand::prelude::*;
use test_case::test_case;

use linear_search_bench::search::{
    DEFAULT_RECURSION_LIMIT, SearchError, search_iterative, search_recursive,
    search_recursive_with_limit,
};

#[test_case(&[], 5, None; "empty")]
#[test_case(&[5], 5, Some(0); "single hit")]
#[test_case(&[4], 5, None; "single miss")]
#[test_case(&[1, 2, 3], 3, Some(2); "last")]
#[test_case(&[7, 1, 7, 7], 7, Some(0); "first of duplicates")]
#[test_case(&[1, 7, 2, 7], 7, Some(1); "duplicates after start")]
#[test_case(&[1_000_000, 1_200_000, 1_500_000], 1_200_000, Some(1); "dummy prices")]
#[test_case(&[1_000_000, 1_200_000, 1_500_000], 999, None; "absent")]
fn both_variants_agree(prices: &[i64], target: i64, expected: Option<usize>) {
    assert_eq!(search_iterative(prices, &target), expected);
    assert_eq!(search_recursive(prices, &target, 0), Ok(expected));
}

#[test]
fn random_inputs_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let len = rng.gen_range(0..200);
        let prices: Vec<i64> = (0..len).map(|_| rng.gen_range(0..50)).collect();
        let target = rng.gen_range(0..60);
        let iterative = search_iterative(&prices, &target);
        assert_eq!(search_recursive(&prices, &target, 0), Ok(iterative));
        if let Some(i) = iterative {
            assert_eq!(prices[i], target);
            assert!(!prices[..i].contains(&target));
        } else {
            assert!(!prices.contains(&target));
        }
    }
}

#[test]
fn works_for_non_integer_items() {
    let names = ["kost-a", "kost-b", "kost-a"];
    assert_eq!(search_iterative(&names, &"kost-a"), Some(0));
    assert_eq!(search_recursive(&names, &"kost-b", 0), Ok(Some(1)));
}

#[test]
fn only_recursive_exhausts_its_depth() {
    let prices: Vec<i64> = (0..2000).collect();
    assert_eq!(search_iterative(&prices, &-1), None);
    assert_eq!(
        search_recursive(&prices, &-1, 0),
        Err(SearchError::RecursionLimitExceeded {
            limit: DEFAULT_RECURSION_LIMIT,
            position: DEFAULT_RECURSION_LIMIT,
        })
    );
    // early hits stay within the limit
    assert_eq!(search_recursive(&prices, &12, 0), Ok(Some(12)));
}

#[test]
fn raised_limit_reaches_further() {
    let prices: Vec<i64> = (0..1500).collect();
    let result = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(move || search_recursive_with_limit(&prices, &1499, 0, 5000))
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(result, Ok(Some(1499)));
}

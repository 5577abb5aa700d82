use pretty_assertions::assert_eq;

use super::*;
use crate::test_util::{same_multiset, seeded};

fn sort_with(items: &mut [i64], seed: u64, options: SortOptions) -> Result<SortReport, SortError> {
    bogo_sort(items, &mut seeded(seed), &options)
}

#[test]
fn test_sort_reference_example() {
    let mut items = [5, 3, 2, 4, 1];
    let report = sort_with(&mut items, 0, SortOptions::default()).unwrap();
    assert_eq!(items, [1, 2, 3, 4, 5]);
    assert!(report.shuffles > 0);
    assert!(report.comparisons >= report.shuffles + 4);
}

#[test]
fn test_sort_empty() {
    let mut items: [i64; 0] = [];
    let report = sort_with(&mut items, 0, SortOptions::default()).unwrap();
    assert!(items.is_empty());
    assert_eq!(report, SortReport { shuffles: 0, comparisons: 0 });
}

#[test]
fn test_sort_single() {
    let mut items = [1];
    let report = sort_with(&mut items, 0, SortOptions::default()).unwrap();
    assert_eq!(items, [1]);
    assert_eq!(report.shuffles, 0);
}

#[test]
fn test_sort_with_duplicates() {
    let mut items = [2, 2, 1];
    sort_with(&mut items, 3, SortOptions::default()).unwrap();
    assert_eq!(items, [1, 2, 2]);
}

#[test]
fn test_sort_already_sorted_is_untouched() {
    let mut items = [1, 2, 2, 3, 8, 13];
    let report = sort_with(&mut items, 4, SortOptions::default()).unwrap();
    assert_eq!(items, [1, 2, 2, 3, 8, 13]);
    assert_eq!(report, SortReport { shuffles: 0, comparisons: 5 });
}

#[test]
fn test_sort_fisher_yates() {
    let options = SortOptions {
        strategy: ShuffleStrategy::FisherYates,
        max_shuffles: None,
    };
    let mut items = [9, -1, 4, 4, 0, 6];
    sort_with(&mut items, 11, options).unwrap();
    assert_eq!(items, [-1, 0, 4, 4, 6, 9]);
}

#[test]
fn test_sort_is_reproducible() {
    let mut a = [5, 3, 2, 4, 1];
    let mut b = a;
    let report_a = sort_with(&mut a, 1234, SortOptions::default()).unwrap();
    let report_b = sort_with(&mut b, 1234, SortOptions::default()).unwrap();
    assert_eq!(report_a, report_b);
}

#[test]
fn test_zero_limit_leaves_unsorted_input_untouched() {
    let options = SortOptions {
        max_shuffles: Some(0),
        ..SortOptions::default()
    };
    let mut items = [3, 1, 2];
    let err = sort_with(&mut items, 0, options).unwrap_err();
    assert_eq!(err, SortError::ShuffleLimitExceeded { limit: 0 });
    assert_eq!(items, [3, 1, 2]);
}

#[test]
fn test_limit_does_not_apply_to_sorted_input() {
    let options = SortOptions {
        max_shuffles: Some(0),
        ..SortOptions::default()
    };
    let mut items = [1, 2, 3];
    assert_eq!(sort_with(&mut items, 0, options), Ok(SortReport { shuffles: 0, comparisons: 2 }));
}

#[test]
fn test_limit_exceeded_keeps_a_permutation() {
    // 12 distinct elements: the odds of sorting within 10 shuffles are negligible.
    let original: Vec<i64> = (0..12).rev().collect();
    let mut items = original.clone();
    let options = SortOptions {
        max_shuffles: Some(10),
        ..SortOptions::default()
    };
    let err = sort_with(&mut items, 8, options).unwrap_err();
    assert_eq!(err, SortError::ShuffleLimitExceeded { limit: 10 });
    assert!(same_multiset(&items, &original));
}

#[test]
fn test_limit_error_message() {
    let err = SortError::ShuffleLimitExceeded { limit: 3 };
    assert_eq!(err.to_string(), "sequence still unsorted after 3 shuffle(s)");
}

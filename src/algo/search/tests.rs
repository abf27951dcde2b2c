#![cfg(test)]

use super::*;
use crate::iter::{BidirectionalView, ForwardView, RandomAccessView, ReverseView};

#[test]
fn test_find_variants() {
    let values = [4, 8, 15, 16, 23, 42];
    assert_eq!(find(&values[..], 0, 6, &16), 3);
    assert_eq!(find(&values[..], 0, 3, &16), 3);
    assert_eq!(find_if(&values[..], 0, 6, |v| v % 2 == 1), 2);
    assert_eq!(find_if(&ForwardView(&values[..]), 0, 6, |v| *v > 100), 6);

    let reversed = ReverseView(&values[..]);
    assert_eq!(find_if(&reversed, 6, 0, |v| v % 2 == 1), 5, "23 is the last odd value.");
}

#[test]
fn test_adjacent_and_count() {
    let values = [1, 1, 2, 3, 3, 3];
    assert_eq!(adjacent_find(&values[..], 0, 6), 0);
    assert_eq!(adjacent_find(&values[..], 1, 6), 3);
    assert_eq!(adjacent_find(&values[..], 0, 0), 0);
    assert_eq!(adjacent_find_by(&values[..], 0, 6, |a, b| b < a), 6);

    assert_eq!(count(&values[..], 0, 6, &3), 3);
    assert_eq!(count_if(&values[..], 0, 6, |v| *v < 3), 3);

    let words = ["x", "y", "x"].map(String::from);
    assert_eq!(count(&words[..], 0, 3, "x"), 2);
}

#[test]
fn test_find_first_of() {
    let values = [5, 6, 7, 8];
    let targets = [8, 7];
    assert_eq!(find_first_of(&values[..], 0, 4, &targets[..], 0, 2), 2);
    assert_eq!(find_first_of(&values[..], 0, 4, &targets[..], 0, 0), 4);
    assert_eq!(find_first_of_by(&values[..], 0, 4, &targets[..], 0, 2, |a, b| a * 2 == *b), 4);
}

#[test]
fn test_min_max_element() {
    let values = [2, 0, 5, 0, 5];
    assert_eq!(min_element(&values[..], 0, 5), 1, "The first of equal minimums.");
    assert_eq!(max_element(&values[..], 0, 5), 2, "The first of equal maximums.");
    assert_eq!(min_element(&values[..], 2, 2), 2);
    assert_eq!(max_element_by(&values[..], 0, 5, |a, b| a > b), 1);
}

#[test]
fn test_search() {
    let text = [1, 2, 1, 2, 3, 1, 2, 3];
    let pattern = [1, 2, 3];
    assert_eq!(search(&text[..], 0, 8, &pattern[..], 0, 3), 2);
    assert_eq!(search(&ForwardView(&text[..]), 0, 8, &pattern[..], 0, 3), 2);
    assert_eq!(search(&text[..], 0, 8, &pattern[..], 0, 0), 0);
    assert_eq!(search(&text[..], 0, 2, &pattern[..], 0, 3), 2, "A longer pattern never occurs.");
    assert_eq!(search(&text[..], 3, 8, &pattern[..], 0, 3), 5);
    assert_eq!(search_by(&text[..], 0, 8, &pattern[..], 0, 2, |a, b| a + 1 == *b), 8);
}

#[test]
fn test_search_n() {
    let values = [0, 3, 3, 0, 3, 3, 3, 0];
    assert_eq!(search_n(&values[..], 0, 8, 2, &3), 1);
    assert_eq!(search_n(&values[..], 0, 8, 3, &3), 4);
    assert_eq!(search_n(&values[..], 0, 8, 4, &3), 8);
    assert_eq!(search_n(&values[..], 0, 8, 0, &3), 0);
    assert_eq!(search_n(&ForwardView(&values[..]), 2, 8, 1, &0), 3);
    assert_eq!(search_n_by(&values[..], 0, 8, 3, &2, |a, b| a > b), 4);
}

#[test]
fn test_find_end_strategies_agree() {
    let text = [1, 2, 3, 1, 2, 3, 1, 2];
    let pattern = [1, 2, 3];

    // Backward search, both sides at least bidirectional.
    assert_eq!(find_end(&text[..], 0, 8, &pattern[..], 0, 3), 3);
    assert_eq!(find_end(&BidirectionalView(&text[..]), 0, 8, &RandomAccessView(&pattern[..]), 0, 3), 3);
    // Repeated forward search.
    assert_eq!(find_end(&ForwardView(&text[..]), 0, 8, &pattern[..], 0, 3), 3);
    assert_eq!(find_end(&text[..], 0, 8, &ForwardView(&pattern[..]), 0, 3), 3);

    let absent = [3, 3];
    assert_eq!(find_end(&text[..], 0, 8, &absent[..], 0, 2), 8);
    assert_eq!(find_end(&ForwardView(&text[..]), 0, 8, &absent[..], 0, 2), 8);
    assert_eq!(find_end(&text[..], 0, 8, &absent[..], 0, 0), 8);

    // A match at the very start is found by both strategies.
    assert_eq!(find_end(&text[..], 0, 5, &pattern[..], 0, 3), 0);
    assert_eq!(find_end(&ForwardView(&text[..]), 0, 5, &pattern[..], 0, 3), 0);
}

#[test]
fn test_find_end_by() {
    let text = ["a", "B", "b", "A"].map(String::from);
    let pattern = ["b"];
    let found = find_end_by(&text[..], 0, 4, &pattern[..], 0, 1, |a, b| a.eq_ignore_ascii_case(b));
    assert_eq!(found, 2);
}

#[test]
fn test_bounds() {
    let values = [1, 3, 3, 5, 7];
    let seq = &values[..];
    assert_eq!(lower_bound(seq, 0, 5, &0), 0);
    assert_eq!(lower_bound(seq, 0, 5, &3), 1);
    assert_eq!(upper_bound(seq, 0, 5, &3), 3);
    assert_eq!(lower_bound(seq, 0, 5, &8), 5);
    assert_eq!(upper_bound(seq, 0, 5, &7), 5);
    assert_eq!(equal_range(seq, 0, 5, &3), (1, 3));
    assert_eq!(equal_range(seq, 0, 5, &4), (3, 3));
    assert!(binary_search(seq, 0, 5, &5));
    assert!(!binary_search(seq, 0, 5, &6));

    let forward = ForwardView(&values[..]);
    assert_eq!(lower_bound(&forward, 0, 5, &3), 1);
    assert_eq!(upper_bound(&forward, 0, 5, &3), 3);
    assert_eq!(equal_range(&forward, 0, 5, &7), (4, 5));
    assert!(binary_search(&forward, 0, 5, &1));

    let empty: [i32; 0] = [];
    assert_eq!(equal_range(&empty[..], 0, 0, &1), (0, 0));
    assert!(!binary_search(&empty[..], 0, 0, &1));
}

#[test]
fn test_bounds_by_descending() {
    let values = [9, 7, 7, 4, 1];
    let greater = |a: &i32, b: &i32| a > b;
    assert_eq!(lower_bound_by(&values[..], 0, 5, &7, greater), 1);
    assert_eq!(upper_bound_by(&values[..], 0, 5, &7, greater), 3);
    assert_eq!(equal_range_by(&values[..], 0, 5, &7, greater), (1, 3));
    assert!(binary_search_by(&values[..], 0, 5, &4, greater));
}

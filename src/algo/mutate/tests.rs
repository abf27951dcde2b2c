#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::iter::{BackInserter, BidirectionalView, ForwardView, RandomAccessView, Writer};

#[test]
fn test_for_each_and_transform() {
    let values = [1, 2, 3, 4];
    let mut seen = Vec::new();
    let _ = for_each(&ForwardView(&values[..]), 1, 4, |v| seen.push(*v));
    assert_eq!(seen, [2, 3, 4]);

    let mut labels: Vector<String> = Vector::new();
    transform(&values[..], 0, 2, BackInserter::new(&mut labels), |v| format!("#{v}"));
    assert_eq!(&*labels, &["#1", "#2"]);

    let other = [10, 20, 30, 40];
    let mut sums = [0; 4];
    let end = transform2(&values[..], 0, 4, &other[..], 0, Writer::new(&mut sums[..], 0), |a, b| a + b)
        .into_position();
    assert_eq!(end, 4);
    assert_eq!(sums, [11, 22, 33, 44]);
}

#[test]
fn test_generate() {
    let mut values = [0; 4];
    let mut next = 1;
    generate(&mut values[..], 1, 4, || {
        next *= 2;
        next
    });
    assert_eq!(values, [0, 2, 4, 8]);

    let mut out = Vector::new();
    let mut counter = 0;
    generate_n(BackInserter::new(&mut out), 3, || {
        counter += 1;
        counter
    });
    assert_eq!(&*out, &[1, 2, 3]);
}

#[test]
fn test_replace_family() {
    let mut words = ["a", "b", "a", "c"].map(String::from);
    replace(&mut words[..], 0, 4, "a", &"z".to_string());
    assert_eq!(words, ["z", "b", "z", "c"]);

    let mut values = [1, 5, 2, 8, 3];
    replace_if(&mut values[..], 0, 5, |v| *v > 4, &0);
    assert_eq!(values, [1, 0, 2, 0, 3]);

    let mut out = Vector::new();
    replace_copy(&values[..], 0, 5, BackInserter::new(&mut out), &0, &7);
    assert_eq!(&*out, &[1, 7, 2, 7, 3]);
    assert_eq!(values, [1, 0, 2, 0, 3], "The source is untouched.");

    let mut out = Vector::new();
    replace_copy_if(&values[..], 0, 5, BackInserter::new(&mut out), |v| v % 2 == 1, &-1);
    assert_eq!(&*out, &[-1, 0, 2, 0, -1]);
}

#[test]
fn test_remove_family() {
    let mut values = [3, 1, 3, 3, 2, 3, 4];
    let end = remove(&mut values[..], 0, 7, &3);
    assert_eq!(end, 3);
    assert_eq!(values[..3], [1, 2, 4]);
    assert!(values[3..].iter().all(|v| *v == 3), "Removed values are kept past the end.");

    let mut values = [1, 2, 3, 4, 5, 6];
    let end = remove_if(&mut ForwardView(&mut values[..]), 0, 6, |v| v % 3 == 0);
    assert_eq!(end, 4);
    assert_eq!(values[..4], [1, 2, 4, 5]);

    let mut nothing = [1, 2];
    assert_eq!(remove(&mut nothing[..], 0, 2, &9), 2);

    let source = [0, 1, 0, 2];
    let mut out = Vector::new();
    remove_copy(&source[..], 0, 4, BackInserter::new(&mut out), &0);
    assert_eq!(&*out, &[1, 2]);

    let mut out = Vector::new();
    remove_copy_if(&source[..], 0, 4, BackInserter::new(&mut out), |v| *v > 0);
    assert_eq!(&*out, &[0, 0]);
}

#[test]
fn test_unique_family() {
    let mut values = [1, 1, 1, 2, 3, 3, 1];
    let end = unique(&mut values[..], 0, 7);
    assert_eq!(values[..end], [1, 2, 3, 1]);

    let mut distinct = [1, 2, 3];
    assert_eq!(unique(&mut distinct[..], 0, 3), 3);

    let mut empty: [i32; 0] = [];
    assert_eq!(unique(&mut empty[..], 0, 0), 0);

    let mut words = ["ab", "Ab", "c", "C", "ab"].map(String::from);
    let end = unique_by(&mut ForwardView(&mut words[..]), 0, 5, |a, b| a.eq_ignore_ascii_case(b));
    assert_eq!(words[..end], ["ab", "c", "ab"]);

    let source = [4, 4, 5, 4, 4];
    let mut out = Vector::new();
    unique_copy(&ForwardView(&source[..]), 0, 5, BackInserter::new(&mut out));
    assert_eq!(&*out, &[4, 5, 4]);

    // Runs are compared against their first value, not the previous one.
    let mut out = Vector::new();
    unique_copy_by(&source[..], 0, 5, BackInserter::new(&mut out), |kept, v| v - kept <= 1);
    assert_eq!(&*out, &[4]);
}

#[test]
fn test_reverse_strategies() {
    for len in 0..6 {
        let expected: Vec<i32> = (0..len).rev().collect();

        let mut values: Vec<i32> = (0..len).collect();
        reverse(&mut values[..], 0, len as usize);
        assert_eq!(values, expected);

        let mut values: Vec<i32> = (0..len).collect();
        reverse(&mut BidirectionalView(&mut values[..]), 0, len as usize);
        assert_eq!(values, expected);
    }

    let values = [1, 2, 3];
    let mut out = Vector::new();
    reverse_copy(&values[..], 0, 3, BackInserter::new(&mut out));
    assert_eq!(&*out, &[3, 2, 1]);
}

#[test]
fn test_rotate_every_strategy() {
    for middle in 0..=7 {
        let mut expected: Vec<i32> = (0..7).collect();
        expected.rotate_left(middle);
        let new_first = 7 - middle;
        let new_first = if middle == 0 { 7 } else { new_first };

        let mut values: Vec<i32> = (0..7).collect();
        assert_eq!(rotate(&mut values[..], 0, middle, 7), new_first);
        assert_eq!(values, expected);

        let mut values: Vec<i32> = (0..7).collect();
        assert_eq!(rotate(&mut ForwardView(&mut values[..]), 0, middle, 7), new_first);
        assert_eq!(values, expected);

        let mut values: Vec<i32> = (0..7).collect();
        assert_eq!(rotate(&mut BidirectionalView(&mut values[..]), 0, middle, 7), new_first);
        assert_eq!(values, expected);

        let mut values: Vec<i32> = (0..7).collect();
        assert_eq!(rotate(&mut RandomAccessView(&mut values[..]), 0, middle, 7), new_first);
        assert_eq!(values, expected);
    }
}

#[test]
fn test_rotate_copy() {
    let values = [1, 2, 3, 4, 5];
    let mut out = Vector::new();
    rotate_copy(&values[..], 0, 3, 5, BackInserter::new(&mut out));
    assert_eq!(&*out, &[4, 5, 1, 2, 3]);
}

#[test]
fn test_swap_ranges() {
    let mut a = ["a", "b"].map(String::from);
    let mut b = ["x", "y", "z"].map(String::from);
    let end = swap_ranges(&mut a[..], 0, 2, &mut ForwardView(&mut b[..]), 1);
    assert_eq!(end, 3);
    assert_eq!(a, ["y", "z"]);
    assert_eq!(b, ["x", "a", "b"]);
}

#[test]
fn test_partition() {
    let mut values: Vec<i32> = (0..20).collect();
    let split = partition(&mut BidirectionalView(&mut values[..]), 0, 20, |v| v % 3 == 0);
    assert_eq!(split, 7);
    assert!(values[..7].iter().all(|v| v % 3 == 0));
    assert!(values[7..].iter().all(|v| v % 3 != 0));

    let mut none = [1, 2];
    assert_eq!(partition(&mut none[..], 0, 2, |v| *v > 5), 0);
    let mut all = [1, 2];
    assert_eq!(partition(&mut all[..], 0, 2, |v| *v < 5), 2);
}

#[test]
fn test_permutations() {
    let mut values = [1, 2, 2, 3];
    let mut count = 1;
    while next_permutation(&mut values[..], 0, 4) {
        count += 1;
    }
    assert_eq!(count, 12, "Equal values don't produce repeated permutations.");
    assert_eq!(values, [1, 2, 2, 3]);

    let mut values = [3, 2, 1];
    assert!(!next_permutation(&mut BidirectionalView(&mut values[..]), 0, 3));
    assert_eq!(values, [1, 2, 3]);
    assert!(!prev_permutation(&mut values[..], 0, 3));
    assert_eq!(values, [3, 2, 1]);

    let mut values = [1, 3, 2];
    assert!(prev_permutation(&mut values[..], 0, 3));
    assert_eq!(values, [1, 2, 3]);

    let mut values = [1, 2, 3];
    assert!(!next_permutation_by(&mut values[..], 0, 3, |a, b| a > b));
    assert_eq!(values, [3, 2, 1]);

    let mut single = [1];
    assert!(!next_permutation(&mut single[..], 0, 1));
}

#[cfg(feature = "shuffle")]
#[test]
fn test_random_shuffle() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let original: Vec<i32> = (0..50).collect();

    let mut values = original.clone();
    random_shuffle(&mut values[..], 0, 50, &mut StdRng::seed_from_u64(7));
    assert_ne!(values, original);
    let mut sorted = values.clone();
    sorted.sort();
    assert_eq!(sorted, original, "Shuffling is a permutation.");

    let mut again = original.clone();
    random_shuffle(&mut RandomAccessView(&mut again[..]), 0, 50, &mut StdRng::seed_from_u64(7));
    assert_eq!(again, values, "The same seed gives the same order.");

    let mut empty: [i32; 0] = [];
    random_shuffle(&mut empty[..], 0, 0, &mut StdRng::seed_from_u64(7));

    let mut single = [9];
    random_shuffle(&mut single[..], 0, 1, &mut StdRng::seed_from_u64(7));
    assert_eq!(single, [9]);

    let mut seen = [false; 2];
    for seed in 0..64 {
        let mut pair = [0, 1];
        random_shuffle(&mut pair[..], 0, 2, &mut StdRng::seed_from_u64(seed));
        seen[pair[0]] = true;
    }
    assert_eq!(seen, [true, true], "Every position should be reachable by the last swap.");
}

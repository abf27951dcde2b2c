use generic_algo::algo::{
    binary_search, equal_range, inplace_merge, inplace_merge_with, lower_bound, merge, merge_by,
    merge_sort, nth_element, rotate, set_difference, set_intersection, set_union, sort, upper_bound,
    TemporaryBuffer,
};
use generic_algo::collections::adaptor::Stack;
use generic_algo::collections::contiguous::Vector;
use generic_algo::iter::{BackInserter, BidirectionalView};
use proptest::prelude::*;

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort();
    values
}

fn is_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

proptest! {
    #[test]
    fn sort_is_an_idempotent_ascending_permutation(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut once = values.clone();
        let len = once.len();
        sort(&mut once[..], 0, len);
        prop_assert_eq!(&once, &sorted(&values));

        let mut twice = once.clone();
        sort(&mut twice[..], 0, len);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn sort_handles_heavy_duplication(values in prop::collection::vec(0..4_i32, 0..300)) {
        let mut actual = values.clone();
        let len = actual.len();
        sort(&mut actual[..], 0, len);
        prop_assert_eq!(actual, sorted(&values));
    }

    #[test]
    fn merge_sort_matches_sort(values in prop::collection::vec(-50..50_i32, 0..200)) {
        let mut actual = values.clone();
        let len = actual.len();
        merge_sort(&mut BidirectionalView(&mut actual[..]), 0, len);
        prop_assert_eq!(actual, sorted(&values));
    }

    #[test]
    fn nth_element_partitions_around_the_sorted_value(
        values in prop::collection::vec(-100..100_i32, 1..200),
        seed in any::<prop::sample::Index>(),
    ) {
        let nth = seed.index(values.len());
        let mut actual = values.clone();
        let len = actual.len();
        nth_element(&mut actual[..], 0, nth, len);

        let pivot = actual[nth];
        prop_assert_eq!(pivot, sorted(&values)[nth]);
        prop_assert!(actual[..nth].iter().all(|v| *v <= pivot));
        prop_assert!(actual[nth + 1..].iter().all(|v| *v >= pivot));
    }

    #[test]
    fn merge_is_a_stable_ascending_permutation(
        a in prop::collection::vec(0..20_i32, 0..60),
        b in prop::collection::vec(0..20_i32, 0..60),
    ) {
        let a: Vec<(i32, u8)> = sorted(&a).into_iter().map(|key| (key, 0)).collect();
        let b: Vec<(i32, u8)> = sorted(&b).into_iter().map(|key| (key, 1)).collect();

        let mut out = Vector::new();
        merge_by(&a[..], 0, a.len(), &b[..], 0, b.len(), BackInserter::new(&mut out), |x, y| x.0 < y.0);

        let mut expected: Vec<(i32, u8)> = a.iter().chain(&b).copied().collect();
        // A stable sort by key is exactly the stable merge.
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(&out[..], &expected[..]);
    }

    #[test]
    fn merge_of_plain_values_is_ascending(
        a in prop::collection::vec(any::<i32>(), 0..60),
        b in prop::collection::vec(any::<i32>(), 0..60),
    ) {
        let (a, b) = (sorted(&a), sorted(&b));
        let mut out = Vector::new();
        merge(&a[..], 0, a.len(), &b[..], 0, b.len(), BackInserter::new(&mut out));
        prop_assert!(is_ascending(&out));
        prop_assert_eq!(out.len(), a.len() + b.len());
    }

    #[test]
    fn inplace_merge_is_independent_of_the_buffer(
        a in prop::collection::vec(-30..30_i32, 0..80),
        b in prop::collection::vec(-30..30_i32, 0..80),
        cap in 0..100_usize,
    ) {
        let mut values: Vec<i32> = sorted(&a);
        values.extend(sorted(&b));
        let (middle, len) = (a.len(), values.len());

        let mut adaptive = values.clone();
        inplace_merge(&mut adaptive[..], 0, middle, len);

        let mut unbuffered = values.clone();
        inplace_merge_with(&mut unbuffered[..], 0, middle, len, &mut TemporaryBuffer::empty());

        let mut limited = values.clone();
        inplace_merge_with(&mut limited[..], 0, middle, len, &mut TemporaryBuffer::acquire(cap));

        prop_assert_eq!(&adaptive, &sorted(&values));
        prop_assert_eq!(&unbuffered, &adaptive);
        prop_assert_eq!(&limited, &adaptive);
    }

    #[test]
    fn bounds_agree_with_linear_scans(
        values in prop::collection::vec(-20..20_i32, 0..100),
        key in -25..25_i32,
    ) {
        let values = sorted(&values);
        let len = values.len();

        let lower = lower_bound(&values[..], 0, len, &key);
        let upper = upper_bound(&values[..], 0, len, &key);
        prop_assert_eq!(lower, values.iter().position(|v| *v >= key).unwrap_or(len));
        prop_assert_eq!(upper, values.iter().position(|v| *v > key).unwrap_or(len));
        prop_assert_eq!(equal_range(&values[..], 0, len, &key), (lower, upper));
        prop_assert_eq!(
            binary_search(&values[..], 0, len, &key),
            lower != len && !(key < values[lower])
        );
    }

    #[test]
    fn rotation_is_invertible(
        values in prop::collection::vec(any::<u16>(), 0..100),
        seed in any::<prop::sample::Index>(),
    ) {
        let len = values.len();
        let middle = seed.index(len + 1);

        let mut rotated = values.clone();
        let new_first = rotate(&mut rotated[..], 0, middle, len);
        prop_assert_eq!(new_first, len - middle);

        rotate(&mut BidirectionalView(&mut rotated[..]), 0, new_first, len);
        prop_assert_eq!(rotated, values);
    }
}

fn collect(op: impl FnOnce(&mut Vector<i32>)) -> Vec<i32> {
    let mut out = Vector::new();
    op(&mut out);
    out.iter().copied().collect()
}

#[test]
fn set_operations_on_small_sets() {
    let (a, b) = ([1, 3, 5], [3, 4, 5]);

    let union = collect(|out| {
        set_union(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(out));
    });
    let intersection = collect(|out| {
        set_intersection(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(out));
    });
    let difference = collect(|out| {
        set_difference(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(out));
    });

    assert_eq!(union, [1, 3, 4, 5]);
    assert_eq!(intersection, [3, 5]);
    assert_eq!(difference, [1]);
}

#[test]
fn stack_pushes_and_pops_from_the_top() {
    let mut stack = Stack::new();
    for value in [1, 2, 3] {
        stack.push(value);
    }
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.len(), 3);

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.top(), Some(&2));
    assert_eq!(stack.len(), 2);

    let mut other = Stack::new();
    other.push(1);
    other.push(2);
    assert_eq!(stack, other);
}

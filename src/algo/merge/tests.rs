#![cfg(test)]

use std::rc::Rc;

use super::*;
use crate::collections::contiguous::Vector;
use crate::iter::{BackInserter, BidirectionalView, ForwardView, Output, Writer};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

/// Keys paired with their original index, so that stability can be checked.
fn keyed(keys: &[i32]) -> Vec<(i32, usize)> {
    keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect()
}

fn by_key(a: &(i32, usize), b: &(i32, usize)) -> bool {
    a.0 < b.0
}

/// Sorting by key with std's stable sort gives the expected stable result.
fn stable_sorted(values: &[(i32, usize)]) -> Vec<(i32, usize)> {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| v.0);
    sorted
}

#[test]
fn test_merge_is_stable() {
    let a = [(1, 'a'), (3, 'a'), (3, 'b'), (7, 'a')];
    let b = [(0, 'b'), (3, 'c'), (7, 'b'), (8, 'b')];
    let mut out = Vector::new();
    merge_by(&a[..], 0, 4, &b[..], 0, 4, BackInserter::new(&mut out), |x, y| x.0 < y.0);
    assert_eq!(
        &*out,
        &[(0, 'b'), (1, 'a'), (3, 'a'), (3, 'b'), (3, 'c'), (7, 'a'), (7, 'b'), (8, 'b')]
    );
}

#[test]
fn test_merge_mixed_sequences() {
    let a = [2, 4, 6];
    let b = [1, 3, 5, 7, 9];
    let mut dst = [0; 9];

    let end = merge(&ForwardView(&a[..]), 0, 3, &b[..], 0, 5, Writer::new(&mut dst[..], 1))
        .into_position();
    assert_eq!(end, 9);
    assert_eq!(dst, [0, 1, 2, 3, 4, 5, 6, 7, 9]);

    let mut out = Vector::new();
    merge(&a[..], 0, 0, &b[..], 1, 3, BackInserter::new(&mut out));
    assert_eq!(&*out, &[3, 5]);
}

#[test]
fn test_inplace_merge_buffer_paths() {
    // The shorter side is buffered: the first range in the first case, the second in the other.
    let cases: [(&[i32], usize); 2] = [
        (&[1, 4, 4, 9, 0, 2, 4, 4, 5, 8, 10], 4),
        (&[0, 2, 4, 4, 5, 8, 10, 1, 4, 4, 9], 7),
    ];
    for (keys, middle) in cases {
        let input = keyed(keys);
        let len = input.len();

        let mut values = input.clone();
        inplace_merge_by(&mut values[..], 0, middle, len, by_key);
        assert_eq!(values, stable_sorted(&input));
    }
}

#[test]
fn test_inplace_merge_buffer_sizes_agree() {
    let keys: Vec<i32> = (0..40).map(|i| (i * 7) % 13).collect();
    let mut input = keyed(&keys);
    input[..25].sort_by_key(|v| v.0);
    input[25..].sort_by_key(|v| v.0);
    let expected = stable_sorted(&input);

    for cap in [0, 1, 3, 10, 15, 25, 40] {
        let mut values = input.clone();
        let mut buffer = TemporaryBuffer::acquire(cap);
        inplace_merge_with_by(&mut values[..], 0, 25, 40, &mut buffer, by_key);
        assert_eq!(values, expected, "Failed with a buffer of {cap} values.");
        assert!(buffer.is_empty());
    }
}

#[test]
fn test_inplace_merge_bidirectional() {
    let mut words = ["b", "d", "f", "a", "c", "e", "g"].map(String::from);
    inplace_merge(&mut BidirectionalView(&mut words[..]), 0, 3, 7);
    assert_eq!(words, ["a", "b", "c", "d", "e", "f", "g"]);

    let mut words = ["b", "d", "f", "a", "c", "e", "g"].map(String::from);
    inplace_merge_with(&mut BidirectionalView(&mut words[..]), 0, 3, 7, &mut TemporaryBuffer::empty());
    assert_eq!(words, ["a", "b", "c", "d", "e", "f", "g"]);
}

#[test]
fn test_inplace_merge_empty_halves() {
    let mut values = [3, 1, 2];
    inplace_merge(&mut values[..], 0, 0, 3);
    inplace_merge(&mut values[..], 0, 3, 3);
    assert_eq!(values, [3, 1, 2], "Nothing to merge with an empty half.");
}

#[test]
fn test_inplace_merge_clears_given_buffer() {
    let mut buffer = TemporaryBuffer::acquire(4);
    buffer.put(99);
    let mut values = [5, 6, 1, 2];
    inplace_merge_with(&mut values[..], 0, 2, 4, &mut buffer);
    assert_eq!(values, [1, 2, 5, 6]);
    assert!(buffer.is_empty());
}

#[test]
fn test_merge_sort() {
    let keys: Vec<i32> = (0..101).map(|i| (i * 37) % 11).collect();
    let input = keyed(&keys);

    let mut values = input.clone();
    merge_sort_by(&mut values[..], 0, 101, by_key);
    assert_eq!(values, stable_sorted(&input));

    let mut values = input.clone();
    merge_sort_by(&mut BidirectionalView(&mut values[..]), 0, 101, by_key);
    assert_eq!(values, stable_sorted(&input));

    let mut single = [1];
    merge_sort(&mut single[..], 0, 1);
    assert_eq!(single, [1]);
}

#[test]
fn test_buffer_acquisition() {
    let buffer = TemporaryBuffer::<u64>::acquire(10);
    assert_eq!(buffer.cap(), 10);
    assert!(buffer.is_empty());

    let values = [1, 2, 3, 4];
    let buffer = TemporaryBuffer::for_range(&values[..], &1, &4);
    assert_eq!(buffer.cap(), 3);

    assert_eq!(TemporaryBuffer::<String>::empty().cap(), 0);
    assert_eq!(TemporaryBuffer::<String>::default().cap(), 0);

    let error = TemporaryBuffer::<u64>::try_acquire_exact(usize::MAX).unwrap_err();
    assert!(error.is_capacity_overflow());
}

#[test]
fn test_buffer_output() {
    let mut buffer = TemporaryBuffer::acquire(3);
    buffer.put_slice(&["a".to_string(), "b".to_string()]);
    buffer.put("c".to_string());
    assert_eq!(&*buffer, &["a", "b", "c"]);
    assert_eq!(buffer.len(), 3);
    assert_eq!(
        format!("{buffer:?}"),
        r#"TemporaryBuffer { contents: ["a", "b", "c"], len: 3, cap: 3 }"#
    );

    assert_panics!({
        let mut buffer = TemporaryBuffer::acquire(1);
        buffer.put(1);
        buffer.put(2);
    }, "Capacity overflow");
    assert_panics!({
        let mut buffer = TemporaryBuffer::acquire(2);
        buffer.put_slice(&[1, 2, 3]);
    }, "Capacity overflow");
}

#[test]
fn test_buffer_drops_values() {
    let counter = CountedDrop::new(0);
    {
        let mut buffer = TemporaryBuffer::acquire(4);
        buffer.put_slice(&[counter.clone(), counter.clone()]);
        assert_eq!(*counter.borrow(), 2, "The temporary source values were dropped.");

        buffer.clear();
        assert_eq!(*counter.borrow(), 4);

        buffer.put(counter.clone());
    }
    assert_eq!(*counter.borrow(), 5);
}

#[test]
fn test_merges_keep_values_balanced() {
    let counter = CountedDrop::new(0);
    let mut values: Vec<(i32, CountedDrop)> = [3, 5, 8, 1, 2, 9]
        .into_iter()
        .map(|k| (k, counter.clone()))
        .collect();
    let created = 6;

    inplace_merge_by(&mut values[..], 0, 3, 6, |a, b| a.0 < b.0);
    let keys: Vec<i32> = values.iter().map(|v| v.0).collect();
    assert_eq!(keys, [1, 2, 3, 5, 8, 9]);

    let drops_before = *counter.borrow();
    drop(values);
    assert_eq!(*counter.borrow() - drops_before, created, "Every live value is dropped once.");
    assert_eq!(Rc::strong_count(&counter), 1, "No clone leaked.");
}

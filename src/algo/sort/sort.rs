use crate::algo::base::{copy_backward_within, predecessor, successor};
use crate::algo::sort::heap::{heap_to_sorted, heapify, sift_down};
use crate::iter::{Bidirectional, Distance, RandomAccess, SequenceMut};
use crate::traits::TypeTraits;

/// Ranges of at most this many values are left for the final insertion sort.
const THRESHOLD: Distance = 16;

/// Sorts `[first, last)` in ascending order. The sort isn't stable.
///
/// This is an introsort: quicksort with a median-of-three pivot, falling back to heap sort once the
/// recursion gets deeper than `2 * log2(n)`, which bounds the worst case to `O(n log n)`. Short
/// subranges are left unsorted and finished by a single insertion sort pass over the whole range.
///
/// # Examples
/// ```
/// # use generic_algo::algo::sort;
/// let mut values = [5, 2, 9, 1, 5, 6];
/// sort(&mut values[..], 0, 6);
/// assert_eq!(values, [1, 2, 5, 5, 6, 9]);
/// ```
pub fn sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: TypeTraits + PartialOrd,
{
    sort_by(seq, first, last, |a, b| a < b)
}

/// Sorts `[first, last)` with `less` as the strict weak ordering. See [`sort`].
///
/// # Examples
/// ```
/// # use generic_algo::algo::sort_by;
/// let mut words = ["pear", "fig", "banana"].map(String::from);
/// sort_by(&mut words[..], 0, 3, |a, b| a.len() < b.len());
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = seq.diff(&first, &last);
    if len > 1 {
        introsort_loop(seq, first.clone(), last.clone(), 2 * lg(len), &mut less);
        final_insertion_sort(seq, first, last, &mut less);
    }
}

/// Floor of the binary logarithm, for positive `n`.
fn lg(mut n: Distance) -> Distance {
    let mut k = 0;
    while n > 1 {
        n >>= 1;
        k += 1;
    }
    k
}

fn median_of_three<'a, T, F>(a: &'a T, b: &'a T, c: &'a T, less: &mut F) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    if less(a, b) {
        if less(b, c) {
            b
        } else if less(a, c) {
            c
        } else {
            a
        }
    } else if less(a, c) {
        a
    } else if less(b, c) {
        c
    } else {
        b
    }
}

/// Picks the median of the first, middle and last values of a non-empty range.
fn choose_pivot<S, F>(seq: &S, first: &S::Position, last: &S::Position, less: &mut F) -> S::Value
where
    S: RandomAccess + ?Sized,
    S::Value: Clone,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let middle = seq.jump(first, seq.diff(first, last) / 2);
    let back = predecessor(seq, last);
    median_of_three(seq.at(first), seq.at(&middle), seq.at(&back), less).clone()
}

/// Hoare partition around `pivot`, returning the start of the upper part. Neither scan is bounds
/// checked, so `pivot` must be equivalent to a value of the range.
fn unguarded_partition<S, F>(
    seq: &mut S,
    mut first: S::Position,
    mut last: S::Position,
    pivot: &S::Value,
    less: &mut F,
) -> S::Position
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    loop {
        while less(seq.at(&first), pivot) {
            seq.next(&mut first);
        }
        seq.prev(&mut last);
        while less(pivot, seq.at(&last)) {
            seq.prev(&mut last);
        }
        if seq.diff(&first, &last) <= 0 {
            return first;
        }
        seq.swap_at(&first, &last);
        seq.next(&mut first);
    }
}

fn introsort_loop<S, F>(seq: &mut S, first: S::Position, mut last: S::Position, mut depth: Distance, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: Clone,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    while seq.diff(&first, &last) > THRESHOLD {
        if depth == 0 {
            heap_select_sort(seq, &first, &last, &last, less);
            return;
        }
        depth -= 1;

        let pivot = choose_pivot(seq, &first, &last, less);
        let cut = unguarded_partition(seq, first.clone(), last.clone(), &pivot, less);
        introsort_loop(seq, cut.clone(), last, depth, less);
        last = cut;
    }
}

fn final_insertion_sort<S, F>(seq: &mut S, first: S::Position, last: S::Position, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if seq.diff(&first, &last) > THRESHOLD {
        let mut pos = seq.jump(&first, THRESHOLD);
        insertion_sort_range(seq, &first, &pos, less);
        // The first partition holds the minimum, so every later insertion stops by itself.
        while pos != last {
            let value = seq.at(&pos).clone();
            unguarded_linear_insert(seq, pos.clone(), value, less);
            seq.next(&mut pos);
        }
    } else {
        insertion_sort_range(seq, &first, &last, less);
    }
}

/// Sorts `[first, last)` by inserting each value into the sorted prefix before it. `O(n^2)`, but
/// the fastest choice for short or nearly sorted ranges.
///
/// # Examples
/// ```
/// # use generic_algo::algo::insertion_sort;
/// # use generic_algo::iter::BidirectionalView;
/// let mut values = [3, 1, 2];
/// insertion_sort(&mut BidirectionalView(&mut values[..]), 0, 3);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn insertion_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits + PartialOrd,
{
    insertion_sort_by(seq, first, last, |a, b| a < b)
}

pub fn insertion_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    insertion_sort_range(seq, &first, &last, &mut less)
}

pub(crate) fn insertion_sort_range<S, F>(seq: &mut S, first: &S::Position, last: &S::Position, less: &mut F)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == last {
        return;
    }
    let mut pos = successor(seq, first);
    while pos != *last {
        linear_insert(seq, first, pos.clone(), less);
        seq.next(&mut pos);
    }
}

/// Inserts the value at `pos` into the sorted range `[first, pos)`.
fn linear_insert<S, F>(seq: &mut S, first: &S::Position, pos: S::Position, less: &mut F)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let value = seq.at(&pos).clone();
    if less(&value, seq.at(first)) {
        // The new minimum: shift the whole prefix in one copy.
        let end = successor(seq, &pos);
        copy_backward_within(seq, first.clone(), pos, end);
        *seq.at_mut(first) = value;
    } else {
        unguarded_linear_insert(seq, pos, value, less);
    }
}

/// Moves values greater than `value` up by one, starting before `last`, then writes `value` into
/// the gap. Some value before `last` must not be greater than `value`.
fn unguarded_linear_insert<S, F>(seq: &mut S, mut last: S::Position, value: S::Value, less: &mut F)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: Clone,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut next = predecessor(seq, &last);
    while less(&value, seq.at(&next)) {
        seq.assign(&last, &next);
        last = next.clone();
        seq.prev(&mut next);
    }
    *seq.at_mut(&last) = value;
}

/// Rearranges `[first, last)` so that `[first, middle)` holds its smallest values in ascending
/// order. The order of the remaining values is unspecified. `O(n log k)` for `k` sorted values.
///
/// # Examples
/// ```
/// # use generic_algo::algo::partial_sort;
/// let mut values = [9, 4, 7, 1, 8, 2];
/// partial_sort(&mut values[..], 0, 3, 6);
/// assert_eq!(values[..3], [1, 2, 4]);
/// ```
pub fn partial_sort<S>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    partial_sort_by(seq, first, middle, last, |a, b| a < b)
}

pub fn partial_sort_by<S, F>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    heap_select_sort(seq, &first, &middle, &last, &mut less)
}

fn heap_select_sort<S, F>(seq: &mut S, first: &S::Position, middle: &S::Position, last: &S::Position, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = seq.diff(first, middle);
    if len == 0 {
        return;
    }
    heapify(seq, first, len, less);

    let mut pos = middle.clone();
    while pos != *last {
        if less(seq.at(&pos), seq.at(first)) {
            seq.swap_at(&pos, first);
            sift_down(seq, first, 0, len, less);
        }
        seq.next(&mut pos);
    }
    heap_to_sorted(seq, first, len, less);
}

/// Rearranges `[first, last)` so that the value at `nth` is the one that would be there if the
/// range were sorted. No value before `nth` is greater than it, and no value after it is less.
///
/// # Examples
/// ```
/// # use generic_algo::algo::nth_element;
/// let mut values = [7, 3, 9, 1, 5, 8, 2];
/// nth_element(&mut values[..], 0, 3, 7);
/// assert_eq!(values[3], 5);
/// assert!(values[..3].iter().all(|v| *v <= 5));
/// assert!(values[4..].iter().all(|v| *v >= 5));
/// ```
pub fn nth_element<S>(seq: &mut S, first: S::Position, nth: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: TypeTraits + PartialOrd,
{
    nth_element_by(seq, first, nth, last, |a, b| a < b)
}

pub fn nth_element_by<S, F>(seq: &mut S, mut first: S::Position, nth: S::Position, mut last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    while seq.diff(&first, &last) > 3 {
        let pivot = choose_pivot(seq, &first, &last, &mut less);
        let cut = unguarded_partition(seq, first.clone(), last.clone(), &pivot, &mut less);
        if seq.diff(&cut, &nth) >= 0 {
            first = cut;
        } else {
            last = cut;
        }
    }
    insertion_sort_range(seq, &first, &last, &mut less);
}

//! Binary max-heaps laid out over random access ranges, as used by
//! [`partial_sort`](super::partial_sort). All operations move values with swaps, so they don't
//! need the values to be cloneable.

use crate::iter::{Distance, RandomAccess, SequenceMut};

/// Moves the value at offset `hole` down until neither of its children compares greater.
pub(crate) fn sift_down<S, F>(seq: &mut S, first: &S::Position, mut hole: Distance, len: Distance, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    loop {
        let mut child = 2 * hole + 1;
        if child >= len {
            return;
        }

        let mut child_pos = seq.jump(first, child);
        if child + 1 < len {
            let right = seq.jump(first, child + 1);
            if less(seq.at(&child_pos), seq.at(&right)) {
                child += 1;
                child_pos = right;
            }
        }

        let hole_pos = seq.jump(first, hole);
        if !less(seq.at(&hole_pos), seq.at(&child_pos)) {
            return;
        }
        seq.swap_at(&hole_pos, &child_pos);
        hole = child;
    }
}

/// Moves the value at offset `hole` up until its parent doesn't compare less.
pub(crate) fn sift_up<S, F>(seq: &mut S, first: &S::Position, mut hole: Distance, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    while hole > 0 {
        let parent = (hole - 1) / 2;
        let (parent_pos, hole_pos) = (seq.jump(first, parent), seq.jump(first, hole));
        if !less(seq.at(&parent_pos), seq.at(&hole_pos)) {
            return;
        }
        seq.swap_at(&parent_pos, &hole_pos);
        hole = parent;
    }
}

/// Rearranges `[first, last)` into a max-heap.
///
/// # Examples
/// ```
/// # use generic_algo::algo::{make_heap, pop_heap};
/// let mut values = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut values[..], 0, 8);
/// assert_eq!(values[0], 9);
///
/// pop_heap(&mut values[..], 0, 8);
/// assert_eq!(values[7], 9);
/// assert_eq!(values[0], 6);
/// ```
pub fn make_heap<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    make_heap_by(seq, first, last, |a, b| a < b)
}

pub fn make_heap_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    heapify(seq, &first, seq.diff(&first, &last), &mut less)
}

pub(crate) fn heapify<S, F>(seq: &mut S, first: &S::Position, len: Distance, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    for hole in (0..len / 2).rev() {
        sift_down(seq, first, hole, len, less);
    }
}

/// Adds the value at `last - 1` to the max-heap `[first, last - 1)`.
pub fn push_heap<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    push_heap_by(seq, first, last, |a, b| a < b)
}

pub fn push_heap_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = seq.diff(&first, &last);
    if len > 1 {
        sift_up(seq, &first, len - 1, &mut less);
    }
}

/// Moves the greatest value of the max-heap `[first, last)` to `last - 1`, and restores the heap
/// over `[first, last - 1)`.
pub fn pop_heap<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    pop_heap_by(seq, first, last, |a, b| a < b)
}

pub fn pop_heap_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = seq.diff(&first, &last);
    pop_heap_len(seq, &first, len, &mut less);
}

fn pop_heap_len<S, F>(seq: &mut S, first: &S::Position, len: Distance, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if len > 1 {
        let back = seq.jump(first, len - 1);
        seq.swap_at(first, &back);
        sift_down(seq, first, 0, len - 1, less);
    }
}

/// Sorts the max-heap `[first, last)` into ascending order.
pub fn sort_heap<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: RandomAccess + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    sort_heap_by(seq, first, last, |a, b| a < b)
}

pub fn sort_heap_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = seq.diff(&first, &last);
    heap_to_sorted(seq, &first, len, &mut less);
}

pub(crate) fn heap_to_sorted<S, F>(seq: &mut S, first: &S::Position, mut len: Distance, less: &mut F)
where
    S: RandomAccess + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    while len > 1 {
        pop_heap_len(seq, first, len, less);
        len -= 1;
    }
}

/// Returns true if `[first, last)` is a max-heap.
pub fn is_heap_by<S, F>(seq: &S, first: S::Position, last: S::Position, mut less: F) -> bool
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = seq.diff(&first, &last);
    (1..len).all(|child| {
        let parent = seq.jump(&first, (child - 1) / 2);
        !less(seq.at(&parent), seq.at(&seq.jump(&first, child)))
    })
}

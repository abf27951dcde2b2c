use crate::algo::base::{advanced, distance, predecessor};
use crate::algo::merge::TemporaryBuffer;
use crate::algo::search::{lower_bound_by, upper_bound_by};
use crate::iter::{Bidirectional, Distance, Output, Sequence, SequenceMut, Traverse};
use crate::traits::TypeTraits;

/// Merges the sorted ranges `[first1, last1)` and `[first2, last2)` into `out`, returning it.
///
/// The merge is stable: of two equivalent values, the one from the first range is written first.
///
/// # Examples
/// ```
/// # use generic_algo::algo::merge;
/// # use generic_algo::iter::BackInserter;
/// # use generic_algo::collections::contiguous::Vector;
/// let (a, b) = ([1, 4, 6], [2, 4, 5, 9]);
/// let mut out = Vector::new();
/// merge(&a[..], 0, 3, &b[..], 0, 4, BackInserter::new(&mut out));
/// assert_eq!(&*out, &[1, 2, 4, 4, 5, 6, 9]);
/// ```
pub fn merge<S1, S2, O>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
    out: O,
) -> O
where
    S1: Sequence + ?Sized,
    S2: Sequence<Value = S1::Value> + ?Sized,
    S1::Value: TypeTraits + PartialOrd,
    O: Output<S1::Value>,
{
    merge_by(s1, first1, last1, s2, first2, last2, out, |a, b| a < b)
}

#[allow(clippy::too_many_arguments)]
pub fn merge_by<S1, S2, O, F>(
    s1: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    mut first2: S2::Position,
    last2: S2::Position,
    mut out: O,
    mut less: F,
) -> O
where
    S1: Sequence + ?Sized,
    S2: Sequence<Value = S1::Value> + ?Sized,
    S1::Value: TypeTraits,
    O: Output<S1::Value>,
    F: FnMut(&S1::Value, &S1::Value) -> bool,
{
    while first1 != last1 && first2 != last2 {
        if less(s2.at(&first2), s1.at(&first1)) {
            out.put(s2.at(&first2).clone());
            s2.next(&mut first2);
        } else {
            out.put(s1.at(&first1).clone());
            s1.next(&mut first1);
        }
    }
    <S1::Category as Traverse<S1>>::copy(s1, first1, &last1, &mut out);
    <S2::Category as Traverse<S2>>::copy(s2, first2, &last2, &mut out);
    out
}

/// Merges the consecutive sorted ranges `[first, middle)` and `[middle, last)` in place, so that
/// `[first, last)` ends up sorted. The merge is stable.
///
/// A [`TemporaryBuffer`] as large as the whole range is requested. With enough memory to hold the
/// shorter of the two ranges, the merge takes a linear number of comparisons. With less, the ranges
/// are split and rotated recursively, which degrades gracefully down to an `O(n log n)` merge using
/// no extra memory at all.
///
/// # Examples
/// ```
/// # use generic_algo::algo::inplace_merge;
/// let mut values = [1, 3, 5, 7, 2, 4, 6];
/// inplace_merge(&mut values[..], 0, 4, 7);
/// assert_eq!(values, [1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn inplace_merge<S>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits + PartialOrd,
{
    inplace_merge_by(seq, first, middle, last, |a, b| a < b)
}

pub fn inplace_merge_by<S, F>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position, less: F)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == middle || middle == last {
        return;
    }
    let mut buffer = TemporaryBuffer::for_range(seq, &first, &last);
    inplace_merge_with_by(seq, first, middle, last, &mut buffer, less)
}

/// Like [`inplace_merge`], but uses the provided `buffer` for scratch space instead of allocating
/// one. Any values already held by `buffer` are dropped. A buffer with no capacity selects the
/// merge that uses no extra memory.
///
/// # Examples
/// ```
/// # use generic_algo::algo::{inplace_merge_with, TemporaryBuffer};
/// let mut values = [2, 4, 6, 1, 3, 5];
/// inplace_merge_with(&mut values[..], 0, 3, 6, &mut TemporaryBuffer::empty());
/// assert_eq!(values, [1, 2, 3, 4, 5, 6]);
/// ```
pub fn inplace_merge_with<S>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
    buffer: &mut TemporaryBuffer<S::Value>,
) where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits + PartialOrd,
{
    inplace_merge_with_by(seq, first, middle, last, buffer, |a, b| a < b)
}

pub fn inplace_merge_with_by<S, F>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
    buffer: &mut TemporaryBuffer<S::Value>,
    mut less: F,
) where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    buffer.clear();
    let len1 = distance(seq, first.clone(), middle.clone());
    let len2 = distance(seq, middle.clone(), last.clone());
    merge_adaptive(seq, first, middle, last, len1, len2, buffer, &mut less);
}

/// Returns true if `len` values fit into `buffer`.
fn fits(len: Distance, buffer: &TemporaryBuffer<impl Sized>) -> bool {
    len as usize <= buffer.cap()
}

#[allow(clippy::too_many_arguments)]
fn merge_adaptive<S, F>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
    len1: Distance,
    len2: Distance,
    buffer: &mut TemporaryBuffer<S::Value>,
    less: &mut F,
) where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if len1 == 0 || len2 == 0 {
        return;
    }

    if len1 <= len2 && fits(len1, buffer) {
        <S::Category as Traverse<S>>::copy(seq, first.clone(), &middle, &mut *buffer);
        merge_from_buffer_front(seq, buffer, middle, &last, first, less);
        buffer.clear();
    } else if fits(len2, buffer) {
        <S::Category as Traverse<S>>::copy(seq, middle.clone(), &last, &mut *buffer);
        merge_from_buffer_back(seq, &first, middle, buffer, last, less);
        buffer.clear();
    } else if buffer.cap() == 0 {
        merge_without_buffer(seq, first, middle, last, len1, len2, less);
    } else {
        let (first_cut, second_cut, len11, len22) = split(seq, &first, &middle, &last, len1, len2, less);
        let new_middle = rotate_adaptive(
            seq, first_cut.clone(), middle, second_cut.clone(), len1 - len11, len22, buffer,
        );
        merge_adaptive(seq, first, first_cut, new_middle.clone(), len11, len22, buffer, less);
        merge_adaptive(seq, new_middle, second_cut, last, len1 - len11, len2 - len22, buffer, less);
    }
}

/// Cuts the longer range in half, and the other one where the cut value would be inserted, so that
/// every value of `[first_cut, middle)` orders after every value of `[middle, second_cut)`.
fn split<S, F>(
    seq: &S,
    first: &S::Position,
    middle: &S::Position,
    last: &S::Position,
    len1: Distance,
    len2: Distance,
    less: &mut F,
) -> (S::Position, S::Position, Distance, Distance)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if len1 > len2 {
        let len11 = len1 / 2;
        let first_cut = advanced(seq, first, len11);
        let second_cut = lower_bound_by(seq, middle.clone(), last.clone(), seq.at(&first_cut), &mut *less);
        let len22 = distance(seq, middle.clone(), second_cut.clone());
        (first_cut, second_cut, len11, len22)
    } else {
        let len22 = len2 / 2;
        let second_cut = advanced(seq, middle, len22);
        let first_cut = upper_bound_by(seq, first.clone(), middle.clone(), seq.at(&second_cut), &mut *less);
        let len11 = distance(seq, first.clone(), first_cut.clone());
        (first_cut, second_cut, len11, len22)
    }
}

/// Merges the buffered copy of the first range with `[first2, last)`, writing from `result`
/// onwards. The write position never overtakes `first2`.
fn merge_from_buffer_front<S, F>(
    seq: &mut S,
    buffer: &[S::Value],
    mut first2: S::Position,
    last: &S::Position,
    mut result: S::Position,
    less: &mut F,
) where
    S: SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut i = 0;
    while i < buffer.len() && first2 != *last {
        if less(seq.at(&first2), &buffer[i]) {
            seq.assign(&result, &first2);
            seq.next(&mut first2);
        } else {
            *seq.at_mut(&result) = buffer[i].clone();
            i += 1;
        }
        seq.next(&mut result);
    }
    // Whatever is left of the second range is already in place.
    <S::Category as Traverse<S>>::write_slice(seq, &mut result, &buffer[i..]);
}

/// Merges `[first, last1)` with the buffered copy of the second range, writing backwards from
/// `result`. The write position never falls behind `last1`.
fn merge_from_buffer_back<S, F>(
    seq: &mut S,
    first: &S::Position,
    mut last1: S::Position,
    buffer: &[S::Value],
    mut result: S::Position,
    less: &mut F,
) where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut j = buffer.len();
    while j > 0 && *first != last1 {
        let back1 = predecessor(seq, &last1);
        seq.prev(&mut result);
        if less(&buffer[j - 1], seq.at(&back1)) {
            seq.assign(&result, &back1);
            last1 = back1;
        } else {
            *seq.at_mut(&result) = buffer[j - 1].clone();
            j -= 1;
        }
    }
    <S::Category as Traverse<S>>::write_slice_back(seq, &mut result, &buffer[..j]);
}

/// Rotates `[first, last)` around `middle` through the buffer when it can hold the shorter side,
/// and in place otherwise. Returns the new position of the value previously at `first`.
fn rotate_adaptive<S>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
    len1: Distance,
    len2: Distance,
    buffer: &mut TemporaryBuffer<S::Value>,
) -> S::Position
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
{
    if len1 > len2 && fits(len2, buffer) {
        <S::Category as Traverse<S>>::copy(seq, middle.clone(), &last, &mut *buffer);
        <S::Category as Traverse<S>>::copy_backward_within(seq, &first, middle, last);
        let mut pos = first;
        <S::Category as Traverse<S>>::write_slice(seq, &mut pos, buffer);
        buffer.clear();
        pos
    } else if fits(len1, buffer) {
        <S::Category as Traverse<S>>::copy(seq, first.clone(), &middle, &mut *buffer);
        let mut pos = <S::Category as Traverse<S>>::copy_within(seq, middle, &last, first);
        let new_middle = pos.clone();
        <S::Category as Traverse<S>>::write_slice(seq, &mut pos, buffer);
        buffer.clear();
        new_middle
    } else {
        <S::Category as Traverse<S>>::rotate(seq, first, middle, last)
    }
}

/// Merges by recursive splitting and rotation, using `O(log n)` stack and no other memory.
fn merge_without_buffer<S, F>(
    seq: &mut S,
    first: S::Position,
    middle: S::Position,
    last: S::Position,
    len1: Distance,
    len2: Distance,
    less: &mut F,
) where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if less(seq.at(&middle), seq.at(&first)) {
            seq.swap_at(&first, &middle);
        }
        return;
    }

    let (first_cut, second_cut, len11, len22) = split(seq, &first, &middle, &last, len1, len2, less);
    let new_middle = <S::Category as Traverse<S>>::rotate(seq, first_cut.clone(), middle, second_cut.clone());
    merge_without_buffer(seq, first, first_cut, new_middle.clone(), len11, len22, less);
    merge_without_buffer(seq, new_middle, second_cut, last, len1 - len11, len2 - len22, less);
}

/// Sorts `[first, last)` stably, by sorting both halves recursively and merging them with
/// [`inplace_merge`]. One [`TemporaryBuffer`] for the whole range is shared by all merges.
///
/// # Examples
/// ```
/// # use generic_algo::algo::merge_sort_by;
/// # use generic_algo::iter::BidirectionalView;
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// merge_sort_by(&mut BidirectionalView(&mut pairs[..]), 0, 4, |a, b| a.0 < b.0);
/// assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits + PartialOrd,
{
    merge_sort_by(seq, first, last, |a, b| a < b)
}

pub fn merge_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F)
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = distance(seq, first.clone(), last.clone());
    // Merges only ever buffer the shorter half.
    let mut buffer = TemporaryBuffer::acquire((len / 2).max(0) as usize);
    merge_sort_range(seq, first, last, len, &mut buffer, &mut less);
}

fn merge_sort_range<S, F>(
    seq: &mut S,
    first: S::Position,
    last: S::Position,
    len: Distance,
    buffer: &mut TemporaryBuffer<S::Value>,
    less: &mut F,
) where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if len < 2 {
        return;
    }
    let half = len / 2;
    let middle = advanced(seq, &first, half);
    merge_sort_range(seq, first.clone(), middle.clone(), half, buffer, less);
    merge_sort_range(seq, middle.clone(), last.clone(), len - half, buffer, less);
    merge_adaptive(seq, first, middle, last, half, len - half, buffer, less);
}


use std::mem;

use crate::iter::{Bidirectional, Distance, Output, Sequence, SequenceMut, Traverse};
use crate::traits::TypeTraits;

/// Returns the number of steps from `first` to `last`. This is `O(1)` for random access
/// sequences and `O(n)` otherwise.
///
/// # Examples
/// ```
/// # use generic_algo::algo::distance;
/// # use generic_algo::iter::BidirectionalView;
/// let values = [3, 1, 4, 1, 5];
/// assert_eq!(distance(&values[..], 1, 4), 3);
/// assert_eq!(distance(&BidirectionalView(&values[..]), 0, 5), 5);
/// ```
pub fn distance<S: Sequence + ?Sized>(seq: &S, first: S::Position, last: S::Position) -> Distance {
    <S::Category as Traverse<S>>::distance(seq, &first, &last)
}

/// Moves `pos` by `n` steps, backwards for negative `n`. This is `O(1)` for random access sequences
/// and `O(|n|)` otherwise.
///
/// Forward-only sequences can't move backwards: a negative `n` is a precondition violation, which
/// is only checked in debug builds.
///
/// # Examples
/// ```
/// # use generic_algo::algo::advance;
/// let values = [3, 1, 4, 1, 5];
/// let mut pos = 4;
/// advance(&values[..], &mut pos, -3);
/// assert_eq!(pos, 1);
/// ```
pub fn advance<S: Sequence + ?Sized>(seq: &S, pos: &mut S::Position, n: Distance) {
    <S::Category as Traverse<S>>::advance(seq, pos, n)
}

/// Returns the position after `pos`.
pub(crate) fn successor<S: Sequence + ?Sized>(seq: &S, pos: &S::Position) -> S::Position {
    let mut next = pos.clone();
    seq.next(&mut next);
    next
}

/// Returns the position before `pos`.
pub(crate) fn predecessor<S: Bidirectional + ?Sized>(seq: &S, pos: &S::Position) -> S::Position {
    let mut prev = pos.clone();
    seq.prev(&mut prev);
    prev
}

/// Returns the position `n` steps away from `pos`.
pub(crate) fn advanced<S: Sequence + ?Sized>(seq: &S, pos: &S::Position, n: Distance) -> S::Position {
    let mut pos = pos.clone();
    advance(seq, &mut pos, n);
    pos
}

/// Writes clones of the values in `[first, last)` to `out`, returning it.
///
/// When `seq` is contiguous and `out` writes to a contiguous sequence or a
/// [`TemporaryBuffer`](crate::algo::TemporaryBuffer), trivially copyable values are copied with a
/// single memory copy. Otherwise, random access sequences are copied with a counted loop, and
/// all others by stepping until `last` is reached.
///
/// # Examples
/// ```
/// # use generic_algo::algo::copy;
/// # use generic_algo::iter::Writer;
/// let src = ["a".to_string(), "b".to_string()];
/// let mut dst = vec![String::new(); 3];
/// let end = copy(&src[..], 0, 2, Writer::new(&mut dst[..], 1)).into_position();
/// assert_eq!(end, 3);
/// assert_eq!(dst, ["", "a", "b"]);
/// ```
pub fn copy<S, O>(seq: &S, first: S::Position, last: S::Position, mut out: O) -> O
where
    S: Sequence + ?Sized,
    S::Value: TypeTraits,
    O: Output<S::Value>,
{
    <S::Category as Traverse<S>>::copy(seq, first, &last, &mut out);
    out
}

/// Copies `[first, last)` to the range starting at `result` in the same sequence, returning the
/// end of the written range. The ranges may overlap, as long as `result` isn't after `first`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::copy_within;
/// let mut values = [1, 2, 3, 4, 5];
/// assert_eq!(copy_within(&mut values[..], 2, 5, 0), 3);
/// assert_eq!(values, [3, 4, 5, 4, 5]);
/// ```
pub fn copy_within<S>(seq: &mut S, first: S::Position, last: S::Position, result: S::Position) -> S::Position
where
    S: SequenceMut + ?Sized,
    S::Value: TypeTraits,
{
    <S::Category as Traverse<S>>::copy_within(seq, first, &last, result)
}

/// Copies `[first, last)` of `src` to the range of `dst` ending at `result`, from back to front.
/// Returns the start of the written range.
///
/// # Examples
/// ```
/// # use generic_algo::algo::copy_backward;
/// let src = [1, 2, 3];
/// let mut dst = [0; 5];
/// assert_eq!(copy_backward(&src[..], 0, 3, &mut dst[..], 5), 2);
/// assert_eq!(dst, [0, 0, 1, 2, 3]);
/// ```
pub fn copy_backward<S, D>(
    src: &S,
    first: S::Position,
    last: S::Position,
    dst: &mut D,
    result: D::Position,
) -> D::Position
where
    S: Bidirectional + ?Sized,
    S::Value: TypeTraits,
    D: Bidirectional + SequenceMut<Value = S::Value> + ?Sized,
{
    <S::Category as Traverse<S>>::copy_backward(src, &first, last, dst, result)
}

/// Copies `[first, last)` to the range ending at `result` in the same sequence, from back to front.
/// Returns the start of the written range. The ranges may overlap, as long as `result` isn't
/// before `last`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::copy_backward_within;
/// let mut values = [1, 2, 3, 4, 5];
/// assert_eq!(copy_backward_within(&mut values[..], 0, 3, 5), 2);
/// assert_eq!(values, [1, 2, 1, 2, 3]);
/// ```
pub fn copy_backward_within<S>(
    seq: &mut S,
    first: S::Position,
    last: S::Position,
    result: S::Position,
) -> S::Position
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: TypeTraits,
{
    <S::Category as Traverse<S>>::copy_backward_within(seq, &first, last, result)
}

/// Exchanges the values at positions `a` and `b`.
pub fn iter_swap<S: SequenceMut + ?Sized>(seq: &mut S, a: S::Position, b: S::Position) {
    seq.swap_at(&a, &b);
}

/// Exchanges the value at `a` in `s1` with the value at `b` in `s2`.
pub fn iter_swap_between<S1, S2>(s1: &mut S1, a: S1::Position, s2: &mut S2, b: S2::Position)
where
    S1: SequenceMut + ?Sized,
    S2: SequenceMut<Value = S1::Value> + ?Sized,
{
    mem::swap(s1.at_mut(&a), s2.at_mut(&b));
}

/// Overwrites every value in `[first, last)` with a clone of `value`.
pub fn fill<S>(seq: &mut S, mut first: S::Position, last: S::Position, value: &S::Value)
where
    S: SequenceMut + ?Sized,
    S::Value: Clone,
{
    while first != last {
        *seq.at_mut(&first) = value.clone();
        seq.next(&mut first);
    }
}

/// Writes `n` clones of `value` to `out`, returning it.
pub fn fill_n<T: Clone, O: Output<T>>(mut out: O, n: usize, value: &T) -> O {
    for _ in 0..n {
        out.put(value.clone());
    }
    out
}

/// Returns true if `[first1, last1)` is equal to the range of the same length starting at
/// `first2`.
pub fn equal<S1, S2>(s1: &S1, first1: S1::Position, last1: S1::Position, s2: &S2, first2: S2::Position) -> bool
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    S1::Value: PartialEq<S2::Value>,
{
    equal_by(s1, first1, last1, s2, first2, |a, b| a == b)
}

pub fn equal_by<S1, S2, P>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    mut pred: P,
) -> bool
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
{
    let (end1, _) = mismatch_by(s1, first1, last1.clone(), s2, first2, &mut pred);
    end1 == last1
}

/// Returns the first pair of positions at which `[first1, last1)` and the range starting at
/// `first2` differ. If they don't, the first position is `last1`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::mismatch;
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 7, 4, 9];
/// assert_eq!(mismatch(&a[..], 0, 4, &b[..], 0), (2, 2));
/// ```
pub fn mismatch<S1, S2>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
) -> (S1::Position, S2::Position)
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    S1::Value: PartialEq<S2::Value>,
{
    mismatch_by(s1, first1, last1, s2, first2, |a, b| a == b)
}

pub fn mismatch_by<S1, S2, P>(
    s1: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    mut first2: S2::Position,
    mut pred: P,
) -> (S1::Position, S2::Position)
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
{
    while first1 != last1 && pred(s1.at(&first1), s2.at(&first2)) {
        s1.next(&mut first1);
        s2.next(&mut first2);
    }
    (first1, first2)
}

/// Returns true if `[first1, last1)` orders before `[first2, last2)`, comparing values in turn.
/// A proper prefix orders before the longer range.
///
/// # Examples
/// ```
/// # use generic_algo::algo::lexicographical_compare;
/// let (a, b, c) = ([1, 2, 3], [1, 2, 4], [1, 2]);
/// assert!(lexicographical_compare(&a[..], 0, 3, &b[..], 0, 3));
/// assert!(!lexicographical_compare(&b[..], 0, 3, &a[..], 0, 3));
/// assert!(lexicographical_compare(&c[..], 0, 2, &a[..], 0, 3));
/// assert!(!lexicographical_compare(&a[..], 0, 3, &a[..], 0, 3));
/// ```
pub fn lexicographical_compare<S1, S2>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
) -> bool
where
    S1: Sequence + ?Sized,
    S2: Sequence<Value = S1::Value> + ?Sized,
    S1::Value: PartialOrd,
{
    lexicographical_compare_by(s1, first1, last1, s2, first2, last2, |a, b| a < b)
}

pub fn lexicographical_compare_by<S1, S2, F>(
    s1: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    mut first2: S2::Position,
    last2: S2::Position,
    mut less: F,
) -> bool
where
    S1: Sequence + ?Sized,
    S2: Sequence<Value = S1::Value> + ?Sized,
    F: FnMut(&S1::Value, &S1::Value) -> bool,
{
    while first1 != last1 && first2 != last2 {
        let (a, b) = (s1.at(&first1), s2.at(&first2));
        if less(a, b) {
            return true;
        }
        if less(b, a) {
            return false;
        }
        s1.next(&mut first1);
        s2.next(&mut first2);
    }
    first1 == last1 && first2 != last2
}

/// Returns the smaller of two values, or `a` if they are equivalent.
pub fn min<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    min_by(a, b, |x, y| x < y)
}

pub fn min_by<'a, T, F: FnOnce(&T, &T) -> bool>(a: &'a T, b: &'a T, less: F) -> &'a T {
    if less(b, a) { b } else { a }
}

/// Returns the larger of two values, or `a` if they are equivalent.
pub fn max<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    max_by(a, b, |x, y| x < y)
}

pub fn max_by<'a, T, F: FnOnce(&T, &T) -> bool>(a: &'a T, b: &'a T, less: F) -> &'a T {
    if less(a, b) { b } else { a }
}

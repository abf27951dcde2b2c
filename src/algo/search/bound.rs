use crate::algo::base::{advanced, distance, successor};
use crate::iter::Sequence;

/// Returns the first position in the sorted range `[first, last)` whose value doesn't order before
/// `value`, which is the first position where `value` could be inserted without breaking the
/// order.
///
/// Uses `O(log n)` comparisons. Random access sequences find each midpoint in constant time,
/// others walk to it, which totals `O(n)` steps.
///
/// # Examples
/// ```
/// # use generic_algo::algo::{lower_bound, upper_bound};
/// let values = [1, 2, 2, 2, 5];
/// assert_eq!(lower_bound(&values[..], 0, 5, &2), 1);
/// assert_eq!(upper_bound(&values[..], 0, 5, &2), 4);
/// assert_eq!(lower_bound(&values[..], 0, 5, &3), 4);
/// ```
pub fn lower_bound<S>(seq: &S, first: S::Position, last: S::Position, value: &S::Value) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialOrd,
{
    lower_bound_by(seq, first, last, value, |a, b| a < b)
}

pub fn lower_bound_by<S, F>(seq: &S, mut first: S::Position, last: S::Position, value: &S::Value, mut less: F) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut len = distance(seq, first.clone(), last);
    while len > 0 {
        let half = len / 2;
        let middle = advanced(seq, &first, half);
        if less(seq.at(&middle), value) {
            first = successor(seq, &middle);
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// Returns the first position in the sorted range `[first, last)` whose value orders after
/// `value`, which is the last position where `value` could be inserted without breaking the order.
pub fn upper_bound<S>(seq: &S, first: S::Position, last: S::Position, value: &S::Value) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialOrd,
{
    upper_bound_by(seq, first, last, value, |a, b| a < b)
}

pub fn upper_bound_by<S, F>(seq: &S, mut first: S::Position, last: S::Position, value: &S::Value, mut less: F) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut len = distance(seq, first.clone(), last);
    while len > 0 {
        let half = len / 2;
        let middle = advanced(seq, &first, half);
        if less(value, seq.at(&middle)) {
            len = half;
        } else {
            first = successor(seq, &middle);
            len -= half + 1;
        }
    }
    first
}

/// Returns the subrange of the sorted range `[first, last)` holding the values equivalent to
/// `value`, as the pair `(lower_bound, upper_bound)`. Both are empty at the insertion point if
/// there is no such value.
///
/// # Examples
/// ```
/// # use generic_algo::algo::equal_range;
/// let values = [1, 3, 3, 3, 7, 9];
/// assert_eq!(equal_range(&values[..], 0, 6, &3), (1, 4));
/// assert_eq!(equal_range(&values[..], 0, 6, &8), (5, 5));
/// ```
pub fn equal_range<S>(seq: &S, first: S::Position, last: S::Position, value: &S::Value) -> (S::Position, S::Position)
where
    S: Sequence + ?Sized,
    S::Value: PartialOrd,
{
    equal_range_by(seq, first, last, value, |a, b| a < b)
}

pub fn equal_range_by<S, F>(
    seq: &S,
    mut first: S::Position,
    last: S::Position,
    value: &S::Value,
    mut less: F,
) -> (S::Position, S::Position)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut len = distance(seq, first.clone(), last);
    while len > 0 {
        let half = len / 2;
        let middle = advanced(seq, &first, half);
        if less(seq.at(&middle), value) {
            first = successor(seq, &middle);
            len -= half + 1;
        } else if less(value, seq.at(&middle)) {
            len = half;
        } else {
            // Found an equivalent value, the bounds lie on either side of it.
            let end = advanced(seq, &first, len);
            let left = lower_bound_by(seq, first, middle.clone(), value, &mut less);
            let right = upper_bound_by(seq, successor(seq, &middle), end, value, &mut less);
            return (left, right);
        }
    }
    (first.clone(), first)
}

/// Returns true if the sorted range `[first, last)` contains a value equivalent to `value`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::binary_search;
/// # use generic_algo::iter::ForwardView;
/// let values = [2, 4, 6, 8];
/// assert!(binary_search(&values[..], 0, 4, &6));
/// assert!(!binary_search(&ForwardView(&values[..]), 0, 4, &5));
/// ```
pub fn binary_search<S>(seq: &S, first: S::Position, last: S::Position, value: &S::Value) -> bool
where
    S: Sequence + ?Sized,
    S::Value: PartialOrd,
{
    binary_search_by(seq, first, last, value, |a, b| a < b)
}

pub fn binary_search_by<S, F>(seq: &S, first: S::Position, last: S::Position, value: &S::Value, mut less: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let found = lower_bound_by(seq, first, last.clone(), value, &mut less);
    found != last && !less(value, seq.at(&found))
}

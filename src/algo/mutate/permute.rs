use crate::algo::base::predecessor;
use crate::iter::{Bidirectional, SequenceMut, Traverse};

/// Rearranges `[first, last)` into the next greater permutation in lexicographic order, returning
/// true. If the range already is the greatest permutation, it is rearranged into the smallest one
/// (sorted ascending) and false is returned.
///
/// # Examples
/// ```
/// # use generic_algo::algo::next_permutation;
/// let mut values = [1, 2, 3];
/// let mut seen = vec![values];
/// while next_permutation(&mut values[..], 0, 3) {
///     seen.push(values);
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[1], [1, 3, 2]);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn next_permutation<S>(seq: &mut S, first: S::Position, last: S::Position) -> bool
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    next_permutation_by(seq, first, last, |a, b| a < b)
}

pub fn next_permutation_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F) -> bool
where
    S: Bidirectional + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    permute(seq, first, last, |a, b| less(a, b))
}

/// Rearranges `[first, last)` into the next smaller permutation in lexicographic order, returning
/// true. If the range already is the smallest permutation, it is rearranged into the greatest one
/// (sorted descending) and false is returned.
///
/// # Examples
/// ```
/// # use generic_algo::algo::prev_permutation;
/// let mut values = [2, 1, 3];
/// assert!(prev_permutation(&mut values[..], 0, 3));
/// assert_eq!(values, [1, 3, 2]);
/// ```
pub fn prev_permutation<S>(seq: &mut S, first: S::Position, last: S::Position) -> bool
where
    S: Bidirectional + SequenceMut + ?Sized,
    S::Value: PartialOrd,
{
    prev_permutation_by(seq, first, last, |a, b| a < b)
}

pub fn prev_permutation_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut less: F) -> bool
where
    S: Bidirectional + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    // The previous permutation is the next one under the reversed order.
    permute(seq, first, last, |a, b| less(b, a))
}

/// Steps to the next permutation under `before`.
fn permute<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut before: F) -> bool
where
    S: Bidirectional + SequenceMut + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == last {
        return false;
    }
    let mut i = predecessor(seq, &last);
    if i == first {
        return false;
    }

    loop {
        // The suffix from ii onwards is non-increasing.
        let ii = i.clone();
        seq.prev(&mut i);
        if before(seq.at(&i), seq.at(&ii)) {
            let mut j = predecessor(seq, &last);
            while !before(seq.at(&i), seq.at(&j)) {
                seq.prev(&mut j);
            }
            seq.swap_at(&i, &j);
            <S::Category as Traverse<S>>::reverse(seq, ii, last);
            return true;
        }
        if i == first {
            <S::Category as Traverse<S>>::reverse(seq, first, last);
            return false;
        }
    }
}

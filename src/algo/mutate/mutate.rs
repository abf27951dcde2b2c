use std::mem;

use crate::algo::base::successor;
use crate::algo::search::{adjacent_find_by, find_if};
use crate::iter::{Bidirectional, Output, Sequence, SequenceMut, Traverse};
use crate::traits::TypeTraits;

/// Calls `f` on every value in `[first, last)`, in order, and returns it.
///
/// # Examples
/// ```
/// # use generic_algo::algo::for_each;
/// let values = [1, 2, 3];
/// let mut sum = 0;
/// for_each(&values[..], 0, 3, |v| sum += v);
/// assert_eq!(sum, 6);
/// ```
pub fn for_each<S, F>(seq: &S, mut first: S::Position, last: S::Position, mut f: F) -> F
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value),
{
    while first != last {
        f(seq.at(&first));
        seq.next(&mut first);
    }
    f
}

/// Writes `op(value)` to `out` for every value in `[first, last)`, returning `out`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::transform;
/// # use generic_algo::iter::Writer;
/// let values = [1, 2, 3];
/// let mut squares = [0; 3];
/// transform(&values[..], 0, 3, Writer::new(&mut squares[..], 0), |v| v * v);
/// assert_eq!(squares, [1, 4, 9]);
/// ```
pub fn transform<S, O, U, F>(seq: &S, mut first: S::Position, last: S::Position, mut out: O, mut op: F) -> O
where
    S: Sequence + ?Sized,
    O: Output<U>,
    F: FnMut(&S::Value) -> U,
{
    while first != last {
        out.put(op(seq.at(&first)));
        seq.next(&mut first);
    }
    out
}

/// Writes `op(a, b)` to `out` for every pair of values at the same offset in `[first1, last1)` and
/// the range starting at `first2`, returning `out`.
pub fn transform2<S1, S2, O, U, F>(
    s1: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    mut first2: S2::Position,
    mut out: O,
    mut op: F,
) -> O
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    O: Output<U>,
    F: FnMut(&S1::Value, &S2::Value) -> U,
{
    while first1 != last1 {
        out.put(op(s1.at(&first1), s2.at(&first2)));
        s1.next(&mut first1);
        s2.next(&mut first2);
    }
    out
}

/// Overwrites every value in `[first, last)` with the result of a call to `generator`.
pub fn generate<S, G>(seq: &mut S, mut first: S::Position, last: S::Position, mut generator: G)
where
    S: SequenceMut + ?Sized,
    G: FnMut() -> S::Value,
{
    while first != last {
        *seq.at_mut(&first) = generator();
        seq.next(&mut first);
    }
}

/// Writes the results of `n` calls to `generator` to `out`, returning it.
pub fn generate_n<T, O, G>(mut out: O, n: usize, mut generator: G) -> O
where
    O: Output<T>,
    G: FnMut() -> T,
{
    for _ in 0..n {
        out.put(generator());
    }
    out
}

/// Replaces every value in `[first, last)` that equals `old` with a clone of `new`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::replace;
/// let mut values = [1, 0, 2, 0];
/// replace(&mut values[..], 0, 4, &0, &9);
/// assert_eq!(values, [1, 9, 2, 9]);
/// ```
pub fn replace<S, V>(seq: &mut S, first: S::Position, last: S::Position, old: &V, new: &S::Value)
where
    S: SequenceMut + ?Sized,
    S::Value: PartialEq<V> + Clone,
    V: ?Sized,
{
    replace_if(seq, first, last, |value| value == old, new)
}

/// Replaces every value in `[first, last)` that satisfies `pred` with a clone of `new`.
pub fn replace_if<S, P>(seq: &mut S, mut first: S::Position, last: S::Position, mut pred: P, new: &S::Value)
where
    S: SequenceMut + ?Sized,
    S::Value: Clone,
    P: FnMut(&S::Value) -> bool,
{
    while first != last {
        if pred(seq.at(&first)) {
            *seq.at_mut(&first) = new.clone();
        }
        seq.next(&mut first);
    }
}

/// Writes the values of `[first, last)` to `out`, with a clone of `new` in place of every value
/// that equals `old`. Returns `out`.
pub fn replace_copy<S, O, V>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    out: O,
    old: &V,
    new: &S::Value,
) -> O
where
    S: Sequence + ?Sized,
    S::Value: PartialEq<V> + Clone,
    O: Output<S::Value>,
    V: ?Sized,
{
    replace_copy_if(seq, first, last, out, |value| value == old, new)
}

pub fn replace_copy_if<S, O, P>(
    seq: &S,
    mut first: S::Position,
    last: S::Position,
    mut out: O,
    mut pred: P,
    new: &S::Value,
) -> O
where
    S: Sequence + ?Sized,
    S::Value: Clone,
    O: Output<S::Value>,
    P: FnMut(&S::Value) -> bool,
{
    while first != last {
        let value = seq.at(&first);
        out.put(if pred(value) { new.clone() } else { value.clone() });
        seq.next(&mut first);
    }
    out
}

/// Writes the values of `[first, last)` that don't equal `value` to `out`, returning it.
pub fn remove_copy<S, O, V>(seq: &S, first: S::Position, last: S::Position, out: O, value: &V) -> O
where
    S: Sequence + ?Sized,
    S::Value: PartialEq<V> + Clone,
    O: Output<S::Value>,
    V: ?Sized,
{
    remove_copy_if(seq, first, last, out, |item| item == value)
}

pub fn remove_copy_if<S, O, P>(seq: &S, mut first: S::Position, last: S::Position, mut out: O, mut pred: P) -> O
where
    S: Sequence + ?Sized,
    S::Value: Clone,
    O: Output<S::Value>,
    P: FnMut(&S::Value) -> bool,
{
    while first != last {
        let item = seq.at(&first);
        if !pred(item) {
            out.put(item.clone());
        }
        seq.next(&mut first);
    }
    out
}

/// Moves the values of `[first, last)` that don't equal `value` to the front of the range, keeping
/// their order, and returns the end of them. The values removed are left past the returned
/// position in unspecified order.
///
/// # Examples
/// ```
/// # use generic_algo::algo::remove;
/// let mut values = [1, 0, 2, 0, 3];
/// let end = remove(&mut values[..], 0, 5, &0);
/// assert_eq!(end, 3);
/// assert_eq!(values[..end], [1, 2, 3]);
/// ```
pub fn remove<S, V>(seq: &mut S, first: S::Position, last: S::Position, value: &V) -> S::Position
where
    S: SequenceMut + ?Sized,
    S::Value: PartialEq<V>,
    V: ?Sized,
{
    remove_if(seq, first, last, |item| item == value)
}

pub fn remove_if<S, P>(seq: &mut S, first: S::Position, last: S::Position, mut pred: P) -> S::Position
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Value) -> bool,
{
    let first = find_if(seq, first, last.clone(), &mut pred);
    if first == last {
        return first;
    }

    let mut result = first.clone();
    let mut pos = successor(seq, &first);
    while pos != last {
        if !pred(seq.at(&pos)) {
            seq.swap_at(&result, &pos);
            seq.next(&mut result);
        }
        seq.next(&mut pos);
    }
    result
}

/// Removes all but the first value of every run of equal values in `[first, last)`, compacting
/// the kept values at the front of the range. Returns the end of the kept values, the rest are
/// left past it in unspecified order.
///
/// # Examples
/// ```
/// # use generic_algo::algo::unique;
/// let mut values = [1, 1, 2, 2, 2, 1, 3, 3];
/// let end = unique(&mut values[..], 0, 8);
/// assert_eq!(values[..end], [1, 2, 1, 3]);
/// ```
pub fn unique<S>(seq: &mut S, first: S::Position, last: S::Position) -> S::Position
where
    S: SequenceMut + ?Sized,
    S::Value: PartialEq,
{
    unique_by(seq, first, last, |a, b| a == b)
}

pub fn unique_by<S, P>(seq: &mut S, first: S::Position, last: S::Position, mut pred: P) -> S::Position
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut result = adjacent_find_by(seq, first, last.clone(), &mut pred);
    if result == last {
        return last;
    }

    // result holds the last kept value, everything after it up to pos is a duplicate.
    let mut pos = successor(seq, &result);
    while pos != last {
        if !pred(seq.at(&result), seq.at(&pos)) {
            seq.next(&mut result);
            seq.swap_at(&result, &pos);
        }
        seq.next(&mut pos);
    }
    successor(seq, &result)
}

/// Writes the values of `[first, last)` to `out`, skipping values that equal the previously
/// written one. Returns `out`.
pub fn unique_copy<S, O>(seq: &S, first: S::Position, last: S::Position, out: O) -> O
where
    S: Sequence + ?Sized,
    S::Value: PartialEq + Clone,
    O: Output<S::Value>,
{
    unique_copy_by(seq, first, last, out, |a, b| a == b)
}

pub fn unique_copy_by<S, O, P>(seq: &S, mut first: S::Position, last: S::Position, mut out: O, mut pred: P) -> O
where
    S: Sequence + ?Sized,
    S::Value: Clone,
    O: Output<S::Value>,
    P: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == last {
        return out;
    }

    // Compare against the kept value in the source, the output can't be read back.
    let mut kept = first.clone();
    out.put(seq.at(&first).clone());
    seq.next(&mut first);
    while first != last {
        if !pred(seq.at(&kept), seq.at(&first)) {
            out.put(seq.at(&first).clone());
            kept = first.clone();
        }
        seq.next(&mut first);
    }
    out
}

/// Reverses the order of the values in `[first, last)`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::reverse;
/// let mut values = [1, 2, 3, 4];
/// reverse(&mut values[..], 0, 4);
/// assert_eq!(values, [4, 3, 2, 1]);
/// ```
pub fn reverse<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: Bidirectional + SequenceMut + ?Sized,
{
    <S::Category as Traverse<S>>::reverse(seq, first, last)
}

/// Writes the values of `[first, last)` to `out` from back to front, returning it.
pub fn reverse_copy<S, O>(seq: &S, first: S::Position, mut last: S::Position, mut out: O) -> O
where
    S: Bidirectional + ?Sized,
    S::Value: Clone,
    O: Output<S::Value>,
{
    while first != last {
        seq.prev(&mut last);
        out.put(seq.at(&last).clone());
    }
    out
}

/// Rotates `[first, last)` to the left, so that the value at `middle` becomes the first one.
/// Returns the new position of the value previously at `first`.
///
/// Forward sequences rotate with a cycle of swaps, bidirectional ones with three reversals and
/// random access ones by moving each value directly to its destination.
///
/// # Examples
/// ```
/// # use generic_algo::algo::rotate;
/// let mut values = [1, 2, 3, 4, 5];
/// assert_eq!(rotate(&mut values[..], 0, 2, 5), 3);
/// assert_eq!(values, [3, 4, 5, 1, 2]);
/// ```
pub fn rotate<S>(seq: &mut S, first: S::Position, middle: S::Position, last: S::Position) -> S::Position
where
    S: SequenceMut + ?Sized,
{
    <S::Category as Traverse<S>>::rotate(seq, first, middle, last)
}

/// Writes the values of `[first, last)` to `out` as if rotated around `middle`, returning it.
pub fn rotate_copy<S, O>(seq: &S, first: S::Position, middle: S::Position, last: S::Position, mut out: O) -> O
where
    S: Sequence + ?Sized,
    S::Value: TypeTraits,
    O: Output<S::Value>,
{
    <S::Category as Traverse<S>>::copy(seq, middle.clone(), &last, &mut out);
    <S::Category as Traverse<S>>::copy(seq, first, &middle, &mut out);
    out
}

/// Exchanges the values of `[first1, last1)` with those of the range of the same length starting
/// at `first2`, returning the end of the second range.
///
/// # Examples
/// ```
/// # use generic_algo::algo::swap_ranges;
/// let mut a = [1, 2, 3];
/// let mut b = [7, 8, 9, 10];
/// assert_eq!(swap_ranges(&mut a[..], 0, 2, &mut b[..], 1), 3);
/// assert_eq!((a, b), ([8, 9, 3], [7, 1, 2, 10]));
/// ```
pub fn swap_ranges<S1, S2>(
    s1: &mut S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &mut S2,
    mut first2: S2::Position,
) -> S2::Position
where
    S1: SequenceMut + ?Sized,
    S2: SequenceMut<Value = S1::Value> + ?Sized,
{
    while first1 != last1 {
        mem::swap(s1.at_mut(&first1), s2.at_mut(&first2));
        s1.next(&mut first1);
        s2.next(&mut first2);
    }
    first2
}

/// Reorders `[first, last)` so that the values satisfying `pred` come before the others, and
/// returns the start of the second group. Relative order isn't preserved.
///
/// # Examples
/// ```
/// # use generic_algo::algo::partition;
/// let mut values = [1, 2, 3, 4, 5, 6];
/// let split = partition(&mut values[..], 0, 6, |v| v % 2 == 0);
/// assert_eq!(split, 3);
/// assert!(values[..3].iter().all(|v| v % 2 == 0));
/// ```
pub fn partition<S, P>(seq: &mut S, mut first: S::Position, mut last: S::Position, mut pred: P) -> S::Position
where
    S: Bidirectional + SequenceMut + ?Sized,
    P: FnMut(&S::Value) -> bool,
{
    loop {
        loop {
            if first == last {
                return first;
            }
            if !pred(seq.at(&first)) {
                break;
            }
            seq.next(&mut first);
        }
        seq.prev(&mut last);
        loop {
            if first == last {
                return first;
            }
            if pred(seq.at(&last)) {
                break;
            }
            seq.prev(&mut last);
        }
        seq.swap_at(&first, &last);
        seq.next(&mut first);
    }
}

/// Shuffles `[first, last)` uniformly, drawing from `rng`. Every permutation is equally likely,
/// assuming `rng` is uniform.
///
/// # Examples
/// ```
/// # use generic_algo::algo::random_shuffle;
/// # use rand::SeedableRng;
/// # use rand::rngs::StdRng;
/// let mut values = [1, 2, 3, 4, 5];
/// random_shuffle(&mut values[..], 0, 5, &mut StdRng::seed_from_u64(42));
/// values.sort();
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
#[cfg(feature = "shuffle")]
#[doc(cfg(feature = "shuffle"))]
pub fn random_shuffle<S, R>(seq: &mut S, first: S::Position, last: S::Position, rng: &mut R)
where
    S: crate::iter::RandomAccess + SequenceMut + ?Sized,
    R: rand::Rng,
{
    use crate::iter::Distance;

    // Indices are sampled as usize, which rand can draw uniformly.
    let len = seq.diff(&first, &last).max(0) as usize;
    for i in 1..len {
        let j = rng.random_range(0..=i);
        let (a, b) = (seq.jump(&first, i as Distance), seq.jump(&first, j as Distance));
        seq.swap_at(&a, &b);
    }
}

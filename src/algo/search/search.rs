use crate::algo::base::{advance, distance, successor};
use crate::iter::{
    Bidirectional, BidirectionalTag, ContiguousTag, ForwardTag, InputTag, RandomAccessTag,
    ReverseView, Sequence,
};

/// Returns the first position in `[first, last)` whose value equals `value`, or `last`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::find;
/// let words = ["a", "b", "c"].map(String::from);
/// assert_eq!(find(&words[..], 0, 3, "b"), 1);
/// assert_eq!(find(&words[..], 0, 3, "z"), 3);
/// ```
pub fn find<S, V>(seq: &S, first: S::Position, last: S::Position, value: &V) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialEq<V>,
    V: ?Sized,
{
    find_if(seq, first, last, |item| item == value)
}

/// Returns the first position in `[first, last)` whose value satisfies `pred`, or `last`.
pub fn find_if<S, P>(seq: &S, mut first: S::Position, last: S::Position, mut pred: P) -> S::Position
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Value) -> bool,
{
    while first != last && !pred(seq.at(&first)) {
        seq.next(&mut first);
    }
    first
}

/// Returns the first position `i` in `[first, last)` whose value equals the value after it, or
/// `last` if there is no such pair.
///
/// # Examples
/// ```
/// # use generic_algo::algo::adjacent_find;
/// let values = [1, 2, 3, 3, 4, 4];
/// assert_eq!(adjacent_find(&values[..], 0, 6), 2);
/// assert_eq!(adjacent_find(&values[..], 0, 3), 3);
/// ```
pub fn adjacent_find<S>(seq: &S, first: S::Position, last: S::Position) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialEq,
{
    adjacent_find_by(seq, first, last, |a, b| a == b)
}

pub fn adjacent_find_by<S, P>(seq: &S, mut first: S::Position, last: S::Position, mut pred: P) -> S::Position
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == last {
        return last;
    }
    let mut next = successor(seq, &first);
    while next != last {
        if pred(seq.at(&first), seq.at(&next)) {
            return first;
        }
        first = next.clone();
        seq.next(&mut next);
    }
    last
}

/// Counts the values in `[first, last)` that equal `value`.
pub fn count<S, V>(seq: &S, first: S::Position, last: S::Position, value: &V) -> usize
where
    S: Sequence + ?Sized,
    S::Value: PartialEq<V>,
    V: ?Sized,
{
    count_if(seq, first, last, |item| item == value)
}

/// Counts the values in `[first, last)` that satisfy `pred`.
pub fn count_if<S, P>(seq: &S, mut first: S::Position, last: S::Position, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Value) -> bool,
{
    let mut n = 0;
    while first != last {
        if pred(seq.at(&first)) {
            n += 1;
        }
        seq.next(&mut first);
    }
    n
}

/// Returns the first position in `[first1, last1)` whose value equals any value of
/// `[first2, last2)`, or `last1`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::find_first_of;
/// let text = ['h', 'e', 'l', 'l', 'o'];
/// let vowels = ['a', 'e', 'i', 'o', 'u'];
/// assert_eq!(find_first_of(&text[..], 0, 5, &vowels[..], 0, 5), 1);
/// ```
pub fn find_first_of<S1, S2>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    S1::Value: PartialEq<S2::Value>,
{
    find_first_of_by(s1, first1, last1, s2, first2, last2, |a, b| a == b)
}

pub fn find_first_of_by<S1, S2, P>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
    mut pred: P,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
{
    find_if(s1, first1, last1, |a| {
        let mut pos = first2.clone();
        while pos != last2 {
            if pred(a, s2.at(&pos)) {
                return true;
            }
            s2.next(&mut pos);
        }
        false
    })
}

/// Returns the position of the first smallest value in `[first, last)`, or `last` if the range is
/// empty.
///
/// # Examples
/// ```
/// # use generic_algo::algo::{max_element, min_element};
/// let values = [3, 1, 4, 1, 5, 9, 2, 9];
/// assert_eq!(min_element(&values[..], 0, 8), 1);
/// assert_eq!(max_element(&values[..], 0, 8), 5);
/// ```
pub fn min_element<S>(seq: &S, first: S::Position, last: S::Position) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialOrd,
{
    min_element_by(seq, first, last, |a, b| a < b)
}

pub fn min_element_by<S, F>(seq: &S, mut first: S::Position, last: S::Position, mut less: F) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == last {
        return first;
    }
    let mut result = first.clone();
    seq.next(&mut first);
    while first != last {
        if less(seq.at(&first), seq.at(&result)) {
            result = first.clone();
        }
        seq.next(&mut first);
    }
    result
}

/// Returns the position of the first greatest value in `[first, last)`, or `last` if the range is
/// empty.
pub fn max_element<S>(seq: &S, first: S::Position, last: S::Position) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialOrd,
{
    max_element_by(seq, first, last, |a, b| a < b)
}

pub fn max_element_by<S, F>(seq: &S, mut first: S::Position, last: S::Position, mut less: F) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    if first == last {
        return first;
    }
    let mut result = first.clone();
    seq.next(&mut first);
    while first != last {
        if less(seq.at(&result), seq.at(&first)) {
            result = first.clone();
        }
        seq.next(&mut first);
    }
    result
}

/// Returns the start of the first occurrence of `[first2, last2)` as a subrange of
/// `[first1, last1)`, or `last1` if there is none. An empty pattern occurs at `first1`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::search;
/// let text = *b"abcabcd";
/// assert_eq!(search(&text[..], 0, 7, &b"abcd"[..], 0, 4), 3);
/// assert_eq!(search(&text[..], 0, 7, &b"abd"[..], 0, 3), 7);
/// ```
pub fn search<S1, S2>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    S1::Value: PartialEq<S2::Value>,
{
    search_by(s1, first1, last1, s2, first2, last2, |a, b| a == b)
}

pub fn search_by<S1, S2, P>(
    s1: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
    mut pred: P,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
{
    let mut d1 = distance(s1, first1.clone(), last1.clone());
    let d2 = distance(s2, first2.clone(), last2.clone());
    if d1 < d2 {
        return last1;
    }

    let mut current1 = first1.clone();
    let mut current2 = first2.clone();
    while current2 != last2 {
        if pred(s1.at(&current1), s2.at(&current2)) {
            s1.next(&mut current1);
            s2.next(&mut current2);
        } else if d1 == d2 {
            // The pattern no longer fits in the rest of the range.
            return last1;
        } else {
            s1.next(&mut first1);
            current1 = first1.clone();
            current2 = first2.clone();
            d1 -= 1;
        }
    }
    first1
}

/// Returns the start of the first run of `count` consecutive values in `[first, last)` that equal
/// `value`, or `last` if there is none. A run of zero values occurs at `first`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::search_n;
/// let values = [1, 7, 7, 2, 7, 7, 7];
/// assert_eq!(search_n(&values[..], 0, 7, 3, &7), 4);
/// assert_eq!(search_n(&values[..], 0, 7, 4, &7), 7);
/// ```
pub fn search_n<S, V>(seq: &S, first: S::Position, last: S::Position, count: usize, value: &V) -> S::Position
where
    S: Sequence + ?Sized,
    S::Value: PartialEq<V>,
    V: ?Sized,
{
    search_n_by(seq, first, last, count, value, |a, b| a == b)
}

pub fn search_n_by<S, V, P>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    count: usize,
    value: &V,
    mut pred: P,
) -> S::Position
where
    S: Sequence + ?Sized,
    V: ?Sized,
    P: FnMut(&S::Value, &V) -> bool,
{
    if count == 0 {
        return first;
    }

    let mut first = find_if(seq, first, last.clone(), |item| pred(item, value));
    while first != last {
        let mut n = count - 1;
        let mut pos = successor(seq, &first);
        while pos != last && n != 0 && pred(seq.at(&pos), value) {
            seq.next(&mut pos);
            n -= 1;
        }
        if n == 0 {
            return first;
        }
        first = find_if(seq, pos, last.clone(), |item| pred(item, value));
    }
    last
}

/// Returns the start of the last occurrence of `[first2, last2)` as a subrange of
/// `[first1, last1)`, or `last1` if there is none, including when the pattern is empty.
///
/// When both sequences are at least bidirectional, the search runs backwards from `last1` and stops
/// at the first match. Otherwise, a forward search is repeated past every match until none is left.
///
/// # Examples
/// ```
/// # use generic_algo::algo::find_end;
/// # use generic_algo::iter::ForwardView;
/// let text = [1, 2, 3, 1, 2, 3, 1];
/// let pattern = [1, 2];
/// assert_eq!(find_end(&text[..], 0, 7, &pattern[..], 0, 2), 3);
/// assert_eq!(find_end(&ForwardView(&text[..]), 0, 7, &pattern[..], 0, 2), 3);
/// assert_eq!(find_end(&text[..], 0, 7, &pattern[..], 0, 0), 7);
/// ```
pub fn find_end<S1, S2>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    S1::Value: PartialEq<S2::Value>,
    (S1::Category, S2::Category): FindEndDispatch<S1, S2>,
{
    find_end_by(s1, first1, last1, s2, first2, last2, |a, b| a == b)
}

pub fn find_end_by<S1, S2, P>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
    mut pred: P,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
    (S1::Category, S2::Category): FindEndDispatch<S1, S2>,
{
    <(S1::Category, S2::Category)>::find_end(s1, first1, last1, s2, first2, last2, &mut pred)
}

/// Selects the [`find_end`] strategy from the capabilities of both sequences, implemented for the
/// pair of their tags.
pub trait FindEndDispatch<S1: Sequence + ?Sized, S2: Sequence + ?Sized> {
    fn find_end<P>(
        s1: &S1,
        first1: S1::Position,
        last1: S1::Position,
        s2: &S2,
        first2: S2::Position,
        last2: S2::Position,
        pred: &mut P,
    ) -> S1::Position
    where
        P: FnMut(&S1::Value, &S2::Value) -> bool;
}

fn find_end_forward<S1, S2, P>(
    s1: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
    pred: &mut P,
) -> S1::Position
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
{
    if first2 == last2 {
        return last1;
    }

    let mut result = last1.clone();
    loop {
        let found = search_by(s1, first1, last1.clone(), s2, first2.clone(), last2.clone(), &mut *pred);
        if found == last1 {
            return result;
        }
        first1 = successor(s1, &found);
        result = found;
    }
}

fn find_end_backward<S1, S2, P>(
    s1: &S1,
    first1: S1::Position,
    last1: S1::Position,
    s2: &S2,
    first2: S2::Position,
    last2: S2::Position,
    pred: &mut P,
) -> S1::Position
where
    S1: Bidirectional + ?Sized,
    S2: Bidirectional + ?Sized,
    P: FnMut(&S1::Value, &S2::Value) -> bool,
{
    if first2 == last2 {
        return last1;
    }

    let len2 = distance(s2, first2.clone(), last2.clone());
    // Reverse view positions are the base positions just past the values they refer to.
    let found = search_by(
        &ReverseView(s1), last1.clone(), first1.clone(),
        &ReverseView(s2), last2, first2,
        &mut *pred,
    );
    if found == first1 {
        return last1;
    }
    let mut result = found;
    advance(s1, &mut result, -len2);
    result
}

macro_rules! find_end_forward {
    ($(($a:ident, $b:ident)),+ $(,)?) => {
        $(
            impl<S1, S2> FindEndDispatch<S1, S2> for ($a, $b)
            where
                S1: Sequence + ?Sized,
                S2: Sequence + ?Sized,
            {
                fn find_end<P>(
                    s1: &S1,
                    first1: S1::Position,
                    last1: S1::Position,
                    s2: &S2,
                    first2: S2::Position,
                    last2: S2::Position,
                    pred: &mut P,
                ) -> S1::Position
                where
                    P: FnMut(&S1::Value, &S2::Value) -> bool,
                {
                    find_end_forward(s1, first1, last1, s2, first2, last2, pred)
                }
            }
        )+
    };
}

macro_rules! find_end_backward {
    ($(($a:ident, $b:ident)),+ $(,)?) => {
        $(
            impl<S1, S2> FindEndDispatch<S1, S2> for ($a, $b)
            where
                S1: Bidirectional + ?Sized,
                S2: Bidirectional + ?Sized,
            {
                fn find_end<P>(
                    s1: &S1,
                    first1: S1::Position,
                    last1: S1::Position,
                    s2: &S2,
                    first2: S2::Position,
                    last2: S2::Position,
                    pred: &mut P,
                ) -> S1::Position
                where
                    P: FnMut(&S1::Value, &S2::Value) -> bool,
                {
                    find_end_backward(s1, first1, last1, s2, first2, last2, pred)
                }
            }
        )+
    };
}

find_end_forward!(
    (InputTag, InputTag),
    (InputTag, ForwardTag),
    (InputTag, BidirectionalTag),
    (InputTag, RandomAccessTag),
    (InputTag, ContiguousTag),
    (ForwardTag, InputTag),
    (ForwardTag, ForwardTag),
    (ForwardTag, BidirectionalTag),
    (ForwardTag, RandomAccessTag),
    (ForwardTag, ContiguousTag),
    (BidirectionalTag, InputTag),
    (BidirectionalTag, ForwardTag),
    (RandomAccessTag, InputTag),
    (RandomAccessTag, ForwardTag),
    (ContiguousTag, InputTag),
    (ContiguousTag, ForwardTag),
);

find_end_backward!(
    (BidirectionalTag, BidirectionalTag),
    (BidirectionalTag, RandomAccessTag),
    (BidirectionalTag, ContiguousTag),
    (RandomAccessTag, BidirectionalTag),
    (RandomAccessTag, RandomAccessTag),
    (RandomAccessTag, ContiguousTag),
    (ContiguousTag, BidirectionalTag),
    (ContiguousTag, RandomAccessTag),
    (ContiguousTag, ContiguousTag),
);

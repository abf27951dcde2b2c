//! Each operation takes two sorted ranges and makes a single pass over both, so they run in
//! `O(n + m)`. Equivalent values are matched up one to one, which makes the operations work on
//! multisets as well.

use crate::iter::{Output, Sequence, Traverse};
use crate::traits::TypeTraits;

/// Returns true if every value of the sorted range `[first2, last2)` is also in the sorted range
/// `[first1, last1)`.
///
/// # Examples
/// ```
/// # use generic_algo::algo::includes;
/// let (all, some) = ([1, 2, 3, 5, 8], [2, 5]);
/// assert!(includes(&all[..], 0, 5, &some[..], 0, 2));
/// assert!(!includes(&some[..], 0, 2, &all[..], 0, 5));
/// ```
pub fn includes<S1, S2>(
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
    includes_by(s1, first1, last1, s2, first2, last2, |a, b| a < b)
}

pub fn includes_by<S1, S2, F>(
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
        if less(b, a) {
            return false;
        } else if less(a, b) {
            s1.next(&mut first1);
        } else {
            s1.next(&mut first1);
            s2.next(&mut first2);
        }
    }
    first2 == last2
}

/// Generates the public operation and its `_by` variant from the body of the `_by` variant, which
/// sees `s1, first1, last1, s2, first2, last2, out, less` as bindings.
macro_rules! set_operation {
    (
        $(#[$meta:meta])*
        $name:ident, $name_by:ident,
        |$s1:ident, $first1:ident, $last1:ident, $s2:ident, $first2:ident, $last2:ident, $out:ident, $less:ident| $body:block
    ) => {
        $(#[$meta])*
        pub fn $name<S1, S2, O>(
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
            $name_by(s1, first1, last1, s2, first2, last2, out, |a, b| a < b)
        }

        #[allow(clippy::too_many_arguments)]
        pub fn $name_by<S1, S2, O, F>(
            $s1: &S1,
            mut $first1: S1::Position,
            $last1: S1::Position,
            $s2: &S2,
            mut $first2: S2::Position,
            $last2: S2::Position,
            mut $out: O,
            mut $less: F,
        ) -> O
        where
            S1: Sequence + ?Sized,
            S2: Sequence<Value = S1::Value> + ?Sized,
            S1::Value: TypeTraits,
            O: Output<S1::Value>,
            F: FnMut(&S1::Value, &S1::Value) -> bool,
        $body
    };
}

set_operation!(
    /// Writes the sorted union of two sorted ranges to `out`, returning it. A value present `m`
    /// times in the first range and `n` times in the second is written `max(m, n)` times, taking
    /// the first range's copies first.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::algo::set_union;
    /// # use generic_algo::iter::BackInserter;
    /// # use generic_algo::collections::contiguous::Vector;
    /// let (a, b) = ([1, 3, 5], [3, 4, 5]);
    /// let mut out = Vector::new();
    /// set_union(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(&mut out));
    /// assert_eq!(&*out, &[1, 3, 4, 5]);
    /// ```
    set_union, set_union_by,
    |s1, first1, last1, s2, first2, last2, out, less| {
        while first1 != last1 && first2 != last2 {
            let (a, b) = (s1.at(&first1), s2.at(&first2));
            if less(a, b) {
                out.put(a.clone());
                s1.next(&mut first1);
            } else if less(b, a) {
                out.put(b.clone());
                s2.next(&mut first2);
            } else {
                out.put(a.clone());
                s1.next(&mut first1);
                s2.next(&mut first2);
            }
        }
        <S1::Category as Traverse<S1>>::copy(s1, first1, &last1, &mut out);
        <S2::Category as Traverse<S2>>::copy(s2, first2, &last2, &mut out);
        out
    }
);

set_operation!(
    /// Writes the values of the first sorted range that are also in the second to `out`, returning
    /// it.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::algo::set_intersection;
    /// # use generic_algo::iter::BackInserter;
    /// # use generic_algo::collections::contiguous::Vector;
    /// let (a, b) = ([1, 3, 5], [3, 4, 5]);
    /// let mut out = Vector::new();
    /// set_intersection(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(&mut out));
    /// assert_eq!(&*out, &[3, 5]);
    /// ```
    set_intersection, set_intersection_by,
    |s1, first1, last1, s2, first2, last2, out, less| {
        while first1 != last1 && first2 != last2 {
            let (a, b) = (s1.at(&first1), s2.at(&first2));
            if less(a, b) {
                s1.next(&mut first1);
            } else if less(b, a) {
                s2.next(&mut first2);
            } else {
                out.put(a.clone());
                s1.next(&mut first1);
                s2.next(&mut first2);
            }
        }
        out
    }
);

set_operation!(
    /// Writes the values of the first sorted range that aren't in the second to `out`, returning
    /// it.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::algo::set_difference;
    /// # use generic_algo::iter::BackInserter;
    /// # use generic_algo::collections::contiguous::Vector;
    /// let (a, b) = ([1, 3, 5], [3, 4, 5]);
    /// let mut out = Vector::new();
    /// set_difference(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(&mut out));
    /// assert_eq!(&*out, &[1]);
    /// ```
    set_difference, set_difference_by,
    |s1, first1, last1, s2, first2, last2, out, less| {
        while first1 != last1 && first2 != last2 {
            let (a, b) = (s1.at(&first1), s2.at(&first2));
            if less(a, b) {
                out.put(a.clone());
                s1.next(&mut first1);
            } else if less(b, a) {
                s2.next(&mut first2);
            } else {
                s1.next(&mut first1);
                s2.next(&mut first2);
            }
        }
        <S1::Category as Traverse<S1>>::copy(s1, first1, &last1, &mut out);
        out
    }
);

set_operation!(
    /// Writes the values that are in exactly one of the two sorted ranges to `out`, returning it.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::algo::set_symmetric_difference;
    /// # use generic_algo::iter::BackInserter;
    /// # use generic_algo::collections::contiguous::Vector;
    /// let (a, b) = ([1, 3, 5], [3, 4, 5]);
    /// let mut out = Vector::new();
    /// set_symmetric_difference(&a[..], 0, 3, &b[..], 0, 3, BackInserter::new(&mut out));
    /// assert_eq!(&*out, &[1, 4]);
    /// ```
    set_symmetric_difference, set_symmetric_difference_by,
    |s1, first1, last1, s2, first2, last2, out, less| {
        while first1 != last1 && first2 != last2 {
            let (a, b) = (s1.at(&first1), s2.at(&first2));
            if less(a, b) {
                out.put(a.clone());
                s1.next(&mut first1);
            } else if less(b, a) {
                out.put(b.clone());
                s2.next(&mut first2);
            } else {
                s1.next(&mut first1);
                s2.next(&mut first2);
            }
        }
        <S1::Category as Traverse<S1>>::copy(s1, first1, &last1, &mut out);
        <S2::Category as Traverse<S2>>::copy(s2, first2, &last2, &mut out);
        out
    }
);

use crate::iter::{
    Bidirectional, BidirectionalTag, Capability, Contiguous, ContiguousTag, Distance, ForwardTag,
    InputTag, Output, RandomAccess, RandomAccessTag, Sequence, SequenceMut,
};
use crate::traits::{self, TypeTraits};

/// The primitives of the dispatch core, implemented once per capability tag.
///
/// Every [`Sequence`] requires `Self::Category: Traverse<Self>`, so a generic algorithm can always
/// write `<S::Category as Traverse<S>>::distance(..)` and get the implementation specialized for
/// its sequence's capability. The provided methods are the forward-only or bidirectional versions,
/// stronger tags override the ones they can do better.
///
/// This trait is an implementation detail of the free functions in [`algo`](crate::algo), which
/// should be preferred.
pub trait Traverse<S: Sequence + ?Sized>: Capability {
    /// Counts the steps from `first` to `last`.
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> Distance {
        let mut pos = first.clone();
        let mut n = 0;
        while pos != *last {
            seq.next(&mut pos);
            n += 1;
        }
        n
    }

    /// Moves `pos` by `n` steps. Forward-only sequences can't move backwards, so `n` must be
    /// non-negative for them.
    fn advance(seq: &S, pos: &mut S::Position, n: Distance) {
        debug_assert!(n >= 0, "Forward-only positions can't move backwards!");
        for _ in 0..n {
            seq.next(pos);
        }
    }

    /// Writes clones of `[first, last)` into `out`.
    fn copy<O: Output<S::Value>>(seq: &S, mut first: S::Position, last: &S::Position, out: &mut O)
    where
        S::Value: TypeTraits,
    {
        while first != *last {
            out.put(seq.at(&first).clone());
            seq.next(&mut first);
        }
    }

    /// Overwrites the values starting at `pos` with clones of `src`, leaving `pos` past the last
    /// written value.
    fn write_slice(seq: &mut S, pos: &mut S::Position, src: &[S::Value])
    where
        S: SequenceMut,
        S::Value: TypeTraits,
    {
        for value in src {
            *seq.at_mut(pos) = value.clone();
            seq.next(pos);
        }
    }

    /// Overwrites the values ending at `end` with clones of `src`, leaving `end` at the first
    /// written value.
    fn write_slice_back(seq: &mut S, end: &mut S::Position, src: &[S::Value])
    where
        S: Bidirectional + SequenceMut,
        S::Value: TypeTraits,
    {
        for value in src.iter().rev() {
            seq.prev(end);
            *seq.at_mut(end) = value.clone();
        }
    }

    /// Copies `[first, last)` to the range starting at `result`, which must not start after
    /// `first`. Returns the end of the written range.
    fn copy_within(
        seq: &mut S,
        mut first: S::Position,
        last: &S::Position,
        mut result: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
        S::Value: TypeTraits,
    {
        while first != *last {
            seq.assign(&result, &first);
            seq.next(&mut first);
            seq.next(&mut result);
        }
        result
    }

    /// Copies `[first, last)` to the range ending at `result`, which must not end before `last`.
    /// Returns the start of the written range.
    fn copy_backward_within(
        seq: &mut S,
        first: &S::Position,
        mut last: S::Position,
        mut result: S::Position,
    ) -> S::Position
    where
        S: Bidirectional + SequenceMut,
        S::Value: TypeTraits,
    {
        while *first != last {
            seq.prev(&mut last);
            seq.prev(&mut result);
            seq.assign(&result, &last);
        }
        result
    }

    /// Copies `[first, last)` of `seq` to the range of `dst` ending at `result`, right to left.
    /// Returns the start of the written range.
    fn copy_backward<D>(
        seq: &S,
        first: &S::Position,
        mut last: S::Position,
        dst: &mut D,
        mut result: D::Position,
    ) -> D::Position
    where
        S: Bidirectional,
        S::Value: TypeTraits,
        D: Bidirectional + SequenceMut<Value = S::Value> + ?Sized,
    {
        while *first != last {
            seq.prev(&mut last);
            dst.prev(&mut result);
            *dst.at_mut(&result) = seq.at(&last).clone();
        }
        result
    }

    /// Reverses `[first, last)` in place.
    fn reverse(seq: &mut S, mut first: S::Position, mut last: S::Position)
    where
        S: Bidirectional + SequenceMut,
    {
        loop {
            if first == last {
                return;
            }
            seq.prev(&mut last);
            if first == last {
                return;
            }
            seq.swap_at(&first, &last);
            seq.next(&mut first);
        }
    }

    /// Rotates `[first, last)` so that `middle` becomes the first value. Returns the new position
    /// of the value previously at `first`.
    fn rotate(
        seq: &mut S,
        mut first: S::Position,
        mut middle: S::Position,
        last: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
    {
        if first == middle {
            return last;
        }
        if middle == last {
            return first;
        }

        let mut first2 = middle.clone();
        loop {
            seq.swap_at(&first, &first2);
            seq.next(&mut first);
            seq.next(&mut first2);
            if first == middle {
                middle = first2.clone();
            }
            if first2 == last {
                break;
            }
        }

        let new_middle = first.clone();
        first2 = middle.clone();
        while first2 != last {
            seq.swap_at(&first, &first2);
            seq.next(&mut first);
            seq.next(&mut first2);
            if first == middle {
                middle = first2.clone();
            } else if first2 == last {
                first2 = middle.clone();
            }
        }
        new_middle
    }
}

impl<S: Sequence + ?Sized> Traverse<S> for InputTag {}

impl<S: Sequence + ?Sized> Traverse<S> for ForwardTag {}

impl<S: Bidirectional + ?Sized> Traverse<S> for BidirectionalTag {
    fn advance(seq: &S, pos: &mut S::Position, n: Distance) {
        if n >= 0 {
            for _ in 0..n {
                seq.next(pos);
            }
        } else {
            for _ in n..0 {
                seq.prev(pos);
            }
        }
    }

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
    {
        if first == middle {
            return last;
        }
        if middle == last {
            return first;
        }

        Self::reverse(seq, first.clone(), middle.clone());
        Self::reverse(seq, middle.clone(), last.clone());

        let (mut first, mut last) = (first, last);
        while first != middle && middle != last {
            seq.prev(&mut last);
            seq.swap_at(&first, &last);
            seq.next(&mut first);
        }

        if first == middle {
            Self::reverse(seq, middle, last.clone());
            last
        } else {
            Self::reverse(seq, first.clone(), middle);
            first
        }
    }
}

impl<S: RandomAccess + ?Sized> Traverse<S> for RandomAccessTag {
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> Distance {
        seq.diff(first, last)
    }

    fn advance(seq: &S, pos: &mut S::Position, n: Distance) {
        *pos = seq.jump(pos, n);
    }

    fn copy<O: Output<S::Value>>(seq: &S, mut first: S::Position, last: &S::Position, out: &mut O)
    where
        S::Value: TypeTraits,
    {
        for _ in 0..seq.diff(&first, last) {
            out.put(seq.at(&first).clone());
            seq.next(&mut first);
        }
    }

    fn copy_within(
        seq: &mut S,
        mut first: S::Position,
        last: &S::Position,
        mut result: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
        S::Value: TypeTraits,
    {
        for _ in 0..seq.diff(&first, last) {
            seq.assign(&result, &first);
            seq.next(&mut first);
            seq.next(&mut result);
        }
        result
    }

    fn copy_backward_within(
        seq: &mut S,
        first: &S::Position,
        mut last: S::Position,
        mut result: S::Position,
    ) -> S::Position
    where
        S: Bidirectional + SequenceMut,
        S::Value: TypeTraits,
    {
        for _ in 0..seq.diff(first, &last) {
            seq.prev(&mut last);
            seq.prev(&mut result);
            seq.assign(&result, &last);
        }
        result
    }

    fn copy_backward<D>(
        seq: &S,
        first: &S::Position,
        mut last: S::Position,
        dst: &mut D,
        mut result: D::Position,
    ) -> D::Position
    where
        S: Bidirectional,
        S::Value: TypeTraits,
        D: Bidirectional + SequenceMut<Value = S::Value> + ?Sized,
    {
        for _ in 0..seq.diff(first, &last) {
            seq.prev(&mut last);
            dst.prev(&mut result);
            *dst.at_mut(&result) = seq.at(&last).clone();
        }
        result
    }

    fn reverse(seq: &mut S, mut first: S::Position, mut last: S::Position)
    where
        S: Bidirectional + SequenceMut,
    {
        while seq.diff(&first, &last) > 1 {
            seq.prev(&mut last);
            seq.swap_at(&first, &last);
            seq.next(&mut first);
        }
    }

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
    {
        if first == middle {
            return last;
        }
        if middle == last {
            return first;
        }

        let n = seq.diff(&first, &last);
        let k = seq.diff(&first, &middle);
        let l = n - k;

        // Every cycle carries one value along by swapping it forward, so no clone is needed.
        for start in 0..gcd(n, k) {
            let mut p = start;
            loop {
                let q = if p < l { p + k } else { p - l };
                if q == start {
                    break;
                }
                let (a, b) = (seq.jump(&first, p), seq.jump(&first, q));
                seq.swap_at(&a, &b);
                p = q;
            }
        }
        seq.jump(&first, l)
    }
}

impl<S: Contiguous + ?Sized> Traverse<S> for ContiguousTag {
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> Distance {
        seq.diff(first, last)
    }

    fn advance(seq: &S, pos: &mut S::Position, n: Distance) {
        *pos = seq.jump(pos, n);
    }

    fn copy<O: Output<S::Value>>(seq: &S, first: S::Position, last: &S::Position, out: &mut O)
    where
        S::Value: TypeTraits,
    {
        let (start, end) = (seq.index_of(&first), seq.index_of(last));
        out.put_slice(&seq.as_slice()[start..end]);
    }

    fn write_slice(seq: &mut S, pos: &mut S::Position, src: &[S::Value])
    where
        S: SequenceMut,
        S::Value: TypeTraits,
    {
        let start = seq.index_of(pos);
        traits::copy_run(src, &mut seq.as_mut_slice()[start..start + src.len()]);
        *pos = seq.jump(pos, src.len() as Distance);
    }

    fn write_slice_back(seq: &mut S, end: &mut S::Position, src: &[S::Value])
    where
        S: Bidirectional + SequenceMut,
        S::Value: TypeTraits,
    {
        let stop = seq.index_of(end);
        *end = seq.jump(end, -(src.len() as Distance));
        traits::copy_run(src, &mut seq.as_mut_slice()[stop - src.len()..stop]);
    }

    fn copy_within(
        seq: &mut S,
        first: S::Position,
        last: &S::Position,
        result: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
        S::Value: TypeTraits,
    {
        let n = seq.diff(&first, last);
        let (start, end) = (seq.index_of(&first), seq.index_of(last));
        let dest = seq.index_of(&result);
        traits::copy_run_within(seq.as_mut_slice(), start..end, dest);
        seq.jump(&result, n)
    }

    fn copy_backward_within(
        seq: &mut S,
        first: &S::Position,
        last: S::Position,
        result: S::Position,
    ) -> S::Position
    where
        S: Bidirectional + SequenceMut,
        S::Value: TypeTraits,
    {
        let n = seq.diff(first, &last);
        let start = seq.jump(&result, -n);
        let (src_start, src_end) = (seq.index_of(first), seq.index_of(&last));
        let dest = seq.index_of(&start);
        traits::copy_run_within(seq.as_mut_slice(), src_start..src_end, dest);
        start
    }

    fn copy_backward<D>(
        seq: &S,
        first: &S::Position,
        last: S::Position,
        dst: &mut D,
        mut result: D::Position,
    ) -> D::Position
    where
        S: Bidirectional,
        S::Value: TypeTraits,
        D: Bidirectional + SequenceMut<Value = S::Value> + ?Sized,
    {
        let (start, end) = (seq.index_of(first), seq.index_of(&last));
        <D::Category as Traverse<D>>::write_slice_back(dst, &mut result, &seq.as_slice()[start..end]);
        result
    }

    fn reverse(seq: &mut S, first: S::Position, last: S::Position)
    where
        S: Bidirectional + SequenceMut,
    {
        <RandomAccessTag as Traverse<S>>::reverse(seq, first, last)
    }

    fn rotate(
        seq: &mut S,
        first: S::Position,
        middle: S::Position,
        last: S::Position,
    ) -> S::Position
    where
        S: SequenceMut,
    {
        <RandomAccessTag as Traverse<S>>::rotate(seq, first, middle, last)
    }
}

/// Euclid's algorithm, for non-negative operands.
pub(crate) const fn gcd(mut m: Distance, mut n: Distance) -> Distance {
    while n != 0 {
        let t = m % n;
        m = n;
        n = t;
    }
    m
}

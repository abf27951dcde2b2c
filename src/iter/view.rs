//! Views restrict or redirect the traversal of a borrowed sequence. They are mostly useful to run
//! an algorithm through a weaker code path, or backwards.

use std::ops::{Deref, DerefMut};

use crate::iter::{
    Bidirectional, BidirectionalTag, Distance, ForwardTag, RandomAccess, RandomAccessTag, Sequence,
    SequenceMut,
};

/// Presents any sequence as forward-only.
///
/// # Examples
/// ```
/// # use generic_algo::algo::distance;
/// # use generic_algo::iter::ForwardView;
/// let values = [1, 2, 3, 4];
/// // Counted by stepping, rather than subtracting.
/// assert_eq!(distance(&ForwardView(&values[..]), 0, 4), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ForwardView<B>(pub B);

/// Presents a bidirectional sequence as only bidirectional, hiding random access.
#[derive(Debug, Clone, Copy)]
pub struct BidirectionalView<B>(pub B);

/// Presents a random access sequence as only random access, hiding contiguity.
#[derive(Debug, Clone, Copy)]
pub struct RandomAccessView<B>(pub B);

/// Traverses a bidirectional sequence from back to front.
///
/// A position of the view is a position of the underlying sequence, but refers to the value just
/// before it. This way the view's `begin` is the sequence's `end` and vice versa, and converting
/// positions between the two needs no adjustment.
///
/// # Examples
/// ```
/// # use generic_algo::algo::find;
/// # use generic_algo::iter::ReverseView;
/// let values = [1, 2, 1, 3];
/// let view = ReverseView(&values[..]);
/// // The last 1 is found first, at the position just past it.
/// assert_eq!(find(&view, 4, 0, &1), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReverseView<B>(pub B);

macro_rules! delegate_sequence {
    ($view:ident, $bound:ident, $tag:ident) => {
        impl<B> Sequence for $view<B>
        where
            B: Deref<Target: $bound>,
        {
            type Value = <B::Target as Sequence>::Value;
            type Position = <B::Target as Sequence>::Position;
            type Category = $tag;

            fn begin(&self) -> Self::Position {
                self.0.begin()
            }

            fn end(&self) -> Self::Position {
                self.0.end()
            }

            fn at(&self, pos: &Self::Position) -> &Self::Value {
                self.0.at(pos)
            }

            fn next(&self, pos: &mut Self::Position) {
                self.0.next(pos)
            }
        }

        impl<B> SequenceMut for $view<B>
        where
            B: DerefMut,
            B::Target: $bound + SequenceMut,
        {
            fn at_mut(&mut self, pos: &Self::Position) -> &mut Self::Value {
                self.0.at_mut(pos)
            }

            fn swap_at(&mut self, a: &Self::Position, b: &Self::Position) {
                self.0.swap_at(a, b)
            }
        }
    };
}

delegate_sequence!(ForwardView, Sequence, ForwardTag);
delegate_sequence!(BidirectionalView, Bidirectional, BidirectionalTag);
delegate_sequence!(RandomAccessView, RandomAccess, RandomAccessTag);

impl<B> Bidirectional for BidirectionalView<B>
where
    B: Deref<Target: Bidirectional>,
{
    fn prev(&self, pos: &mut Self::Position) {
        self.0.prev(pos)
    }
}

impl<B> Bidirectional for RandomAccessView<B>
where
    B: Deref<Target: RandomAccess>,
{
    fn prev(&self, pos: &mut Self::Position) {
        self.0.prev(pos)
    }
}

impl<B> RandomAccess for RandomAccessView<B>
where
    B: Deref<Target: RandomAccess>,
{
    fn jump(&self, pos: &Self::Position, n: Distance) -> Self::Position {
        self.0.jump(pos, n)
    }

    fn diff(&self, from: &Self::Position, to: &Self::Position) -> Distance {
        self.0.diff(from, to)
    }
}

impl<B> ReverseView<B>
where
    B: Deref<Target: Bidirectional>,
{
    /// Returns the position of the underlying sequence that holds the value at `pos`.
    pub fn base_position(
        &self,
        pos: &<B::Target as Sequence>::Position,
    ) -> <B::Target as Sequence>::Position {
        let mut base = pos.clone();
        self.0.prev(&mut base);
        base
    }
}

impl<B> Sequence for ReverseView<B>
where
    B: Deref<Target: Bidirectional>,
{
    type Value = <B::Target as Sequence>::Value;
    type Position = <B::Target as Sequence>::Position;
    type Category = BidirectionalTag;

    fn begin(&self) -> Self::Position {
        self.0.end()
    }

    fn end(&self) -> Self::Position {
        self.0.begin()
    }

    fn at(&self, pos: &Self::Position) -> &Self::Value {
        self.0.at(&self.base_position(pos))
    }

    fn next(&self, pos: &mut Self::Position) {
        self.0.prev(pos)
    }
}

impl<B> SequenceMut for ReverseView<B>
where
    B: DerefMut,
    B::Target: Bidirectional + SequenceMut,
{
    fn at_mut(&mut self, pos: &Self::Position) -> &mut Self::Value {
        let base = self.base_position(pos);
        self.0.at_mut(&base)
    }

    fn swap_at(&mut self, a: &Self::Position, b: &Self::Position) {
        let (a, b) = (self.base_position(a), self.base_position(b));
        self.0.swap_at(&a, &b)
    }
}

impl<B> Bidirectional for ReverseView<B>
where
    B: Deref<Target: Bidirectional>,
{
    fn prev(&self, pos: &mut Self::Position) {
        self.0.next(pos)
    }
}

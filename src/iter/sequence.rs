use std::fmt::Debug;

use crate::collections::contiguous::Vector;
use crate::iter::{Capability, ContiguousTag, Distance, Traverse};
use crate::util::error::{IndexOutOfBounds, PositionOutOfRange};
use crate::util::result::ResultExtension;

/// A sequence of values, addressed through positions that the sequence itself interprets.
///
/// Positions are plain handles, similar to indices into an arena. They can be compared, cloned and
/// stored freely, but they only mean something to the sequence that produced them. A range is a
/// pair of positions `[first, last)`, where `last` is reachable from `first` by repeated calls to
/// [`next`](Sequence::next).
///
/// The capability of a sequence is exposed as the associated [`Category`](Sequence::Category) tag.
/// Every tag knows how to [`Traverse`] the sequences it is attached to, so generic algorithms can
/// call the cheapest implementation of a primitive without any runtime checks.
pub trait Sequence {
    type Value;
    type Position: Clone + PartialEq + Debug;
    type Category: Capability + Traverse<Self>;

    /// Returns the position of the first value.
    fn begin(&self) -> Self::Position;

    /// Returns the past-the-end position.
    fn end(&self) -> Self::Position;

    /// Returns a reference to the value at `pos`.
    ///
    /// # Panics
    /// Implementations may panic if `pos` doesn't refer to a value of this sequence.
    fn at(&self, pos: &Self::Position) -> &Self::Value;

    /// Moves `pos` forward by one step.
    fn next(&self, pos: &mut Self::Position);
}

/// A [`Sequence`] whose values can be replaced in place.
pub trait SequenceMut: Sequence {
    fn at_mut(&mut self, pos: &Self::Position) -> &mut Self::Value;

    /// Exchanges the values at the two positions.
    fn swap_at(&mut self, a: &Self::Position, b: &Self::Position);

    /// Overwrites the value at `dst` with a clone of the value at `src`.
    fn assign(&mut self, dst: &Self::Position, src: &Self::Position)
    where
        Self::Value: Clone,
    {
        let value = self.at(src).clone();
        *self.at_mut(dst) = value;
    }
}

/// A [`Sequence`] whose positions can also step backwards.
pub trait Bidirectional: Sequence {
    fn prev(&self, pos: &mut Self::Position);
}

/// A [`Sequence`] whose positions can jump by arbitrary offsets in constant time.
pub trait RandomAccess: Bidirectional {
    /// Returns the position `n` steps away from `pos`, `n` may be negative.
    fn jump(&self, pos: &Self::Position, n: Distance) -> Self::Position;

    /// Returns the signed number of steps from `from` to `to`.
    fn diff(&self, from: &Self::Position, to: &Self::Position) -> Distance;
}

/// A [`RandomAccess`] sequence stored in a single allocation, which can be viewed as a slice.
pub trait Contiguous: RandomAccess {
    fn as_slice(&self) -> &[Self::Value];

    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    /// Converts a position into an index of [`as_slice`](Contiguous::as_slice).
    fn index_of(&self, pos: &Self::Position) -> usize;
}

/// Checks that moving `position` by `offset` stays within `0..=len`, returning the new position.
fn checked_offset(position: usize, offset: Distance, len: usize) -> Result<usize, PositionOutOfRange> {
    position.checked_add_signed(offset)
        .filter(|new| *new <= len)
        .ok_or(PositionOutOfRange { position, offset, len })
}

impl<T> Sequence for [T] {
    type Value = T;
    type Position = usize;
    type Category = ContiguousTag;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn at(&self, pos: &usize) -> &T {
        self.get(*pos)
            .ok_or(IndexOutOfBounds { index: *pos, len: self.len() })
            .throw()
    }

    fn next(&self, pos: &mut usize) {
        *pos = checked_offset(*pos, 1, self.len()).throw();
    }
}

impl<T> SequenceMut for [T] {
    fn at_mut(&mut self, pos: &usize) -> &mut T {
        let len = self.len();
        self.get_mut(*pos)
            .ok_or(IndexOutOfBounds { index: *pos, len })
            .throw()
    }

    fn swap_at(&mut self, a: &usize, b: &usize) {
        let len = self.len();
        for index in [*a, *b] {
            if index >= len {
                Err(IndexOutOfBounds { index, len }).throw()
            }
        }
        self.swap(*a, *b);
    }
}

impl<T> Bidirectional for [T] {
    fn prev(&self, pos: &mut usize) {
        *pos = checked_offset(*pos, -1, self.len()).throw();
    }
}

impl<T> RandomAccess for [T] {
    fn jump(&self, pos: &usize, n: Distance) -> usize {
        checked_offset(*pos, n, self.len()).throw()
    }

    fn diff(&self, from: &usize, to: &usize) -> Distance {
        to.wrapping_sub(*from) as Distance
    }
}

impl<T> Contiguous for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn index_of(&self, pos: &usize) -> usize {
        *pos
    }
}

// Vector is a thin wrapper over its slice, all positions are the slice's indices.

impl<T> Sequence for Vector<T> {
    type Value = T;
    type Position = usize;
    type Category = ContiguousTag;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn at(&self, pos: &usize) -> &T {
        (**self).at(pos)
    }

    fn next(&self, pos: &mut usize) {
        (**self).next(pos)
    }
}

impl<T> SequenceMut for Vector<T> {
    fn at_mut(&mut self, pos: &usize) -> &mut T {
        (**self).at_mut(pos)
    }

    fn swap_at(&mut self, a: &usize, b: &usize) {
        (**self).swap_at(a, b)
    }
}

impl<T> Bidirectional for Vector<T> {
    fn prev(&self, pos: &mut usize) {
        (**self).prev(pos)
    }
}

impl<T> RandomAccess for Vector<T> {
    fn jump(&self, pos: &usize, n: Distance) -> usize {
        (**self).jump(pos, n)
    }

    fn diff(&self, from: &usize, to: &usize) -> Distance {
        (**self).diff(from, to)
    }
}

impl<T> Contiguous for Vector<T> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn index_of(&self, pos: &usize) -> usize {
        *pos
    }
}

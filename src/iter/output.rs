use std::fmt::{self, Debug, Formatter};

use crate::collections::traits::BackSequence;
use crate::iter::{SequenceMut, Traverse};
use crate::traits::TypeTraits;

/// A sink that values can be written to, one after another. Output sinks have the
/// [`OutputTag`](super::OutputTag) capability: they can't be read or rewound.
///
/// Algorithms that produce values take an `O: Output<T>` by value and return it once they're
/// done, so the caller can find out where writing stopped. Because `&mut O` is also an output, a
/// sink can be lent to an algorithm instead.
pub trait Output<T> {
    fn put(&mut self, value: T);

    /// Writes clones of all values in `src`. Sinks backed by contiguous memory override this to
    /// copy trivially copyable values in bulk.
    fn put_slice(&mut self, src: &[T])
    where
        T: TypeTraits,
    {
        for value in src {
            self.put(value.clone());
        }
    }
}

impl<T, O: Output<T> + ?Sized> Output<T> for &mut O {
    fn put(&mut self, value: T) {
        (**self).put(value)
    }

    fn put_slice(&mut self, src: &[T])
    where
        T: TypeTraits,
    {
        (**self).put_slice(src)
    }
}

/// An output that overwrites consecutive values of a mutable sequence, starting at a position.
///
/// The sequence must have enough values after the starting position to hold everything that is
/// written.
///
/// # Examples
/// ```
/// # use generic_algo::algo::copy;
/// # use generic_algo::iter::Writer;
/// let src = [1, 2, 3];
/// let mut dst = [0; 5];
/// let writer = copy(&src[..], 0, 3, Writer::new(&mut dst[..], 1));
/// assert_eq!(writer.into_position(), 4);
/// assert_eq!(dst, [0, 1, 2, 3, 0]);
/// ```
pub struct Writer<'a, S: SequenceMut + ?Sized> {
    seq: &'a mut S,
    pos: S::Position,
}

impl<'a, S: SequenceMut + ?Sized> Writer<'a, S> {
    pub const fn new(seq: &'a mut S, pos: S::Position) -> Writer<'a, S> {
        Writer { seq, pos }
    }

    /// Returns the position that the next value will be written to.
    pub const fn position(&self) -> &S::Position {
        &self.pos
    }

    /// Consumes the Writer, returning the position past the last written value.
    pub fn into_position(self) -> S::Position {
        self.pos
    }
}

impl<S: SequenceMut + ?Sized> Output<S::Value> for Writer<'_, S> {
    fn put(&mut self, value: S::Value) {
        *self.seq.at_mut(&self.pos) = value;
        self.seq.next(&mut self.pos);
    }

    fn put_slice(&mut self, src: &[S::Value])
    where
        S::Value: TypeTraits,
    {
        <S::Category as Traverse<S>>::write_slice(self.seq, &mut self.pos, src);
    }
}

impl<S: SequenceMut + ?Sized> Debug for Writer<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("pos", &self.pos)
            .finish_non_exhaustive()
    }
}

/// An output that appends every value to the back of a [`BackSequence`].
///
/// # Examples
/// ```
/// # use generic_algo::algo::copy;
/// # use generic_algo::collections::contiguous::Vector;
/// # use generic_algo::iter::BackInserter;
/// let src = [1, 2, 3];
/// let mut dst = Vector::new();
/// copy(&src[..], 1, 3, BackInserter::new(&mut dst));
/// assert_eq!(&*dst, &[2, 3]);
/// ```
pub struct BackInserter<'a, C: BackSequence + ?Sized> {
    seq: &'a mut C,
}

impl<'a, C: BackSequence + ?Sized> BackInserter<'a, C> {
    pub const fn new(seq: &'a mut C) -> BackInserter<'a, C> {
        BackInserter { seq }
    }
}

impl<C: BackSequence + ?Sized> Output<C::Item> for BackInserter<'_, C> {
    fn put(&mut self, value: C::Item) {
        self.seq.push_back(value);
    }
}

impl<C: BackSequence + ?Sized> Debug for BackInserter<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackInserter")
            .field("len", &self.seq.len())
            .finish()
    }
}

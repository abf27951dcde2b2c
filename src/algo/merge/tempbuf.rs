use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;
use std::ops::Deref;
use std::slice;

use crate::collections::contiguous::Array;
use crate::iter::{Output, Sequence, Traverse};
use crate::traits::{self, TypeTraits};
use crate::util::error::{CapacityOverflow, TryAllocError};
use crate::util::result::ResultExtension;

/// Scratch space for algorithms that run faster with extra memory, such as
/// [`inplace_merge`](super::inplace_merge).
///
/// A TemporaryBuffer owns uninitialized storage for up to [`cap`](TemporaryBuffer::cap) values. It
/// is filled from the front through its [`Output`] implementation, read back as a slice and
/// emptied with [`clear`](TemporaryBuffer::clear). Any values it still holds are dropped along
/// with it.
///
/// Acquisition never fails: when memory is short, a smaller buffer is returned, possibly one with
/// no capacity at all. Algorithms taking a buffer must work with any capacity.
///
/// # Examples
/// ```
/// # use generic_algo::algo::TemporaryBuffer;
/// # use generic_algo::iter::Output;
/// let mut buffer = TemporaryBuffer::acquire(4);
/// assert_eq!(buffer.cap(), 4);
///
/// buffer.put_slice(&[1, 2]);
/// buffer.put(3);
/// assert_eq!(&*buffer, &[1, 2, 3]);
///
/// buffer.clear();
/// assert!(buffer.is_empty());
/// ```
pub struct TemporaryBuffer<T> {
    arr: Array<MaybeUninit<T>>,
    len: usize,
}

impl<T> TemporaryBuffer<T> {
    /// Creates a buffer with no capacity, which makes algorithms take their in-place code paths.
    pub const fn empty() -> TemporaryBuffer<T> {
        TemporaryBuffer {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Attempts to allocate a buffer with capacity for exactly `count` values.
    ///
    /// # Errors
    /// Returns the [`TryAllocError`] of the failed allocation.
    pub fn try_acquire_exact(count: usize) -> Result<TemporaryBuffer<T>, TryAllocError> {
        Ok(TemporaryBuffer {
            arr: Array::try_new_uninit(count)?,
            len: 0,
        })
    }

    /// Allocates a buffer with capacity for up to `count` values. Whenever an allocation fails, the
    /// requested capacity is halved and allocation retried, down to a buffer with no capacity.
    pub fn acquire(count: usize) -> TemporaryBuffer<T> {
        let mut count = count;
        loop {
            match Self::try_acquire_exact(count) {
                Ok(buffer) => return buffer,
                Err(_) if count > 0 => count /= 2,
                Err(_) => return Self::empty(),
            }
        }
    }

    /// Allocates a buffer with capacity for up to as many values as there are in `[first, last)`.
    pub fn for_range<S>(seq: &S, first: &S::Position, last: &S::Position) -> TemporaryBuffer<T>
    where
        S: Sequence<Value = T> + ?Sized,
    {
        let len = <S::Category as Traverse<S>>::distance(seq, first, last);
        Self::acquire(len.max(0) as usize)
    }

    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the number of values currently held.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops all held values, keeping the capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        // Reset len first, so a panicking drop can't cause a double drop.
        self.len = 0;
        for slot in &mut self.arr[..len] {
            // SAFETY: All values below the previous len are initialized and are no longer
            // reachable through the buffer.
            unsafe { slot.assume_init_drop() };
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, MaybeUninit<T> has the same layout as T and
        // the slice borrows self, so the values can't be dropped while it exists.
        unsafe {
            slice::from_raw_parts(self.arr.as_ptr().cast::<T>(), self.len)
        }
    }

    fn check_room(&self, count: usize) {
        if count > self.cap() - self.len {
            Err(CapacityOverflow).throw()
        }
    }
}

impl<T> Output<T> for TemporaryBuffer<T> {
    /// Appends `value` to the buffer.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the buffer is full.
    fn put(&mut self, value: T) {
        self.check_room(1);
        self.arr[self.len].write(value);
        self.len += 1;
    }

    /// Appends clones of all values in `src`, copying trivially copyable values in bulk.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the buffer can't hold all of `src`.
    fn put_slice(&mut self, src: &[T])
    where
        T: TypeTraits,
    {
        self.check_room(src.len());
        let start = self.len;
        traits::clone_run_into_uninit(src, &mut self.arr[start..start + src.len()]);
        self.len += src.len();
    }
}

impl<T> Deref for TemporaryBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> Drop for TemporaryBuffer<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.arr, which only deallocates.
    }
}

impl<T> Default for TemporaryBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Debug> Debug for TemporaryBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryBuffer")
            .field_with("contents", |f| f.debug_list().entries(self.as_slice()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

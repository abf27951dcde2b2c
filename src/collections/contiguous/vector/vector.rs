use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 4;

/// A growable contiguous collection, storing its values in the front of an `Array` of
/// uninitialized slots.
///
/// Vector is the default sequence behind a [`Stack`](crate::collections::adaptor::Stack) and the
/// usual target of a [`BackInserter`](crate::iter::BackInserter). It dereferences to a slice, so it
/// is a [`Contiguous`](crate::iter::Contiguous) sequence whose positions are indices.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` amortized, `O(n)` when growing |
/// | `pop` | `O(1)` |
/// | `truncate` | `O(n - len)` |
/// | `reserve` | `O(n)` when growing, `O(1)` otherwise |
pub struct Vector<T> {
    slots: Array<MaybeUninit<T>>,
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty Vector without allocating.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            slots: Array::new(),
            len: 0,
        }
    }

    /// Creates an empty Vector with room for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// vec.extend(['a', 'b', 'c']);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            slots: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the number of values in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values the Vector can hold before it reallocates.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Appends `value`, growing the Vector if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push(4);
    /// vec.push(2);
    /// assert_eq!(&*vec, &[4, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow(1);
        }
        self.slots[self.len].write(value);
        self.len += 1;
    }

    /// Removes and returns the last value, or [`None`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (1..=2).collect();
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: The slot was below len, so it is initialized. Lowering len first means the value
        // is read exactly once and never dropped by the Vector again.
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }

    /// Drops all values from index `len` onwards. Does nothing if the Vector is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        // Lower len first, so a panicking drop leaks the rest rather than dropping twice.
        self.len = len;
        for slot in &mut self.slots[len..old_len] {
            // SAFETY: Slots below the old len are initialized and are no longer reachable.
            unsafe { slot.assume_init_drop() };
        }
    }

    /// Drops all values, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Ensures that at least `extra` more values fit without reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows or its layout size would exceed [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        if self.cap() - self.len < extra {
            self.grow(extra);
        }
    }

    /// Reallocates to fit at least `extra` more values, at least doubling the capacity.
    fn grow(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        let doubled = self.cap().saturating_mul(2);
        self.slots.realloc(cmp::max(required, cmp::max(doubled, MIN_CAP)));
    }

    /// Converts the Vector into an [`Array`] of exactly its values.
    pub fn into_array(mut self) -> Array<T> {
        let mut slots = mem::take(&mut self.slots);
        slots.realloc(self.len);
        self.len = 0;
        // SAFETY: The Array has been shrunk to the initialized prefix, and the Vector no longer
        // owns any of the values.
        unsafe { slots.assume_init() }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        // The slots themselves are MaybeUninit, dropping them only deallocates.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the layout of T. The
        // slice borrows self, so the values can't be removed while it lives.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: As in deref, and the unique borrow of self rules out any other access.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.len);
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

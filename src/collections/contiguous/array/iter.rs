use std::iter::{FusedIterator, TrustedLen};
use std::mem::{self, MaybeUninit};
use std::ops::Range;

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size;
        // SAFETY: Array<T> has the same layout as Array<MaybeUninit<T>>. The IntoIter takes over
        // responsibility for dropping the values that haven't been yielded.
        let slots = unsafe { mem::transmute::<Array<T>, Array<MaybeUninit<T>>>(self) };
        IntoIter { slots, live: 0..size }
    }
}

/// An owned iterator over the values of an [`Array`] or a
/// [`Vector`](crate::collections::contiguous::Vector). The storage is freed when the iterator is
/// dropped, along with any values it hasn't yielded.
pub struct IntoIter<T> {
    slots: Array<MaybeUninit<T>>,
    live: Range<usize>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.live.next()?;
        // SAFETY: The slot was live, so it is initialized, and it has just left the live range.
        Some(unsafe { self.slots[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.live.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let index = self.live.next_back()?;
        // SAFETY: As in next.
        Some(unsafe { self.slots[index].assume_init_read() })
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for index in mem::take(&mut self.live) {
            // SAFETY: Every live slot is initialized, and the live range has been emptied.
            unsafe { self.slots[index].assume_init_drop() }
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// SAFETY: size_hint is the exact size_hint of the live Range<usize>.
unsafe impl<T> TrustedLen for IntoIter<T> {}

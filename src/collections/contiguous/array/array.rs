use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::iter::TrustedLen;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{AllocFailed, CapacityOverflow, TryAllocError};
use crate::util::result::ResultExtension;

/// A fixed size heap allocation of `T`s, with the size chosen at runtime. Similar to a
/// [`Box<[T]>`](Box<T>).
///
/// Array is the allocation primitive of this crate. The scratch space of a
/// [`TemporaryBuffer`](crate::algo::TemporaryBuffer) and the storage of a
/// [`Vector`](super::super::Vector) are both an `Array<MaybeUninit<T>>`, which tracks no
/// initialization and therefore never drops its contents.
///
/// Zero-sized layouts are never allocated, they use a dangling pointer instead.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

/// Returns the layout of `size` values of `T`, or [`CapacityOverflow`] if it exceeds
/// [`isize::MAX`] bytes.
fn layout_of<T>(size: usize) -> Result<Layout, CapacityOverflow> {
    Layout::array::<T>(size).map_err(|_| CapacityOverflow)
}

impl<T> Array<T> {
    /// Returns the number of slots in the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates an empty Array, which doesn't allocate.
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates an Array of `size` uninitialized values.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`]. Allocation failure is reported
    /// through [`alloc::handle_alloc_error`].
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(3);
    /// for (i, slot) in arr.iter_mut().enumerate() {
    ///     *slot = MaybeUninit::new(i * 10);
    /// }
    /// // SAFETY: Every slot has been written.
    /// let arr = unsafe { arr.assume_init() };
    /// assert_eq!(&*arr, &[0, 10, 20]);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        match Self::try_new_uninit(size) {
            Ok(arr) => arr,
            Err(TryAllocError::AllocFailed(AllocFailed { layout })) => alloc::handle_alloc_error(layout),
            Err(err) => Err(err).throw(),
        }
    }

    /// Attempts to allocate an Array of `size` uninitialized values, reporting failure instead of
    /// panicking or aborting.
    ///
    /// # Errors
    /// Returns [`TryAllocError::CapacityOverflow`] if the layout size would exceed [`isize::MAX`]
    /// and [`TryAllocError::AllocFailed`] if the global allocator refuses the request.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Array;
    /// let arr = Array::<u32>::try_new_uninit(16).unwrap();
    /// assert_eq!(arr.size(), 16);
    ///
    /// assert!(Array::<u32>::try_new_uninit(usize::MAX).unwrap_err().is_capacity_overflow());
    /// ```
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, TryAllocError> {
        let layout = layout_of::<T>(size)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: The layout has a non-zero size.
            NonNull::new(unsafe { alloc::alloc(layout).cast() })
                .ok_or(AllocFailed { layout })?
        };

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }
}

impl<T, I> From<I> for Array<T>
where
    I: Iterator<Item = T> + ExactSizeIterator + TrustedLen,
{
    /// Creates an Array from an iterator with a trusted, exact length, allocating once.
    ///
    /// # Examples
    /// ```
    /// # use generic_algo::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 2].into_iter());
    /// assert_eq!(&*arr, [3, 1, 2]);
    /// ```
    fn from(iter: I) -> Self {
        let mut arr = Self::new_uninit(iter.len());

        for (slot, value) in arr.iter_mut().zip(iter) {
            slot.write(value);
        }

        // SAFETY: A TrustedLen iterator yields exactly len values, so every slot is written.
        unsafe { arr.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Reinterprets the Array as fully initialized.
    ///
    /// # Safety
    /// Every value must have been initialized. Failing to do so is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        // SAFETY: MaybeUninit<T> has the same layout as T, so both Arrays have the same layout.
        // Initialization is the responsibility of the caller.
        unsafe { mem::transmute::<Array<MaybeUninit<T>>, Array<T>>(self) }
    }

    /// Resizes the Array to `new_size` slots. Slots are moved along with the allocation, new ones
    /// are uninitialized and slots past `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the new layout size would exceed [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        if self.size == new_size {
            return;
        }

        let new_layout = layout_of::<T>(new_size).throw();
        // The current layout has already been validated when it was allocated.
        let old_layout = layout_of::<T>(self.size).throw();

        self.ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => NonNull::dangling(),
            (0, _) => Self::alloc_or_abort(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout, and the new
                // size is non-zero and has been checked to fit in isize::MAX.
                let raw = unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes) };
                NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.size = new_size;
    }

    fn alloc_or_abort(layout: Layout) -> NonNull<MaybeUninit<T>> {
        // SAFETY: Callers only pass layouts with a non-zero size.
        NonNull::new(unsafe { alloc::alloc(layout).cast() })
            .unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized, MaybeUninit values have a no-op drop.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size)) }

        if let Ok(layout) = layout_of::<T>(self.size)
            && layout.size() != 0
        {
            // SAFETY: ptr was allocated by the global allocator with this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: ptr is valid and aligned for size initialized values, spanning no more than
        // isize::MAX bytes.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: As in deref, and the unique borrow of self rules out any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: An Array uniquely owns its allocation, like a Box<[T]>.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Shared access to an Array only hands out shared references to its values.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("size", &self.size)
            .finish()
    }
}

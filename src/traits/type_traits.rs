use std::fmt::Debug;
use std::mem::MaybeUninit;
use std::ops::Range;
use std::ptr;
use std::rc::Rc;
use std::sync::Arc;

use crate::collections::contiguous::Vector;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::TrueType {}
    impl Sealed for super::FalseType {}
}

/// A type-level boolean, implemented only by [`TrueType`] and [`FalseType`].
///
/// Besides the value itself, each boolean carries the copy strategy that the dispatch core uses
/// for types classified with it. The strategies are hidden, they are reached through
/// [`TypeTraits::Trivial`] rather than called directly.
pub trait Bool: sealed::Sealed + Debug + Default + Copy + 'static {
    /// The runtime value of this boolean.
    const VALUE: bool;

    /// Type-level conjunction, used to classify compound types such as tuples.
    type And<B: Bool>: Bool;

    /// Overwrites `dst` with copies of `src`. Both slices have the same length and never overlap.
    #[doc(hidden)]
    fn copy_run<T: TypeTraits<Trivial = Self>>(src: &[T], dst: &mut [T]);

    /// Copies `run[src]` to `run[dest..]`, where the two regions may overlap.
    #[doc(hidden)]
    fn copy_within<T: TypeTraits<Trivial = Self>>(run: &mut [T], src: Range<usize>, dest: usize);

    /// Initializes `dst` with copies of `src`. Both slices have the same length.
    #[doc(hidden)]
    fn clone_into_uninit<T: TypeTraits<Trivial = Self>>(src: &[T], dst: &mut [MaybeUninit<T>]);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrueType;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FalseType;

impl Bool for TrueType {
    const VALUE: bool = true;

    type And<B: Bool> = B;

    fn copy_run<T: TypeTraits<Trivial = Self>>(src: &[T], dst: &mut [T]) {
        assert_eq!(src.len(), dst.len(), "Copied runs must have equal lengths!");
        // SAFETY: T is classified as trivial, so by the contract of TypeTraits it is Copy and a
        // bitwise copy is a valid clone. Nothing needs to be dropped in dst. Both slices have the
        // same length and come from distinct borrows, so they can't overlap.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), src.len());
        }
    }

    fn copy_within<T: TypeTraits<Trivial = Self>>(run: &mut [T], src: Range<usize>, dest: usize) {
        assert!(src.start <= src.end && src.end <= run.len(), "Source run out of bounds!");
        let count = src.end - src.start;
        assert!(dest <= run.len() - count, "Destination run out of bounds!");
        // SAFETY: Both regions have been checked to lie within run. ptr::copy has memmove
        // semantics, so overlapping regions are handled. T is Copy by the contract of TypeTraits,
        // so overwritten values don't need to be dropped.
        unsafe {
            let base = run.as_mut_ptr();
            ptr::copy(base.add(src.start), base.add(dest), count);
        }
    }

    fn clone_into_uninit<T: TypeTraits<Trivial = Self>>(src: &[T], dst: &mut [MaybeUninit<T>]) {
        assert_eq!(src.len(), dst.len(), "Copied runs must have equal lengths!");
        // SAFETY: MaybeUninit<T> has the same layout as T and the regions don't overlap. A bitwise
        // copy of a trivial T is a valid, initialized T.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr().cast::<T>(), src.len());
        }
    }
}

impl Bool for FalseType {
    const VALUE: bool = false;

    type And<B: Bool> = FalseType;

    fn copy_run<T: TypeTraits<Trivial = Self>>(src: &[T], dst: &mut [T]) {
        dst.clone_from_slice(src);
    }

    fn copy_within<T: TypeTraits<Trivial = Self>>(run: &mut [T], src: Range<usize>, dest: usize) {
        let count = src.end - src.start;
        if dest <= src.start {
            for i in 0..count {
                run[dest + i] = run[src.start + i].clone();
            }
        } else {
            // The destination starts inside the source, copy from the back.
            for i in (0..count).rev() {
                run[dest + i] = run[src.start + i].clone();
            }
        }
    }

    fn clone_into_uninit<T: TypeTraits<Trivial = Self>>(src: &[T], dst: &mut [MaybeUninit<T>]) {
        assert_eq!(src.len(), dst.len(), "Copied runs must have equal lengths!");
        for (slot, value) in dst.iter_mut().zip(src) {
            slot.write(value.clone());
        }
    }
}

/// A compile-time classification of a value type, answering whether copying, assigning and
/// destroying it are all trivial. Algorithms use it to choose between one bulk memory copy and an
/// element-wise [`Clone`] loop.
///
/// Rust can't introspect this, so types opt in. The crate covers primitives, references, arrays,
/// tuples, [`Option`] and the common owning types. Other types can use the
/// [`type_traits!`](crate::type_traits) macro.
///
/// # Safety
/// `Trivial` may only be [`TrueType`] if `Self` is [`Copy`]. A trivial type is duplicated with a
/// bitwise copy, bypassing its [`Clone`] implementation, and is never dropped when overwritten.
/// [`FalseType`] is always a valid choice.
pub unsafe trait TypeTraits: Clone {
    type Trivial: Bool;
}

/// Returns whether `T` is classified as trivially copyable.
///
/// # Examples
/// ```
/// # use generic_algo::traits::is_trivial;
/// assert!(is_trivial::<u32>());
/// assert!(is_trivial::<(u8, [char; 4])>());
/// assert!(!is_trivial::<String>());
/// assert!(!is_trivial::<(u8, String)>());
/// ```
pub const fn is_trivial<T: TypeTraits>() -> bool {
    <T::Trivial as Bool>::VALUE
}

/// Used by [`type_traits!`](crate::type_traits) to reject non-[`Copy`] types classified as trivial.
#[doc(hidden)]
pub const fn assert_copy<T: Copy>() {}

/// Implements [`TypeTraits`] for concrete types.
///
/// Types listed as `trivial` must be [`Copy`], which is checked at compile time, making this the
/// safe way to opt in.
///
/// # Examples
/// ```
/// # use generic_algo::type_traits;
/// # use generic_algo::traits::is_trivial;
/// #[derive(Clone, Copy)]
/// struct Point(i32, i32);
///
/// #[derive(Clone)]
/// struct Name(String);
///
/// type_traits!(trivial: Point);
/// type_traits!(non_trivial: Name);
///
/// assert!(is_trivial::<Point>());
/// assert!(!is_trivial::<Name>());
/// ```
#[macro_export]
macro_rules! type_traits {
    (trivial: $($ty:ty),+ $(,)?) => {
        $(
            const _: fn() = $crate::traits::assert_copy::<$ty>;

            // SAFETY: The type has just been asserted to be Copy.
            unsafe impl $crate::traits::TypeTraits for $ty {
                type Trivial = $crate::traits::TrueType;
            }
        )+
    };
    (non_trivial: $($ty:ty),+ $(,)?) => {
        $(
            // SAFETY: FalseType is always a valid classification.
            unsafe impl $crate::traits::TypeTraits for $ty {
                type Trivial = $crate::traits::FalseType;
            }
        )+
    };
}

type_traits!(
    trivial: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
    (), TrueType, FalseType,
);

type_traits!(non_trivial: String);

// SAFETY: Shared references are always Copy.
unsafe impl<T: ?Sized> TypeTraits for &T {
    type Trivial = TrueType;
}

// SAFETY: [T; N] is Copy whenever T is, which is the only case in which T::Trivial is TrueType.
unsafe impl<T: TypeTraits, const N: usize> TypeTraits for [T; N] {
    type Trivial = T::Trivial;
}

// SAFETY: Option<T> is Copy whenever T is.
unsafe impl<T: TypeTraits> TypeTraits for Option<T> {
    type Trivial = T::Trivial;
}

// SAFETY: A tuple is Copy when all of its elements are, which is exactly when the conjunction of
// their classifications is TrueType.
unsafe impl<A: TypeTraits> TypeTraits for (A,) {
    type Trivial = A::Trivial;
}

// SAFETY: See (A,).
unsafe impl<A: TypeTraits, B: TypeTraits> TypeTraits for (A, B) {
    type Trivial = <A::Trivial as Bool>::And<B::Trivial>;
}

// SAFETY: See (A,).
unsafe impl<A: TypeTraits, B: TypeTraits, C: TypeTraits> TypeTraits for (A, B, C) {
    type Trivial = <<A::Trivial as Bool>::And<B::Trivial> as Bool>::And<C::Trivial>;
}

// SAFETY: See (A,).
unsafe impl<A: TypeTraits, B: TypeTraits, C: TypeTraits, D: TypeTraits> TypeTraits for (A, B, C, D) {
    type Trivial =
        <<<A::Trivial as Bool>::And<B::Trivial> as Bool>::And<C::Trivial> as Bool>::And<D::Trivial>;
}

// SAFETY: FalseType is always a valid classification.
unsafe impl<T: Clone> TypeTraits for Box<T> {
    type Trivial = FalseType;
}

// SAFETY: FalseType is always a valid classification.
unsafe impl<T: Clone> TypeTraits for Vec<T> {
    type Trivial = FalseType;
}

// SAFETY: FalseType is always a valid classification.
unsafe impl<T: Clone> TypeTraits for Vector<T> {
    type Trivial = FalseType;
}

// SAFETY: FalseType is always a valid classification.
unsafe impl<T: ?Sized> TypeTraits for Rc<T> {
    type Trivial = FalseType;
}

// SAFETY: FalseType is always a valid classification.
unsafe impl<T: ?Sized> TypeTraits for Arc<T> {
    type Trivial = FalseType;
}

/// Copies `src` over `dst` using the strategy selected by `T`'s classification.
pub(crate) fn copy_run<T: TypeTraits>(src: &[T], dst: &mut [T]) {
    <T::Trivial as Bool>::copy_run::<T>(src, dst)
}

/// Copies `run[src]` to `run[dest..]` using the strategy selected by `T`'s classification.
pub(crate) fn copy_run_within<T: TypeTraits>(run: &mut [T], src: Range<usize>, dest: usize) {
    <T::Trivial as Bool>::copy_within::<T>(run, src, dest)
}

/// Initializes `dst` from `src` using the strategy selected by `T`'s classification.
pub(crate) fn clone_run_into_uninit<T: TypeTraits>(src: &[T], dst: &mut [MaybeUninit<T>]) {
    <T::Trivial as Bool>::clone_into_uninit::<T>(src, dst)
}

//! Generic algorithms over [`Sequence`](crate::iter::Sequence)s.
//!
//! # Method
//! Every algorithm takes a sequence and the positions delimiting the range it works on, written
//! `[first, last)` in the docs. Algorithms ask only for the capability they need through their
//! trait bounds, and pick a faster implementation through the sequence's
//! [`Category`](crate::iter::Sequence::Category) where a stronger capability allows one. As an
//! example, [`sort`] needs a [`RandomAccess`](crate::iter::RandomAccess) sequence while
//! [`merge_sort`] is happy with a [`Bidirectional`](crate::iter::Bidirectional) one.
//!
//! Algorithms that compare values come in two flavours: one using [`PartialOrd`] or [`PartialEq`],
//! and a `_by` variant taking the comparison as a closure. Orderings are strict "less than"
//! predicates returning a `bool`, rather than the [`Ordering`](std::cmp::Ordering)s used by
//! [`slice::sort_by`].
//!
//! Algorithms producing values write them to an [`Output`](crate::iter::Output) which is returned
//! afterwards, so that the caller can recover where writing stopped.
//!
//! # Preconditions
//! Ranges must be valid, and the ranges given to algorithms on sorted data must be sorted by the
//! same ordering. Breaking these rules never causes undefined behaviour with the sequences of this
//! crate, their positions are bounds checked. The result is unspecified instead, or a panic when a
//! position leaves its sequence.

mod base;
mod merge;
mod mutate;
mod search;
mod set;
mod sort;

pub use base::*;
pub use merge::*;
pub use mutate::*;
pub use search::*;
pub use set::*;
pub use sort::*;

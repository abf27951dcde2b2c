//! This crate is my attempt at writing the generic algorithms part of a standard library: sorting,
//! searching, merging and set operations over sequences, written once and specialized for what
//! each sequence can do.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. The
//! classic "pair of iterators" algorithm libraries pick their implementation from the capabilities
//! of the iterators they are given, and from whether the values can be copied as raw memory. I
//! wanted to find out how far Rust's trait system gets with the same idea, without any runtime
//! checks.
//!
//! # Method
//! The building blocks live in [`iter`]: a [`Sequence`](iter::Sequence) hands out positions and
//! interprets them, and names its capability with a zero-sized tag such as
//! [`RandomAccessTag`](iter::RandomAccessTag). Each tag implements [`Traverse`](iter::Traverse),
//! the handful of primitives (distance, advance, copy, reverse, rotate) that everything else is
//! written in terms of. [`traits::TypeTraits`] classifies value types as trivially copyable or not,
//! which decides between a single memory copy and a [`Clone`] loop.
//!
//! The algorithms themselves are in [`algo`], and [`collections`] holds the collections they need:
//! [`Vector`](collections::contiguous::Vector) backs the
//! [`Stack`](collections::adaptor::Stack) adaptor by default, and
//! [`Array`](collections::contiguous::Array) provides the raw storage of the
//! [`TemporaryBuffer`](algo::TemporaryBuffer) used by in-place merges.
//!
//! # Error Handling
//! Most of the algorithms can't fail, they have preconditions instead. Handing them an invalid
//! range is a bug, but never undefined behaviour: positions of this crate's sequences are checked
//! indices, so a range that runs off the end of its sequence panics with a typed error instead of
//! reading past it.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Running out of memory for a temporary buffer isn't an error at
//! all: algorithms fall back to slower versions that need no extra memory.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. The `shuffle` feature (enabled by default) pulls in `rand` for
//! [`random_shuffle`](algo::random_shuffle), which takes the generator to use as an argument.
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]
#![feature(doc_cfg)]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algo;
pub mod collections;
pub mod iter;
pub mod traits;

pub(crate) mod util;

//! Compile-time classification of value types.
//!
//! [`TypeTraits`] tells the algorithms whether a type can be copied with a plain memory copy, which
//! is what lets [`copy`](crate::algo::copy) collapse into a single `memmove` for slices of
//! primitives while still calling [`Clone`] for everything else.

mod tests;
mod type_traits;

pub use type_traits::*;

//! Sequences, positions and the capability tags used to pick algorithm implementations.
//!
//! # Method
//! Rust's iterators consume themselves as they go, which makes them a bad fit for algorithms that
//! hold on to several positions at once and walk back and forth between them. Instead, this module
//! models the classic "pair of positions" style: a [`Sequence`] hands out [`Sequence::Position`]s
//! and interprets them, much like an arena interprets indices. Each sequence names its capability
//! with a zero-sized tag, and each tag implements [`Traverse`], so specialization happens through
//! plain trait resolution.

mod capability;
mod output;
mod sequence;
mod tests;
mod traverse;
pub mod view;

pub use capability::*;
pub use output::*;
pub use sequence::*;
pub use traverse::*;
#[doc(inline)]
pub use view::{BidirectionalView, ForwardView, RandomAccessView, ReverseView};

//! The collections used alongside the algorithms: storage for scratch space and default sequences,
//! and adaptors built on top of them.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! makes every slice algorithm available to them without extra work.

pub mod adaptor;
pub mod contiguous;
pub mod traits;

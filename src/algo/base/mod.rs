//! The basic building blocks shared by every other algorithm: measuring and moving positions,
//! copying ranges, and comparing them.

mod base;

pub use base::*;

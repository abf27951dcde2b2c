//! Non-mutating searches over sequences, and binary searches over sorted ranges.

mod bound;
mod search;
mod tests;

pub use bound::*;
pub use search::*;

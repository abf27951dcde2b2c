//! Set operations over sorted ranges.

mod set;

pub use set::*;

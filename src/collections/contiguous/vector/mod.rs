//! [`Vector`] and its owned iterator, which is shared with [`Array`](super::Array).

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;

//! [`Array`], the fixed size allocation underneath every other collection in this crate, and its
//! owned [`IntoIter`]. Borrowed iteration goes through the slice it dereferences to.

mod array;
mod iter;

pub use array::*;
pub use iter::*;

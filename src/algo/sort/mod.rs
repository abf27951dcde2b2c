//! Sorting and selection over random access sequences, and the binary heap operations they are
//! built from.

mod heap;
mod sort;

pub use heap::{
    is_heap_by, make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by, sort_heap,
    sort_heap_by,
};
pub use sort::*;

//! Algorithms that modify the values of a sequence, or write modified copies of them to an
//! output.

mod mutate;
mod permute;
mod tests;

pub use mutate::*;
pub use permute::*;

//! Adaptors which restrict an injected collection to a narrower interface.

mod stack;

pub use stack::*;

//! Traits describing the capabilities of collections, used to inject collections into adaptors.

mod back_sequence;

pub use back_sequence::*;

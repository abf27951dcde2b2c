//! Stable merging of sorted ranges, either into an output or in place, and the scratch buffer that
//! lets in-place merges run in linear time.

mod merge;
mod tempbuf;
mod tests;

pub use merge::*;
pub use tempbuf::TemporaryBuffer;

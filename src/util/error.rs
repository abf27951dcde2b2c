use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for sequence with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A position was moved outside of the sequence it belongs to. Positions may rest anywhere in
/// `0..=len`, with `len` being the past-the-end position.
#[derive(Debug)]
pub struct PositionOutOfRange {
    pub position: usize,
    pub offset: isize,
    pub len: usize,
}

impl Display for PositionOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moving position {} by {} leaves the range of a sequence with {} elements!",
            self.position, self.offset, self.len
        )
    }
}

impl Error for PositionOutOfRange {}

#[derive(Debug)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

#[derive(Debug)]
pub struct AllocFailed {
    pub layout: Layout,
}

impl Display for AllocFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation of {} bytes failed!", self.layout.size())
    }
}

impl Error for AllocFailed {}

/// The ways a fallible allocation can fail: either the requested layout can't be represented, or
/// the global allocator refused to provide it.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum TryAllocError {
    CapacityOverflow(CapacityOverflow),
    AllocFailed(AllocFailed),
}

use std::fmt::Debug;

use crate::iter::Sequence;

/// A capability tag, describing how positions of a [`Sequence`] can be moved. Tags carry no data
/// and are only ever used to select an implementation at compile time.
///
/// Each tag has a rank, which orders the capabilities from weakest to strongest:
///
/// | Tag | Rank | Movement |
/// |-|-|-|
/// | [`OutputTag`] | 0 | Write-only, single pass. |
/// | [`InputTag`] | 1 | Forward only, values read once. |
/// | [`ForwardTag`] | 2 | Forward only, multi-pass. |
/// | [`BidirectionalTag`] | 3 | Forward and backward by one step. |
/// | [`RandomAccessTag`] | 4 | Arbitrary jumps and `O(1)` distances. |
/// | [`ContiguousTag`] | 5 | Random access over a single allocation. |
pub trait Capability: Debug + Default + Copy + 'static {
    const RANK: u8;
    const NAME: &'static str;
}

/// The capability of sinks which can only be written to, see [`Output`](super::Output).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputTag;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputTag;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardTag;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

/// Random access over one contiguous allocation, allowing ranges to be viewed as slices and copied
/// in bulk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContiguousTag;

macro_rules! capability {
    ($($tag:ident => $rank:literal),+ $(,)?) => {
        $(
            impl Capability for $tag {
                const RANK: u8 = $rank;
                const NAME: &'static str = stringify!($tag);
            }
        )+
    };
}

capability!(
    OutputTag => 0,
    InputTag => 1,
    ForwardTag => 2,
    BidirectionalTag => 3,
    RandomAccessTag => 4,
    ContiguousTag => 5,
);

/// The value type of a sequence.
pub type ValueType<S> = <S as Sequence>::Value;

/// The position type of a sequence.
pub type PositionType<S> = <S as Sequence>::Position;

/// The signed type used for distances between positions and offsets applied to them.
pub type Distance = isize;

/// Returns the capability tag of the provided sequence.
///
/// # Examples
/// ```
/// # use generic_algo::iter::{category_of, ContiguousTag, ForwardTag, ForwardView};
/// let values = [1, 2, 3];
/// assert_eq!(category_of(&values[..]), ContiguousTag);
/// assert_eq!(category_of(&ForwardView(&values[..])), ForwardTag);
/// ```
pub fn category_of<S: Sequence + ?Sized>(_seq: &S) -> S::Category {
    S::Category::default()
}

/// Returns true if the sequence's capability is at least as strong as `C`.
pub const fn has_capability<S: Sequence + ?Sized, C: Capability>() -> bool {
    <S::Category as Capability>::RANK >= C::RANK
}

use crate::utils::{BoundedBuffer, SortedPair};

/// An unordered pair of distinct body indices whose AABBs overlap.
///
/// The pair is stored sorted: `a < b` always holds, so pairs compare and sort
/// deterministically whatever order the broad phase met the two bodies in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionPair {
    /// The smallest body index of the pair.
    pub a: usize,
    /// The largest body index of the pair.
    pub b: usize,
}

impl CollisionPair {
    /// Creates a pair from two distinct body indices, in any order.
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert_ne!(i, j, "a body cannot pair with itself");
        let sorted = SortedPair::new(i, j);
        CollisionPair {
            a: sorted.first(),
            b: sorted.second(),
        }
    }
}

/// The per-tick pair list written by the broad phase.
pub type PairBuffer = BoundedBuffer<CollisionPair>;

//! Broad phase: prunes the set of body pairs down to those whose AABBs overlap.

pub use self::collision_pair::{CollisionPair, PairBuffer};
pub use self::sort_and_sweep::{brute_force_pairs, SortAndSweep, SweepEntry};

mod collision_pair;
mod sort_and_sweep;

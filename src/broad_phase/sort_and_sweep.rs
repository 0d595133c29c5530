//! Three-axis sort-and-sweep.

use crate::bounding_volume::Aabb;
use crate::broad_phase::{CollisionPair, PairBuffer};
use crate::math::{Real, DIM};
use crate::utils::BufferFull;
use ordered_float::OrderedFloat;

/// A body's entry in the per-axis sorted sequence.
///
/// Entries are ordered by the AABB minimum on the current axis first and by
/// body index second. The index makes the order total, so any sorting
/// algorithm, stable or not, sequential or parallel, yields the same sequence.
pub type SweepEntry = (OrderedFloat<Real>, usize);

/// Sort-and-sweep broad phase.
///
/// For each axis in the order X, Y, Z, the bodies still involved in a
/// candidate pair are sorted by the minimum of their AABB on that axis and
/// swept with an active set: a pair survives the axis if the two intervals
/// overlap on it. Only the pairs that survived the previous axes are tested
/// on the next one, so the emitted pairs are exactly the pairs whose AABBs
/// overlap on all three axes.
///
/// The structure only owns scratch buffers, reused from one tick to the next.
#[derive(Clone, Debug, Default)]
pub struct SortAndSweep {
    candidates: Vec<usize>,
    entries: Vec<SweepEntry>,
    active: Vec<usize>,
    survivors: Vec<CollisionPair>,
    next_survivors: Vec<CollisionPair>,
}

impl SortAndSweep {
    /// Creates a new sort-and-sweep broad phase with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes into `out` every pair of bodies whose AABBs overlap, sorting each
    /// axis with a sequential comparison sort.
    ///
    /// Pairs where both bodies are flagged in `fixed` are skipped: two bodies
    /// that never move cannot produce a contact response. The pairs are
    /// emitted sorted by `(a, b)`.
    pub fn find_pairs(
        &mut self,
        aabbs: &[Aabb],
        fixed: &[bool],
        out: &mut PairBuffer,
    ) -> Result<(), BufferFull> {
        self.find_pairs_with(aabbs, fixed, out, |entries| entries.sort_unstable())
    }

    /// Same as [`SortAndSweep::find_pairs`] but with a caller-provided sort.
    ///
    /// `sort` must order the entries increasingly; since [`SweepEntry`] has a
    /// total order, every correct sort produces the same pairs.
    pub fn find_pairs_with(
        &mut self,
        aabbs: &[Aabb],
        fixed: &[bool],
        out: &mut PairBuffer,
        mut sort: impl FnMut(&mut [SweepEntry]),
    ) -> Result<(), BufferFull> {
        debug_assert_eq!(aabbs.len(), fixed.len());
        out.clear();
        self.survivors.clear();
        self.candidates.clear();
        self.candidates.extend(0..aabbs.len());

        for axis in 0..DIM {
            self.entries.clear();
            self.entries.extend(
                self.candidates
                    .iter()
                    .map(|&i| (OrderedFloat(aabbs[i].mins[axis]), i)),
            );
            sort(&mut self.entries);

            self.sweep_axis(aabbs, fixed, axis);
            core::mem::swap(&mut self.survivors, &mut self.next_survivors);
            self.survivors.sort_unstable();

            log::trace!(
                "sort-and-sweep: {} pairs survive axis {}",
                self.survivors.len(),
                axis
            );

            if self.survivors.is_empty() {
                break;
            }

            // Only bodies part of a surviving pair take part in the next sweep.
            self.candidates.clear();
            for pair in &self.survivors {
                self.candidates.push(pair.a);
                self.candidates.push(pair.b);
            }
            self.candidates.sort_unstable();
            self.candidates.dedup();
        }

        out.try_extend(self.survivors.iter().copied())
    }

    fn sweep_axis(&mut self, aabbs: &[Aabb], fixed: &[bool], axis: usize) {
        self.active.clear();
        self.next_survivors.clear();

        for &(min, i) in &self.entries {
            let min = min.into_inner();
            // Entries come by increasing minimum: a body whose interval ends
            // before this one starts cannot overlap any later body either.
            self.active.retain(|&j| aabbs[j].maxs[axis] >= min);

            for &j in &self.active {
                if fixed[i] && fixed[j] {
                    continue;
                }

                let pair = CollisionPair::new(i, j);
                // On the first axis every overlap is a candidate; afterwards the
                // pair must also have survived the previous axes.
                if axis == 0 || self.survivors.binary_search(&pair).is_ok() {
                    self.next_survivors.push(pair);
                }
            }

            self.active.push(i);
        }
    }
}

/// Reference O(n²) broad phase: every pair whose AABBs intersect, sorted by `(a, b)`.
pub fn brute_force_pairs(aabbs: &[Aabb], fixed: &[bool]) -> Vec<CollisionPair> {
    let mut result = Vec::new();

    for i in 0..aabbs.len() {
        for j in i + 1..aabbs.len() {
            if !(fixed[i] && fixed[j]) && aabbs[i].intersects(&aabbs[j]) {
                result.push(CollisionPair::new(i, j));
            }
        }
    }

    result
}

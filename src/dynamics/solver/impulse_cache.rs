use crate::broad_phase::CollisionPair;
use crate::dynamics::solver::contact_constraint::ContactConstraint;
use crate::math::{Real, Vector};
use crate::query::MAX_MANIFOLD_POINTS;
use arrayvec::ArrayVec;

/// The impulses accumulated at one contact point during the last solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CachedImpulse {
    /// The contact point relative to the reference body center, in the
    /// reference body frame.
    pub local_anchor: Vector,
    pub normal_impulse: Real,
    /// The friction impulse, in world-space.
    pub tangent_impulse: Vector,
}

/// The impulses accumulated on the contacts of one manifold.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CachedManifold {
    pub pair: CollisionPair,
    pub reference: usize,
    pub normal: Vector,
    pub points: ArrayVec<CachedImpulse, MAX_MANIFOLD_POINTS>,
}

/// The accumulated impulses of the last solve, sorted by pair.
#[derive(Clone, Debug, Default)]
pub(crate) struct ImpulseCache {
    manifolds: Vec<CachedManifold>,
}

impl ImpulseCache {
    /// The impulses cached for `pair`, if it had a manifold during the last solve.
    pub fn get(&self, pair: &CollisionPair) -> Option<&CachedManifold> {
        self.manifolds
            .binary_search_by(|cached| cached.pair.cmp(pair))
            .ok()
            .map(|i| &self.manifolds[i])
    }

    /// Replaces the cache content with the impulses accumulated by `constraints`.
    pub fn store(&mut self, constraints: &[ContactConstraint]) {
        self.manifolds.clear();
        self.manifolds
            .extend(constraints.iter().map(ContactConstraint::cached_impulses));
        self.manifolds.sort_unstable_by_key(|cached| cached.pair);
    }

    pub fn clear(&mut self) {
        self.manifolds.clear();
    }

    pub fn len(&self) -> usize {
        self.manifolds.len()
    }
}

//! Sequential and data-parallel execution of the collision phases.

use crate::bounding_volume::Aabb;
use crate::broad_phase::{CollisionPair, PairBuffer, SortAndSweep};
use crate::math::Real;
use crate::narrow_phase::{ContactDiagnostics, ManifoldBuffer, NarrowPhase, NarrowPhaseParams};
use crate::pipeline::{PipelineError, Resource};
use crate::shape::Collider;
use crate::utils::BufferFull;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the broad and narrow phases of a tick.
///
/// Every implementation must write exactly the same pairs and manifolds, in
/// the same order, for the same colliders. Each phase returns only once all of
/// its work completed, so the next phase always reads a finished buffer.
pub trait ExecutionStrategy: Send {
    /// Writes into `out` the pairs of colliders whose AABBs, enlarged by
    /// `margin`, overlap. Pairs of two `fixed` bodies are skipped.
    fn broad_phase(
        &mut self,
        colliders: &[Collider],
        fixed: &[bool],
        margin: Real,
        out: &mut PairBuffer,
    ) -> Result<(), PipelineError>;

    /// Writes into `out` the contact manifold of each pair, in pair order.
    fn narrow_phase(
        &mut self,
        pairs: &[CollisionPair],
        colliders: &[Collider],
        params: &NarrowPhaseParams,
        out: &mut ManifoldBuffer,
    ) -> Result<ContactDiagnostics, PipelineError>;
}

fn pairs_overflow(err: BufferFull) -> PipelineError {
    PipelineError::capacity(Resource::Pairs, err.capacity)
}

/// Runs every phase on the calling thread.
#[derive(Default)]
pub struct SequentialExecution {
    aabbs: Vec<Aabb>,
    sweep: SortAndSweep,
    narrow_phase: NarrowPhase,
}

impl SequentialExecution {
    /// Creates a sequential strategy with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExecutionStrategy for SequentialExecution {
    fn broad_phase(
        &mut self,
        colliders: &[Collider],
        fixed: &[bool],
        margin: Real,
        out: &mut PairBuffer,
    ) -> Result<(), PipelineError> {
        self.aabbs.clear();
        self.aabbs
            .extend(colliders.iter().map(|c| c.aabb().loosened(margin)));
        self.sweep
            .find_pairs(&self.aabbs, fixed, out)
            .map_err(pairs_overflow)
    }

    fn narrow_phase(
        &mut self,
        pairs: &[CollisionPair],
        colliders: &[Collider],
        params: &NarrowPhaseParams,
        out: &mut ManifoldBuffer,
    ) -> Result<ContactDiagnostics, PipelineError> {
        self.narrow_phase.set_params(*params);
        self.narrow_phase.compute_manifolds(pairs, colliders, out)
    }
}

/// Spreads the per-collider and per-pair work over the rayon thread pool.
///
/// The AABBs are computed in parallel and each sweep axis is sorted with a
/// parallel sort. The narrow phase runs one [`NarrowPhase`] per worker; the
/// per-pair results are collected in pair order before being appended to the
/// manifold buffer, so capacity errors are reported for the same pair as with
/// [`SequentialExecution`].
#[cfg(feature = "parallel")]
#[derive(Default)]
pub struct ParallelExecution {
    aabbs: Vec<Aabb>,
    sweep: SortAndSweep,
}

#[cfg(feature = "parallel")]
impl ParallelExecution {
    /// Creates a parallel strategy running on the global rayon thread pool.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "parallel")]
impl ExecutionStrategy for ParallelExecution {
    fn broad_phase(
        &mut self,
        colliders: &[Collider],
        fixed: &[bool],
        margin: Real,
        out: &mut PairBuffer,
    ) -> Result<(), PipelineError> {
        colliders
            .par_iter()
            .map(|c| c.aabb().loosened(margin))
            .collect_into_vec(&mut self.aabbs);
        self.sweep
            .find_pairs_with(&self.aabbs, fixed, out, |entries| {
                entries.par_sort_unstable()
            })
            .map_err(pairs_overflow)
    }

    fn narrow_phase(
        &mut self,
        pairs: &[CollisionPair],
        colliders: &[Collider],
        params: &NarrowPhaseParams,
        out: &mut ManifoldBuffer,
    ) -> Result<ContactDiagnostics, PipelineError> {
        out.clear();

        let results: Vec<_> = pairs
            .par_iter()
            .map_init(
                || NarrowPhase::new(*params),
                |narrow_phase, pair| narrow_phase.collide_pair(pair, colliders),
            )
            .collect();

        let mut diagnostics = ContactDiagnostics::default();

        for result in results {
            let (manifold, pair_diagnostics) = result?;
            diagnostics += pair_diagnostics;

            if let Some(manifold) = manifold {
                out.try_push(manifold)?;
            }
        }

        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Isometry, Vector};
    use crate::shape::Cuboid;

    fn cube(x: Real, y: Real, z: Real) -> Collider {
        Collider::new(
            Cuboid::new(Vector::repeat(0.5)).into(),
            &Isometry::translation(x, y, z),
        )
    }

    #[test]
    fn margin_reports_nearly_touching_pairs() {
        let colliders = [cube(0.0, 0.0, 0.0), cube(1.01, 0.0, 0.0)];
        let mut strategy = SequentialExecution::new();
        let mut out = PairBuffer::with_capacity(4);

        strategy
            .broad_phase(&colliders, &[false; 2], 0.0, &mut out)
            .unwrap();
        assert!(out.is_empty());

        strategy
            .broad_phase(&colliders, &[false; 2], 0.02, &mut out)
            .unwrap();
        assert_eq!(out.as_slice(), &[CollisionPair::new(0, 1)]);
    }

    #[test]
    fn pair_overflow_is_a_capacity_error() {
        let colliders = [cube(0.0, 0.0, 0.0), cube(0.1, 0.0, 0.0), cube(0.2, 0.0, 0.0)];
        let mut out = PairBuffer::with_capacity(2);

        assert_eq!(
            SequentialExecution::new().broad_phase(&colliders, &[false; 3], 0.0, &mut out),
            Err(PipelineError::CapacityExceeded {
                resource: Resource::Pairs,
                capacity: 2
            })
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let colliders: Vec<_> = (0..40)
            .map(|i| {
                let i = i as Real;
                cube((i * 0.37) % 3.0, (i * 0.61) % 2.0, (i * 0.23) % 2.5)
            })
            .collect();
        let fixed = vec![false; colliders.len()];
        let params = NarrowPhaseParams::default();

        let mut seq_pairs = PairBuffer::with_capacity(1000);
        let mut par_pairs = PairBuffer::with_capacity(1000);
        let mut seq_manifolds = ManifoldBuffer::with_capacity(1000, 4000);
        let mut par_manifolds = ManifoldBuffer::with_capacity(1000, 4000);

        let mut seq = SequentialExecution::new();
        let mut par = ParallelExecution::new();
        seq.broad_phase(&colliders, &fixed, 0.02, &mut seq_pairs).unwrap();
        par.broad_phase(&colliders, &fixed, 0.02, &mut par_pairs).unwrap();
        assert_eq!(seq_pairs, par_pairs);

        let d1 = seq
            .narrow_phase(&seq_pairs, &colliders, &params, &mut seq_manifolds)
            .unwrap();
        let d2 = par
            .narrow_phase(&par_pairs, &colliders, &params, &mut par_manifolds)
            .unwrap();
        assert_eq!(d1, d2);
        assert_eq!(seq_manifolds, par_manifolds);
    }
}

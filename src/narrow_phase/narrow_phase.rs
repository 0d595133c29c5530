use crate::broad_phase::CollisionPair;
use crate::math::Real;
use crate::narrow_phase::ManifoldBuffer;
use crate::pipeline::PipelineError;
use crate::query::details::{
    contact_manifold_convex_convex, contact_manifold_cuboid_cuboid,
    contact_manifold_halfspace_vertices, ConvexContactOptions, ConvexContactStatus,
    ConvexContactWorkspace, CuboidContactOptions,
};
use crate::query::ContactManifold;
use crate::shape::{Collider, ShapeType};
use core::ops::AddAssign;

/// Tuning of the narrow phase.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NarrowPhaseParams {
    /// Contacts are generated for features apart by up to this distance.
    pub contact_tolerance: Real,
    /// Reference face selection bias: the second box's face only becomes the
    /// reference when its separation exceeds `face_relative_tol * sep1 + face_absolute_tol`.
    pub face_relative_tol: Real,
    /// See `face_relative_tol`.
    pub face_absolute_tol: Real,
    /// Whether box pairs may produce single-point edge-edge contacts.
    pub edge_contacts: bool,
    /// Iteration limit of GJK.
    pub gjk_max_iterations: usize,
    /// Iteration limit of EPA.
    pub epa_max_iterations: usize,
    /// EPA convergence tolerance.
    pub epa_tolerance: Real,
}

impl Default for NarrowPhaseParams {
    fn default() -> Self {
        Self {
            contact_tolerance: 0.02,
            face_relative_tol: 0.98,
            face_absolute_tol: 0.001,
            edge_contacts: true,
            gjk_max_iterations: 32,
            epa_max_iterations: 64,
            epa_tolerance: 1.0e-4,
        }
    }
}

impl NarrowPhaseParams {
    fn cuboid_options(&self) -> CuboidContactOptions {
        CuboidContactOptions {
            prediction: self.contact_tolerance,
            relative_tolerance: self.face_relative_tol,
            absolute_tolerance: self.face_absolute_tol,
            edge_contacts: self.edge_contacts,
        }
    }

    fn convex_options(&self) -> ConvexContactOptions {
        ConvexContactOptions {
            gjk_max_iterations: self.gjk_max_iterations,
            epa_max_iterations: self.epa_max_iterations,
            epa_tolerance: self.epa_tolerance,
        }
    }
}

/// Counters of the non-fatal query failures of a tick.
///
/// None of these fail the tick: the affected pair is treated as not
/// colliding, or resolved with the best result found so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactDiagnostics {
    /// Pairs for which GJK hit its iteration limit.
    pub gjk_fallbacks: usize,
    /// Pairs for which EPA hit its iteration limit.
    pub epa_fallbacks: usize,
    /// Pairs skipped because of degenerate geometry.
    pub degenerate_skips: usize,
}

impl AddAssign for ContactDiagnostics {
    fn add_assign(&mut self, rhs: Self) {
        self.gjk_fallbacks += rhs.gjk_fallbacks;
        self.epa_fallbacks += rhs.epa_fallbacks;
        self.degenerate_skips += rhs.degenerate_skips;
    }
}

/// The narrow phase: computes the contact manifold of each candidate pair.
///
/// The shape pair selects the contact path:
/// - two cuboids use the separating axis test with face clipping,
/// - a half-space against any vertex-based shape clips the vertices against the plane,
/// - every other pair of vertex-based shapes uses GJK then EPA,
/// - two half-spaces never collide.
///
/// The structure only owns the scratch buffers of GJK and EPA, so one instance
/// per thread is enough to process pairs concurrently.
#[derive(Default)]
pub struct NarrowPhase {
    params: NarrowPhaseParams,
    convex_workspace: ConvexContactWorkspace,
}

impl NarrowPhase {
    /// Creates a narrow phase with the given tuning.
    pub fn new(params: NarrowPhaseParams) -> Self {
        Self {
            params,
            convex_workspace: ConvexContactWorkspace::new(),
        }
    }

    /// The narrow phase tuning.
    pub fn params(&self) -> &NarrowPhaseParams {
        &self.params
    }

    /// Replaces the narrow phase tuning.
    pub fn set_params(&mut self, params: NarrowPhaseParams) {
        self.params = params;
    }

    /// Computes the contact manifold between the two colliders of `pair`.
    ///
    /// Fails with `InvalidReference` if the pair references a collider out of
    /// bounds. Otherwise returns the manifold, if any, and the non-fatal
    /// failures met on the way.
    pub fn collide_pair(
        &mut self,
        pair: &CollisionPair,
        colliders: &[Collider],
    ) -> Result<(Option<ContactManifold>, ContactDiagnostics), PipelineError> {
        PipelineError::check_reference(pair.a, colliders.len())?;
        PipelineError::check_reference(pair.b, colliders.len())?;
        let (c1, c2) = (&colliders[pair.a], &colliders[pair.b]);
        let mut diagnostics = ContactDiagnostics::default();

        let manifold = match (c1.shape_type(), c2.shape_type()) {
            (ShapeType::HalfSpace, ShapeType::HalfSpace) => None,
            (ShapeType::HalfSpace, _) => self.collide_halfspace(pair.a, c1, pair.b, c2),
            (_, ShapeType::HalfSpace) => self.collide_halfspace(pair.b, c2, pair.a, c1),
            (ShapeType::Cuboid, ShapeType::Cuboid) => {
                match (c1.as_oriented_cuboid(), c2.as_oriented_cuboid()) {
                    (Some(obb1), Some(obb2)) => contact_manifold_cuboid_cuboid(
                        pair.a,
                        &obb1,
                        pair.b,
                        &obb2,
                        &self.params.cuboid_options(),
                    ),
                    _ => None,
                }
            }
            _ => {
                let (manifold, status) = contact_manifold_convex_convex(
                    pair.a,
                    c1,
                    pair.b,
                    c2,
                    &self.params.convex_options(),
                    &mut self.convex_workspace,
                );

                match status {
                    ConvexContactStatus::Converged => {}
                    ConvexContactStatus::GjkIterationLimit => diagnostics.gjk_fallbacks += 1,
                    ConvexContactStatus::EpaIterationLimit => diagnostics.epa_fallbacks += 1,
                    ConvexContactStatus::Degenerate => diagnostics.degenerate_skips += 1,
                }

                manifold
            }
        };

        Ok((manifold, diagnostics))
    }

    fn collide_halfspace(
        &self,
        halfspace_body: usize,
        halfspace: &Collider,
        other_body: usize,
        other: &Collider,
    ) -> Option<ContactManifold> {
        let (plane_point, plane_normal) = halfspace.world_plane()?;
        contact_manifold_halfspace_vertices(
            halfspace_body,
            &plane_point,
            &plane_normal,
            other_body,
            other.world_vertices(),
            self.params.contact_tolerance,
        )
    }

    /// Computes the manifolds of every pair, in pair order, into `out`.
    pub fn compute_manifolds(
        &mut self,
        pairs: &[CollisionPair],
        colliders: &[Collider],
        out: &mut ManifoldBuffer,
    ) -> Result<ContactDiagnostics, PipelineError> {
        out.clear();
        let mut diagnostics = ContactDiagnostics::default();

        for pair in pairs {
            let (manifold, pair_diagnostics) = self.collide_pair(pair, colliders)?;
            diagnostics += pair_diagnostics;

            if let Some(manifold) = manifold {
                out.try_push(manifold)?;
            }
        }

        Ok(diagnostics)
    }
}

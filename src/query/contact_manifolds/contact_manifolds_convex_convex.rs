use crate::math::Real;
use crate::query::contact_manifolds::{ContactManifold, ContactPoint};
use crate::query::epa::EPA;
use crate::query::gjk::{self, GJKResult, Simplex};
use crate::shape::SupportMap;
use arrayvec::ArrayVec;
use na::Unit;

/// Iteration limits and tolerance of the GJK + EPA contact path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvexContactOptions {
    /// Maximum number of GJK iterations.
    pub gjk_max_iterations: usize,
    /// Maximum number of EPA iterations.
    pub epa_max_iterations: usize,
    /// EPA stops once the polytope grows by less than this distance.
    pub epa_tolerance: Real,
}

/// How the GJK + EPA contact path concluded for one pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexContactStatus {
    /// Both algorithms converged, or GJK proved the shapes disjoint.
    Converged,
    /// GJK hit its iteration limit; the pair was treated as not colliding.
    GjkIterationLimit,
    /// EPA hit its iteration limit; the best face found so far was used.
    EpaIterationLimit,
    /// The Minkowski difference was flat; the pair was skipped.
    Degenerate,
}

/// Reusable buffers of the GJK + EPA contact path.
#[derive(Default)]
pub struct ConvexContactWorkspace {
    simplex: Simplex,
    epa: EPA,
}

impl ConvexContactWorkspace {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Computes the contact manifold between two convex shapes given by their
/// world-space support functions.
///
/// GJK first tests the shapes for intersection; if they overlap, EPA finds the
/// penetration depth and direction. The manifold has a single contact point,
/// halfway between the deepest points of both shapes. `body1` is the reference
/// body, so the normal points from `body2` toward `body1`.
pub fn contact_manifold_convex_convex<G1, G2>(
    body1: usize,
    g1: &G1,
    body2: usize,
    g2: &G2,
    options: &ConvexContactOptions,
    workspace: &mut ConvexContactWorkspace,
) -> (Option<ContactManifold>, ConvexContactStatus)
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    match gjk::intersection_test(g1, g2, &mut workspace.simplex, options.gjk_max_iterations) {
        GJKResult::NoIntersection => return (None, ConvexContactStatus::Converged),
        GJKResult::IterationLimit => return (None, ConvexContactStatus::GjkIterationLimit),
        GJKResult::Intersection => {}
    }

    let Some(pen) = workspace.epa.penetration(
        g1,
        g2,
        &workspace.simplex,
        options.epa_max_iterations,
        options.epa_tolerance,
    ) else {
        return (None, ConvexContactStatus::Degenerate);
    };

    let mut points = ArrayVec::new();
    points.push(ContactPoint {
        point: na::center(&pen.point1, &pen.point2),
        depth: pen.depth,
    });

    let manifold = ContactManifold {
        reference: body1,
        incident: body2,
        normal: Unit::new_unchecked(-pen.normal.into_inner()),
        depth: pen.depth,
        points,
    };

    let status = if pen.converged {
        ConvexContactStatus::Converged
    } else {
        ConvexContactStatus::EpaIterationLimit
    };

    (Some(manifold), status)
}

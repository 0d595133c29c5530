//! The Gilbert–Johnson–Keerthi boolean intersection test.

use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GJKResult {
    /// The origin lies inside the Minkowski difference: the shapes overlap.
    ///
    /// The simplex passed to [`intersection_test`] holds between one and four
    /// points enclosing, or touching, the origin and can seed EPA.
    Intersection,
    /// A support point failed to pass the origin: the shapes are disjoint.
    NoIntersection,
    /// The iteration limit was reached before either conclusion.
    ///
    /// This is a non-convergence and callers treat the pair as not colliding.
    IterationLimit,
}

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Tests whether the two convex shapes `g1` and `g2` intersect.
///
/// Both shapes are given through their world-space support functions. The
/// simplex evolves toward the origin of the Minkowski difference `g1 - g2`:
/// each iteration adds the support point in the current search direction
/// then reduces the simplex to the feature closest to the origin. The test
/// stops with [`GJKResult::NoIntersection`] as soon as a support point does
/// not lie strictly past the origin along the search direction.
pub fn intersection_test<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    max_iterations: usize,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let first = CSOPoint::from_shapes(g1, g2, &Vector::x());
    simplex.reset(first);
    let mut dir = -first.point.coords;

    for _ in 0..max_iterations {
        if dir.norm_squared() <= eps_tol() * eps_tol() {
            // The origin lies on the current simplex.
            return GJKResult::Intersection;
        }

        let support = CSOPoint::from_shapes(g1, g2, &dir);

        if support.point.coords.dot(&dir) <= 0.0 {
            return GJKResult::NoIntersection;
        }

        // `evolve_simplex` leaves at most three points.
        let pushed = simplex.push_front(support);
        debug_assert!(pushed, "GJK simplex overflow");

        match evolve_simplex(simplex) {
            Some(new_dir) => dir = new_dir,
            None => return GJKResult::Intersection,
        }
    }

    log::debug!("GJK did not converge after {} iterations", max_iterations);
    GJKResult::IterationLimit
}

/// Reduces the simplex to its feature closest to the origin.
///
/// Returns the next search direction, or `None` if the simplex contains the
/// origin.
fn evolve_simplex(simplex: &mut Simplex) -> Option<Vector> {
    let pts = simplex.points();

    match pts.len() {
        2 => {
            let (a, b) = (pts[0], pts[1]);
            line_case(simplex, a, b)
        }
        3 => {
            let (a, b, c) = (pts[0], pts[1], pts[2]);
            triangle_case(simplex, a, b, c)
        }
        4 => {
            let (a, b, c, d) = (pts[0], pts[1], pts[2], pts[3]);
            tetrahedron_case(simplex, a, b, c, d)
        }
        _ => Some(-pts[0].point.coords),
    }
}

/// `a` is the newest point.
fn line_case(simplex: &mut Simplex, a: CSOPoint, b: CSOPoint) -> Option<Vector> {
    let ab = b - a;
    let ao = -a.point.coords;

    if ab.dot(&ao) > 0.0 {
        simplex.set(&[a, b]);
        let dir = ab.cross(&ao).cross(&ab);

        // `|dir|` is the distance from the origin to the line, scaled by `|ab|²`.
        if dir.norm() <= eps_tol() * ab.norm_squared() {
            return None;
        }

        Some(dir)
    } else {
        simplex.set(&[a]);
        Some(ao)
    }
}

/// `a` is the newest point.
fn triangle_case(simplex: &mut Simplex, a: CSOPoint, b: CSOPoint, c: CSOPoint) -> Option<Vector> {
    let ab = b - a;
    let ac = c - a;
    let ao = -a.point.coords;
    let abc = ab.cross(&ac);

    if abc.cross(&ac).dot(&ao) > 0.0 {
        if ac.dot(&ao) > 0.0 {
            simplex.set(&[a, c]);
            let dir = ac.cross(&ao).cross(&ac);

            if dir.norm() <= eps_tol() * ac.norm_squared() {
                return None;
            }

            Some(dir)
        } else {
            line_case(simplex, a, b)
        }
    } else if ab.cross(&abc).dot(&ao) > 0.0 {
        line_case(simplex, a, b)
    } else {
        let side = abc.dot(&ao);

        if side.abs() <= eps_tol() * abc.norm() {
            // The origin lies inside the triangle.
            simplex.set(&[a, b, c]);
            None
        } else if side > 0.0 {
            simplex.set(&[a, b, c]);
            Some(abc)
        } else {
            // Keep the winding such that `abc` points toward the origin.
            simplex.set(&[a, c, b]);
            Some(-abc)
        }
    }
}

/// `a` is the newest point.
fn tetrahedron_case(
    simplex: &mut Simplex,
    a: CSOPoint,
    b: CSOPoint,
    c: CSOPoint,
    d: CSOPoint,
) -> Option<Vector> {
    let ao = -a.point.coords;
    // Each face adjacent to `a`, with the vertex opposite to it.
    let faces = [(b, c, d), (c, d, b), (d, b, c)];

    for (p, q, opposite) in faces {
        let mut normal = (p - a).cross(&(q - a));

        // Orient the face normal away from the opposite vertex.
        if normal.dot(&(opposite - a)) > 0.0 {
            normal = -normal;
        }

        if normal.dot(&ao) > 0.0 {
            return triangle_case(simplex, a, p, q);
        }
    }

    None
}

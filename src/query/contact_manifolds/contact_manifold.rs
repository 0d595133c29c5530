use crate::math::{Point, Real, UnitVector, Vector};
use arrayvec::ArrayVec;

/// The maximum number of contact points kept per manifold.
pub const MAX_MANIFOLD_POINTS: usize = 4;

/// The maximum number of candidate points produced by face clipping before reduction.
pub const MAX_RAW_CONTACTS: usize = 16;

/// A single world-space contact point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPoint {
    /// The contact location, lying on the reference surface.
    pub point: Point,
    /// The penetration depth at this point.
    ///
    /// Positive when penetrating. A negative depth is a speculative contact:
    /// the surfaces are apart by `-depth` but close enough to be tracked.
    pub depth: Real,
}

/// The contact information between two bodies.
///
/// The contact normal points from the incident body toward the reference
/// body: pushing the reference body along `normal` and the incident body
/// along `-normal` separates them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactManifold {
    /// The index of the body owning the reference face.
    pub reference: usize,
    /// The index of the other body.
    pub incident: usize,
    /// The world-space contact normal, pointing from `incident` toward `reference`.
    pub normal: UnitVector,
    /// The penetration depth along `normal` found by the query that produced this manifold.
    pub depth: Real,
    /// Between one and [`MAX_MANIFOLD_POINTS`] contact points.
    pub points: ArrayVec<ContactPoint, MAX_MANIFOLD_POINTS>,
}

/// Reduces a set of contact points to at most [`MAX_MANIFOLD_POINTS`].
///
/// The points are picked greedily:
/// 1. the deepest point,
/// 2. the point furthest from the first one,
/// 3. the point maximizing the signed area of the triangle it forms with the
///    first two, measured along `normal`,
/// 4. the point minimizing that same signed area.
///
/// The last two are only kept when they span a non-degenerate triangle, so
/// collinear inputs reduce to two points. Ties keep the lowest index, which
/// makes the result a function of the input order.
pub fn reduce_contact_points(
    points: &[ContactPoint],
    normal: &Vector,
) -> ArrayVec<ContactPoint, MAX_MANIFOLD_POINTS> {
    let mut result = ArrayVec::new();

    if points.len() <= MAX_MANIFOLD_POINTS {
        result.extend(points.iter().copied());
        return result;
    }

    let (id1, _) = argmax(points, |pt| pt.depth);
    let p1 = points[id1].point;
    let (id2, dist2) = argmax(points, |pt| na::distance_squared(&pt.point, &p1));
    result.push(points[id1]);

    if dist2 <= crate::math::DEFAULT_EPSILON {
        // Every point coincides with the deepest one.
        return result;
    }

    let p2 = points[id2].point;
    result.push(points[id2]);

    let signed_area = |pt: &ContactPoint| (p2 - p1).cross(&(pt.point - p1)).dot(normal);
    let (id3, area3) = argmax(points, &signed_area);
    let (id4, neg_area4) = argmax(points, |pt| -signed_area(pt));
    let area_eps = crate::math::DEFAULT_EPSILON * dist2.sqrt();

    if area3 > area_eps {
        result.push(points[id3]);
    }

    if neg_area4 > area_eps {
        result.push(points[id4]);
    }

    result
}

/// The index and score of the point with the highest score, ties keeping the lowest index.
fn argmax(points: &[ContactPoint], score: impl Fn(&ContactPoint) -> Real) -> (usize, Real) {
    let mut best_id = 0;
    let mut best_score = -Real::MAX;

    for (i, pt) in points.iter().enumerate() {
        let s = score(pt);
        if s > best_score {
            best_score = s;
            best_id = i;
        }
    }

    (best_id, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(x: Real, z: Real, depth: Real) -> ContactPoint {
        ContactPoint {
            point: Point::new(x, 0.0, z),
            depth,
        }
    }

    #[test]
    fn small_sets_are_kept() {
        let points = [contact(0.0, 0.0, 0.1), contact(1.0, 0.0, 0.2)];
        let reduced = reduce_contact_points(&points, &Vector::y());
        assert_eq!(reduced.as_slice(), &points);
    }

    #[test]
    fn octagon_reduces_to_a_quad_containing_the_deepest_point() {
        let points: Vec<_> = (0..8)
            .map(|i| {
                let angle = i as Real * core::f32::consts::FRAC_PI_4;
                contact(angle.cos(), angle.sin(), if i == 3 { 0.5 } else { 0.1 })
            })
            .collect();
        let reduced = reduce_contact_points(&points, &Vector::y());

        assert_eq!(reduced.len(), 4);
        assert_eq!(reduced[0], points[3]);
        // The opposite vertex is the furthest from the deepest one.
        assert_eq!(reduced[1], points[7]);
    }

    #[test]
    fn collinear_points_reduce_to_a_segment() {
        let points: Vec<_> = (0..6).map(|i| contact(i as Real, 0.0, 0.1)).collect();
        let reduced = reduce_contact_points(&points, &Vector::y());
        assert_eq!(reduced.len(), 2);
        assert_eq!(reduced[0], points[0]);
        assert_eq!(reduced[1], points[5]);
    }
}

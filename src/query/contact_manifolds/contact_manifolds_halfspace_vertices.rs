use crate::math::{Point, Real, UnitVector};
use crate::query::contact_manifolds::{
    reduce_contact_points, ContactManifold, ContactPoint, MAX_RAW_CONTACTS,
};
use smallvec::SmallVec;

/// Computes the contact manifold between a half-space and a convex vertex set.
///
/// The half-space is given by a point on its boundary plane and its outward
/// normal. Every vertex whose signed distance to the plane is at most
/// `prediction` becomes a contact, projected onto the plane. The half-space is
/// always the reference body, so the contact normal is the opposite of the
/// plane normal.
pub fn contact_manifold_halfspace_vertices(
    halfspace_body: usize,
    plane_point: &Point,
    plane_normal: &UnitVector,
    other_body: usize,
    vertices: &[Point],
    prediction: Real,
) -> Option<ContactManifold> {
    let mut raw: SmallVec<[ContactPoint; MAX_RAW_CONTACTS]> = SmallVec::new();
    let mut deepest = -Real::MAX;

    for vtx in vertices {
        let dist_to_plane = (vtx - plane_point).dot(plane_normal);

        if dist_to_plane <= prediction {
            // Keep this contact point.
            raw.push(ContactPoint {
                point: vtx - plane_normal.into_inner() * dist_to_plane,
                depth: -dist_to_plane,
            });
            deepest = deepest.max(-dist_to_plane);
        }
    }

    if raw.is_empty() {
        return None;
    }

    Some(ContactManifold {
        reference: halfspace_body,
        incident: other_body,
        normal: -*plane_normal,
        depth: deepest,
        points: reduce_contact_points(&raw, plane_normal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Isometry, Vector};
    use crate::shape::Cuboid;

    #[test]
    fn resting_box_touches_with_its_bottom_face() {
        let pos = Isometry::translation(3.0, 0.49, 0.0);
        let vertices = Cuboid::new(Vector::repeat(0.5)).vertices().map(|pt| pos * pt);
        let m = contact_manifold_halfspace_vertices(
            1,
            &Point::origin(),
            &Vector::y_axis(),
            0,
            &vertices,
            0.0,
        )
        .unwrap();

        assert_eq!(m.reference, 1);
        assert_eq!(m.incident, 0);
        assert_eq!(m.normal, -Vector::y_axis());
        assert_eq!(m.points.len(), 4);
        assert_relative_eq!(m.depth, 0.01, epsilon = 1.0e-5);
        for pt in &m.points {
            assert_relative_eq!(pt.point.y, 0.0, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn box_above_plane_has_no_contact() {
        let pos = Isometry::translation(0.0, 0.6, 0.0);
        let vertices = Cuboid::new(Vector::repeat(0.5)).vertices().map(|pt| pos * pt);
        assert!(contact_manifold_halfspace_vertices(
            0,
            &Point::origin(),
            &Vector::y_axis(),
            1,
            &vertices,
            0.05,
        )
        .is_none());
    }
}

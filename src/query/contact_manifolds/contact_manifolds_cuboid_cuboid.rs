use crate::math::{Point, Real, UnitVector, DIM};
use crate::query::clip::clip_halfspace_polygon;
use crate::query::closest_points::closest_points_segment_segment;
use crate::query::contact_manifolds::{
    reduce_contact_points, ContactManifold, ContactPoint, MAX_RAW_CONTACTS,
};
use crate::query::sat;
use crate::shape::OrientedCuboid;
use arrayvec::ArrayVec;

/// Tuning of the box-box contact generation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CuboidContactOptions {
    /// Separations up to this distance still produce (speculative) contacts.
    pub prediction: Real,
    /// A face of the second box is only preferred as reference when its
    /// separation exceeds `relative_tolerance * sep1 + absolute_tolerance`.
    pub relative_tolerance: Real,
    /// See `relative_tolerance`.
    pub absolute_tolerance: Real,
    /// Whether edge-edge axes are tested and may produce a single edge contact.
    pub edge_contacts: bool,
}

/// Computes the contact manifold between two boxes.
///
/// `body1` and `body2` are the indices recorded in the manifold, with
/// `body1 < body2`. Returns `None` if a separating axis is found with a
/// separation above `options.prediction`, or if clipping leaves no point
/// close enough to the reference face.
///
/// The reference face is the face, among both boxes, with the largest
/// separation, the first box winning near-ties. The incident face of the
/// other box is clipped against the side planes of the reference face, and
/// the clipped points close enough to the reference plane are projected onto
/// it and reduced to at most four contacts.
pub fn contact_manifold_cuboid_cuboid(
    body1: usize,
    cuboid1: &OrientedCuboid,
    body2: usize,
    cuboid2: &OrientedCuboid,
    options: &CuboidContactOptions,
) -> Option<ContactManifold> {
    /*
     *
     * Point-Face
     *
     */
    let sep1 = sat::cuboid_cuboid_find_separating_face_oneway(cuboid1, cuboid2);
    if sep1.0 > options.prediction {
        return None;
    }

    let sep2 = sat::cuboid_cuboid_find_separating_face_oneway(cuboid2, cuboid1);
    if sep2.0 > options.prediction {
        return None;
    }

    /*
     *
     * Edge-Edge cases
     *
     */
    let sep3 = if options.edge_contacts {
        sat::cuboid_cuboid_find_separating_edge_twoway(cuboid1, cuboid2)
    } else {
        None
    };

    if let Some(edge) = &sep3 {
        if edge.separation > options.prediction {
            return None;
        }
    }

    let best_face_sep = sep1.0.max(sep2.0);

    if let Some(edge) = sep3 {
        if edge.separation
            > options.relative_tolerance * best_face_sep + options.absolute_tolerance
        {
            let seg1 = cuboid1.support_edge(edge.edge1, &edge.axis);
            let seg2 = cuboid2.support_edge(edge.edge2, &-edge.axis);
            let (pt1, pt2) = closest_points_segment_segment((&seg1.0, &seg1.1), (&seg2.0, &seg2.1));
            let mut points = ArrayVec::new();
            points.push(ContactPoint {
                point: na::center(&pt1, &pt2),
                depth: -edge.separation,
            });

            return Some(ContactManifold {
                reference: body1,
                incident: body2,
                normal: UnitVector::new_unchecked(-edge.axis),
                depth: -edge.separation,
                points,
            });
        }
    }

    /*
     *
     * Face-Face
     *
     */
    let flipped = sep2.0 > options.relative_tolerance * sep1.0 + options.absolute_tolerance;
    let (reference, ref_body, incident, inc_body, ref_face, separation) = if flipped {
        (cuboid2, body2, cuboid1, body1, sep2.1, sep2.0)
    } else {
        (cuboid1, body1, cuboid2, body2, sep1.1, sep1.0)
    };

    let ref_normal = reference.face_normal(ref_face);
    let ref_center = reference.face_center(ref_face);
    let inc_face = incident.most_anti_parallel_face(&ref_normal);

    let mut polygon: ArrayVec<Point, MAX_RAW_CONTACTS> = ArrayVec::new();
    let mut clipped: ArrayVec<Point, MAX_RAW_CONTACTS> = ArrayVec::new();
    polygon.extend(incident.face_polygon(inc_face));

    // Clip against the four side planes of the reference face.
    let ref_axis = ref_face / 2;
    for axis in (0..DIM).filter(|i| *i != ref_axis) {
        for sign in [1.0, -1.0] {
            let side_normal = reference.axes[axis] * sign;
            let side_center = reference.center + side_normal * reference.half_extents[axis];
            clip_halfspace_polygon(&side_center, &side_normal, &polygon, &mut clipped);
            core::mem::swap(&mut polygon, &mut clipped);
        }
    }

    let mut raw: ArrayVec<ContactPoint, MAX_RAW_CONTACTS> = ArrayVec::new();
    for pt in &polygon {
        let dist = (pt - ref_center).dot(&ref_normal);

        if dist <= options.prediction {
            raw.push(ContactPoint {
                point: pt - ref_normal * dist,
                depth: -dist,
            });
        }
    }

    if raw.is_empty() {
        return None;
    }

    Some(ContactManifold {
        reference: ref_body,
        incident: inc_body,
        normal: UnitVector::new_unchecked(-ref_normal),
        depth: -separation,
        points: reduce_contact_points(&raw, &ref_normal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Isometry, Rotation, Translation, Vector};
    use crate::shape::Cuboid;

    const OPTIONS: CuboidContactOptions = CuboidContactOptions {
        prediction: 0.0,
        relative_tolerance: 0.98,
        absolute_tolerance: 0.001,
        edge_contacts: true,
    };

    fn manifold(pos1: Isometry, pos2: Isometry) -> Option<ContactManifold> {
        let cuboid = Cuboid::new(Vector::repeat(0.5));
        let c1 = cuboid.vertices().map(|pt| pos1 * pt);
        let c2 = cuboid.vertices().map(|pt| pos2 * pt);
        let obb1 = OrientedCuboid::new(&cuboid, &pos1, &c1);
        let obb2 = OrientedCuboid::new(&cuboid, &pos2, &c2);
        contact_manifold_cuboid_cuboid(0, &obb1, 1, &obb2, &OPTIONS)
    }

    #[test]
    fn stacked_boxes_produce_four_contacts() {
        let m = manifold(Isometry::identity(), Isometry::translation(0.0, 0.9, 0.0)).unwrap();

        assert_eq!(m.reference, 0);
        assert_eq!(m.incident, 1);
        assert_relative_eq!(m.depth, 0.1, epsilon = 1.0e-5);
        assert_relative_eq!(m.normal.into_inner(), -Vector::y(), epsilon = 1.0e-6);
        assert_eq!(m.points.len(), 4);

        for pt in &m.points {
            assert_relative_eq!(pt.depth, 0.1, epsilon = 1.0e-5);
            assert_relative_eq!(pt.point.y, 0.5, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn rotated_box_on_box_clips_to_the_reference_face() {
        let pos2 = Isometry::from_parts(
            Translation::new(0.0, 0.95, 0.0),
            Rotation::from_euler_angles(0.0, core::f32::consts::FRAC_PI_4, 0.0),
        );
        let m = manifold(Isometry::identity(), pos2).unwrap();

        assert!(m.points.len() <= 4);
        assert!(!m.points.is_empty());
        for pt in &m.points {
            assert!(pt.point.x.abs() <= 0.5 + 1.0e-5);
            assert!(pt.point.z.abs() <= 0.5 + 1.0e-5);
            assert_relative_eq!(pt.depth, 0.05, epsilon = 1.0e-4);
        }
    }

    #[test]
    fn crossed_edges_produce_one_contact() {
        let angle = core::f32::consts::FRAC_PI_4;
        let pos1 = Isometry::from_parts(
            Translation::identity(),
            Rotation::from_euler_angles(0.0, 0.0, angle),
        );
        let pos2 = Isometry::from_parts(
            Translation::new(0.0, 1.3, 0.0),
            Rotation::from_euler_angles(angle, 0.0, 0.0),
        );
        let m = manifold(pos1, pos2).unwrap();
        let expected_depth = core::f32::consts::SQRT_2 - 1.3;

        assert_eq!(m.points.len(), 1);
        assert_relative_eq!(m.depth, expected_depth, epsilon = 1.0e-4);
        assert_relative_eq!(m.normal.into_inner(), -Vector::y(), epsilon = 1.0e-4);
        assert_relative_eq!(m.points[0].point, Point::new(0.0, 0.65, 0.0), epsilon = 1.0e-4);
    }
}

use impact3d::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use impact3d::query::epa::EPA;
use impact3d::query::gjk::{intersection_test, GJKResult, Simplex};
use impact3d::shape::{Collider, ConvexPoints, Cuboid};

fn vertex_box(half_extents: Vector, pos: &Isometry) -> Collider {
    let points = Cuboid::new(half_extents).vertices().to_vec();
    Collider::new(ConvexPoints::new(points).unwrap().into(), pos)
}

fn tetrahedron(pos: &Isometry) -> Collider {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    Collider::new(ConvexPoints::new(points).unwrap().into(), pos)
}

#[test]
fn gjk_overlapping_shapes() {
    let a = vertex_box(Vector::repeat(0.5), &Isometry::identity());
    let b = tetrahedron(&Isometry::translation(-0.2, -0.2, -0.2));
    let mut simplex = Simplex::new();

    assert_eq!(
        intersection_test(&a, &b, &mut simplex, 32),
        GJKResult::Intersection
    );
}

#[test]
fn gjk_separated_shapes() {
    let a = vertex_box(Vector::repeat(0.5), &Isometry::identity());
    let b = tetrahedron(&Isometry::new(
        Vector::new(0.6, 0.6, 0.6),
        Vector::new(0.3, 0.2, 0.1),
    ));
    let mut simplex = Simplex::new();

    assert_eq!(
        intersection_test(&a, &b, &mut simplex, 32),
        GJKResult::NoIntersection
    );
}

#[test]
fn epa_unit_boxes_overlapping_by_half() {
    let a = vertex_box(Vector::repeat(0.5), &Isometry::identity());
    let b = vertex_box(Vector::repeat(0.5), &Isometry::translation(0.5, 0.0, 0.0));
    let mut simplex = Simplex::new();

    assert_eq!(
        intersection_test(&a, &b, &mut simplex, 32),
        GJKResult::Intersection
    );

    let pen = EPA::new()
        .penetration(&a, &b, &simplex, 64, 1.0e-4)
        .expect("the boxes overlap");
    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(pen.normal.x.abs(), 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(pen.normal.y, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(pen.normal.z, 0.0, epsilon = 1.0e-3);
}

#[test]
fn epa_depth_of_rotated_overlap_is_bounded() {
    let a = vertex_box(Vector::repeat(0.5), &Isometry::identity());
    let rot = Rotation::from_euler_angles(0.3, 0.4, 0.5);

    for offset in [0.2, 0.5, 0.8] {
        let pos = Isometry::from_parts(Translation::new(offset, 0.1, 0.0), rot);
        let b = vertex_box(Vector::repeat(0.5), &pos);
        let mut simplex = Simplex::new();

        assert_eq!(
            intersection_test(&a, &b, &mut simplex, 32),
            GJKResult::Intersection
        );

        let pen = EPA::new()
            .penetration(&a, &b, &simplex, 64, 1.0e-4)
            .unwrap();
        // Translating `b` by the penetration vector separates the shapes.
        let max_depth: Real = 1.0 + 3.0_f32.sqrt() * 0.5;
        assert!(pen.depth > 0.0 && pen.depth < max_depth);

        let separated = vertex_box(
            Vector::repeat(0.5),
            &(Isometry::from_parts(
                Translation::from(pen.normal.into_inner() * (pen.depth + 1.0e-2)),
                Rotation::identity(),
            ) * pos),
        );
        assert_eq!(
            intersection_test(&a, &separated, &mut simplex, 32),
            GJKResult::NoIntersection
        );
    }
}

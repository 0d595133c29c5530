use impact3d::broad_phase::CollisionPair;
use impact3d::math::{Isometry, Real, Vector};
use impact3d::narrow_phase::{NarrowPhase, NarrowPhaseParams};
use impact3d::query::ContactManifold;
use impact3d::shape::{Collider, Cuboid};

fn unit_boxes_with_gap(gap: Real) -> [Collider; 2] {
    let cube = || Cuboid::new(Vector::repeat(0.5)).into();
    [
        Collider::new(cube(), &Isometry::identity()),
        Collider::new(cube(), &Isometry::translation(1.0 + gap, 0.0, 0.0)),
    ]
}

fn collide(params: NarrowPhaseParams, colliders: &[Collider]) -> Option<ContactManifold> {
    let (manifold, _) = NarrowPhase::new(params)
        .collide_pair(&CollisionPair::new(0, 1), colliders)
        .unwrap();
    manifold
}

#[test]
fn separated_boxes_have_no_manifold() {
    for gap in [0.05, 0.3, 1.0, 10.0] {
        assert!(collide(NarrowPhaseParams::default(), &unit_boxes_with_gap(gap)).is_none());
    }

    // Without prediction, any positive gap is a separation.
    let exact = NarrowPhaseParams {
        contact_tolerance: 0.0,
        ..NarrowPhaseParams::default()
    };
    assert!(collide(exact, &unit_boxes_with_gap(0.001)).is_none());
}

#[test]
fn overlapping_boxes_have_one_manifold_along_x() {
    for overlap in [0.01, 0.1, 0.25, 0.5] {
        let manifold = collide(NarrowPhaseParams::default(), &unit_boxes_with_gap(-overlap))
            .expect("overlapping boxes must touch");

        assert_relative_eq!(manifold.depth, overlap, epsilon = 1.0e-4);
        assert_relative_eq!(manifold.normal.x.abs(), 1.0, epsilon = 1.0e-4);
        assert!(!manifold.points.is_empty() && manifold.points.len() <= 4);

        for contact in &manifold.points {
            assert_relative_eq!(contact.depth, overlap, epsilon = 1.0e-4);
        }
    }
}

#[test]
fn box_pair_normal_points_toward_the_reference_body() {
    let colliders = unit_boxes_with_gap(-0.2);
    let manifold = collide(NarrowPhaseParams::default(), &colliders).unwrap();
    let reference = colliders[manifold.reference].position().translation.vector;
    let incident = colliders[manifold.incident].position().translation.vector;

    assert!(manifold.normal.dot(&(reference - incident)) > 0.0);
}

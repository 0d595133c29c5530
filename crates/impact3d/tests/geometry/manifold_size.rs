use impact3d::broad_phase::CollisionPair;
use impact3d::math::{Isometry, Point, Rotation, Translation, Vector};
use impact3d::narrow_phase::{NarrowPhase, NarrowPhaseParams};
use impact3d::query::MAX_MANIFOLD_POINTS;
use impact3d::shape::{Collider, ConvexPoints, Cuboid, HalfSpace, Shape};
use oorandom::Rand32;

fn random_shape(rng: &mut Rand32) -> Shape {
    let half_extents = Vector::new(
        0.2 + rng.rand_float(),
        0.2 + rng.rand_float(),
        0.2 + rng.rand_float(),
    );

    if rng.rand_range(0..3) == 0 {
        let points = (0..12)
            .map(|_| {
                Point::new(
                    (rng.rand_float() - 0.5) * half_extents.x * 2.0,
                    (rng.rand_float() - 0.5) * half_extents.y * 2.0,
                    (rng.rand_float() - 0.5) * half_extents.z * 2.0,
                )
            })
            .collect();
        ConvexPoints::new(points).unwrap().into()
    } else {
        Cuboid::new(half_extents).into()
    }
}

fn random_pose(rng: &mut Rand32) -> Isometry {
    Isometry::from_parts(
        Translation::new(
            rng.rand_float() * 3.0,
            rng.rand_float() * 3.0,
            rng.rand_float() * 3.0,
        ),
        Rotation::from_euler_angles(
            rng.rand_float() * 6.28,
            rng.rand_float() * 6.28,
            rng.rand_float() * 6.28,
        ),
    )
}

#[test]
fn manifolds_never_exceed_four_contacts() {
    let mut rng = Rand32::new(42);
    let mut colliders = vec![Collider::new(
        HalfSpace::new(Vector::y_axis()).into(),
        &Isometry::translation(0.0, 0.5, 0.0),
    )];
    for _ in 0..40 {
        colliders.push(Collider::new(random_shape(&mut rng), &random_pose(&mut rng)));
    }

    let mut narrow_phase = NarrowPhase::new(NarrowPhaseParams::default());
    let mut manifold_count = 0;

    for i in 0..colliders.len() {
        for j in i + 1..colliders.len() {
            let (manifold, _) = narrow_phase
                .collide_pair(&CollisionPair::new(i, j), &colliders)
                .unwrap();

            if let Some(manifold) = manifold {
                manifold_count += 1;
                assert!(manifold.points.len() <= MAX_MANIFOLD_POINTS);
                assert!(manifold.reference != manifold.incident);
                assert_relative_eq!(manifold.normal.norm(), 1.0, epsilon = 1.0e-4);
            }
        }
    }

    // Dense enough to exercise every contact path.
    assert!(manifold_count > 10);
}

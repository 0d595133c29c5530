use impact3d::broad_phase::CollisionPair;
use impact3d::dynamics::BodyHandle;
use impact3d::math::{Point, Real, Vector};
use impact3d::pipeline::{BodyDesc, Capacities, PipelineError, Resource, World, WorldConfig};

fn zero_gravity() -> WorldConfig {
    WorldConfig {
        gravity: Vector::zeros(),
        ..WorldConfig::default()
    }
}

fn unit_box() -> BodyDesc {
    BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0)
}

#[test]
fn approaching_boxes_are_stopped() {
    let mut world = World::new(zero_gravity());
    let a = world
        .add_body(
            unit_box()
                .position(Point::new(-5.0, 0.0, 0.0))
                .linvel(Vector::new(1.0, 0.0, 0.0)),
        )
        .unwrap();
    let b = world
        .add_body(
            unit_box()
                .position(Point::new(5.0, 0.0, 0.0))
                .linvel(Vector::new(-1.0, 0.0, 0.0)),
        )
        .unwrap();
    let slop = world.config().solver.slop;
    let mut contact_seen = false;

    for _ in 0..600 {
        let report = world.step(1.0 / 60.0).unwrap();

        if report.manifold_count > 0 {
            contact_seen = true;
            let frame = world.debug_frame();
            assert_eq!(frame.pairs.as_slice(), &[CollisionPair::new(0, 1)]);
            assert_relative_eq!(frame.manifolds[0].normal.x.abs(), 1.0, epsilon = 1.0e-3);
        }
    }

    assert!(contact_seen);

    let bodies = world.bodies();
    let distance = bodies.position(b).x - bodies.position(a).x;
    let approach = bodies.velocity(a).x - bodies.velocity(b).x;
    assert!((distance - 1.0).abs() <= slop, "distance = {distance}");
    assert!(approach.abs() < 1.0e-2, "approach velocity = {approach}");
}

#[test]
fn static_body_never_moves() {
    let mut world = World::default();
    let ground = world
        .add_body(
            BodyDesc::static_cuboid(Vector::new(5.0, 0.5, 5.0)).position(Point::new(0.0, -0.5, 0.0)),
        )
        .unwrap();
    for i in 0..4 {
        let _ = world
            .add_body(
                unit_box()
                    .position(Point::new(i as Real * 0.3 - 0.5, 0.4 + i as Real, 0.0))
                    .linvel(Vector::new(0.0, -3.0, 0.0)),
            )
            .unwrap();
    }

    let mut manifolds_on_ground = 0;

    for _ in 0..240 {
        let _ = world.step(1.0 / 60.0).unwrap();
        manifolds_on_ground += world
            .debug_frame()
            .manifolds
            .iter()
            .filter(|m| m.reference == ground.index() || m.incident == ground.index())
            .count();

        assert_eq!(world.bodies().position(ground), Point::new(0.0, -0.5, 0.0));
        assert_eq!(world.bodies().velocity(ground), Vector::zeros());
        assert_eq!(world.bodies().angular_velocity(ground), Vector::zeros());
    }

    assert!(manifolds_on_ground > 0);
}

#[test]
fn adding_past_capacity_fails() {
    let config = WorldConfig {
        capacities: Capacities::with_max_bodies(3),
        ..WorldConfig::default()
    };
    let mut world = World::new(config);

    for i in 0..3 {
        assert_eq!(
            world.add_body(unit_box().position(Point::new(i as Real * 3.0, 0.0, 0.0))),
            Ok(BodyHandle(i))
        );
    }

    assert_eq!(
        world.add_body(unit_box()),
        Err(PipelineError::CapacityExceeded {
            resource: Resource::Bodies,
            capacity: 3
        })
    );
    assert_eq!(world.body_count(), 3);
    assert_eq!(world.collider_count(), 3);

    // The world still runs after the rejection.
    let _ = world.step(1.0 / 60.0).unwrap();
    assert_eq!(world.body_count(), 3);
}

#[test]
fn boxes_separated_on_z_never_reach_the_narrow_phase() {
    let mut world = World::new(zero_gravity());
    let _ = world.add_body(unit_box()).unwrap();
    let _ = world
        .add_body(unit_box().position(Point::new(0.3, 0.4, 1.5)))
        .unwrap();

    for _ in 0..10 {
        let report = world.step(1.0 / 60.0).unwrap();
        assert_eq!(report.pair_count, 0);
        assert_eq!(report.manifold_count, 0);
        assert!(world.debug_frame().pairs.is_empty());
    }
}

#[test]
fn contact_overflow_fails_the_tick_without_moving_bodies() {
    let config = WorldConfig {
        capacities: Capacities {
            max_contacts: 3,
            ..Capacities::default()
        },
        ..WorldConfig::default()
    };
    let mut world = World::new(config);
    let _ = world
        .add_body(BodyDesc::half_space(Point::origin(), Vector::y_axis()))
        .unwrap();
    let cube = world
        .add_body(unit_box().position(Point::new(0.0, 0.45, 0.0)))
        .unwrap();

    // The four bottom corners touch the ground.
    assert_eq!(
        world.step(1.0 / 60.0),
        Err(PipelineError::CapacityExceeded {
            resource: Resource::Contacts,
            capacity: 3
        })
    );
    assert_eq!(world.bodies().position(cube), Point::new(0.0, 0.45, 0.0));
    assert_eq!(world.bodies().velocity(cube), Vector::zeros());
    assert!(world.debug_frame().manifolds.is_empty());
    assert_eq!(world.tick(), 0);
}

#[test]
fn reset_removes_every_body() {
    let mut world = World::default();
    let _ = world.add_body(unit_box()).unwrap();
    let _ = world.step(1.0 / 60.0).unwrap();

    world.reset();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.collider_count(), 0);
    assert_eq!(world.add_body(unit_box()), Ok(BodyHandle(0)));
}

#[test]
fn kinematic_box_pushes_without_being_pushed() {
    let mut world = World::new(zero_gravity());
    let pusher = world
        .add_body(
            BodyDesc::kinematic_cuboid(Vector::repeat(0.5))
                .position(Point::new(-3.0, 0.0, 0.0))
                .linvel(Vector::new(1.0, 0.0, 0.0)),
        )
        .unwrap();
    // Touches the pusher from below at the start.
    let wall = world
        .add_body(BodyDesc::static_cuboid(Vector::repeat(0.5)).position(Point::new(-3.0, -1.0, 0.0)))
        .unwrap();
    let cube = world.add_body(unit_box()).unwrap();
    let fixed_pair = CollisionPair::new(pusher.index(), wall.index());
    let pushed_pair = CollisionPair::new(pusher.index(), cube.index());
    let dt = 1.0 / 60.0;
    let mut contact_seen = false;

    for tick in 1..=300 {
        let _ = world.step(dt).unwrap();
        let frame = world.debug_frame();
        assert!(!frame.pairs.contains(&fixed_pair));
        contact_seen |= frame.pairs.contains(&pushed_pair);

        let bodies = world.bodies();
        assert_eq!(bodies.velocity(pusher), Vector::new(1.0, 0.0, 0.0));
        assert_eq!(bodies.angular_velocity(pusher), Vector::zeros());
        assert_relative_eq!(
            bodies.position(pusher).x,
            -3.0 + tick as Real * dt,
            epsilon = 1.0e-3
        );
    }

    assert!(contact_seen);

    let bodies = world.bodies();
    let gap = bodies.position(cube).x - bodies.position(pusher).x;
    assert!(gap >= 1.0 - 2.0 * world.config().solver.slop, "gap = {gap}");
    assert!(bodies.velocity(cube).x >= 0.99, "velocity = {}", bodies.velocity(cube));
    assert_eq!(bodies.position(wall), Point::new(-3.0, -1.0, 0.0));
}

use impact3d::math::{Point, Real, Vector};
use impact3d::pipeline::{BodyDesc, World, WorldConfig};

#[test]
fn box_resting_on_half_space_stays_put() {
    let config = WorldConfig::default();
    let slop = config.solver.slop;
    let mut world = World::new(config);
    let _ = world
        .add_body(BodyDesc::half_space(Point::origin(), Vector::y_axis()))
        .unwrap();
    let cube = world
        .add_body(
            BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0).position(Point::new(0.0, 0.5, 0.0)),
        )
        .unwrap();

    for _ in 0..1000 {
        let report = world.step(1.0 / 60.0).unwrap();
        assert_eq!(report.manifold_count, 1);
        assert!((world.bodies().position(cube).y - 0.5).abs() <= slop);
    }

    let position = world.bodies().position(cube);
    assert_relative_eq!(position.x, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(position.z, 0.0, epsilon = 1.0e-3);
}

#[test]
fn falling_box_comes_to_rest_on_the_ground() {
    let mut world = World::default();
    let _ = world
        .add_body(BodyDesc::half_space(Point::origin(), Vector::y_axis()))
        .unwrap();
    let cube = world
        .add_body(
            BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0).position(Point::new(0.0, 2.0, 0.0)),
        )
        .unwrap();

    for _ in 0..300 {
        let _ = world.step(1.0 / 60.0).unwrap();
    }

    let y = world.bodies().position(cube).y;
    assert!(y > 0.5 - 2.0 * world.config().solver.slop && y < 0.52, "y = {y}");
    assert!(world.bodies().velocity(cube).norm() < 1.0e-2);
}

#[test]
fn resting_box_neither_slides_nor_tilts() {
    let mut world = World::default();
    let _ = world
        .add_body(BodyDesc::half_space(Point::origin(), Vector::y_axis()))
        .unwrap();
    let cube = world
        .add_body(
            BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0).position(Point::new(0.0, 0.5, 0.0)),
        )
        .unwrap();

    for _ in 0..5000 {
        let _ = world.step(1.0 / 60.0).unwrap();
    }

    let bodies = world.bodies();
    let position = bodies.position(cube);
    assert!(position.x.abs() < 1.0e-3, "x = {}", position.x);
    assert!(position.z.abs() < 1.0e-3, "z = {}", position.z);
    assert!(bodies.orientation(cube).angle() < 1.0e-3);
    assert!(bodies.velocity(cube).norm() < 1.0e-3);
}

#[test]
fn box_stack_does_not_spin() {
    let mut world = World::default();
    let _ = world
        .add_body(
            BodyDesc::static_cuboid(Vector::new(5.0, 0.5, 5.0)).position(Point::new(0.0, -0.5, 0.0)),
        )
        .unwrap();
    let stack: Vec<_> = (0..3)
        .map(|i| {
            world
                .add_body(
                    BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0)
                        .position(Point::new(0.0, 0.5 + i as Real, 0.0)),
                )
                .unwrap()
        })
        .collect();

    for _ in 0..2000 {
        let _ = world.step(1.0 / 60.0).unwrap();
    }

    let bodies = world.bodies();
    for (i, handle) in stack.iter().enumerate() {
        let position = bodies.position(*handle);
        let angle = bodies.orientation(*handle).angle();
        assert!(angle < 1.0e-2, "box {i} turned by {angle}");
        assert!(
            position.x.hypot(position.z) < 1.0e-2,
            "box {i} moved to {position}"
        );
        assert!((position.y - (0.5 + i as Real)).abs() < 0.05, "box {i} at {position}");
    }
}

use impact3d::math::{Point, Real, Rotation, Vector};
use impact3d::pipeline::{BodyDesc, ParallelExecution, World, WorldConfig};

fn populate(world: &mut World) {
    let _ = world
        .add_body(BodyDesc::half_space(Point::origin(), Vector::y_axis()))
        .unwrap();

    for i in 0..5 {
        for j in 0..5 {
            for k in 0..4 {
                let pos = Point::new(i as Real * 1.1, 0.5 + k as Real * 1.05, j as Real * 1.1);
                let rot = Rotation::from_euler_angles(0.1 * k as Real, 0.05 * i as Real, 0.0);
                let _ = world
                    .add_body(
                        BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0)
                            .position(pos)
                            .orientation(rot),
                    )
                    .unwrap();
            }
        }
    }
}

#[test]
fn parallel_world_matches_sequential_world() {
    let mut sequential = World::new(WorldConfig::default());
    let mut parallel = World::with_strategy(WorldConfig::default(), ParallelExecution::new());
    populate(&mut sequential);
    populate(&mut parallel);

    for _ in 0..120 {
        let r1 = sequential.step(1.0 / 60.0).unwrap();
        let r2 = parallel.step(1.0 / 60.0).unwrap();

        assert_eq!(r1, r2);
        assert_eq!(sequential.debug_frame(), parallel.debug_frame());
        assert_eq!(sequential.bodies(), parallel.bodies());
    }
}

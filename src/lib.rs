/*!
impact3d
========

**impact3d** is the collision-detection and contact-resolution core of a 3D
rigid-body simulator, written with the rust programming language.

A simulation tick runs these phases in order:

1. refresh the world-space colliders from the body transforms,
2. broad phase: three-axis sort-and-sweep producing candidate pairs,
3. narrow phase: SAT with face clipping for boxes, GJK + EPA for general
   convex vertex sets, plane clipping against half-spaces,
4. sequential-impulse contact solver with Baumgarte position correction,
5. semi-implicit Euler integration.

The body state is only committed once every phase succeeded.

```
use impact3d::math::{Point, Vector};
use impact3d::pipeline::{BodyDesc, World, WorldConfig};

let mut world = World::new(WorldConfig::default());
world.add_body(BodyDesc::half_space(Point::origin(), Vector::y_axis())).unwrap();
let cube = world
    .add_body(BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 1.0).position(Point::new(0.0, 0.5, 0.0)))
    .unwrap();

for _ in 0..60 {
    world.step(1.0 / 60.0).unwrap();
}

assert!((world.bodies().position(cube).y - 0.5).abs() < 0.01);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate alloc;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod broad_phase;
pub mod dynamics;
pub mod narrow_phase;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitQuaternion, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point = Point3<Real>;

    /// The vector type.
    pub type Vector = Vector3<Real>;

    /// The unit vector type.
    pub type UnitVector = UnitVector3<Real>;

    /// The matrix type.
    pub type Matrix = Matrix3<Real>;

    /// The transformation matrix type.
    pub type Isometry = Isometry3<Real>;

    /// The rotation type.
    pub type Rotation = UnitQuaternion<Real>;

    /// The translation type.
    pub type Translation = Translation3<Real>;

    /// The angular inertia of a rigid body, expressed as a full 3x3 tensor.
    pub type AngularInertia = Matrix3<Real>;
}

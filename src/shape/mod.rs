//! Shapes supported by the collision pipeline.

pub use self::collider::Collider;
pub use self::convex_points::ConvexPoints;
pub use self::cuboid::{Cuboid, OrientedCuboid};
pub use self::half_space::HalfSpace;
pub use self::mass_properties::MassProperties;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod collider;
mod convex_points;
mod cuboid;
mod half_space;
mod mass_properties;
mod shape;
mod support_map;

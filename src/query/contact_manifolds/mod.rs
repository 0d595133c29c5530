//! Contact manifold computation between pairs of colliders.
//!
//! Every manifold is expressed in world-space, with a normal pointing from
//! the incident body toward the reference body and at most
//! [`MAX_MANIFOLD_POINTS`] contact points.

pub use self::contact_manifold::{
    reduce_contact_points, ContactManifold, ContactPoint, MAX_MANIFOLD_POINTS, MAX_RAW_CONTACTS,
};
pub use self::contact_manifolds_convex_convex::{
    contact_manifold_convex_convex, ConvexContactOptions, ConvexContactStatus,
    ConvexContactWorkspace,
};
pub use self::contact_manifolds_cuboid_cuboid::{
    contact_manifold_cuboid_cuboid, CuboidContactOptions,
};
pub use self::contact_manifolds_halfspace_vertices::contact_manifold_halfspace_vertices;

mod contact_manifold;
mod contact_manifolds_convex_convex;
mod contact_manifolds_cuboid_cuboid;
mod contact_manifolds_halfspace_vertices;

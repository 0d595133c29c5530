//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`gjk::intersection_test`] to determine if two convex shapes overlap.
//! * [`epa::EPA`] to compute the penetration of two overlapping convex shapes.
//! * [`details::contact_manifold_cuboid_cuboid`] to compute the contact points between two boxes.
//!
//! All queries work on world-space geometry, as cached by
//! [`crate::shape::Collider`].

pub use self::contact_manifolds::{ContactManifold, ContactPoint, MAX_MANIFOLD_POINTS};

pub mod clip;
pub mod closest_points;
mod contact_manifolds;
pub mod epa;
pub mod gjk;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact_manifolds::*;
}

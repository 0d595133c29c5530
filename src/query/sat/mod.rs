//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex polyhedra do not intersect if and only if there exists an axis
//! onto which their projections do not overlap. For two boxes the candidate
//! axes are the six face normals and the nine cross products of one edge
//! direction of each box.
//!
//! The separation along an axis is positive when the boxes are apart along it
//! and negative when they overlap; the axis with the largest separation is the
//! best candidate for the contact normal.

pub use self::sat_cuboid_cuboid::*;

mod sat_cuboid_cuboid;

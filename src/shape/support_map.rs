//! Traits for support mapping based shapes.

use crate::math::{Point, Vector};

/// Convex shapes queried through their support function.
///
/// Shapes answer in their own local frame. Colliders answer in world-space,
/// over their cached world vertices, and are what the narrow phase queries.
pub trait SupportMap {
    /// The point of this shape with the largest dot product with `dir`.
    ///
    /// `dir` does not need to be normalized. Ties are broken deterministically
    /// by the implementor.
    fn local_support_point(&self, dir: &Vector) -> Point;
}

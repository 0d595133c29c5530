//! A convex shape given by its vertex set.

use crate::math::{Point, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// A convex shape described by the vertices of its convex hull.
///
/// Only the vertices matter: the shape is the convex hull of `points`, and
/// points strictly inside the hull are harmless but never selected by the
/// support function.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexPoints {
    points: Vec<Point>,
}

impl ConvexPoints {
    /// Creates a vertex-set shape, or `None` if `points` is empty.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexPoints { points })
        }
    }

    /// The local-space vertices.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl SupportMap for ConvexPoints {
    #[inline]
    fn local_support_point(&self, dir: &Vector) -> Point {
        utils::point_cloud_support_point(dir, &self.points)
    }
}

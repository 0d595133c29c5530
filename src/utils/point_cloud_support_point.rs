use crate::math::{Point, Vector};

/// Index of the point of `points` with the largest projection on `dir`.
///
/// Ties keep the first point encountered so the result only depends on the
/// order of `points`. `points` must not be empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector, points: &[Point]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}

/// The point of `points` with the largest projection on `dir`.
#[inline]
pub fn point_cloud_support_point(dir: &Vector, points: &[Point]) -> Point {
    points[point_cloud_support_point_id(dir, points)]
}

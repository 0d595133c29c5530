use crate::math::{Point, Vector};
use arrayvec::ArrayVec;

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward `normal`,
/// this computes the intersecting between the half-space and
/// the polygon. (Note that a point `pt` is considered as inside of
/// the half-space if `normal.dot(&(pt - center)) <= 0.0`.
///
/// Clipping a polygon with `n` vertices produces at most `n + 1` vertices,
/// so `result` must have room for `polygon.len() + 1` points.
pub fn clip_halfspace_polygon<const CAP: usize>(
    center: &Point,
    normal: &Vector,
    polygon: &[Point],
    result: &mut ArrayVec<Point, CAP>,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let signed_dist = |pt: &Point| (pt - center).dot(normal);
    let mut last_dist = signed_dist(last_pt);
    let mut last_keep = last_dist <= 0.0;

    if last_keep {
        result.push(*last_pt);
    }

    for i in 0..polygon.len() {
        let pt = &polygon[i];
        let dist = signed_dist(pt);
        let keep = dist <= 0.0;

        if keep != last_keep {
            // We crossed the plane, so we need
            // to cut the edge.
            let prev_i = if i == 0 { polygon.len() - 1 } else { i - 1 };
            let prev_pt = &polygon[prev_i];
            let t = last_dist / (last_dist - dist);

            if t > 0.0 && t < 1.0 {
                result.push(prev_pt + (pt - prev_pt) * t);
            }

            last_keep = keep;
        }

        if keep && i != polygon.len() - 1 {
            result.push(*pt);
        }

        last_dist = dist;
    }
}

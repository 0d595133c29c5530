use crate::math::{Point, Real};

/// Closest points between two segments, given as pairs of endpoints.
///
/// Returns the parameters `(s, t)` in `[0, 1]` of the closest points on
/// `seg1` and `seg2` respectively: the points are `seg1.0 + (seg1.1 - seg1.0) * s`
/// and `seg2.0 + (seg2.1 - seg2.0) * t`. Parallel segments pick `s = 0`.
#[inline]
pub fn closest_points_segment_segment_with_params(
    seg1: (&Point, &Point),
    seg2: (&Point, &Point),
) -> (Real, Real) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.1 - seg1.0;
    let d2 = seg2.1 - seg2.0;
    let r = seg1.0 - seg2.0;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = crate::math::DEFAULT_EPSILON;
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (s, t)
}

/// Closest points between two segments.
#[inline]
pub fn closest_points_segment_segment(
    seg1: (&Point, &Point),
    seg2: (&Point, &Point),
) -> (Point, Point) {
    let (s, t) = closest_points_segment_segment_with_params(seg1, seg2);
    (
        seg1.0 + (seg1.1 - seg1.0) * s,
        seg2.0 + (seg2.1 - seg2.0) * t,
    )
}

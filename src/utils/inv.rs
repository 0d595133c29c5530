use crate::math::Real;

/// The inverse of `val`, or zero if `val` is zero (infinite mass, locked axis).
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

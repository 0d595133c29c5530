//! Support mapping based HalfSpace shape.
use crate::math::UnitVector;

/// A half-space delimited by an infinite plane.
///
/// The plane passes through the local origin of the shape; `normal` points
/// out of the solid region. Half-spaces are only ever attached to static
/// bodies and give a single contact path for ground planes and walls.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HalfSpace {
    /// The halfspace planar boundary's outward normal.
    pub normal: UnitVector,
}

impl HalfSpace {
    /// Builds a new half-space from its outward normal.
    #[inline]
    pub fn new(normal: UnitVector) -> HalfSpace {
        HalfSpace { normal }
    }
}

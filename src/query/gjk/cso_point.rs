use crate::math::{Point, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`, unless this CSOPoint
    /// has been translated with self.translate.
    pub point: Point,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point, orig2: Point) -> Self {
        CSOPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
        }
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the direction `dir`.
    ///
    /// Both shapes are expected to expose their world-space support function
    /// through [`SupportMap::local_support_point`].
    pub fn from_shapes<G1: ?Sized, G2: ?Sized>(g1: &G1, g2: &G2, dir: &Vector) -> Self
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let sp1 = g1.local_support_point(dir);
        let sp2 = g2.local_support_point(&-*dir);

        CSOPoint::new(sp1, sp2)
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector {
        self.point - rhs.point
    }
}

//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins[i] ≤ maxs[i]` on every axis, except for the
///   inverted box returned by [`Aabb::new_invalid`].
///
/// Intervals are closed: two AABBs that merely touch on a face are reported
/// as intersecting.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point,
    /// The point with maximum coordinates.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any point or box into it yields that point or box.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// An AABB covering the whole space, used for half-spaces.
    #[inline]
    pub fn infinite() -> Self {
        // We divide by 2.0 so that we can still make some operations with it
        // (like computing its extents) without overflowing.
        let max = Real::MAX * 0.5;
        Self::new(Point::from(Vector::repeat(-max)), Point::from(Vector::repeat(max)))
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns an invalid AABB if `pts` is empty.
    pub fn from_points(pts: &[Point]) -> Self {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(*pt);
        }
        result
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Do the intervals of both AABBs along `axis` overlap?
    #[inline]
    pub fn overlaps_on_axis(&self, other: &Aabb, axis: usize) -> bool {
        self.mins[axis] <= other.maxs[axis] && other.mins[axis] <= self.maxs[axis]
    }

    /// Checks if this AABB intersects another one.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..DIM).all(|axis| self.overlaps_on_axis(other, axis))
    }

    /// Enlarges this AABB by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        Aabb::new(
            self.mins - Vector::repeat(amount),
            self.maxs + Vector::repeat(amount),
        )
    }
}

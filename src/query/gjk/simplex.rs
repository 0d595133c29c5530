use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// A simplex of dimension up to 3 made of points of the Minkowski difference.
///
/// The most recently added point is always first: GJK reasons about the
/// regions adjacent to the newest vertex.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 4>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Simplex::default()
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.points.clear();
        self.points.push(pt);
    }

    /// Adds a point at the front of this simplex.
    ///
    /// Returns `false` without modifying the simplex if it is already a tetrahedron.
    pub fn push_front(&mut self, pt: CSOPoint) -> bool {
        if self.points.is_full() {
            return false;
        }

        self.points.insert(0, pt);
        true
    }

    /// Replaces the vertices of this simplex, the newest first.
    pub fn set(&mut self, pts: &[CSOPoint]) {
        self.points.clear();
        self.points.extend(pts.iter().copied());
    }

    /// The vertices of this simplex, the newest first.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this simplex has no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

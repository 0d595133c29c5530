//! Support mapping based Cuboid shape.

use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::SupportMap;
use crate::utils;

/// Shape of a box.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector,
}

impl Cuboid {
    /// The vertex indices of each face of a cuboid, as indices into
    /// [`Cuboid::vertices`].
    ///
    /// Face `i` has the outward normal `sign * axis(i / 2)` with `sign = +1`
    /// for even `i` and `-1` for odd `i`. Here is how the vertices are
    /// numbered, assuming a right-handed coordinate system:
    ///
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    pub const FACES_VERTEX_IDS: [[usize; 4]; 6] = [
        // Face with normal +X
        [1, 2, 6, 5],
        // Face with normal -X
        [0, 3, 7, 4],
        // Face with normal +Y
        [2, 3, 7, 6],
        // Face with normal -Y
        [1, 0, 4, 5],
        // Face with normal +Z
        [4, 5, 6, 7],
        // Face with normal -Z
        [0, 1, 2, 3],
    ];

    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The eight corners of this cuboid in its local frame.
    pub fn vertices(&self) -> [Point; 8] {
        let (mins, maxs) = (-self.half_extents, self.half_extents);
        [
            Point::new(mins.x, mins.y, mins.z),
            Point::new(maxs.x, mins.y, mins.z),
            Point::new(maxs.x, maxs.y, mins.z),
            Point::new(mins.x, maxs.y, mins.z),
            Point::new(mins.x, mins.y, maxs.z),
            Point::new(maxs.x, mins.y, maxs.z),
            Point::new(maxs.x, maxs.y, maxs.z),
            Point::new(mins.x, maxs.y, maxs.z),
        ]
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector) -> Point {
        let mut res = self.half_extents;
        for i in 0..DIM {
            // Zero components go to the negative side, matching the vertex
            // order of `vertices` where lower indices have negative coordinates.
            if dir[i] <= 0.0 {
                res[i] = -res[i];
            }
        }
        Point::from(res)
    }
}

/// A cuboid placed in world-space, as seen by the box-box contact path.
///
/// The corners are borrowed from the collider cache so they are computed once
/// per tick.
#[derive(Copy, Clone, Debug)]
pub struct OrientedCuboid<'a> {
    /// World-space center.
    pub center: Point,
    /// World-space unit axes of the box frame.
    pub axes: [Vector; 3],
    /// Half-extents along each of `axes`.
    pub half_extents: Vector,
    /// World-space corners, in the order of [`Cuboid::vertices`].
    pub corners: &'a [Point],
}

impl<'a> OrientedCuboid<'a> {
    /// Builds the world view of `cuboid` placed at `pos`, given its world corners.
    pub fn new(cuboid: &Cuboid, pos: &Isometry, corners: &'a [Point]) -> Self {
        let rot = pos.rotation.to_rotation_matrix();
        let m = rot.matrix();
        OrientedCuboid {
            center: Point::from(pos.translation.vector),
            axes: [
                m.column(0).into_owned(),
                m.column(1).into_owned(),
                m.column(2).into_owned(),
            ],
            half_extents: cuboid.half_extents,
            corners,
        }
    }

    /// The outward normal of the `i`-th face.
    #[inline]
    pub fn face_normal(&self, face: usize) -> Vector {
        let axis = self.axes[face / 2];
        if face % 2 == 0 {
            axis
        } else {
            -axis
        }
    }

    /// The center of the `i`-th face.
    #[inline]
    pub fn face_center(&self, face: usize) -> Point {
        self.center + self.face_normal(face) * self.half_extents[face / 2]
    }

    /// The four corners of the `i`-th face, in cyclic order.
    #[inline]
    pub fn face_polygon(&self, face: usize) -> [Point; 4] {
        Cuboid::FACES_VERTEX_IDS[face].map(|id| self.corners[id])
    }

    /// The world-space support point, ties broken by corner index.
    #[inline]
    pub fn support_point(&self, dir: &Vector) -> Point {
        utils::point_cloud_support_point(dir, self.corners)
    }

    /// The face whose outward normal is the most anti-parallel to `dir`.
    pub fn most_anti_parallel_face(&self, dir: &Vector) -> usize {
        let mut best_face = 0;
        let mut best_dot = Real::MAX;

        for face in 0..6 {
            let dot = self.face_normal(face).dot(dir);
            if dot < best_dot {
                best_dot = dot;
                best_face = face;
            }
        }

        best_face
    }

    /// The edge parallel to `axes[axis]` that is the furthest along `dir`.
    ///
    /// Returns the two endpoints of the edge.
    pub fn support_edge(&self, axis: usize, dir: &Vector) -> (Point, Point) {
        let mut mid = self.center;

        for i in 0..DIM {
            if i != axis {
                let sign = (1.0 as Real).copysign(self.axes[i].dot(dir));
                mid += self.axes[i] * (sign * self.half_extents[i]);
            }
        }

        let half_edge = self.axes[axis] * self.half_extents[axis];
        (mid - half_edge, mid + half_edge)
    }
}

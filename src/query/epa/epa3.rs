//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::gjk::{self, CSOPoint, Simplex};
use crate::shape::SupportMap;
use crate::utils;
use alloc::vec::Vec;
use na::Unit;
use num::Bounded;

#[derive(Clone, Debug)]
struct Face {
    pts: [usize; 3],
    normal: Unit<Vector>,
    dist: Real,
}

impl Face {
    /// Builds the face `pts` of the polytope, or `None` if it has no area.
    ///
    /// The winding of `pts` decides the orientation: the normal is
    /// `(b - a) × (c - a)`.
    fn new(vertices: &[CSOPoint], pts: [usize; 3]) -> Option<Self> {
        let normal = utils::ccw_face_normal([
            &vertices[pts[0]].point,
            &vertices[pts[1]].point,
            &vertices[pts[2]].point,
        ])?;
        let dist = vertices[pts[0]].point.coords.dot(&normal);

        Some(Face { pts, normal, dist })
    }

    /// Whether `pt` lies strictly in front of this face.
    fn can_be_seen_by(&self, vertices: &[CSOPoint], pt: &Point) -> bool {
        let p0 = &vertices[self.pts[0]].point;
        (pt - p0).dot(&self.normal) > gjk::eps_tol()
    }

    /// The points of both shapes matching the projection of the origin onto this face.
    fn witness_points(&self, vertices: &[CSOPoint]) -> (Point, Point) {
        let [a, b, c] = self.pts.map(|i| vertices[i]);
        let proj = Point::from(self.normal.into_inner() * self.dist);
        let bcoords = barycentric_coordinates(&proj, &a.point, &b.point, &c.point);

        let orig1 = a.orig1.coords * bcoords[0]
            + b.orig1.coords * bcoords[1]
            + c.orig1.coords * bcoords[2];
        let orig2 = a.orig2.coords * bcoords[0]
            + b.orig2.coords * bcoords[1]
            + c.orig2.coords * bcoords[2];

        (Point::from(orig1), Point::from(orig2))
    }
}

/// The penetration computed by EPA.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The separating direction, pointing from the first shape toward the second.
    ///
    /// Translating the second shape by `normal * depth` resolves the overlap.
    pub normal: UnitVector,
    /// The penetration depth, never negative.
    pub depth: Real,
    /// The deepest point of the first shape, in world-space.
    pub point1: Point,
    /// The deepest point of the second shape, in world-space.
    pub point2: Point,
    /// Whether the polytope expansion reached the tolerance.
    ///
    /// `false` means the iteration limit was hit and the result is the best
    /// face found so far.
    pub converged: bool,
}

/// The Expanding Polytope Algorithm in 3D.
///
/// The polytope is a triangle mesh enclosing the origin, grown inside the
/// Minkowski difference `g1 - g2` from the final GJK simplex. At each
/// iteration the face closest to the origin is pushed outward by the support
/// point along its normal, until that support point does not get further than
/// `tolerance` from the face. The structure only owns scratch buffers reused
/// from one query to the next.
#[derive(Default)]
pub struct EPA {
    vertices: Vec<CSOPoint>,
    faces: Vec<Face>,
    silhouette: Vec<(usize, usize)>,
}

impl EPA {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.silhouette.clear();
    }

    /// Computes the penetration of the intersecting shapes `g1` and `g2`.
    ///
    /// `simplex` must be the final simplex of a GJK test that concluded the
    /// shapes intersect. Returns `None` if the polytope cannot be built, which
    /// happens when the Minkowski difference is flat (degenerate geometry).
    pub fn penetration<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
        max_iterations: usize,
        tolerance: Real,
    ) -> Option<Penetration>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.reset();
        let eps = gjk::eps_tol();

        // Keep only the simplex vertices that span a new dimension.
        for pt in simplex.points() {
            if self.vertices.is_empty()
                || (self.vertices.len() < 4 && self.adds_dimension(&pt.point, eps))
            {
                self.vertices.push(*pt);
            }
        }

        if !self.expand_to_tetrahedron(g1, g2) {
            log::debug!("EPA: flat Minkowski difference, no polytope to expand");
            return None;
        }

        self.init_faces()?;

        let mut best_face = self.closest_face()?;

        for _ in 0..max_iterations {
            let face = self.faces[best_face].clone();
            let support = CSOPoint::from_shapes(g1, g2, &face.normal);
            let support_dist = support.point.coords.dot(&face.normal);

            if support_dist - face.dist <= tolerance {
                return Some(self.penetration_from_face(&face, true));
            }

            let new_id = self.vertices.len();
            self.vertices.push(support);

            if !self.insert_vertex(new_id) {
                // No face sees the new point: the polytope cannot grow anymore.
                return Some(self.penetration_from_face(&face, true));
            }

            best_face = match self.closest_face() {
                Some(id) => id,
                None => return Some(self.penetration_from_face(&face, false)),
            };
        }

        log::debug!("EPA did not converge after {} iterations", max_iterations);
        let face = self.faces[best_face].clone();
        Some(self.penetration_from_face(&face, false))
    }

    fn penetration_from_face(&self, face: &Face, converged: bool) -> Penetration {
        let (point1, point2) = face.witness_points(&self.vertices);

        Penetration {
            normal: face.normal,
            depth: face.dist.max(0.0),
            point1,
            point2,
            converged,
        }
    }

    /// Adds support points until the polytope is a non-flat tetrahedron.
    ///
    /// Points are probed along the six coordinate axes for a single point,
    /// perpendicular to the edge for a segment, and along both normals of a
    /// triangle. Returns `false` if no probe direction gives a new dimension.
    fn expand_to_tetrahedron<G1, G2>(&mut self, g1: &G1, g2: &G2) -> bool
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let eps = gjk::eps_tol();

        while self.vertices.len() < 4 {
            let directions: ([Vector; 6], usize) = match self.vertices.len() {
                1 => (
                    [
                        Vector::x(),
                        -Vector::x(),
                        Vector::y(),
                        -Vector::y(),
                        Vector::z(),
                        -Vector::z(),
                    ],
                    6,
                ),
                2 => {
                    let Some(edge) = (self.vertices[1] - self.vertices[0]).try_normalize(0.0)
                    else {
                        return false;
                    };
                    let [t1, t2] = utils::orthonormal_basis(&edge);
                    ([t1, -t1, t2, -t2, Vector::zeros(), Vector::zeros()], 4)
                }
                _ => {
                    let n = (self.vertices[1] - self.vertices[0])
                        .cross(&(self.vertices[2] - self.vertices[0]));
                    let Some(n) = n.try_normalize(0.0) else {
                        return false;
                    };
                    ([n, -n, Vector::zeros(), Vector::zeros(), Vector::zeros(), Vector::zeros()], 2)
                }
            };

            let mut found = false;

            for dir in &directions.0[..directions.1] {
                let candidate = CSOPoint::from_shapes(g1, g2, dir);

                if self.adds_dimension(&candidate.point, eps) {
                    self.vertices.push(candidate);
                    found = true;
                    break;
                }
            }

            if !found {
                return false;
            }
        }

        true
    }

    /// Whether `pt` is away from the affine hull of the current vertices.
    fn adds_dimension(&self, pt: &Point, eps: Real) -> bool {
        let v = &self.vertices;

        match v.len() {
            1 => (pt - v[0].point).norm() > eps,
            2 => {
                let edge = v[1] - v[0];
                edge.cross(&(pt - v[0].point)).norm() > eps * edge.norm()
            }
            _ => {
                let n = (v[1] - v[0]).cross(&(v[2] - v[0]));
                (pt - v[0].point).dot(&n).abs() > eps * n.norm()
            }
        }
    }

    /// Builds the four faces of the initial tetrahedron, outward oriented.
    fn init_faces(&mut self) -> Option<()> {
        let v = &self.vertices;
        let volume = (v[1] - v[0]).cross(&(v[2] - v[0])).dot(&(v[3] - v[0]));

        if volume > 0.0 {
            self.vertices.swap(1, 2);
        }

        for pts in [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]] {
            let face = Face::new(&self.vertices, pts)?;
            self.faces.push(face);
        }

        Some(())
    }

    /// The index of the face closest to the origin, ties keeping the lowest index.
    fn closest_face(&self) -> Option<usize> {
        let mut best = None;
        let mut best_dist: Real = Bounded::max_value();

        for (i, face) in self.faces.iter().enumerate() {
            if face.dist < best_dist {
                best_dist = face.dist;
                best = Some(i);
            }
        }

        best
    }

    /// Replaces every face visible from the vertex `new_id` by a fan of faces
    /// connecting that vertex to the horizon.
    ///
    /// Returns `false`, leaving the polytope untouched, if no face is visible.
    fn insert_vertex(&mut self, new_id: usize) -> bool {
        let pt = self.vertices[new_id].point;
        self.silhouette.clear();

        let mut removed_any = false;
        let mut i = 0;

        while i < self.faces.len() {
            if self.faces[i].can_be_seen_by(&self.vertices, &pt) {
                let face = self.faces.swap_remove(i);
                removed_any = true;

                for k in 0..3 {
                    let edge = (face.pts[k], face.pts[(k + 1) % 3]);
                    // An edge shared by two removed faces appears once in each
                    // direction; it is interior to the hole.
                    if let Some(pos) = self
                        .silhouette
                        .iter()
                        .position(|e| *e == (edge.1, edge.0))
                    {
                        let _ = self.silhouette.swap_remove(pos);
                    } else {
                        self.silhouette.push(edge);
                    }
                }
            } else {
                i += 1;
            }
        }

        if !removed_any {
            let _ = self.vertices.pop();
            return false;
        }

        for &(a, b) in &self.silhouette {
            if let Some(face) = Face::new(&self.vertices, [a, b, new_id]) {
                self.faces.push(face);
            }
        }

        true
    }
}

/// Barycentric coordinates of `pt` with respect to the triangle `abc`.
///
/// `pt` is assumed to lie on the plane of the triangle. Falls back to the
/// first vertex for triangles without area.
fn barycentric_coordinates(pt: &Point, a: &Point, b: &Point, c: &Point) -> [Real; 3] {
    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let d00 = ab.dot(&ab);
    let d01 = ab.dot(&ac);
    let d11 = ac.dot(&ac);
    let d20 = ap.dot(&ab);
    let d21 = ap.dot(&ac);
    let denom = d00 * d11 - d01 * d01;

    if denom.abs() <= gjk::eps_tol() {
        return [1.0, 0.0, 0.0];
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    [1.0 - v - w, v, w]
}

use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::OrientedCuboid;

/// The best separating axis found among the edge-edge axes of two cuboids.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeSeparation {
    /// The separation along `axis`. Positive means the boxes are apart.
    pub separation: Real,
    /// The unit axis, oriented from the first cuboid toward the second.
    pub axis: Vector,
    /// The index of the edge direction of the first cuboid.
    pub edge1: usize,
    /// The index of the edge direction of the second cuboid.
    pub edge2: usize,
}

/// Computes the separation distance between two cuboids along a given axis.
///
/// The axis is first oriented to point from `cuboid1` toward `cuboid2`. Returns
/// the signed distance between the support points of both boxes along that
/// oriented axis, and the oriented axis itself.
pub fn cuboid_cuboid_compute_separation_wrt_line(
    cuboid1: &OrientedCuboid,
    cuboid2: &OrientedCuboid,
    axis: &Vector,
) -> (Real, Vector) {
    #[allow(clippy::unnecessary_cast)]
    let signum = (1.0 as Real).copysign((cuboid2.center - cuboid1.center).dot(axis));
    let axis = axis * signum;
    let pt1 = cuboid1.support_point(&axis);
    let pt2 = cuboid2.support_point(&-axis);
    let separation = (pt2 - pt1).dot(&axis);
    (separation, axis)
}

/// Finds the face of `cuboid1` with the largest separation from `cuboid2`.
///
/// For each face with outward normal `n` and center `c`, the separation is
/// the distance from the face plane of the deepest point of `cuboid2`, i.e.
/// `n · (support2(-n) - c)`. Returns that maximum separation and the face
/// index (see [`crate::shape::Cuboid::FACES_VERTEX_IDS`]). Ties keep the
/// lowest face index.
pub fn cuboid_cuboid_find_separating_face_oneway(
    cuboid1: &OrientedCuboid,
    cuboid2: &OrientedCuboid,
) -> (Real, usize) {
    let mut best_separation = -Real::MAX;
    let mut best_face = 0;

    for face in 0..DIM * 2 {
        let normal = cuboid1.face_normal(face);
        let pt2 = cuboid2.support_point(&-normal);
        let separation = (pt2 - cuboid1.face_center(face)).dot(&normal);

        if separation > best_separation {
            best_separation = separation;
            best_face = face;
        }
    }

    (best_separation, best_face)
}

/// Finds the best separating axis by testing all edge-edge combinations between two cuboids.
///
/// There are 3 × 3 = 9 candidate axes, the cross products of one edge
/// direction of each box. Axes built from nearly parallel edges have no
/// defined direction and are skipped. Returns `None` if every pair of edges is
/// parallel, which happens for boxes with identical orientations.
pub fn cuboid_cuboid_find_separating_edge_twoway(
    cuboid1: &OrientedCuboid,
    cuboid2: &OrientedCuboid,
) -> Option<EdgeSeparation> {
    let mut best: Option<EdgeSeparation> = None;

    for edge1 in 0..DIM {
        for edge2 in 0..DIM {
            let axis = cuboid1.axes[edge1].cross(&cuboid2.axes[edge2]);
            let norm = axis.norm();

            if norm <= DEFAULT_EPSILON.sqrt() {
                continue;
            }

            let (separation, axis) =
                cuboid_cuboid_compute_separation_wrt_line(cuboid1, cuboid2, &(axis / norm));

            if best.map_or(true, |best| separation > best.separation) {
                best = Some(EdgeSeparation {
                    separation,
                    axis,
                    edge1,
                    edge2,
                });
            }
        }
    }

    best
}

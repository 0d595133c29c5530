//! World-space collision geometry cached per body.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, UnitVector, Vector};
use crate::shape::{Cuboid, OrientedCuboid, Shape, ShapeType, SupportMap};
use crate::utils;
use smallvec::SmallVec;

/// The geometry of a body, together with its world-space vertices and AABB.
///
/// The world-space data is a cache refreshed by [`Collider::update`] once per
/// tick from the body transform, before the broad phase runs. Every query in
/// the broad and narrow phase reads the cache only, so the collider behaves as
/// a pure function of the transform it was last updated with.
#[derive(Clone, Debug)]
pub struct Collider {
    shape: Shape,
    position: Isometry,
    world_vertices: SmallVec<[Point; 8]>,
    aabb: Aabb,
}

impl Collider {
    /// Creates a collider for `shape` placed at `position`.
    pub fn new(shape: Shape, position: &Isometry) -> Self {
        let mut result = Collider {
            shape,
            position: *position,
            world_vertices: SmallVec::new(),
            aabb: Aabb::new_invalid(),
        };
        result.update(position);
        result
    }

    /// Recomputes the world-space vertices and the AABB from `position`.
    pub fn update(&mut self, position: &Isometry) {
        self.position = *position;
        self.world_vertices.clear();

        match &self.shape {
            Shape::Cuboid(cuboid) => self
                .world_vertices
                .extend(cuboid.vertices().iter().map(|pt| position * pt)),
            Shape::ConvexPoints(points) => self
                .world_vertices
                .extend(points.points().iter().map(|pt| position * pt)),
            Shape::HalfSpace(_) => {}
        }

        self.aabb = if self.shape.shape_type() == ShapeType::HalfSpace {
            Aabb::infinite()
        } else {
            Aabb::from_points(&self.world_vertices)
        };
    }

    /// The local-space shape.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The type of the underlying shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// The transform the world-space cache was computed with.
    #[inline]
    pub fn position(&self) -> &Isometry {
        &self.position
    }

    /// The world-space vertices (the eight corners for cuboids, empty for half-spaces).
    #[inline]
    pub fn world_vertices(&self) -> &[Point] {
        &self.world_vertices
    }

    /// The world-space axis-aligned bounding box.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The world-space view of a cuboid collider.
    pub fn as_oriented_cuboid(&self) -> Option<OrientedCuboid<'_>> {
        let cuboid: &Cuboid = self.shape.as_cuboid()?;
        Some(OrientedCuboid::new(
            cuboid,
            &self.position,
            &self.world_vertices,
        ))
    }

    /// The world-space boundary plane of a half-space collider, as a point and
    /// an outward normal.
    pub fn world_plane(&self) -> Option<(Point, UnitVector)> {
        let half_space = self.shape.as_half_space()?;
        Some((
            Point::from(self.position.translation.vector),
            self.position.rotation * half_space.normal,
        ))
    }
}

/// The collider's support function is evaluated over its world-space vertices,
/// so the "local" frame of the trait is the world frame here.
impl SupportMap for Collider {
    #[inline]
    fn local_support_point(&self, dir: &Vector) -> Point {
        utils::point_cloud_support_point(dir, &self.world_vertices)
    }
}

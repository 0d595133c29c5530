//! The shapes a collider can be built from.

use crate::shape::{ConvexPoints, Cuboid, HalfSpace};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A cuboid shape.
    Cuboid,
    /// A convex vertex set.
    ConvexPoints,
    /// A half-space.
    HalfSpace,
}

/// The geometry attached to a body, in the body's local frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// An oriented box.
    Cuboid(Cuboid),
    /// A general convex shape given by its vertices.
    ConvexPoints(ConvexPoints),
    /// An infinite plane bounding a solid half-space.
    HalfSpace(HalfSpace),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Cuboid(_) => ShapeType::Cuboid,
            Shape::ConvexPoints(_) => ShapeType::ConvexPoints,
            Shape::HalfSpace(_) => ShapeType::HalfSpace,
        }
    }

    /// Converts this shape into a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            Shape::Cuboid(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this shape into a half-space, if it is one.
    pub fn as_half_space(&self) -> Option<&HalfSpace> {
        match self {
            Shape::HalfSpace(h) => Some(h),
            _ => None,
        }
    }
}

impl From<Cuboid> for Shape {
    fn from(shape: Cuboid) -> Self {
        Shape::Cuboid(shape)
    }
}

impl From<ConvexPoints> for Shape {
    fn from(shape: ConvexPoints) -> Self {
        Shape::ConvexPoints(shape)
    }
}

impl From<HalfSpace> for Shape {
    fn from(shape: HalfSpace) -> Self {
        Shape::HalfSpace(shape)
    }
}

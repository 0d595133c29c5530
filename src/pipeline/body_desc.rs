use crate::dynamics::BodyKind;
use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::pipeline::PipelineError;
use crate::shape::{ConvexPoints, Cuboid, HalfSpace, Shape};

/// The description of a body to add to a [`World`](crate::pipeline::World).
///
/// Built from one of the shape constructors, then refined with the builder
/// methods:
///
/// ```
/// # use impact3d::math::{Point, Vector};
/// # use impact3d::pipeline::BodyDesc;
/// let desc = BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 2.0)
///     .position(Point::new(0.0, 3.0, 0.0))
///     .linvel(Vector::new(1.0, 0.0, 0.0))
///     .friction(0.8);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyDesc {
    /// How the body takes part in the simulation.
    pub kind: BodyKind,
    /// The collision shape, in the body frame.
    pub shape: Shape,
    /// The mass of a dynamic body. Ignored for other kinds.
    pub mass: Real,
    /// Initial position of the body origin.
    pub position: Point,
    /// Initial orientation.
    pub orientation: Rotation,
    /// Initial linear velocity. Forced to zero for static bodies.
    pub linvel: Vector,
    /// Initial angular velocity. Forced to zero for static bodies.
    pub angvel: Vector,
    /// Coulomb friction coefficient.
    pub friction: Real,
}

impl BodyDesc {
    /// Describes a body of any kind with the given shape, at the origin and at rest.
    pub fn new(kind: BodyKind, shape: Shape, mass: Real) -> Self {
        Self {
            kind,
            shape,
            mass,
            position: Point::origin(),
            orientation: Rotation::identity(),
            linvel: Vector::zeros(),
            angvel: Vector::zeros(),
            friction: 0.5,
        }
    }

    /// A static half-space whose boundary plane passes through `point`, with
    /// outward normal `normal`.
    pub fn half_space(point: Point, normal: UnitVector) -> Self {
        Self::new(BodyKind::Static, HalfSpace::new(normal).into(), 0.0).position(point)
    }

    /// A dynamic box of the given half-extents and mass.
    pub fn dynamic_cuboid(half_extents: Vector, mass: Real) -> Self {
        Self::new(BodyKind::Dynamic, Cuboid::new(half_extents).into(), mass)
    }

    /// A static box of the given half-extents.
    pub fn static_cuboid(half_extents: Vector) -> Self {
        Self::new(BodyKind::Static, Cuboid::new(half_extents).into(), 0.0)
    }

    /// A kinematic box of the given half-extents.
    pub fn kinematic_cuboid(half_extents: Vector) -> Self {
        Self::new(BodyKind::Kinematic, Cuboid::new(half_extents).into(), 0.0)
    }

    /// A dynamic convex body given by its vertices.
    ///
    /// Fails with `InvalidBody` if `points` is empty.
    pub fn convex(points: Vec<Point>, mass: Real) -> Result<Self, PipelineError> {
        let shape = ConvexPoints::new(points)
            .ok_or(PipelineError::InvalidBody("a convex body needs at least one vertex"))?;
        Ok(Self::new(BodyKind::Dynamic, shape.into(), mass))
    }

    /// Sets the body kind.
    pub fn kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the initial position.
    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the initial orientation.
    pub fn orientation(mut self, orientation: Rotation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the initial linear velocity.
    pub fn linvel(mut self, linvel: Vector) -> Self {
        self.linvel = linvel;
        self
    }

    /// Sets the initial angular velocity.
    pub fn angvel(mut self, angvel: Vector) -> Self {
        self.angvel = angvel;
        self
    }

    /// Sets the friction coefficient.
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Checks that this description can be turned into a body.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.kind != BodyKind::Static && self.shape.as_half_space().is_some() {
            return Err(PipelineError::InvalidBody("a half-space must be static"));
        }

        if self.kind.is_dynamic() && !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(PipelineError::InvalidBody(
                "a dynamic body needs a positive finite mass",
            ));
        }

        if !(self.friction >= 0.0 && self.friction.is_finite()) {
            return Err(PipelineError::InvalidBody(
                "the friction coefficient must be non-negative",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_descriptions() {
        let dynamic_plane =
            BodyDesc::half_space(Point::origin(), Vector::y_axis()).kind(BodyKind::Dynamic);
        assert!(matches!(
            dynamic_plane.validate(),
            Err(PipelineError::InvalidBody(_))
        ));
        assert!(BodyDesc::dynamic_cuboid(Vector::repeat(0.5), 0.0)
            .validate()
            .is_err());
        assert!(BodyDesc::dynamic_cuboid(Vector::repeat(0.5), Real::NAN)
            .validate()
            .is_err());
        assert!(BodyDesc::convex(Vec::new(), 1.0).is_err());

        // Mass is irrelevant for non-dynamic bodies.
        assert!(BodyDesc::static_cuboid(Vector::repeat(0.5)).validate().is_ok());
        assert!(BodyDesc::half_space(Point::origin(), Vector::y_axis())
            .validate()
            .is_ok());
    }
}

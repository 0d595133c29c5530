use crate::math::{AngularInertia, Point, Real, Vector};
use crate::shape::{ConvexPoints, Cuboid, Shape};
use crate::utils;

/// The mass and local angular inertia of a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// The mass of the body.
    pub mass: Real,
    /// The inverse mass, zero for bodies with infinite mass.
    pub inv_mass: Real,
    /// The angular inertia tensor expressed in the body's local frame.
    pub local_inertia: AngularInertia,
    /// The inverse of `local_inertia`, zero for bodies that cannot rotate.
    pub inv_local_inertia: AngularInertia,
}

impl MassProperties {
    /// Mass properties of a body that never reacts to impulses.
    pub fn infinite() -> Self {
        MassProperties {
            mass: 0.0,
            inv_mass: 0.0,
            local_inertia: AngularInertia::zeros(),
            inv_local_inertia: AngularInertia::zeros(),
        }
    }

    /// Mass properties from a mass and the principal moments of inertia.
    pub fn from_principal_inertia(mass: Real, principal_inertia: Vector) -> Self {
        let inv_principal = principal_inertia.map(utils::inv);
        MassProperties {
            mass,
            inv_mass: utils::inv(mass),
            local_inertia: AngularInertia::from_diagonal(&principal_inertia),
            inv_local_inertia: AngularInertia::from_diagonal(&inv_principal),
        }
    }

    /// Mass properties of a solid box with the given half-extents.
    pub fn from_cuboid(mass: Real, half_extents: &Vector) -> Self {
        let sq = half_extents.component_mul(half_extents);
        let principal = Vector::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * (mass / 3.0);
        Self::from_principal_inertia(mass, principal)
    }

    /// Mass properties of a vertex set, approximated by its local bounding box.
    ///
    /// The body origin is taken as the center of mass.
    pub fn from_convex_points(mass: Real, shape: &ConvexPoints) -> Self {
        let mut mins = Point::from(Vector::repeat(Real::MAX));
        let mut maxs = Point::from(Vector::repeat(-Real::MAX));
        for pt in shape.points() {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }
        Self::from_cuboid(mass, &((maxs - mins) * 0.5))
    }

    /// Mass properties of `shape` with the given total mass.
    ///
    /// Half-spaces have infinite mass whatever `mass` is.
    pub fn from_shape(mass: Real, shape: &Shape) -> Self {
        match shape {
            Shape::Cuboid(Cuboid { half_extents }) => Self::from_cuboid(mass, half_extents),
            Shape::ConvexPoints(points) => Self::from_convex_points(mass, points),
            Shape::HalfSpace(_) => Self::infinite(),
        }
    }
}

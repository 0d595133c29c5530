use crate::math::{AngularInertia, Point, Real, Rotation, Vector};
use crate::shape::MassProperties;

/// The way a body takes part in the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BodyKind {
    /// Moved by gravity and contact impulses.
    Dynamic,
    /// Moved by its own velocity only; pushes dynamic bodies without being pushed back.
    Kinematic,
    /// Never moves.
    Static,
}

impl BodyKind {
    /// Whether bodies of this kind react to gravity and contact impulses.
    #[inline]
    pub fn is_dynamic(self) -> bool {
        self == BodyKind::Dynamic
    }

    /// Whether bodies of this kind integrate their velocity into their position.
    #[inline]
    pub fn is_moving(self) -> bool {
        self != BodyKind::Static
    }
}

/// The identifier of a body in a world.
///
/// Handles are handed out in increasing order and equal the index of the body
/// slot, since bodies are never removed individually.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// The index of the body slot.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Translational state of a body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LinearTransform {
    /// The body mass, zero for static and kinematic bodies.
    pub mass: Real,
    /// The inverse mass, exactly zero for static and kinematic bodies.
    pub inv_mass: Real,
    /// The position of the center of mass.
    pub position: Point,
    /// The linear velocity.
    pub velocity: Vector,
    /// The linear momentum, `mass * velocity`.
    pub momentum: Vector,
}

impl LinearTransform {
    /// Creates the translational state of a body.
    pub fn new(mass: Real, inv_mass: Real, position: Point, velocity: Vector) -> Self {
        LinearTransform {
            mass,
            inv_mass,
            position,
            velocity,
            momentum: velocity * mass,
        }
    }
}

/// Rotational state of a body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AngularTransform {
    /// The inertia tensor in the body frame.
    pub inertia: AngularInertia,
    /// The inverse inertia tensor in the body frame, zero for bodies that cannot rotate.
    pub inv_inertia: AngularInertia,
    /// The orientation, renormalized after every integration step.
    pub orientation: Rotation,
    /// The angular velocity, in world-space.
    pub angular_velocity: Vector,
    /// The angular momentum, in world-space.
    pub angular_momentum: Vector,
}

impl AngularTransform {
    /// Creates the rotational state of a body.
    pub fn new(
        inertia: AngularInertia,
        inv_inertia: AngularInertia,
        orientation: Rotation,
        angular_velocity: Vector,
    ) -> Self {
        let mut result = AngularTransform {
            inertia,
            inv_inertia,
            orientation,
            angular_velocity,
            angular_momentum: Vector::zeros(),
        };
        result.angular_momentum = result.world_inertia() * angular_velocity;
        result
    }

    /// The inertia tensor expressed in world-space: `R I Rᵀ`.
    pub fn world_inertia(&self) -> AngularInertia {
        let rot = self.orientation.to_rotation_matrix();
        rot.matrix() * self.inertia * rot.matrix().transpose()
    }

    /// The inverse inertia tensor expressed in world-space: `R I⁻¹ Rᵀ`.
    pub fn world_inv_inertia(&self) -> AngularInertia {
        let rot = self.orientation.to_rotation_matrix();
        rot.matrix() * self.inv_inertia * rot.matrix().transpose()
    }
}

/// Builds the linear and angular state of a body of the given kind.
///
/// Non-dynamic bodies get exactly zero inverse mass and inverse inertia.
pub(crate) fn body_state(
    kind: BodyKind,
    props: &MassProperties,
    position: Point,
    orientation: Rotation,
    velocity: Vector,
    angular_velocity: Vector,
) -> (LinearTransform, AngularTransform) {
    let props = if kind.is_dynamic() {
        *props
    } else {
        MassProperties::infinite()
    };

    (
        LinearTransform::new(props.mass, props.inv_mass, position, velocity),
        AngularTransform::new(
            props.local_inertia,
            props.inv_local_inertia,
            orientation,
            angular_velocity,
        ),
    )
}

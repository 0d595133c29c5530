//! Semi-implicit Euler integration.

use crate::dynamics::BodySet;
use crate::math::{Real, Rotation, Vector};
use na::Quaternion;

/// Adds `gravity * dt` to the velocity of every dynamic body.
pub fn integrate_forces(bodies: &mut BodySet, gravity: &Vector, dt: Real) {
    for (kind, linear) in bodies.kinds.iter().zip(bodies.linear.iter_mut()) {
        if kind.is_dynamic() {
            linear.velocity += gravity * dt;
        }
    }
}

/// Moves every dynamic and kinematic body by its current velocities.
///
/// The velocities are expected to already include this tick's impulses.
/// Orientations follow the quaternion derivative `q' = ½ ω q` and are
/// renormalized; momenta are refreshed from the new velocities.
pub fn integrate_positions(bodies: &mut BodySet, dt: Real) {
    let states = bodies
        .kinds
        .iter()
        .zip(bodies.linear.iter_mut().zip(bodies.angular.iter_mut()));

    for (kind, (linear, angular)) in states {
        if !kind.is_moving() {
            continue;
        }

        linear.position += linear.velocity * dt;
        linear.momentum = linear.velocity * linear.mass;

        let q = angular.orientation.into_inner();
        let dq = Quaternion::from_imag(angular.angular_velocity) * q * (0.5 * dt);
        angular.orientation = Rotation::new_normalize(q + dq);
        angular.angular_momentum = angular.world_inertia() * angular.angular_velocity;
    }
}

//! Rigid-body state, contact solver and time integration.

pub use self::body::{AngularTransform, BodyHandle, BodyKind, LinearTransform};
pub(crate) use self::body::body_state;
pub use self::body_set::BodySet;
pub use self::integration::{integrate_forces, integrate_positions};
pub use self::solver::{SolverParams, VelocitySolver};

mod body;
mod body_set;
mod integration;
pub mod solver;

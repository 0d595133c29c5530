//! Sequential-impulse contact solver.

pub use self::velocity_solver::{SolverParams, VelocitySolver};

mod contact_constraint;
mod impulse_cache;
mod velocity_solver;

//! The Gilbert–Johnson–Keerthi intersection test and its Minkowski-difference helpers.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{eps_tol, intersection_test, GJKResult};
pub use self::simplex::Simplex;

mod cso_point;
mod gjk;
mod simplex;

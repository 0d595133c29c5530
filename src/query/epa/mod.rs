//! The EPA algorithm for penetration depth computation.

pub use self::epa3::{Penetration, EPA};

mod epa3;

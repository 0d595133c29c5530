//! Narrow phase: turns candidate pairs into contact manifolds.

pub use self::manifold_buffer::ManifoldBuffer;
pub use self::narrow_phase::{ContactDiagnostics, NarrowPhase, NarrowPhaseParams};

mod manifold_buffer;
mod narrow_phase;

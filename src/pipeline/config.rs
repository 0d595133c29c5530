use crate::dynamics::SolverParams;
use crate::math::Vector;
use crate::narrow_phase::NarrowPhaseParams;

/// The fixed capacities of a world.
///
/// Every buffer of the pipeline is allocated once with these capacities and
/// never grows: overflowing any of them fails the tick with
/// `CapacityExceeded`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Capacities {
    /// Maximum number of bodies, half-spaces included.
    pub max_bodies: usize,
    /// Maximum number of candidate pairs emitted by the broad phase per tick.
    pub max_pairs: usize,
    /// Maximum number of manifolds emitted by the narrow phase per tick.
    pub max_manifolds: usize,
    /// Maximum number of contact points over all manifolds of a tick.
    pub max_contacts: usize,
}

impl Capacities {
    /// Capacities scaled from a maximum body count.
    ///
    /// Pairs and manifolds get twice the body count, and contacts four per manifold.
    pub fn with_max_bodies(max_bodies: usize) -> Self {
        let max_manifolds = max_bodies.saturating_mul(2);
        Self {
            max_bodies,
            max_pairs: max_bodies.saturating_mul(2),
            max_manifolds,
            max_contacts: max_manifolds.saturating_mul(4),
        }
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self::with_max_bodies(1024)
    }
}

/// The configuration of a [`World`](crate::pipeline::World).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Acceleration applied to every dynamic body.
    pub gravity: Vector,
    /// Buffer capacities.
    pub capacities: Capacities,
    /// Contact solver tuning.
    pub solver: SolverParams,
    /// Contact generation tuning.
    pub narrow_phase: NarrowPhaseParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vector::new(0.0, -9.81, 0.0),
            capacities: Capacities::default(),
            solver: SolverParams::default(),
            narrow_phase: NarrowPhaseParams::default(),
        }
    }
}

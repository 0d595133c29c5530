use crate::dynamics::{
    body_state, integrate_forces, integrate_positions, BodyHandle, BodySet, BodyKind,
    VelocitySolver,
};
use crate::math::{Real, Vector};
use crate::pipeline::{
    BodyDesc, ExecutionStrategy, Frame, FrameBuffers, PipelineError, Resource,
    SequentialExecution, WorldConfig,
};
use crate::shape::{Collider, MassProperties};

/// Summary of a successful tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TickReport {
    /// Candidate pairs emitted by the broad phase.
    pub pair_count: usize,
    /// Manifolds emitted by the narrow phase.
    pub manifold_count: usize,
    /// Contact points over all manifolds.
    pub contact_count: usize,
    /// Pairs for which GJK hit its iteration limit and were treated as separated.
    pub gjk_fallbacks: usize,
    /// Pairs for which EPA hit its iteration limit and used the best face found.
    pub epa_fallbacks: usize,
    /// Pairs skipped because of degenerate geometry.
    pub degenerate_skips: usize,
}

/// A set of bodies simulated together.
///
/// A call to [`World::step`] is transactional: the body state is only
/// replaced once every phase of the tick succeeded. After a failed tick,
/// [`World::bodies`] and [`World::debug_frame`] are exactly what they were
/// after the last successful one.
pub struct World {
    config: WorldConfig,
    bodies: BodySet,
    scratch: BodySet,
    colliders: Vec<Collider>,
    fixed: Vec<bool>,
    strategy: Box<dyn ExecutionStrategy>,
    frames: FrameBuffers,
    solver: VelocitySolver,
    tick: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    /// Creates an empty world running every phase on the calling thread.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_strategy(config, SequentialExecution::new())
    }

    /// Creates an empty world running the collision phases with `strategy`.
    pub fn with_strategy(config: WorldConfig, strategy: impl ExecutionStrategy + 'static) -> Self {
        let max_bodies = config.capacities.max_bodies;
        Self {
            frames: FrameBuffers::new(&config.capacities),
            config,
            bodies: BodySet::new(),
            scratch: BodySet::new(),
            colliders: Vec::with_capacity(max_bodies),
            fixed: Vec::with_capacity(max_bodies),
            strategy: Box::new(strategy),
            solver: VelocitySolver::new(),
            tick: 0,
        }
    }

    /// The configuration this world was created with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Changes the gravity applied from the next tick on.
    pub fn set_gravity(&mut self, gravity: Vector) {
        self.config.gravity = gravity;
    }

    /// Adds a body and returns its handle.
    ///
    /// Fails with `CapacityExceeded` when the world already holds
    /// `max_bodies` bodies, and with `InvalidBody` when `desc` is rejected by
    /// [`BodyDesc::validate`]. The world is unchanged on failure.
    pub fn add_body(&mut self, desc: BodyDesc) -> Result<BodyHandle, PipelineError> {
        let max_bodies = self.config.capacities.max_bodies;
        if self.bodies.len() >= max_bodies {
            log::warn!("cannot add a body: the world already holds {max_bodies} bodies.");
            return Err(PipelineError::capacity(Resource::Bodies, max_bodies));
        }

        desc.validate()?;

        let (linvel, angvel) = if desc.kind == BodyKind::Static {
            (Vector::zeros(), Vector::zeros())
        } else {
            (desc.linvel, desc.angvel)
        };
        let props = MassProperties::from_shape(desc.mass, &desc.shape);
        let (linear, angular) = body_state(
            desc.kind,
            &props,
            desc.position,
            desc.orientation,
            linvel,
            angvel,
        );

        let handle = self.bodies.push(desc.kind, linear, angular, desc.friction);
        let position = self.bodies.isometry(handle.index());
        self.colliders.push(Collider::new(desc.shape, &position));
        self.fixed.push(!desc.kind.is_dynamic());

        Ok(handle)
    }

    /// Removes every body, empties the debug frames and forgets the
    /// accumulated contact impulses.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.scratch.clear();
        self.colliders.clear();
        self.fixed.clear();
        self.frames.clear();
        self.solver.reset();
        self.tick = 0;
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Runs, in order: the collider refresh, the broad phase, the narrow
    /// phase, gravity, the contact solver and the position integration. The
    /// new body state and the new debug frame are only published if all of
    /// them succeed.
    pub fn step(&mut self, dt: Real) -> Result<TickReport, PipelineError> {
        for (i, collider) in self.colliders.iter_mut().enumerate() {
            collider.update(&self.bodies.isometry(i));
        }

        match self.run_tick(dt) {
            Ok(report) => {
                core::mem::swap(&mut self.bodies, &mut self.scratch);
                self.frames.swap();
                self.tick += 1;

                log::trace!(
                    "tick {}: {} pairs, {} manifolds, {} contacts",
                    self.tick,
                    report.pair_count,
                    report.manifold_count,
                    report.contact_count
                );

                Ok(report)
            }
            Err(err) => {
                log::warn!("tick {} rejected: {err}", self.tick + 1);
                Err(err)
            }
        }
    }

    /// Every phase of a tick, writing only into the back frame and the scratch body set.
    fn run_tick(&mut self, dt: Real) -> Result<TickReport, PipelineError> {
        let frame = self.frames.back_mut();
        let params = &self.config.narrow_phase;

        self.strategy.broad_phase(
            &self.colliders,
            &self.fixed,
            params.contact_tolerance,
            &mut frame.pairs,
        )?;
        let diagnostics =
            self.strategy
                .narrow_phase(&frame.pairs, &self.colliders, params, &mut frame.manifolds)?;

        if diagnostics.gjk_fallbacks + diagnostics.epa_fallbacks + diagnostics.degenerate_skips > 0
        {
            log::debug!("tick {}: {:?}", self.tick + 1, diagnostics);
        }

        self.scratch.clone_from(&self.bodies);
        integrate_forces(&mut self.scratch, &self.config.gravity, dt);
        self.solver
            .solve(&mut self.scratch, &frame.manifolds, &self.config.solver, dt)?;
        integrate_positions(&mut self.scratch, dt);

        Ok(TickReport {
            pair_count: frame.pairs.len(),
            manifold_count: frame.manifolds.len(),
            contact_count: frame.manifolds.contact_count(),
            gjk_fallbacks: diagnostics.gjk_fallbacks,
            epa_fallbacks: diagnostics.epa_fallbacks,
            degenerate_skips: diagnostics.degenerate_skips,
        })
    }

    /// The committed state of every body.
    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    /// The number of bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// The colliders, by body slot, as of the last tick (or of their creation).
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// The number of colliders; one per body.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// The pairs and manifolds of the last successful tick.
    ///
    /// Stays valid, and unchanged, until the next successful tick.
    pub fn debug_frame(&self) -> &Frame {
        self.frames.front()
    }

    /// The number of successful ticks since creation or the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

use crate::dynamics::solver::contact_constraint::{ContactConstraint, SolverBody};
use crate::dynamics::solver::impulse_cache::ImpulseCache;
use crate::dynamics::BodySet;
use crate::math::{AngularInertia, Real};
use crate::pipeline::PipelineError;
use crate::query::ContactManifold;

/// Tuning of the contact solver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SolverParams {
    /// Number of passes over all the contacts per tick.
    pub iterations: usize,
    /// Baumgarte factor β: the fraction of the penetration beyond `slop`
    /// corrected per second, divided by the time step.
    pub baumgarte: Real,
    /// Penetration depth tolerated without position correction.
    pub slop: Real,
    /// Upper bound of the position-correction velocity.
    pub max_bias_velocity: Real,
    /// Fraction of last tick's accumulated impulses applied before the first
    /// pass. Zero disables warm starting.
    pub warm_start_coefficient: Real,
    /// Maximum distance, on the reference body, between a contact and the
    /// last tick's contact it inherits impulses from.
    pub warm_start_distance: Real,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            iterations: 8,
            baumgarte: 0.2,
            slop: 0.005,
            max_bias_velocity: 4.0,
            warm_start_coefficient: 1.0,
            warm_start_distance: 0.02,
        }
    }
}

/// Sequential-impulse velocity solver.
///
/// Every contact of every manifold is solved in turn, each one reading the
/// velocities left by the previous ones, so all the contacts touching a given
/// body are serialized. Passes alternate between the manifold order and its
/// reverse.
///
/// The impulses accumulated by a solve are kept and warm start the contacts
/// of the same pair on the next solve. They are only replaced by a successful
/// solve.
#[derive(Default)]
pub struct VelocitySolver {
    bodies: Vec<SolverBody>,
    constraints: Vec<ContactConstraint>,
    cache: ImpulseCache,
}

impl VelocitySolver {
    /// Creates a solver with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the impulses accumulated by previous solves.
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Solves the contact constraints of `manifolds` and writes the resulting
    /// velocities of the dynamic bodies into `bodies`.
    ///
    /// Fails with `InvalidReference`, before touching `bodies`, if a manifold
    /// references an unoccupied body slot.
    pub fn solve(
        &mut self,
        bodies: &mut BodySet,
        manifolds: &[ContactManifold],
        params: &SolverParams,
        dt: Real,
    ) -> Result<(), PipelineError> {
        for manifold in manifolds {
            PipelineError::check_reference(manifold.reference, bodies.len())?;
            PipelineError::check_reference(manifold.incident, bodies.len())?;
        }

        self.init_bodies(bodies);
        self.constraints.clear();

        for manifold in manifolds {
            let friction =
                (bodies.friction[manifold.reference] * bodies.friction[manifold.incident]).sqrt();
            let mut constraint =
                ContactConstraint::new(manifold, &self.bodies, friction, params, dt);

            if params.warm_start_coefficient > 0.0 {
                if let Some(cached) = self.cache.get(&constraint.pair()) {
                    constraint.warm_start(cached, params, &mut self.bodies);
                }
            }

            self.constraints.push(constraint);
        }

        for pass in 0..params.iterations {
            if pass % 2 == 0 {
                for constraint in &mut self.constraints {
                    constraint.solve(&mut self.bodies);
                }
            } else {
                for constraint in self.constraints.iter_mut().rev() {
                    constraint.solve(&mut self.bodies);
                }
            }
        }

        let warm_started = self.cache.len();
        self.cache.store(&self.constraints);

        log::trace!(
            "solver: {} constraints, {} manifolds cached from last tick, total normal impulse {}",
            self.constraints.len(),
            warm_started,
            self.constraints
                .iter()
                .map(|c| c.total_normal_impulse())
                .sum::<Real>()
        );

        self.writeback(bodies);
        Ok(())
    }

    fn init_bodies(&mut self, bodies: &BodySet) {
        self.bodies.clear();

        for ((kind, linear), angular) in bodies
            .kinds
            .iter()
            .zip(bodies.linear.iter())
            .zip(bodies.angular.iter())
        {
            let (inv_mass, inv_inertia) = if kind.is_dynamic() {
                (linear.inv_mass, angular.world_inv_inertia())
            } else {
                (0.0, AngularInertia::zeros())
            };

            self.bodies.push(SolverBody {
                center: linear.position,
                orientation: angular.orientation,
                linvel: linear.velocity,
                angvel: angular.angular_velocity,
                inv_mass,
                inv_inertia,
            });
        }
    }

    fn writeback(&self, bodies: &mut BodySet) {
        for (i, solver_body) in self.bodies.iter().enumerate() {
            // Non-dynamic bodies are left untouched.
            if bodies.kinds[i].is_dynamic() {
                bodies.linear[i].velocity = solver_body.linvel;
                bodies.angular[i].angular_velocity = solver_body.angvel;
            }
        }
    }
}

use crate::broad_phase::CollisionPair;
use crate::dynamics::solver::impulse_cache::{CachedImpulse, CachedManifold};
use crate::dynamics::solver::SolverParams;
use crate::math::{AngularInertia, Point, Real, Rotation, Vector};
use crate::query::{ContactManifold, MAX_MANIFOLD_POINTS};
use crate::utils;
use arrayvec::ArrayVec;

/// The velocities and inverse masses of a body, as seen by the solver.
///
/// Static and kinematic bodies have zero inverse mass and inertia, so
/// impulses never change their velocities.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SolverBody {
    pub center: Point,
    pub orientation: Rotation,
    pub linvel: Vector,
    pub angvel: Vector,
    pub inv_mass: Real,
    pub inv_inertia: AngularInertia,
}

impl SolverBody {
    #[inline]
    fn velocity_at(&self, r: &Vector) -> Vector {
        self.linvel + self.angvel.cross(r)
    }

    #[inline]
    fn apply_impulse(&mut self, impulse: &Vector, r: &Vector) {
        self.linvel += impulse * self.inv_mass;
        self.angvel += self.inv_inertia * r.cross(impulse);
    }

    /// The inverse effective mass of this body at `r` along `dir`.
    #[inline]
    fn inv_effective_mass(&self, r: &Vector, dir: &Vector) -> Real {
        let rn = r.cross(dir);
        self.inv_mass + rn.dot(&(self.inv_inertia * rn))
    }
}

#[derive(Copy, Clone, Debug)]
struct ContactConstraintPoint {
    /// `r_ref` in the reference body frame.
    local_anchor: Vector,
    r_ref: Vector,
    r_inc: Vector,
    normal_mass: Real,
    tangent_mass: [Real; 2],
    /// Minimum relative normal velocity the contact must reach.
    target_velocity: Real,
    normal_impulse: Real,
    tangent_impulses: [Real; 2],
}

/// The velocity constraint of one contact manifold.
#[derive(Clone, Debug)]
pub(crate) struct ContactConstraint {
    reference: usize,
    incident: usize,
    normal: Vector,
    tangents: [Vector; 2],
    friction: Real,
    points: ArrayVec<ContactConstraintPoint, MAX_MANIFOLD_POINTS>,
}

impl ContactConstraint {
    /// Cached impulses are dropped when the contact normal turns by more than this angle, in radians.
    pub const MAX_WARM_START_NORMAL_ANGLE: Real = 0.3;

    /// Precomputes the effective masses and velocity targets of `manifold`.
    ///
    /// The manifold indices must be valid indices into `bodies`.
    pub fn new(
        manifold: &ContactManifold,
        bodies: &[SolverBody],
        friction: Real,
        params: &SolverParams,
        dt: Real,
    ) -> Self {
        let ref_body = &bodies[manifold.reference];
        let inc_body = &bodies[manifold.incident];
        let normal = manifold.normal.into_inner();
        let tangents = utils::orthonormal_basis(&normal);
        let inv_dt = utils::inv(dt);

        let points = manifold
            .points
            .iter()
            .map(|contact| {
                let r_ref = contact.point - ref_body.center;
                let r_inc = contact.point - inc_body.center;
                let effective_mass = |dir: &Vector| {
                    utils::inv(
                        ref_body.inv_effective_mass(&r_ref, dir)
                            + inc_body.inv_effective_mass(&r_inc, dir),
                    )
                };

                let target_velocity = if contact.depth > params.slop {
                    (params.baumgarte * inv_dt * (contact.depth - params.slop))
                        .min(params.max_bias_velocity)
                } else if contact.depth < 0.0 {
                    // Speculative contact: the bodies may still close the gap this step.
                    contact.depth * inv_dt
                } else {
                    0.0
                };

                ContactConstraintPoint {
                    local_anchor: ref_body.orientation.inverse_transform_vector(&r_ref),
                    r_ref,
                    r_inc,
                    normal_mass: effective_mass(&normal),
                    tangent_mass: [effective_mass(&tangents[0]), effective_mass(&tangents[1])],
                    target_velocity,
                    normal_impulse: 0.0,
                    tangent_impulses: [0.0; 2],
                }
            })
            .collect();

        ContactConstraint {
            reference: manifold.reference,
            incident: manifold.incident,
            normal,
            tangents,
            friction,
            points,
        }
    }

    /// Applies the impulses accumulated on the matching contacts of `cached`
    /// and starts accumulating from them.
    ///
    /// A contact matches the closest cached contact whose anchor on the
    /// reference body lies within `params.warm_start_distance`; each cached
    /// contact is matched at most once. Nothing is reused if the reference
    /// body changed or the normal turned by more than
    /// [`MAX_WARM_START_NORMAL_ANGLE`](Self::MAX_WARM_START_NORMAL_ANGLE).
    pub fn warm_start(
        &mut self,
        cached: &CachedManifold,
        params: &SolverParams,
        bodies: &mut [SolverBody],
    ) {
        if cached.reference != self.reference
            || cached.normal.dot(&self.normal) < Self::MAX_WARM_START_NORMAL_ANGLE.cos()
        {
            return;
        }

        let mut ref_body = bodies[self.reference];
        let mut inc_body = bodies[self.incident];
        let max_dist2 = params.warm_start_distance * params.warm_start_distance;
        let mut taken = [false; MAX_MANIFOLD_POINTS];

        for pt in &mut self.points {
            let mut best = None;
            let mut best_dist2 = max_dist2;

            for (i, candidate) in cached.points.iter().enumerate() {
                let dist2 = (candidate.local_anchor - pt.local_anchor).norm_squared();
                if !taken[i] && dist2 <= best_dist2 {
                    best = Some(i);
                    best_dist2 = dist2;
                }
            }

            let Some(i) = best else {
                continue;
            };
            taken[i] = true;

            let candidate = &cached.points[i];
            pt.normal_impulse = candidate.normal_impulse * params.warm_start_coefficient;
            let max_friction = self.friction * pt.normal_impulse;

            for k in 0..2 {
                pt.tangent_impulses[k] = (candidate.tangent_impulse.dot(&self.tangents[k])
                    * params.warm_start_coefficient)
                    .clamp(-max_friction, max_friction);
            }

            let impulse = self.normal * pt.normal_impulse
                + self.tangents[0] * pt.tangent_impulses[0]
                + self.tangents[1] * pt.tangent_impulses[1];
            ref_body.apply_impulse(&impulse, &pt.r_ref);
            inc_body.apply_impulse(&-impulse, &pt.r_inc);
        }

        bodies[self.reference] = ref_body;
        bodies[self.incident] = inc_body;
    }

    /// Applies one pass of sequential impulses over the contact points.
    ///
    /// The normal impulse accumulated at each point is kept non-negative, and
    /// the friction impulses within the Coulomb cone `friction * normal_impulse`.
    pub fn solve(&mut self, bodies: &mut [SolverBody]) {
        let mut ref_body = bodies[self.reference];
        let mut inc_body = bodies[self.incident];

        for pt in &mut self.points {
            /*
             * Normal.
             */
            let dvel = ref_body.velocity_at(&pt.r_ref) - inc_body.velocity_at(&pt.r_inc);
            let vn = dvel.dot(&self.normal);
            let new_impulse =
                (pt.normal_impulse + pt.normal_mass * (pt.target_velocity - vn)).max(0.0);
            let dlambda = new_impulse - pt.normal_impulse;
            pt.normal_impulse = new_impulse;

            let impulse = self.normal * dlambda;
            ref_body.apply_impulse(&impulse, &pt.r_ref);
            inc_body.apply_impulse(&-impulse, &pt.r_inc);

            /*
             * Friction.
             */
            let max_friction = self.friction * pt.normal_impulse;

            for k in 0..2 {
                let tangent = &self.tangents[k];
                let dvel = ref_body.velocity_at(&pt.r_ref) - inc_body.velocity_at(&pt.r_inc);
                let vt = dvel.dot(tangent);
                let new_impulse = (pt.tangent_impulses[k] - pt.tangent_mass[k] * vt)
                    .clamp(-max_friction, max_friction);
                let dlambda = new_impulse - pt.tangent_impulses[k];
                pt.tangent_impulses[k] = new_impulse;

                let impulse = tangent * dlambda;
                ref_body.apply_impulse(&impulse, &pt.r_ref);
                inc_body.apply_impulse(&-impulse, &pt.r_inc);
            }
        }

        bodies[self.reference] = ref_body;
        bodies[self.incident] = inc_body;
    }

    /// The impulses accumulated so far, to warm start the next tick.
    pub fn cached_impulses(&self) -> CachedManifold {
        CachedManifold {
            pair: self.pair(),
            reference: self.reference,
            normal: self.normal,
            points: self
                .points
                .iter()
                .map(|pt| CachedImpulse {
                    local_anchor: pt.local_anchor,
                    normal_impulse: pt.normal_impulse,
                    tangent_impulse: self.tangents[0] * pt.tangent_impulses[0]
                        + self.tangents[1] * pt.tangent_impulses[1],
                })
                .collect(),
        }
    }

    #[inline]
    pub fn pair(&self) -> CollisionPair {
        CollisionPair::new(self.reference, self.incident)
    }

    /// The sum of the normal impulses applied so far.
    pub fn total_normal_impulse(&self) -> Real {
        self.points.iter().map(|pt| pt.normal_impulse).sum()
    }
}

use crate::dynamics::{AngularTransform, BodyHandle, BodyKind, LinearTransform};
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};

/// The kinematic state of every body, stored as parallel arrays indexed by
/// body slot.
///
/// Slots are appended only. The world keeps a committed set and a scratch set
/// of the same length; a tick writes into the scratch set and the two are
/// swapped once the tick succeeds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodySet {
    pub(crate) kinds: Vec<BodyKind>,
    pub(crate) linear: Vec<LinearTransform>,
    pub(crate) angular: Vec<AngularTransform>,
    pub(crate) friction: Vec<Real>,
}

impl BodySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub(crate) fn push(
        &mut self,
        kind: BodyKind,
        linear: LinearTransform,
        angular: AngularTransform,
        friction: Real,
    ) -> BodyHandle {
        let handle = BodyHandle(self.kinds.len() as u32);
        self.kinds.push(kind);
        self.linear.push(linear);
        self.angular.push(angular);
        self.friction.push(friction);
        handle
    }

    pub(crate) fn clear(&mut self) {
        self.kinds.clear();
        self.linear.clear();
        self.angular.clear();
        self.friction.clear();
    }

    /// Whether `handle` refers to an occupied slot.
    #[inline]
    pub fn contains(&self, handle: BodyHandle) -> bool {
        handle.index() < self.len()
    }

    /// The kind of each body, by slot.
    #[inline]
    pub fn kinds(&self) -> &[BodyKind] {
        &self.kinds
    }

    /// The translational state of each body, by slot.
    #[inline]
    pub fn linear_transforms(&self) -> &[LinearTransform] {
        &self.linear
    }

    /// The rotational state of each body, by slot.
    #[inline]
    pub fn angular_transforms(&self) -> &[AngularTransform] {
        &self.angular
    }

    /// The friction coefficient of each body, by slot.
    #[inline]
    pub fn frictions(&self) -> &[Real] {
        &self.friction
    }

    /// The kind of the body `handle`.
    ///
    /// # Panics
    /// If `handle` does not refer to an occupied slot.
    #[inline]
    pub fn kind(&self, handle: BodyHandle) -> BodyKind {
        self.kinds[handle.index()]
    }

    /// The position of the body `handle`.
    ///
    /// # Panics
    /// If `handle` does not refer to an occupied slot.
    #[inline]
    pub fn position(&self, handle: BodyHandle) -> Point {
        self.linear[handle.index()].position
    }

    /// The orientation of the body `handle`.
    ///
    /// # Panics
    /// If `handle` does not refer to an occupied slot.
    #[inline]
    pub fn orientation(&self, handle: BodyHandle) -> Rotation {
        self.angular[handle.index()].orientation
    }

    /// The linear velocity of the body `handle`.
    ///
    /// # Panics
    /// If `handle` does not refer to an occupied slot.
    #[inline]
    pub fn velocity(&self, handle: BodyHandle) -> Vector {
        self.linear[handle.index()].velocity
    }

    /// The angular velocity of the body `handle`.
    ///
    /// # Panics
    /// If `handle` does not refer to an occupied slot.
    #[inline]
    pub fn angular_velocity(&self, handle: BodyHandle) -> Vector {
        self.angular[handle.index()].angular_velocity
    }

    /// The rigid transform of the body in slot `index`.
    #[inline]
    pub fn isometry(&self, index: usize) -> Isometry {
        Isometry::from_parts(
            Translation::from(self.linear[index].position.coords),
            self.angular[index].orientation,
        )
    }
}

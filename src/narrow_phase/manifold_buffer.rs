use crate::pipeline::{PipelineError, Resource};
use crate::query::ContactManifold;
use crate::utils::BoundedBuffer;
use core::ops::Deref;

/// The per-tick manifold list written by the narrow phase.
///
/// Two capacities are enforced: the number of manifolds, and the total number
/// of contact points over all manifolds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ManifoldBuffer {
    manifolds: BoundedBuffer<ContactManifold>,
    contact_count: usize,
    max_contacts: usize,
}

impl ManifoldBuffer {
    /// Creates an empty buffer.
    pub fn with_capacity(max_manifolds: usize, max_contacts: usize) -> Self {
        Self {
            manifolds: BoundedBuffer::with_capacity(max_manifolds),
            contact_count: 0,
            max_contacts,
        }
    }

    /// Removes every manifold, keeping the allocation.
    pub fn clear(&mut self) {
        self.manifolds.clear();
        self.contact_count = 0;
    }

    /// Appends `manifold`, failing without modifying the buffer if either
    /// capacity would be exceeded.
    pub fn try_push(&mut self, manifold: ContactManifold) -> Result<(), PipelineError> {
        let contact_count = self.contact_count + manifold.points.len();

        if contact_count > self.max_contacts {
            return Err(PipelineError::capacity(Resource::Contacts, self.max_contacts));
        }

        self.manifolds
            .try_push(manifold)
            .map_err(|e| PipelineError::capacity(Resource::Manifolds, e.capacity))?;
        self.contact_count = contact_count;
        Ok(())
    }

    /// The total number of contact points over all manifolds.
    #[inline]
    pub fn contact_count(&self) -> usize {
        self.contact_count
    }

    /// The maximum number of manifolds.
    #[inline]
    pub fn max_manifolds(&self) -> usize {
        self.manifolds.capacity()
    }

    /// The maximum total number of contact points.
    #[inline]
    pub fn max_contacts(&self) -> usize {
        self.max_contacts
    }

    /// The stored manifolds.
    #[inline]
    pub fn as_slice(&self) -> &[ContactManifold] {
        self.manifolds.as_slice()
    }
}

impl Deref for ManifoldBuffer {
    type Target = [ContactManifold];

    #[inline]
    fn deref(&self) -> &[ContactManifold] {
        self.manifolds.as_slice()
    }
}

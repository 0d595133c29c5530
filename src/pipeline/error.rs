use core::fmt;

/// A bounded resource of the simulation pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Resource {
    /// The body slots of the world.
    Bodies,
    /// The pair buffer written by the broad phase.
    Pairs,
    /// The manifold buffer written by the narrow phase.
    Manifolds,
    /// The total number of contact points over all manifolds of a tick.
    Contacts,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Bodies => "bodies",
            Resource::Pairs => "collision pairs",
            Resource::Manifolds => "contact manifolds",
            Resource::Contacts => "contact points",
        };
        f.write_str(name)
    }
}

/// Fatal errors of the simulation pipeline.
///
/// A tick failing with any of these errors leaves the body transforms and the
/// front debug frame exactly as they were after the previous tick.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// A fixed-capacity resource overflowed.
    #[error("the capacity of {capacity} {resource} was exceeded.")]
    CapacityExceeded {
        /// The resource that overflowed.
        resource: Resource,
        /// Its configured capacity.
        capacity: usize,
    },
    /// A pair or a manifold references a body slot that is not occupied.
    #[error("body index {index} is out of bounds ({body_count} bodies).")]
    InvalidReference {
        /// The invalid body index.
        index: usize,
        /// The number of occupied body slots.
        body_count: usize,
    },
    /// A body description was rejected.
    #[error("invalid body: {0}.")]
    InvalidBody(&'static str),
}

impl PipelineError {
    /// Builds a `CapacityExceeded` error for `resource`.
    pub fn capacity(resource: Resource, capacity: usize) -> Self {
        PipelineError::CapacityExceeded { resource, capacity }
    }

    /// Checks that `index` refers to one of the `body_count` occupied body slots.
    pub fn check_reference(index: usize, body_count: usize) -> Result<(), Self> {
        if index < body_count {
            Ok(())
        } else {
            Err(PipelineError::InvalidReference { index, body_count })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            PipelineError::capacity(Resource::Pairs, 8).to_string(),
            "the capacity of 8 collision pairs was exceeded."
        );
        assert_eq!(
            PipelineError::check_reference(3, 3),
            Err(PipelineError::InvalidReference {
                index: 3,
                body_count: 3
            })
        );
        assert!(PipelineError::check_reference(2, 3).is_ok());
    }
}

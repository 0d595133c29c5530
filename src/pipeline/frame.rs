use crate::broad_phase::PairBuffer;
use crate::narrow_phase::ManifoldBuffer;
use crate::pipeline::Capacities;

/// The collision data produced by one tick: the broad phase pairs and the
/// narrow phase manifolds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Candidate pairs, sorted by body indices.
    pub pairs: PairBuffer,
    /// Contact manifolds, in pair order.
    pub manifolds: ManifoldBuffer,
}

impl Frame {
    /// An empty frame with the given capacities.
    pub fn with_capacities(capacities: &Capacities) -> Self {
        Self {
            pairs: PairBuffer::with_capacity(capacities.max_pairs),
            manifolds: ManifoldBuffer::with_capacity(
                capacities.max_manifolds,
                capacities.max_contacts,
            ),
        }
    }

    /// Empties both buffers.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.manifolds.clear();
    }
}

/// A front frame readable between ticks and a back frame written during a tick.
#[derive(Clone, Debug)]
pub(crate) struct FrameBuffers {
    frames: [Frame; 2],
    front: usize,
}

impl FrameBuffers {
    pub fn new(capacities: &Capacities) -> Self {
        Self {
            frames: [
                Frame::with_capacities(capacities),
                Frame::with_capacities(capacities),
            ],
            front: 0,
        }
    }

    pub fn front(&self) -> &Frame {
        &self.frames[self.front]
    }

    pub fn back_mut(&mut self) -> &mut Frame {
        &mut self.frames[1 - self.front]
    }

    /// Publishes the back frame.
    pub fn swap(&mut self) {
        self.front = 1 - self.front;
    }

    pub fn clear(&mut self) {
        self.frames[0].clear();
        self.frames[1].clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broad_phase::CollisionPair;

    #[test]
    fn back_frame_is_published_on_swap() {
        let mut frames = FrameBuffers::new(&Capacities::with_max_bodies(4));
        frames
            .back_mut()
            .pairs
            .try_push(CollisionPair::new(0, 1))
            .unwrap();
        assert!(frames.front().pairs.is_empty());

        frames.swap();
        assert_eq!(frames.front().pairs.as_slice(), &[CollisionPair::new(0, 1)]);

        frames.back_mut().clear();
        assert_eq!(frames.front().pairs.len(), 1);
    }
}

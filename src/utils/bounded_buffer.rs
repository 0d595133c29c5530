use core::ops::Deref;

/// Error returned when pushing into a full [`BoundedBuffer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("buffer capacity of {capacity} elements exceeded")]
pub struct BufferFull {
    /// The capacity that was exceeded.
    pub capacity: usize,
}

/// An append-only buffer with a hard capacity fixed at construction.
///
/// The buffer is cleared before each write phase and never grows past its
/// capacity: a push that would overflow is rejected instead of truncated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundedBuffer<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The maximum number of elements this buffer accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resets the element count to zero, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Appends `value`, failing if the buffer is already full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), BufferFull> {
        if self.data.len() >= self.capacity {
            return Err(BufferFull {
                capacity: self.capacity,
            });
        }

        self.data.push(value);
        Ok(())
    }

    /// Appends every element of `values`, stopping at the first overflow.
    pub fn try_extend(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), BufferFull> {
        for value in values {
            self.try_push(value)?;
        }
        Ok(())
    }

    /// The stored elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Deref for BoundedBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

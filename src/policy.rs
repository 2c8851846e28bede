use thiserror::Error;

/// Capacity of a freshly constructed `ArrayDeque`.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Smallest buffer capacity an `ArrayDeque` will shrink from.
pub const DEFAULT_SHRINK_FLOOR: usize = 16;

/// Rejected `ResizePolicy` settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("initial capacity must be at least 1")]
    ZeroInitialCapacity,
    #[error("shrink floor {floor} is below the minimum of 2")]
    ShrinkFloorTooSmall { floor: usize },
}

/// Controls how an `ArrayDeque` sizes its buffer.
///
/// The buffer starts at `initial_capacity` slots and doubles whenever
/// an insertion fills it. After a removal, if fewer than a quarter of
/// the slots are occupied and the buffer holds at least
/// `shrink_floor` slots, it is halved.
///
/// The floor keeps small deques from reallocating back and forth. A
/// floor of 2 shrinks whenever occupancy drops below a quarter.
///
/// # Examples
///
/// ```
/// use dual_deque::{ArrayDeque, PolicyError, ResizePolicy};
///
/// let policy = ResizePolicy::default().with_shrink_floor(64);
/// let d: ArrayDeque<u8> = ArrayDeque::with_policy(policy).unwrap();
/// assert_eq!(8, d.capacity());
///
/// let bad = ResizePolicy::new(0, 16);
/// assert_eq!(Err(PolicyError::ZeroInitialCapacity), bad.validate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePolicy {
    initial_capacity: usize,
    shrink_floor: usize,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy::new(DEFAULT_INITIAL_CAPACITY, DEFAULT_SHRINK_FLOOR)
    }
}

impl ResizePolicy {
    /// Create a policy. Nothing is checked until
    /// [`validate`](#method.validate) is called.
    pub fn new(initial_capacity: usize, shrink_floor: usize) -> ResizePolicy {
        ResizePolicy {
            initial_capacity,
            shrink_floor,
        }
    }

    /// Replace the initial capacity, keeping the shrink floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ResizePolicy;
    ///
    /// let p = ResizePolicy::default().with_initial_capacity(32);
    /// assert_eq!(32, p.initial_capacity());
    /// assert_eq!(16, p.shrink_floor());
    /// ```
    pub fn with_initial_capacity(self, initial_capacity: usize) -> ResizePolicy {
        ResizePolicy {
            initial_capacity,
            ..self
        }
    }

    /// Replace the shrink floor, keeping the initial capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ResizePolicy;
    ///
    /// let p = ResizePolicy::default().with_shrink_floor(2);
    /// assert_eq!(8, p.initial_capacity());
    /// assert_eq!(2, p.shrink_floor());
    /// ```
    pub fn with_shrink_floor(self, shrink_floor: usize) -> ResizePolicy {
        ResizePolicy {
            shrink_floor,
            ..self
        }
    }

    /// The number of slots a new deque starts with.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ResizePolicy;
    ///
    /// assert_eq!(8, ResizePolicy::default().initial_capacity());
    /// ```
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// The smallest capacity a deque will halve from.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ResizePolicy;
    ///
    /// assert_eq!(16, ResizePolicy::default().shrink_floor());
    /// ```
    pub fn shrink_floor(&self) -> usize {
        self.shrink_floor
    }

    /// Check that the policy never leaves a deque with a zero-length
    /// buffer.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if 0 == self.initial_capacity {
            return Err(PolicyError::ZeroInitialCapacity);
        }
        if self.shrink_floor < 2 {
            return Err(PolicyError::ShrinkFloorTooSmall {
                floor: self.shrink_floor,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let p = ResizePolicy::default();
        assert_eq!(DEFAULT_INITIAL_CAPACITY, p.initial_capacity());
        assert_eq!(DEFAULT_SHRINK_FLOOR, p.shrink_floor());
        assert_eq!(Ok(()), p.validate());
    }

    #[test]
    fn builders_replace_one_field() {
        let p = ResizePolicy::default().with_initial_capacity(4);
        assert_eq!(4, p.initial_capacity());
        assert_eq!(DEFAULT_SHRINK_FLOOR, p.shrink_floor());

        let p = p.with_shrink_floor(2);
        assert_eq!(4, p.initial_capacity());
        assert_eq!(2, p.shrink_floor());
    }

    #[test]
    fn rejects_zero_capacity_and_tiny_floor() {
        assert_eq!(
            Err(PolicyError::ZeroInitialCapacity),
            ResizePolicy::new(0, 16).validate()
        );
        assert_eq!(
            Err(PolicyError::ShrinkFloorTooSmall { floor: 1 }),
            ResizePolicy::new(8, 1).validate()
        );
        assert_eq!(Ok(()), ResizePolicy::new(1, 2).validate());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "shrink floor 0 is below the minimum of 2",
            PolicyError::ShrinkFloorTooSmall { floor: 0 }.to_string()
        );
        assert_eq!(
            "initial capacity must be at least 1",
            PolicyError::ZeroInitialCapacity.to_string()
        );
    }
}

use crate::deque::Deque;
use crate::policy::{PolicyError, ResizePolicy};
use std::fmt;
use std::iter::FromIterator;
use tracing::trace;

/// A deque stored in a circular buffer.
///
/// `front` and `rear` index the first and last occupied slots and wrap
/// around the end of the buffer. The buffer doubles as soon as an
/// insertion fills it, so there is always at least one vacant slot
/// between calls. It halves after a removal that leaves it less than a
/// quarter full, provided it is at least as large as the policy's
/// shrink floor.
#[derive(Clone)]
pub struct ArrayDeque<T> {
    // The backing slots. `None` marks a vacant slot.
    buffer: Vec<Option<T>>,
    // The index of the front item. Equal to `rear` when empty.
    front: usize,
    // The index of the rear item. Equal to `front` when empty.
    rear: usize,
    // The number of occupied slots.
    len: usize,
    policy: ResizePolicy,
}

fn vacant<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> fmt::Debug for ArrayDeque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.walk()).finish()
    }
}

/// Items front to back, separated by single spaces.
impl<T> fmt::Display for ArrayDeque<T>
where
    T: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, item) in self.walk().enumerate() {
            if n > 0 {
                fmt.write_str(" ")?;
            }
            write!(fmt, "{}", item)?;
        }
        Ok(())
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        ArrayDeque::new()
    }
}

impl<T> ArrayDeque<T> {
    /// Creates an empty `ArrayDeque` using the default
    /// [`ResizePolicy`]: 8 initial slots, shrinking only from 16
    /// slots or more.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let deque: ArrayDeque<u32> = ArrayDeque::new();
    /// assert_eq!(8, deque.capacity());
    /// ```
    pub fn new() -> ArrayDeque<T> {
        ArrayDeque::from_policy(ResizePolicy::default())
    }

    /// Creates an empty `ArrayDeque` that sizes its buffer according
    /// to `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::{ArrayDeque, PolicyError, ResizePolicy};
    ///
    /// let d: ArrayDeque<u8> = ArrayDeque::with_policy(ResizePolicy::new(4, 2)).unwrap();
    /// assert_eq!(4, d.capacity());
    ///
    /// let e = ArrayDeque::<u8>::with_policy(ResizePolicy::new(4, 0));
    /// assert_eq!(Some(PolicyError::ShrinkFloorTooSmall { floor: 0 }), e.err());
    /// ```
    pub fn with_policy(policy: ResizePolicy) -> Result<ArrayDeque<T>, PolicyError> {
        policy.validate()?;
        Ok(ArrayDeque::from_policy(policy))
    }

    fn from_policy(policy: ResizePolicy) -> ArrayDeque<T> {
        let capacity = policy.initial_capacity();
        ArrayDeque {
            buffer: vacant(capacity),
            // Start in the middle so early insertions at either end
            // don't wrap.
            front: capacity / 2,
            rear: capacity / 2,
            len: 0,
            policy,
        }
    }

    /// The number of slots in the backing buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// for i in 0..8 {
    ///     d.add_last(i);
    /// }
    /// assert_eq!(16, d.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The policy this deque resizes by.
    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// The number of items in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d: ArrayDeque<u8> = ArrayDeque::new();
    ///
    /// assert!(d.is_empty());
    ///
    /// d.add_first(1);
    /// assert!(!d.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// Insert `item` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_first(10);
    /// d.add_first(20);
    ///
    /// assert_eq!(Some(&20), d.get(0));
    /// assert_eq!(Some(&10), d.get(1));
    /// ```
    pub fn add_first(&mut self, item: T) {
        // The first item goes in the slot `front` and `rear` share.
        if !self.is_empty() {
            self.front = self.decrement(self.front);
        }
        debug_assert!(self.buffer[self.front].is_none());
        self.buffer[self.front] = Some(item);
        self.len += 1;
        self.grow_if_full();
    }

    /// Insert `item` at the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// assert_eq!(Some(&10), d.get(0));
    /// assert_eq!(Some(&20), d.get(1));
    /// ```
    pub fn add_last(&mut self, item: T) {
        if !self.is_empty() {
            self.rear = self.increment(self.rear);
        }
        debug_assert!(self.buffer[self.rear].is_none());
        self.buffer[self.rear] = Some(item);
        self.len += 1;
        self.grow_if_full();
    }

    /// Remove the front of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// assert_eq!(Some(10), d.remove_first());
    /// assert_eq!(Some(20), d.remove_first());
    /// assert_eq!(None, d.remove_first());
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.front].take();
        debug_assert!(item.is_some());
        self.len -= 1;
        // With one item left `front == rear`, so keeping the cursor in
        // place leaves them collapsed on the vacated slot.
        if !self.is_empty() {
            self.front = self.increment(self.front);
        }
        self.shrink_if_sparse();
        item
    }

    /// Remove the back of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_first(10);
    /// d.add_first(20);
    ///
    /// assert_eq!(Some(10), d.remove_last());
    /// assert_eq!(Some(20), d.remove_last());
    /// assert_eq!(None, d.remove_last());
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.rear].take();
        debug_assert!(item.is_some());
        self.len -= 1;
        if !self.is_empty() {
            self.rear = self.decrement(self.rear);
        }
        self.shrink_if_sparse();
        item
    }

    /// Get the item `index` positions from the front. Returns `None`
    /// if `index` is not less than `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let d: ArrayDeque<u8> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(Some(&3), d.get(2));
    /// assert_eq!(None, d.get(3));
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.physical(index)].as_ref()
    }

    /// Get a mutable reference to the item `index` positions from the
    /// front.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d: ArrayDeque<u8> = vec![1, 2, 3].into_iter().collect();
    ///
    /// d.get_mut(1).map(|i| *i += 10);
    ///
    /// assert_eq!(Some(&12), d.get(1));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let ix = self.physical(index);
        self.buffer[ix].as_mut()
    }

    /// Get the front of the deque. If the deque is empty, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// assert_eq!(None, d.front());
    ///
    /// d.add_last(10);
    /// d.add_first(20);
    /// assert_eq!(Some(&20), d.front());
    /// ```
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buffer[self.front].as_ref()
        }
    }

    /// Get the back of the deque. If the deque is empty, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// assert_eq!(None, d.back());
    ///
    /// d.add_first(10);
    /// d.add_last(20);
    /// assert_eq!(Some(&20), d.back());
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buffer[self.rear].as_ref()
        }
    }

    fn physical(&self, index: usize) -> usize {
        (self.front + index) % self.capacity()
    }

    fn increment(&self, ix: usize) -> usize {
        (ix + 1) % self.capacity()
    }

    fn decrement(&self, ix: usize) -> usize {
        if 0 == ix {
            self.capacity() - 1
        } else {
            ix - 1
        }
    }

    fn walk(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |index| self.get(index))
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.repack(self.capacity() * 2);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len * 4 < capacity && capacity >= self.policy.shrink_floor() {
            self.repack(capacity / 2);
        }
    }

    // Move every item, front to rear, into the start of a new buffer
    // of `capacity` slots.
    fn repack(&mut self, capacity: usize) {
        debug_assert!(capacity > self.len);
        trace!(
            from = self.capacity(),
            to = capacity,
            len = self.len,
            "repacking array deque"
        );

        let mut resized = vacant(capacity);

        if self.is_empty() {
            self.buffer = resized;
            self.front = 0;
            self.rear = 0;
            return;
        }

        let mut ix = self.front;
        for slot in resized.iter_mut().take(self.len) {
            *slot = self.buffer[ix].take();
            ix = self.increment(ix);
        }

        self.buffer = resized;
        self.front = 0;
        self.rear = self.len - 1;
    }
}

impl<T> Deque<T> for ArrayDeque<T> {
    fn add_first(&mut self, item: T) {
        ArrayDeque::add_first(self, item)
    }

    fn add_last(&mut self, item: T) {
        ArrayDeque::add_last(self, item)
    }

    fn remove_first(&mut self) -> Option<T> {
        ArrayDeque::remove_first(self)
    }

    fn remove_last(&mut self) -> Option<T> {
        ArrayDeque::remove_last(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        ArrayDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        ArrayDeque::get_mut(self, index)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn front(&self) -> Option<&T> {
        ArrayDeque::front(self)
    }

    fn back(&self) -> Option<&T> {
        ArrayDeque::back(self)
    }
}

/// Two deques are equal when they hold equal items in the same order,
/// whatever their capacities or cursor positions.
impl<T: PartialEq> PartialEq for ArrayDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.walk().eq(other.walk())
    }
}

impl<T: Eq> Eq for ArrayDeque<T> {}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Self::new();
        for i in iter {
            d.add_last(i);
        }
        d
    }
}

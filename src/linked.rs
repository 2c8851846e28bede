use crate::deque::Deque;
use crate::node::{Links, Node, SENTINEL};
use std::fmt;
use std::iter::FromIterator;
use tracing::trace;

/// A deque stored as a circular doubly-linked list with a sentinel.
///
/// The sentinel's `next` is the front of the deque and its `prev` is
/// the back. Nodes are held in a `Vec` and refer to their neighbours
/// by index, with the sentinel fixed at index 0.
#[derive(Clone)]
pub struct LinkedDeque<T> {
    // Index of the first node on the free list. MAX when the
    // free-list is empty.
    free_list: usize,
    // The number of nodes currently holding items.
    len_used: usize,
    // The number of nodes currently on the free list.
    len_free: usize,
    // The arena. `nodes[SENTINEL]` is always the sentinel.
    nodes: Vec<Node<T>>,
}

impl<T> fmt::Debug for LinkedDeque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.walk()).finish()
    }
}

/// Items front to back, separated by single spaces.
impl<T> fmt::Display for LinkedDeque<T>
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

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        LinkedDeque::new()
    }
}

impl<T> LinkedDeque<T> {
    /// Creates an empty `LinkedDeque` holding only its sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let deque: LinkedDeque<u32> = LinkedDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> LinkedDeque<T> {
        LinkedDeque {
            free_list: usize::MAX,
            len_used: 0,
            len_free: 0,
            nodes: vec![Node::new_sentinel()],
        }
    }

    /// Create a new `LinkedDeque` with a free list `capacity` nodes
    /// deep, so the first `capacity` insertions do not touch the
    /// allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let deque: LinkedDeque<u32> = LinkedDeque::with_capacity(16);
    /// assert_eq!(16, deque.len_freelist());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the arena cannot hold
    /// `capacity` free nodes plus the sentinel.
    pub fn with_capacity(capacity: usize) -> LinkedDeque<T> {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::new_sentinel());

        let mut next = usize::MAX;
        for ix in 1..=capacity {
            nodes.push(Node::new_free(next));
            next = ix;
        }

        LinkedDeque {
            free_list: next,
            len_used: 0,
            len_free: capacity,
            nodes,
        }
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut d: LinkedDeque<u8> = LinkedDeque::new();
    ///
    /// d.add_first(1);
    /// d.add_last(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.remove_first();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque is empty, that is, when the sentinel links
    /// to itself.
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of detached nodes waiting to be reused.
    ///
    /// Removed nodes are never returned to the allocator. Their slots
    /// stay in the arena on the free list, so the arena keeps its peak
    /// node count until the deque is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut d: LinkedDeque<u8> = LinkedDeque::new();
    ///
    /// d.add_first(1);
    /// assert_eq!(0, d.len_freelist());
    ///
    /// d.remove_first();
    /// assert_eq!(1, d.len_freelist());
    ///
    /// d.add_last(2);
    /// assert_eq!(0, d.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `item` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut l = LinkedDeque::new();
    /// l.add_first(10);
    /// l.add_first(20);
    ///
    /// assert_eq!(Some(&20), l.get(0));
    /// assert_eq!(Some(&10), l.get(1));
    /// ```
    pub fn add_first(&mut self, item: T) {
        let old_front = self.links(SENTINEL).next();
        let new_ix = self.allocate(SENTINEL, old_front, item);

        // On an empty deque the old front is the sentinel itself, so
        // this also points the sentinel's `prev` at the new node.
        self.links_mut(old_front).set_prev(new_ix);
        self.links_mut(SENTINEL).set_next(new_ix);
    }

    /// Insert `item` at the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut l = LinkedDeque::new();
    /// l.add_last(10);
    /// l.add_last(20);
    ///
    /// assert_eq!(Some(&10), l.get(0));
    /// assert_eq!(Some(&20), l.get(1));
    /// ```
    pub fn add_last(&mut self, item: T) {
        let old_back = self.links(SENTINEL).prev();
        let new_ix = self.allocate(old_back, SENTINEL, item);

        self.links_mut(old_back).set_next(new_ix);
        self.links_mut(SENTINEL).set_prev(new_ix);
    }

    /// Remove the front of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut l = LinkedDeque::new();
    /// l.add_last(10);
    /// l.add_last(20);
    ///
    /// assert_eq!(Some(10), l.remove_first());
    /// assert_eq!(Some(20), l.remove_first());
    /// assert_eq!(None, l.remove_first());
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        match self.links(SENTINEL).next() {
            SENTINEL => None,
            front => Some(self.unlink(front)),
        }
    }

    /// Remove the back of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut l = LinkedDeque::new();
    /// l.add_first(10);
    /// l.add_first(20);
    ///
    /// assert_eq!(Some(10), l.remove_last());
    /// assert_eq!(Some(20), l.remove_last());
    /// assert_eq!(None, l.remove_last());
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        match self.links(SENTINEL).prev() {
            SENTINEL => None,
            back => Some(self.unlink(back)),
        }
    }

    /// Get the item `index` positions from the front by walking
    /// forward from the sentinel. Returns `None` if `index` is not
    /// less than `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let l: LinkedDeque<u8> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(Some(&3), l.get(2));
    /// assert_eq!(None, l.get(3));
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.position(index).and_then(|ix| self.nodes[ix].item())
    }

    /// Get a mutable reference to the item `index` positions from the
    /// front.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let mut l: LinkedDeque<u8> = vec![1, 2, 3].into_iter().collect();
    ///
    /// l.get_mut(1).map(|i| *i += 10);
    ///
    /// assert_eq!(Some(&12), l.get(1));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.position(index) {
            Some(ix) => self.nodes[ix].item_mut(),
            None => None,
        }
    }

    /// Same as [`get`](#method.get), but walks the list recursively.
    /// Each step splits the remaining hops in half, so the recursion
    /// is only about `log2(index)` frames deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_deque::LinkedDeque;
    ///
    /// let l: LinkedDeque<u8> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(l.get(1), l.get_recursive(1));
    /// assert_eq!(None, l.get_recursive(3));
    /// ```
    pub fn get_recursive(&self, index: usize) -> Option<&T> {
        if index >= self.len_used {
            return None;
        }
        let ix = self.hop(self.links(SENTINEL).next(), index);
        self.nodes[ix].item()
    }

    /// The front item, read straight off the sentinel.
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.links(SENTINEL).next()].item()
    }

    /// The back item, read straight off the sentinel.
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.links(SENTINEL).prev()].item()
    }

    // Arena index `hops` nodes forward of `ix`.
    fn hop(&self, ix: usize, hops: usize) -> usize {
        match hops {
            0 => ix,
            1 => self.links(ix).next(),
            _ => {
                let half = hops / 2;
                self.hop(self.hop(ix, half), hops - half)
            }
        }
    }

    // Arena index of the node `index` hops past the sentinel.
    fn position(&self, index: usize) -> Option<usize> {
        if index >= self.len_used {
            return None;
        }
        let mut ix = self.links(SENTINEL).next();
        for _ in 0..index {
            ix = self.links(ix).next();
        }
        Some(ix)
    }

    fn walk(&self) -> impl Iterator<Item = &T> + '_ {
        let mut ix = self.links(SENTINEL).next();
        std::iter::from_fn(move || {
            if SENTINEL == ix {
                None
            } else {
                let node = &self.nodes[ix];
                ix = self.links(ix).next();
                node.item()
            }
        })
    }

    fn links(&self, ix: usize) -> &Links {
        self.nodes[ix]
            .links()
            .expect("self.nodes[ix] is expected to be linked")
    }

    fn links_mut(&mut self, ix: usize) -> &mut Links {
        self.nodes[ix]
            .links_mut()
            .expect("self.nodes[ix] is expected to be linked")
    }

    // Bypass the node at `ix`, free it, and hand back its item.
    fn unlink(&mut self, ix: usize) -> T {
        debug_assert_ne!(SENTINEL, ix);
        let (prev, item, next) = self
            .free(ix)
            .take()
            .expect("self.nodes[ix] is expected to hold an item");

        self.links_mut(prev).set_next(next);
        self.links_mut(next).set_prev(prev);

        item
    }

    fn allocate(&mut self, prev: usize, next: usize, item: T) -> usize {
        self.len_used += 1;

        let node = Node::new_data(prev, next, item);

        if usize::MAX == self.free_list {
            let before = self.nodes.capacity();
            self.nodes.push(node);
            if before != self.nodes.capacity() {
                trace!(
                    slots = self.nodes.capacity(),
                    len = self.len_used,
                    "linked deque arena grew"
                );
            }
            self.nodes.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.nodes[ix]
                .free_next()
                .expect("free list entries are expected to be free");
            self.nodes[ix] = node;
            self.len_free -= 1;
            ix
        }
    }

    // Swap a free node into `ix`, dropping its links, and push `ix`
    // on the free list.
    fn free(&mut self, ix: usize) -> Node<T> {
        debug_assert!(self.nodes[ix].item().is_some());

        self.len_used -= 1;

        let mut v = Node::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.nodes[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    fn add_first(&mut self, item: T) {
        LinkedDeque::add_first(self, item)
    }

    fn add_last(&mut self, item: T) {
        LinkedDeque::add_last(self, item)
    }

    fn remove_first(&mut self) -> Option<T> {
        LinkedDeque::remove_first(self)
    }

    fn remove_last(&mut self) -> Option<T> {
        LinkedDeque::remove_last(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        LinkedDeque::get_mut(self, index)
    }

    fn len(&self) -> usize {
        self.len_used
    }

    fn front(&self) -> Option<&T> {
        LinkedDeque::front(self)
    }

    fn back(&self) -> Option<&T> {
        LinkedDeque::back(self)
    }
}

/// Two deques are equal when they hold equal items in the same order,
/// regardless of where those items sit in the arena.
impl<T: PartialEq> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len_used == other.len_used && self.walk().eq(other.walk())
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        for i in iter {
            l.add_last(i);
        }
        l
    }
}

//! Two double-ended queues (deques) that satisfy the same contract
//! with different storage strategies.
//!
//! [`ArrayDeque`] keeps its items in a circular buffer with
//! wrap-around front and rear cursors. The buffer doubles when it
//! fills up and halves when it becomes sparse, according to a
//! [`ResizePolicy`].
//!
//! [`LinkedDeque`] keeps its items in a circular doubly-linked list
//! anchored by a sentinel node. Nodes live in a `Vec` and link to each
//! other by index. The sentinel always sits at index 0. Vacated nodes
//! are put on an internal free list and reused by later insertions
//! before the `Vec` is expanded.
//!
//! Both implement the [`Deque`] trait, so code can be written against
//! either one.
//!
//! ```
//! use dual_deque::{ArrayDeque, Deque, LinkedDeque};
//!
//! fn fill(d: &mut dyn Deque<u32>) {
//!     d.add_last(2);
//!     d.add_first(1);
//!     d.add_last(3);
//! }
//!
//! let mut a = ArrayDeque::new();
//! let mut l = LinkedDeque::new();
//! fill(&mut a);
//! fill(&mut l);
//!
//! assert_eq!(a.get(1), l.get(1));
//! assert_eq!(Some(1), a.remove_first());
//! assert_eq!(Some(3), l.remove_last());
//! ```

mod array;
mod deque;
mod linked;
mod node;
mod policy;

pub use crate::array::ArrayDeque;
pub use crate::deque::Deque;
pub use crate::linked::LinkedDeque;
pub use crate::policy::{
    PolicyError, ResizePolicy, DEFAULT_INITIAL_CAPACITY, DEFAULT_SHRINK_FLOOR,
};

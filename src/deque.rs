/// The operations shared by every deque in this crate.
///
/// Absence is always reported with `None`: removing from an empty
/// deque, or asking for an index at or past `len()`, never panics.
pub trait Deque<T> {
    /// Inserts `item` at the front.
    fn add_first(&mut self, item: T);

    /// Inserts `item` at the back.
    fn add_last(&mut self, item: T);

    /// Removes and returns the front item, or `None` if empty.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the back item, or `None` if empty.
    fn remove_last(&mut self) -> Option<T>;

    /// Returns the item at logical position `index`, where 0 is the
    /// front, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<&T>;

    /// Mutable counterpart of [`get`](#tymethod.get).
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// The number of items in the deque.
    fn len(&self) -> usize;

    /// True when the deque holds no items.
    fn is_empty(&self) -> bool {
        0 == self.len()
    }

    /// The front item, or `None` if empty.
    fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// The back item, or `None` if empty.
    fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|ix| self.get(ix))
    }
}

/// Arena index of the sentinel node.
pub(crate) const SENTINEL: usize = 0;

#[derive(Clone)]
pub(crate) struct Links {
    // The index of the node before this node.
    prev: usize,
    // The index of the node after this node.
    next: usize,
}

impl Links {
    fn new(prev: usize, next: usize) -> Links {
        Links { prev, next }
    }

    pub(crate) fn prev(&self) -> usize {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, new_prev: usize) {
        self.prev = new_prev;
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }

    pub(crate) fn set_next(&mut self, new_next: usize) {
        self.next = new_next;
    }
}

#[derive(Clone)]
pub(crate) enum Node<T> {
    // Anchors the ring. Never holds an item.
    Sentinel(Links),
    Data(Links, T),
    // A detached node. `next` is the following free node, MAX at the
    // end of the free list.
    Free { next: usize },
}

impl<T> Node<T> {
    /// A sentinel for an empty ring points at itself both ways.
    pub(crate) fn new_sentinel() -> Node<T> {
        Node::Sentinel(Links::new(SENTINEL, SENTINEL))
    }

    pub(crate) fn new_data(prev: usize, next: usize, item: T) -> Node<T> {
        Node::Data(Links::new(prev, next), item)
    }

    pub(crate) fn new_free(next: usize) -> Node<T> {
        Node::Free { next }
    }

    pub(crate) fn links(&self) -> Option<&Links> {
        match self {
            Node::Sentinel(links) | Node::Data(links, _) => Some(links),
            Node::Free { .. } => None,
        }
    }

    pub(crate) fn links_mut(&mut self) -> Option<&mut Links> {
        match self {
            Node::Sentinel(links) | Node::Data(links, _) => Some(links),
            Node::Free { .. } => None,
        }
    }

    pub(crate) fn item(&self) -> Option<&T> {
        if let Node::Data(_, item) = self {
            Some(item)
        } else {
            None
        }
    }

    pub(crate) fn item_mut(&mut self) -> Option<&mut T> {
        if let Node::Data(_, item) = self {
            Some(item)
        } else {
            None
        }
    }

    pub(crate) fn free_next(&self) -> Option<usize> {
        if let Node::Free { next } = self {
            Some(*next)
        } else {
            None
        }
    }

    /// Split a data node into `(prev, item, next)`.
    pub(crate) fn take(self) -> Option<(usize, T, usize)> {
        if let Node::Data(Links { prev, next }, item) = self {
            Some((prev, item, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sentinel_is_self_linked_and_empty() {
        let s: Node<u8> = Node::new_sentinel();
        let links = s.links().unwrap();
        assert_eq!(SENTINEL, links.prev());
        assert_eq!(SENTINEL, links.next());
        assert_eq!(None, s.item());
        assert_eq!(None, s.free_next());
    }

    #[test]
    fn free_nodes_have_no_links() {
        let mut f: Node<u8> = Node::new_free(7);
        assert!(f.links().is_none());
        assert!(f.links_mut().is_none());
        assert_eq!(Some(7), f.free_next());
        assert!(f.take().is_none());
    }

    #[test]
    fn data_nodes_relink_and_split() {
        let mut d = Node::new_data(1, 2, 'x');
        {
            let links = d.links_mut().unwrap();
            links.set_prev(3);
            links.set_next(4);
        }
        if let Some(item) = d.item_mut() {
            *item = 'y';
        }
        assert_eq!(Some(&'y'), d.item());
        assert_eq!(Some((3, 'y', 4)), d.take());
    }
}

//! LRU List Module
//!
//! Arena-backed doubly linked list that keeps entries in recency order.

// == Node Id ==
/// Stable handle to a node inside an [`LruList`].
///
/// Handles stay valid until the node is removed; a freed slot may be reused
/// by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU List ==
/// Ordered sequence of values with O(1) relocation.
///
/// - Front = Least recently used
/// - Back = Most recently used
#[derive(Debug)]
pub struct LruList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LruList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends a value at the most recently used position.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            prev: self.tail,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        NodeId(idx)
    }

    // == Move To Back ==
    /// Marks a node as most recently used.
    ///
    /// Returns false if the handle does not point at a live node.
    pub fn move_to_back(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.tail == Some(id.0) {
            return true;
        }

        self.unlink(id.0);
        let old_tail = self.tail;
        {
            let node = self.node_mut(id.0);
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(id.0),
            None => self.head = Some(id.0),
        }
        self.tail = Some(id.0);
        true
    }

    // == Pop Front ==
    /// Removes and returns the least recently used value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.remove(NodeId(head))
    }

    // == Remove ==
    /// Removes an arbitrary node, returning its value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id.0);
        let node = self.slots[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    // == Accessors ==
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .map(|node| &mut node.value)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates from least to most recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Detaches a live node from its neighbours without freeing its slot.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    // Callers only pass indices reachable from head/tail or checked by contains().
    fn node(&self, idx: usize) -> &Node<T> {
        match self.slots[idx].as_ref() {
            Some(node) => node,
            None => unreachable!("linked slot {idx} is vacant"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.slots[idx].as_mut() {
            Some(node) => node,
            None => unreachable!("linked slot {idx} is vacant"),
        }
    }
}

impl<T> Default for LruList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
pub struct Iter<'a, T> {
    list: &'a LruList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.node(idx);
        self.cursor = node.next;
        Some(&node.value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &LruList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: LruList<&str> = LruList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_list_push_back_keeps_insertion_order() {
        let mut list = LruList::new();

        list.push_back("key1");
        list.push_back("key2");
        list.push_back("key3");

        assert_eq!(list.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(list.iter().next(), Some(&"key1"));
        assert_eq!(collect(&list), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_list_move_to_back() {
        let mut list = LruList::new();

        let a = list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert!(list.move_to_back(a));

        assert_eq!(collect(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_list_move_tail_is_noop() {
        let mut list = LruList::new();

        list.push_back("a");
        let b = list.push_back("b");

        assert!(list.move_to_back(b));
        assert_eq!(collect(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_list_move_middle() {
        let mut list = LruList::new();

        list.push_back("a");
        let b = list.push_back("b");
        list.push_back("c");

        list.move_to_back(b);
        assert_eq!(collect(&list), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_list_pop_front() {
        let mut list = LruList::new();

        list.push_back("key1");
        list.push_back("key2");

        assert_eq!(list.pop_front(), Some("key1"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_front(), Some("key2"));
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_list_remove_middle() {
        let mut list = LruList::new();

        list.push_back("key1");
        let key2 = list.push_back("key2");
        list.push_back("key3");

        assert_eq!(list.remove(key2), Some("key2"));
        assert_eq!(list.len(), 2);
        assert!(!list.contains(key2));
        assert_eq!(collect(&list), vec!["key1", "key3"]);

        // Stale handles are rejected
        assert_eq!(list.remove(key2), None);
        assert!(!list.move_to_back(key2));
    }

    #[test]
    fn test_list_reuses_freed_slots() {
        let mut list = LruList::new();

        let a = list.push_back("a");
        list.push_back("b");
        list.remove(a);

        let c = list.push_back("c");
        assert_eq!(c, a);
        assert_eq!(list.get(c), Some(&"c"));
        assert_eq!(collect(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_list_get_mut() {
        let mut list = LruList::new();

        let id = list.push_back(String::from("old"));
        if let Some(value) = list.get_mut(id) {
            value.push_str("-new");
        }

        assert_eq!(list.get(id).map(String::as_str), Some("old-new"));
    }

    #[test]
    fn test_list_order_after_multiple_moves() {
        let mut list = LruList::new();

        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        list.move_to_back(a);
        list.move_to_back(c);
        list.move_to_back(b);

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), Some("c"));
        assert_eq!(list.pop_front(), Some("b"));
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queue that supports both popping and pushing at front and back.
pub trait BidirectedQueue<T>: Default {
    /// Inserts `t` at the front.
    fn push_front(&mut self, t: T);
    /// Inserts `t` at the back.
    fn push_back(&mut self, t: T);
    /// Removes the front element.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes the back element.
    fn pop_back(&mut self) -> Option<T>;
    /// The amount of elements in the queue.
    fn len(&self) -> usize;
    /// Returns true if the queue has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BidirectedQueue<T> for std::collections::LinkedList<T> {
    fn push_front(&mut self, t: T) {
        std::collections::LinkedList::<T>::push_front(self, t)
    }

    fn push_back(&mut self, t: T) {
        std::collections::LinkedList::<T>::push_back(self, t)
    }

    fn pop_front(&mut self) -> Option<T> {
        std::collections::LinkedList::<T>::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        std::collections::LinkedList::<T>::pop_back(self)
    }

    fn len(&self) -> usize {
        std::collections::LinkedList::<T>::len(self)
    }
}

impl<T> BidirectedQueue<T> for std::collections::VecDeque<T> {
    fn push_front(&mut self, t: T) {
        std::collections::VecDeque::<T>::push_front(self, t)
    }

    fn push_back(&mut self, t: T) {
        std::collections::VecDeque::<T>::push_back(self, t)
    }

    fn pop_front(&mut self) -> Option<T> {
        std::collections::VecDeque::<T>::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        std::collections::VecDeque::<T>::pop_back(self)
    }

    fn len(&self) -> usize {
        std::collections::VecDeque::<T>::len(self)
    }
}

/// An entry of a [`MinHeap`].
/// Ordered reversely by key and then by insertion sequence, such that the `BinaryHeap` max-heap pops the smallest key first,
/// and equal keys in insertion order.
struct MinHeapEntry<Key, Item> {
    key: Key,
    sequence: usize,
    item: Item,
}

impl<Key: PartialOrd, Item> PartialEq for MinHeapEntry<Key, Item> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Key: PartialOrd, Item> Eq for MinHeapEntry<Key, Item> {}

impl<Key: PartialOrd, Item> PartialOrd for MinHeapEntry<Key, Item> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Key: PartialOrd, Item> Ord for MinHeapEntry<Key, Item> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Incomparable keys (NaN) are treated as equal.
        other
            .key
            .partial_cmp(&self.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A binary min-heap of items ordered by a partially ordered key.
///
/// This is the priority frontier of Dijkstra's algorithm, A* and Prim's algorithm.
/// Items with equal keys are popped in the order they were pushed.
/// There is no decrease-key operation: callers push a new entry and skip stale entries on pop.
pub struct MinHeap<Key, Item> {
    heap: BinaryHeap<MinHeapEntry<Key, Item>>,
    sequence: usize,
}

impl<Key: PartialOrd, Item> Default for MinHeap<Key, Item> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<Key: PartialOrd, Item> MinHeap<Key, Item> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the given item with the given key.
    pub fn push(&mut self, key: Key, item: Item) {
        self.heap.push(MinHeapEntry {
            key,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    /// Removes the item with the smallest key and returns it together with its key.
    pub fn pop(&mut self) -> Option<(Key, Item)> {
        self.heap.pop().map(|entry| (entry.key, entry.item))
    }
}

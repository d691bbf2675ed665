use crate::algo::queue::BidirectedQueue;
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use bitvector::BitVector;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::marker::PhantomData;

/// A breadth first search over a weighted graph.
pub type PreOrderBfs<'a, VertexLabel, WeightType> =
    PreOrderTraversal<'a, VertexLabel, WeightType, BfsQueueStrategy, VecDeque<usize>>;
/// A depth first search over a weighted graph, using an explicit stack.
pub type PreOrderDfs<'a, VertexLabel, WeightType> =
    PreOrderTraversal<'a, VertexLabel, WeightType, DfsQueueStrategy, VecDeque<usize>>;

/// A generic preorder graph traversal.
/// The traversal is generic over the order of processing (`QueueStrategy`) and the queue implementation itself (`Queue`).
///
/// The traversal works on the dense vertex indices of a [`VertexIndex`] snapshot of the graph and returns the index of each visited vertex exactly once.
/// A vertex is marked as visited when it is discovered, i.e. pushed into the queue.
/// When the queue runs empty, the traversal can be continued from a further start vertex without forgetting the visited vertices,
/// which yields the vertices of the next connected component.
pub struct PreOrderTraversal<'a, VertexLabel, WeightType, QueueStrategy, Queue> {
    graph: &'a WeightedGraph<VertexLabel, WeightType>,
    index: VertexIndex<'a, VertexLabel>,
    queue: Queue,
    visited: BitVector,
    visited_count: usize,
    queue_strategy: PhantomData<QueueStrategy>,
}

impl<
        'a,
        VertexLabel: Ord + Clone + Debug,
        WeightType: Weight,
        QueueStrategy: TraversalQueueStrategy<Queue>,
        Queue: BidirectedQueue<usize>,
    > PreOrderTraversal<'a, VertexLabel, WeightType, QueueStrategy, Queue>
{
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    /// Returns `None` if the vertex is not part of the graph.
    pub fn new(graph: &'a WeightedGraph<VertexLabel, WeightType>, start: &VertexLabel) -> Option<Self> {
        let mut traversal = Self::new_without_start(graph);
        let start = traversal.index.index_of(start)?;
        traversal.continue_traversal_from(start);
        Some(traversal)
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a WeightedGraph<VertexLabel, WeightType>) -> Self {
        let index = VertexIndex::new(graph);
        let visited = BitVector::new(index.len());
        Self {
            graph,
            index,
            queue: Queue::default(),
            visited,
            visited_count: 0,
            queue_strategy: Default::default(),
        }
    }

    /// Resets the traversal to start from the given vertex index without resetting the visited vertices.
    /// Returns false and does nothing if the vertex was visited already.
    pub fn continue_traversal_from(&mut self, start: usize) -> bool {
        debug_assert!(self.queue.is_empty());
        self.discover(start)
    }

    /// Returns true if the vertex with the given index was discovered by this traversal.
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.contains(vertex)
    }

    /// Returns true if every vertex of the graph was discovered.
    pub fn is_complete(&self) -> bool {
        self.visited_count == self.index.len()
    }

    /// The vertex index snapshot this traversal operates on.
    pub fn vertex_index(&self) -> &VertexIndex<'a, VertexLabel> {
        &self.index
    }

    fn discover(&mut self, vertex: usize) -> bool {
        if self.visited.contains(vertex) {
            false
        } else {
            self.visited.insert(vertex);
            self.visited_count += 1;
            QueueStrategy::push(&mut self.queue, vertex);
            true
        }
    }
}

impl<
        'a,
        VertexLabel: Ord + Clone + Debug,
        WeightType: Weight,
        QueueStrategy: TraversalQueueStrategy<Queue>,
        Queue: BidirectedQueue<usize>,
    > Iterator for PreOrderTraversal<'a, VertexLabel, WeightType, QueueStrategy, Queue>
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let first = QueueStrategy::pop(&mut self.queue)?;
        let graph = self.graph;
        for neighbor in graph.neighbors(self.index.label(first)).unwrap_or(&[]) {
            let neighbor_index = self.index.index_of(&neighbor.vertex);
            debug_assert!(neighbor_index.is_some(), "Asymmetric edge to {:?}", neighbor.vertex);
            if let Some(neighbor_index) = neighbor_index {
                self.discover(neighbor_index);
            }
        }
        Some(first)
    }
}

/// A queue strategy for graph traversals, deciding which end of the queue is used for pushing and popping.
pub trait TraversalQueueStrategy<Queue> {
    /// Insert a vertex into the queue.
    fn push(queue: &mut Queue, vertex: usize);
    /// Remove the next vertex from the queue.
    fn pop(queue: &mut Queue) -> Option<usize>;
}

/// The queue strategy for a breadth first search: first in, first out.
pub struct BfsQueueStrategy;

impl<Queue: BidirectedQueue<usize>> TraversalQueueStrategy<Queue> for BfsQueueStrategy {
    fn push(queue: &mut Queue, vertex: usize) {
        queue.push_back(vertex)
    }

    fn pop(queue: &mut Queue) -> Option<usize> {
        queue.pop_front()
    }
}

/// The queue strategy for a depth first search: last in, first out.
pub struct DfsQueueStrategy;

impl<Queue: BidirectedQueue<usize>> TraversalQueueStrategy<Queue> for DfsQueueStrategy {
    fn push(queue: &mut Queue, vertex: usize) {
        queue.push_back(vertex)
    }

    fn pop(queue: &mut Queue) -> Option<usize> {
        queue.pop_back()
    }
}

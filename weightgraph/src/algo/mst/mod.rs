use crate::implementation::WeightedGraph;
use crate::interface::{total_weight, Edge, Weight};
use std::fmt::Debug;

mod kruskal;
mod prim;

pub use kruskal::Kruskal;
pub use prim::Prim;

/// The edges of a minimum spanning tree or forest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<VertexLabel, WeightType> {
    edges: Vec<Edge<VertexLabel, WeightType>>,
}

impl<VertexLabel, WeightType: Weight> SpanningForest<VertexLabel, WeightType> {
    /// Wraps the given edges.
    pub fn new(edges: Vec<Edge<VertexLabel, WeightType>>) -> Self {
        Self { edges }
    }

    /// The edges in the order they were accepted by the algorithm.
    pub fn edges(&self) -> &[Edge<VertexLabel, WeightType>] {
        &self.edges
    }

    /// The sum of all edge weights, zero if there are no edges.
    pub fn total_weight(&self) -> WeightType {
        total_weight(&self.edges)
    }

    /// Returns the amount of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns an iterator over the edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<VertexLabel, WeightType>> {
        self.edges.iter()
    }

    /// Unwraps the edges.
    pub fn into_edges(self) -> Vec<Edge<VertexLabel, WeightType>> {
        self.edges
    }
}

impl<'a, VertexLabel, WeightType> IntoIterator for &'a SpanningForest<VertexLabel, WeightType> {
    type Item = &'a Edge<VertexLabel, WeightType>;
    type IntoIter = std::slice::Iter<'a, Edge<VertexLabel, WeightType>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// An algorithm that computes a minimum spanning tree of a graph.
pub trait MinimumSpanningTreeAlgorithm {
    /// Computes a minimum spanning tree.
    ///
    /// Algorithms that grow a single tree span only the component of `start`,
    /// or the component of the smallest vertex if `start` is `None` or not part of the graph.
    /// Algorithms that merge edges globally return a minimum spanning forest over all components and ignore `start`.
    fn compute_minimum_spanning_tree<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
        start: Option<&VertexLabel>,
    ) -> SpanningForest<VertexLabel, WeightType>;
}

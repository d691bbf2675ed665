use crate::implementation::WeightedGraph;
use crate::interface::Weight;
use std::fmt::Debug;

/// A snapshot that maps the vertices of a graph to the dense indices `0..vertex_count`.
///
/// Algorithms use this to store their per-vertex state in vectors, bit vectors and matrices instead of maps.
/// The index borrows the labels from the graph, so the graph cannot be mutated while the index exists.
/// Since the graph stores its vertices in ascending order, the indices are in ascending label order as well.
#[derive(Debug, Clone)]
pub struct VertexIndex<'a, VertexLabel> {
    labels: Vec<&'a VertexLabel>,
}

impl<'a, VertexLabel: Ord + Clone + Debug> VertexIndex<'a, VertexLabel> {
    /// Creates the index of all vertices of the given graph.
    pub fn new<WeightType: Weight>(graph: &'a WeightedGraph<VertexLabel, WeightType>) -> Self {
        let labels: Vec<_> = graph.vertices().collect();
        debug_assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
        Self { labels }
    }

    /// Returns the index of the given vertex, or `None` if it is not part of the graph.
    pub fn index_of(&self, vertex: &VertexLabel) -> Option<usize> {
        self.labels
            .binary_search_by(|label| (*label).cmp(vertex))
            .ok()
    }

    /// Returns the vertex with the given index.
    /// Panics if the index is out of range.
    pub fn label(&self, index: usize) -> &'a VertexLabel {
        self.labels[index]
    }

    /// Returns the amount of indexed vertices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no vertices are indexed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator over the indexed vertices in index order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &'a VertexLabel> {
        self.labels.iter().copied()
    }

    /// Converts a sequence of indices back into owned vertex labels.
    pub fn to_labels(&self, indices: impl IntoIterator<Item = usize>) -> Vec<VertexLabel> {
        indices
            .into_iter()
            .map(|index| self.label(index).clone())
            .collect()
    }
}

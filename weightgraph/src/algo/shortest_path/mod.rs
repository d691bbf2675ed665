//! Every algorithm here answers the same query: the lightest path between two vertices.
//!
//! The algorithms differ in the weights they accept.
//! [`Dijkstra`] and [`AStar`] require non-negative weights but do not check them,
//! while [`BellmanFord`] and [`FloydWarshall`] accept negative weights and fail with
//! [`ErrorKind::NegativeCycle`](crate::error::ErrorKind::NegativeCycle) if a negative cycle makes the query undefined.
//! Since the graph is undirected, every negative edge reachable from the start vertex forms a negative cycle.

use crate::error::{ErrorKind, Result};
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use std::fmt::Debug;

mod astar;
mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

pub use astar::AStar;
pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{AllPairsShortestPaths, FloydWarshall};

/// The result of a shortest path query.
///
/// If the end vertex is unreachable, there is no path and the weight is [`Weight::infinity`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<VertexLabel, WeightType> {
    path: Option<Vec<VertexLabel>>,
    weight: WeightType,
}

impl<VertexLabel, WeightType: Weight> ShortestPath<VertexLabel, WeightType> {
    /// A path with the given vertices, from start to end, and its total weight.
    pub fn new(path: Vec<VertexLabel>, weight: WeightType) -> Self {
        Self {
            path: Some(path),
            weight,
        }
    }

    /// The path that consists of the start vertex only.
    pub fn trivial(start: VertexLabel) -> Self {
        Self::new(vec![start], WeightType::zero())
    }

    /// The result for an unreachable end vertex.
    pub fn unreachable() -> Self {
        Self {
            path: None,
            weight: WeightType::infinity(),
        }
    }

    /// The vertices of the path, from start to end, or `None` if the end vertex is unreachable.
    pub fn path(&self) -> Option<&[VertexLabel]> {
        self.path.as_deref()
    }

    /// The total weight of the path.
    pub fn weight(&self) -> WeightType {
        self.weight
    }

    /// Returns true if there is a path.
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// Unwraps the vertices of the path.
    pub fn into_path(self) -> Option<Vec<VertexLabel>> {
        self.path
    }
}

/// An algorithm that computes a shortest path between two vertices of a graph.
pub trait ShortestPathAlgorithm<VertexLabel, WeightType> {
    /// Computes a shortest path from `start` to `end`.
    ///
    /// Fails with `VertexNotFound` if either vertex is not part of the graph.
    /// If `start == end`, the path consists of `start` only and has weight zero.
    fn compute_shortest_path(
        &self,
        graph: &WeightedGraph<VertexLabel, WeightType>,
        start: &VertexLabel,
        end: &VertexLabel,
    ) -> Result<ShortestPath<VertexLabel, WeightType>>;
}

/// Returns the indices of start and end, or a `VertexNotFound` error.
fn resolve_endpoints<VertexLabel: Ord + Clone + Debug>(
    index: &VertexIndex<'_, VertexLabel>,
    start: &VertexLabel,
    end: &VertexLabel,
) -> Result<(usize, usize)> {
    let start = index
        .index_of(start)
        .ok_or_else(|| ErrorKind::VertexNotFound(format!("{:?}", start)))?;
    let end = index
        .index_of(end)
        .ok_or_else(|| ErrorKind::VertexNotFound(format!("{:?}", end)))?;
    Ok((start, end))
}

/// Follows the predecessors backwards from `end` and returns the path from `start` to `end`.
/// The predecessors must form a tree rooted at `start` that contains `end`.
fn reconstruct_path<VertexLabel: Ord + Clone + Debug>(
    index: &VertexIndex<'_, VertexLabel>,
    predecessors: &[Option<usize>],
    start: usize,
    end: usize,
) -> Vec<VertexLabel> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match predecessors[current] {
            Some(predecessor) => current = predecessor,
            None => break,
        }
        path.push(current);
        debug_assert!(path.len() <= predecessors.len(), "Cycle in predecessors");
    }
    debug_assert_eq!(current, start);

    path.reverse();
    index.to_labels(path)
}

use crate::implementation::WeightedGraph;
use crate::interface::Weight;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::fmt::Debug;

pub use petgraph;

/// Converts the given graph into an undirected `petgraph` graph.
///
/// Nodes are added in ascending label order, so the petgraph node with index `i` is the vertex with index `i` in a
/// [`VertexIndex`](crate::index::VertexIndex) of the same graph.
/// Each node carries its label as node weight, and each undirected edge is added once.
pub fn to_petgraph<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
    graph: &WeightedGraph<VertexLabel, WeightType>,
) -> UnGraph<VertexLabel, WeightType, usize> {
    let mut result = UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for vertex in graph.vertices() {
        result.add_node(vertex.clone());
    }

    let mut edge_count = 0;
    for (from_index, (_, neighbors)) in graph.adjacency_lists().enumerate() {
        for neighbor in neighbors {
            // The node weights are sorted, so a binary search finds the neighbor's index.
            let to_index = result
                .raw_nodes()
                .binary_search_by(|node| node.weight.cmp(&neighbor.vertex));
            debug_assert!(to_index.is_ok(), "Asymmetric edge to {:?}", neighbor.vertex);
            if let Ok(to_index) = to_index {
                if from_index < to_index {
                    result.add_edge(
                        NodeIndex::new(from_index),
                        NodeIndex::new(to_index),
                        neighbor.weight,
                    );
                    edge_count += 1;
                }
            }
        }
    }

    trace!(
        "Converted graph with {} vertices and {} edges to petgraph",
        result.node_count(),
        edge_count
    );
    result
}

/// Converts an undirected `petgraph` graph into a [`WeightedGraph`], using the node weights as vertex labels.
///
/// Parallel edges collapse into one edge carrying the weight of the one added last, and self-loops are dropped.
/// Nodes with equal weights are merged into one vertex.
pub fn from_petgraph<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
    graph: &UnGraph<VertexLabel, WeightType, usize>,
) -> WeightedGraph<VertexLabel, WeightType> {
    let mut result = WeightedGraph::new();
    for node in graph.node_indices() {
        result.add_vertex(graph[node].clone());
    }
    for edge in graph.edge_references() {
        result.add_edge(
            graph[edge.source()].clone(),
            graph[edge.target()].clone(),
            *edge.weight(),
        );
    }
    result
}

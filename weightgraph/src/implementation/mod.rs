/// Conversion to and from `petgraph` graphs.
pub mod petgraph_impl;
/// The adjacency list graph all algorithms operate on.
pub mod weighted_graph;

pub use weighted_graph::WeightedGraph;

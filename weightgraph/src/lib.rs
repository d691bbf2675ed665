//! A weighted undirected graph together with the classic algorithms that run on it.
//!
//! The graph itself lives in [`implementation::WeightedGraph`], a label-keyed adjacency list.
//! Algorithms borrow it immutably and are grouped into families that share a trait:
//!  - connected components ([`algo::components::ConnectedComponentsAlgorithm`]),
//!  - minimum spanning trees ([`algo::mst::MinimumSpanningTreeAlgorithm`]),
//!  - single-pair shortest paths ([`algo::shortest_path::ShortestPathAlgorithm`]).
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Graph algorithms.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// Graph implementations.
pub mod implementation;
/// A dense index over the vertices of a graph.
pub mod index;
/// Types shared by the graph implementation and all algorithms.
pub mod interface;
/// Reading and writing graphs as edge lists.
pub mod io;

pub use implementation::WeightedGraph;
pub use interface::{Edge, Neighbor, Weight};

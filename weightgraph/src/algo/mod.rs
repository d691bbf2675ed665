/// Algorithms to compute the connected components of a graph, using breadth first search, depth first search or a disjoint-set forest.
pub mod components;
/// Algorithms to compute minimum spanning trees and forests.
pub mod mst;
/// Algorithms to create certain parameterisable graph classes, like binary trees or random connected graphs.
pub mod predefined_graphs;
/// A trait for bidirected queues to abstract over the different implementations in the standard library, and a min-heap for best-first searches.
pub mod queue;
/// Single-pair and all-pairs shortest path algorithms.
pub mod shortest_path;
/// Algorithms for graph traversals, i.e. preorder breadth or depth first search.
pub mod traversal;
/// A disjoint-set forest.
pub mod union_find;

use super::{MinimumSpanningTreeAlgorithm, SpanningForest};
use crate::algo::queue::MinHeap;
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::{Edge, Weight};
use bitvector::BitVector;
use std::fmt::Debug;

/// Prim's algorithm with a lazily updated min-heap.
///
/// Grows a single tree from the start vertex, so the result spans only the start vertex's component.
pub struct Prim;

impl MinimumSpanningTreeAlgorithm for Prim {
    fn compute_minimum_spanning_tree<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
        start: Option<&VertexLabel>,
    ) -> SpanningForest<VertexLabel, WeightType> {
        let index = VertexIndex::new(graph);
        if index.is_empty() {
            return SpanningForest::new(Vec::new());
        }

        let start = match start {
            Some(start) => index.index_of(start).unwrap_or_else(|| {
                warn!(
                    "Start vertex {:?} is not part of the graph, starting from {:?} instead",
                    start,
                    index.label(0)
                );
                0
            }),
            None => 0,
        };

        let mut in_tree = BitVector::new(index.len());
        // The lightest known edge connecting each vertex to the tree.
        let mut best_weight: Vec<Option<WeightType>> = vec![None; index.len()];
        let mut heap = MinHeap::new();
        let mut edges = Vec::new();

        let mut current = start;
        in_tree.insert(current);
        loop {
            for neighbor in graph.neighbors(index.label(current)).unwrap_or(&[]) {
                let neighbor_index = match index.index_of(&neighbor.vertex) {
                    Some(neighbor_index) => neighbor_index,
                    None => continue,
                };
                if in_tree.contains(neighbor_index) {
                    continue;
                }

                let improves = best_weight[neighbor_index]
                    .map(|best| neighbor.weight < best)
                    .unwrap_or(true);
                if improves {
                    best_weight[neighbor_index] = Some(neighbor.weight);
                    heap.push(neighbor.weight, (neighbor_index, current));
                }
            }

            // Skip stale entries of vertices that were added to the tree via a lighter edge.
            let next = std::iter::from_fn(|| heap.pop())
                .find(|(_, (vertex, _))| !in_tree.contains(*vertex));
            let (weight, (vertex, parent)) = match next {
                Some(next) => next,
                None => break,
            };

            trace!(
                "Adding {:?} to the tree via {:?} with weight {:?}",
                index.label(vertex),
                index.label(parent),
                weight
            );
            in_tree.insert(vertex);
            edges.push(Edge::new(
                index.label(parent).clone(),
                index.label(vertex).clone(),
                weight,
            ));
            current = vertex;
        }

        debug!(
            "Prim spanned {} of {} vertices with {} edges",
            edges.len() + 1,
            index.len(),
            edges.len()
        );
        SpanningForest::new(edges)
    }
}

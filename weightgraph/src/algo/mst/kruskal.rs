use super::{MinimumSpanningTreeAlgorithm, SpanningForest};
use crate::algo::union_find::DisjointSet;
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Kruskal's algorithm over a disjoint-set forest.
///
/// Returns a minimum spanning forest over all components; the start vertex is ignored.
/// Edges of equal weight are considered in the order of [`WeightedGraph::edges`].
pub struct Kruskal;

impl MinimumSpanningTreeAlgorithm for Kruskal {
    fn compute_minimum_spanning_tree<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
        _start: Option<&VertexLabel>,
    ) -> SpanningForest<VertexLabel, WeightType> {
        let index = VertexIndex::new(graph);
        let mut candidates = graph.edges();
        // Stable, so equal weights keep their order. NaN weights are not supported.
        candidates.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

        let mut sets = DisjointSet::new(index.len());
        let max_edge_amount = index.len().saturating_sub(1);
        let mut edges = Vec::with_capacity(max_edge_amount);
        let mut considered = 0;

        for edge in candidates {
            if edges.len() == max_edge_amount {
                break;
            }
            considered += 1;

            if let (Some(from), Some(to)) = (index.index_of(&edge.from), index.index_of(&edge.to)) {
                if sets.union(from, to) {
                    edges.push(edge);
                }
            }
        }

        debug!(
            "Kruskal accepted {} of {} considered edges, forming {} trees",
            edges.len(),
            considered,
            sets.set_count()
        );
        SpanningForest::new(edges)
    }
}

use super::{reconstruct_path, resolve_endpoints, ShortestPath, ShortestPathAlgorithm};
use crate::algo::queue::MinHeap;
use crate::error::Result;
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use bitvector::BitVector;
use std::fmt::Debug;

/// Dijkstra's shortest path algorithm.
///
/// Assumes non-negative weights without checking them.
/// The search stops as soon as the end vertex is settled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight>
    ShortestPathAlgorithm<VertexLabel, WeightType> for Dijkstra
{
    fn compute_shortest_path(
        &self,
        graph: &WeightedGraph<VertexLabel, WeightType>,
        start: &VertexLabel,
        end: &VertexLabel,
    ) -> Result<ShortestPath<VertexLabel, WeightType>> {
        let index = VertexIndex::new(graph);
        let (start, end) = resolve_endpoints(&index, start, end)?;
        if start == end {
            return Ok(ShortestPath::trivial(index.label(start).clone()));
        }

        Ok(best_first_search(graph, &index, start, end, |_| {
            WeightType::zero()
        }))
    }
}

/// A best-first search from `start` to `end`, where the frontier is keyed by the distance from `start` plus `heuristic`.
///
/// With the zero heuristic this is Dijkstra's algorithm, otherwise it is A*.
/// Each vertex is settled at most once, so the heuristic must be consistent for the result to be optimal.
pub(super) fn best_first_search<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
    graph: &WeightedGraph<VertexLabel, WeightType>,
    index: &VertexIndex<'_, VertexLabel>,
    start: usize,
    end: usize,
    heuristic: impl Fn(&VertexLabel) -> WeightType,
) -> ShortestPath<VertexLabel, WeightType> {
    let mut distances = vec![WeightType::infinity(); index.len()];
    let mut predecessors = vec![None; index.len()];
    let mut settled = BitVector::new(index.len());
    let mut queue = MinHeap::new();
    let mut settled_count = 0;

    distances[start] = WeightType::zero();
    queue.push(heuristic(index.label(start)), start);

    while let Some((_, vertex)) = queue.pop() {
        // Stale entries of settled vertices.
        if settled.contains(vertex) {
            continue;
        }
        settled.insert(vertex);
        settled_count += 1;

        if vertex == end {
            break;
        }

        let distance = distances[vertex];
        for neighbor in graph.neighbors(index.label(vertex)).unwrap_or(&[]) {
            let neighbor_index = match index.index_of(&neighbor.vertex) {
                Some(neighbor_index) => neighbor_index,
                None => continue,
            };
            if settled.contains(neighbor_index) {
                continue;
            }

            let new_distance = distance.saturating_weight_add(neighbor.weight);
            if new_distance < distances[neighbor_index] {
                distances[neighbor_index] = new_distance;
                predecessors[neighbor_index] = Some(vertex);
                queue.push(
                    new_distance.saturating_weight_add(heuristic(&neighbor.vertex)),
                    neighbor_index,
                );
            }
        }
    }

    trace!(
        "Best-first search settled {} of {} vertices",
        settled_count,
        index.len()
    );

    if settled.contains(end) {
        ShortestPath::new(
            reconstruct_path(index, &predecessors, start, end),
            distances[end],
        )
    } else {
        debug!(
            "{:?} is not reachable from {:?}",
            index.label(end),
            index.label(start)
        );
        ShortestPath::unreachable()
    }
}

#[cfg(test)]
mod tests {
    use super::Dijkstra;
    use crate::algo::shortest_path::ShortestPathAlgorithm;
    use crate::implementation::WeightedGraph;

    #[test]
    fn test_dijkstra_simple() {
        let graph: WeightedGraph<_, u32> = vec![(1, 2, 2), (2, 3, 2), (1, 3, 5)]
            .into_iter()
            .collect();
        let result = Dijkstra.compute_shortest_path(&graph, &1, &3).unwrap();
        assert_eq!(result.path(), Some(&[1, 2, 3][..]));
        assert_eq!(result.weight(), 4);

        let result = Dijkstra.compute_shortest_path(&graph, &3, &2).unwrap();
        assert_eq!(result.path(), Some(&[3, 2][..]));
        assert_eq!(result.weight(), 2);
    }

    #[test]
    fn test_dijkstra_zero_weights() {
        let graph: WeightedGraph<_, f32> = vec![("a", "b", 0.0), ("b", "c", 0.0), ("a", "c", 0.5)]
            .into_iter()
            .collect();
        let result = Dijkstra.compute_shortest_path(&graph, &"a", &"c").unwrap();
        assert_eq!(result.path(), Some(&["a", "b", "c"][..]));
        assert_eq!(result.weight(), 0.0);
    }
}

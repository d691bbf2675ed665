use super::{reconstruct_path, resolve_endpoints, ShortestPath, ShortestPathAlgorithm};
use crate::error::{ErrorKind, Result};
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use std::fmt::Debug;

/// The Bellman-Ford algorithm.
///
/// Accepts negative weights. Fails with `NegativeCycle` if a negative cycle is reachable from the start vertex,
/// even if the end vertex could be reached without touching it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight>
    ShortestPathAlgorithm<VertexLabel, WeightType> for BellmanFord
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

        // Every undirected edge as two arcs.
        let mut arcs = Vec::with_capacity(2 * graph.edge_count());
        for (from, (_, neighbors)) in graph.adjacency_lists().enumerate() {
            for neighbor in neighbors {
                if let Some(to) = index.index_of(&neighbor.vertex) {
                    arcs.push((from, to, neighbor.weight));
                }
            }
        }

        let mut distances = vec![WeightType::infinity(); index.len()];
        let mut predecessors = vec![None; index.len()];
        distances[start] = WeightType::zero();

        let mut passes = 0;
        for _ in 1..index.len() {
            passes += 1;
            if !relax_arcs(&arcs, &mut distances, &mut predecessors) {
                break;
            }
        }
        trace!("Bellman-Ford ran {} relaxation passes", passes);

        // If anything can still be relaxed, a negative cycle is reachable.
        // A negative arc that does not decrease its sum means the sum is clamped at the lower bound.
        let still_relaxable = arcs.iter().any(|&(from, to, weight)| {
            if !distances[from].is_finite_weight() {
                return false;
            }
            let new_distance = distances[from].saturating_weight_add(weight);
            new_distance < distances[to]
                || (weight < WeightType::zero() && new_distance >= distances[from])
        });
        if still_relaxable {
            debug!(
                "Negative cycle reachable from {:?}",
                index.label(start)
            );
            return Err(ErrorKind::NegativeCycle.into());
        }

        if distances[end].is_finite_weight() {
            Ok(ShortestPath::new(
                reconstruct_path(&index, &predecessors, start, end),
                distances[end],
            ))
        } else {
            Ok(ShortestPath::unreachable())
        }
    }
}

/// Relaxes every arc once. Returns true if any distance changed.
fn relax_arcs<WeightType: Weight>(
    arcs: &[(usize, usize, WeightType)],
    distances: &mut [WeightType],
    predecessors: &mut [Option<usize>],
) -> bool {
    let mut changed = false;
    for &(from, to, weight) in arcs {
        if !distances[from].is_finite_weight() {
            continue;
        }
        let new_distance = distances[from].saturating_weight_add(weight);
        if new_distance < distances[to] {
            distances[to] = new_distance;
            predecessors[to] = Some(from);
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::BellmanFord;
    use crate::algo::shortest_path::{FloydWarshall, ShortestPathAlgorithm};
    use crate::error::ErrorKind;
    use crate::implementation::WeightedGraph;

    #[test]
    fn test_bellman_ford_simple() {
        let graph: WeightedGraph<_, i32> = vec![(1, 2, 2), (2, 3, 2), (1, 3, 5), (3, 4, 1)]
            .into_iter()
            .collect();
        let result = BellmanFord.compute_shortest_path(&graph, &1, &4).unwrap();
        assert_eq!(result.path(), Some(&[1, 2, 3, 4][..]));
        assert_eq!(result.weight(), 5);
    }

    #[test]
    fn test_single_negative_edge_is_a_cycle() {
        let graph: WeightedGraph<_, f64> = vec![("s", "t", -1.0)].into_iter().collect();
        let error = BellmanFord
            .compute_shortest_path(&graph, &"s", &"t")
            .unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::NegativeCycle));
    }

    #[test]
    fn test_negative_cycle_clamped_at_lower_bound() {
        // After two passes, A and B both sit at i8::MIN and no arc relaxes anymore.
        let graph: WeightedGraph<_, i8> = vec![("A", "B", -100), ("B", "C", 1)]
            .into_iter()
            .collect();
        for end in ["B", "C"] {
            for result in [
                BellmanFord.compute_shortest_path(&graph, &"A", &end),
                FloydWarshall.compute_shortest_path(&graph, &"A", &end),
            ] {
                assert!(matches!(
                    result.unwrap_err().kind(),
                    ErrorKind::NegativeCycle
                ));
            }
        }
    }
}

use super::dijkstra::best_first_search;
use super::{resolve_endpoints, ShortestPath, ShortestPathAlgorithm};
use crate::error::Result;
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use std::fmt::Debug;

/// The A* search algorithm, guided by a heuristic estimating the remaining distance.
///
/// The heuristic is called as `heuristic(vertex, goal)`.
/// It must be admissible and consistent: it never overestimates, and it decreases by at most the weight of an edge along the edge.
/// Like Dijkstra's algorithm, A* assumes non-negative weights.
#[derive(Debug, Clone, Copy)]
pub struct AStar<Heuristic> {
    heuristic: Heuristic,
}

impl<Heuristic> AStar<Heuristic> {
    /// Creates an A* search with the given heuristic.
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

fn zero_heuristic<VertexLabel, WeightType: Weight>(_: &VertexLabel, _: &VertexLabel) -> WeightType {
    WeightType::zero()
}

impl<VertexLabel, WeightType: Weight> AStar<fn(&VertexLabel, &VertexLabel) -> WeightType> {
    /// Creates an A* search whose heuristic is always zero, which behaves like Dijkstra's algorithm.
    pub fn zero() -> Self {
        Self::new(zero_heuristic::<VertexLabel, WeightType>)
    }
}

impl<
        VertexLabel: Ord + Clone + Debug,
        WeightType: Weight,
        Heuristic: Fn(&VertexLabel, &VertexLabel) -> WeightType,
    > ShortestPathAlgorithm<VertexLabel, WeightType> for AStar<Heuristic>
{
    fn compute_shortest_path(
        &self,
        graph: &WeightedGraph<VertexLabel, WeightType>,
        start: &VertexLabel,
        end: &VertexLabel,
    ) -> Result<ShortestPath<VertexLabel, WeightType>> {
        let index = VertexIndex::new(graph);
        let (start_index, end_index) = resolve_endpoints(&index, start, end)?;
        if start_index == end_index {
            return Ok(ShortestPath::trivial(start.clone()));
        }

        Ok(best_first_search(
            graph,
            &index,
            start_index,
            end_index,
            |vertex| (self.heuristic)(vertex, end),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::AStar;
    use crate::algo::shortest_path::ShortestPathAlgorithm;
    use crate::implementation::WeightedGraph;

    #[test]
    fn test_a_star_on_a_line() {
        // Vertices are positions on a line, and each edge is at least as long as the distance of its endpoints.
        let graph: WeightedGraph<i64, i64> = vec![(0, 2, 2), (2, 5, 3), (0, 5, 7), (5, 9, 4), (2, 9, 10)]
            .into_iter()
            .collect();
        let distance = AStar::new(|a: &i64, b: &i64| (a - b).abs());
        let result = distance.compute_shortest_path(&graph, &0, &9).unwrap();
        assert_eq!(result.path(), Some(&[0, 2, 5, 9][..]));
        assert_eq!(result.weight(), 9);
    }

    #[test]
    fn test_zero_heuristic() {
        let graph: WeightedGraph<_, u16> = vec![("x", "y", 3), ("y", "z", 3), ("x", "z", 7)]
            .into_iter()
            .collect();
        let result = AStar::zero()
            .compute_shortest_path(&graph, &"x", &"z")
            .unwrap();
        assert_eq!(result.weight(), 6);
    }
}

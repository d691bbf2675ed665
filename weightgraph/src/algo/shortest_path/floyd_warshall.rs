use super::{resolve_endpoints, ShortestPath, ShortestPathAlgorithm};
use crate::error::{ErrorKind, Result};
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use std::fmt::Debug;

/// The Floyd-Warshall all-pairs shortest path algorithm.
///
/// Accepts negative weights. A query fails with `NegativeCycle` if a negative cycle is reachable from its start vertex.
///
/// Single-pair queries compute the whole table, so they take cubic time in the amount of vertices.
/// Use [`FloydWarshall::all_pairs`] to answer many queries on the same graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Computes the shortest path distances between all pairs of vertices.
    pub fn all_pairs<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
    ) -> AllPairsShortestPaths<'_, VertexLabel, WeightType> {
        AllPairsShortestPaths::new(graph)
    }
}

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight>
    ShortestPathAlgorithm<VertexLabel, WeightType> for FloydWarshall
{
    fn compute_shortest_path(
        &self,
        graph: &WeightedGraph<VertexLabel, WeightType>,
        start: &VertexLabel,
        end: &VertexLabel,
    ) -> Result<ShortestPath<VertexLabel, WeightType>> {
        // Fail on unknown vertices before doing cubic work.
        resolve_endpoints(&VertexIndex::new(graph), start, end)?;
        Self::all_pairs(graph).shortest_path(start, end)
    }
}

/// The distance and next-hop matrices computed by [`FloydWarshall::all_pairs`].
pub struct AllPairsShortestPaths<'a, VertexLabel, WeightType> {
    index: VertexIndex<'a, VertexLabel>,
    /// Row-major `n * n` matrix.
    distances: Vec<WeightType>,
    /// The second vertex on a shortest path from row to column, row-major.
    next: Vec<Option<usize>>,
}

impl<'a, VertexLabel: Ord + Clone + Debug, WeightType: Weight>
    AllPairsShortestPaths<'a, VertexLabel, WeightType>
{
    fn new(graph: &'a WeightedGraph<VertexLabel, WeightType>) -> Self {
        let index = VertexIndex::new(graph);
        let n = index.len();
        let mut distances = vec![WeightType::infinity(); n * n];
        let mut next = vec![None; n * n];

        for i in 0..n {
            distances[i * n + i] = WeightType::zero();
            next[i * n + i] = Some(i);
        }
        for (i, (_, neighbors)) in graph.adjacency_lists().enumerate() {
            for neighbor in neighbors {
                if let Some(j) = index.index_of(&neighbor.vertex) {
                    distances[i * n + j] = neighbor.weight;
                    next[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let via_k = distances[i * n + k];
                if !via_k.is_finite_weight() {
                    continue;
                }
                for j in 0..n {
                    let from_k = distances[k * n + j];
                    if !from_k.is_finite_weight() {
                        continue;
                    }
                    let new_distance = via_k.saturating_weight_add(from_k);
                    if new_distance < distances[i * n + j] {
                        distances[i * n + j] = new_distance;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        debug!("Computed all-pairs shortest paths for {} vertices", n);
        Self {
            index,
            distances,
            next,
        }
    }

    fn distance_by_index(&self, from: usize, to: usize) -> WeightType {
        self.distances[from * self.index.len() + to]
    }

    /// Returns true if the given vertex lies on a cycle of negative weight.
    fn is_on_negative_cycle(&self, vertex: usize) -> bool {
        self.distance_by_index(vertex, vertex) < WeightType::zero()
    }

    /// Fails with `NegativeCycle` if a vertex on a negative cycle is reachable from `start`.
    /// This is the same condition under which Bellman-Ford fails.
    fn check_negative_cycles(&self, start: usize) -> Result<()> {
        let blocked = (0..self.index.len()).any(|k| {
            self.is_on_negative_cycle(k) && self.distance_by_index(start, k).is_finite_weight()
        });
        if blocked {
            Err(ErrorKind::NegativeCycle.into())
        } else {
            Ok(())
        }
    }

    /// Returns true if the graph contains a cycle of negative weight.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.index.len()).any(|vertex| self.is_on_negative_cycle(vertex))
    }

    /// Returns the weight of a shortest path from `start` to `end`, or [`Weight::infinity`] if `end` is unreachable.
    pub fn distance(&self, start: &VertexLabel, end: &VertexLabel) -> Result<WeightType> {
        let (start, end) = resolve_endpoints(&self.index, start, end)?;
        if start == end {
            return Ok(WeightType::zero());
        }
        self.check_negative_cycles(start)?;
        Ok(self.distance_by_index(start, end))
    }

    /// Returns a shortest path from `start` to `end`, rebuilt by following the next-hop matrix.
    pub fn shortest_path(
        &self,
        start: &VertexLabel,
        end: &VertexLabel,
    ) -> Result<ShortestPath<VertexLabel, WeightType>> {
        let (start, end) = resolve_endpoints(&self.index, start, end)?;
        if start == end {
            return Ok(ShortestPath::trivial(self.index.label(start).clone()));
        }
        self.check_negative_cycles(start)?;

        let weight = self.distance_by_index(start, end);
        if !weight.is_finite_weight() {
            return Ok(ShortestPath::unreachable());
        }

        let n = self.index.len();
        let mut path = vec![start];
        let mut current = start;
        while current != end {
            match self.next[current * n + end] {
                Some(hop) => current = hop,
                None => return Ok(ShortestPath::unreachable()),
            }
            path.push(current);
            debug_assert!(path.len() <= n, "Next-hop walk does not terminate");
        }

        Ok(ShortestPath::new(self.index.to_labels(path), weight))
    }

    /// The amount of vertices covered by the matrices.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }
}

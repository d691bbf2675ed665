use crate::error::{ErrorKind, Result};
use crate::interface::{Edge, Neighbor, Weight};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::iter::FromIterator;

/// A weighted undirected graph stored as adjacency lists keyed by vertex label.
///
/// Each undirected edge is stored twice, once in the adjacency list of each endpoint, always with the same weight.
/// There are no parallel edges: adding an existing edge overwrites its weight.
/// Self-loops are not stored.
///
/// Vertices are kept ordered by label, so all enumerations of this graph are deterministic.
/// Two graphs are equal if they have the same vertices and the same weighted edges, regardless of insertion order.
#[derive(Debug, Clone)]
pub struct WeightedGraph<VertexLabel, WeightType> {
    adjacency: BTreeMap<VertexLabel, Vec<Neighbor<VertexLabel, WeightType>>>,
}

impl<VertexLabel: Ord, WeightType> Default for WeightedGraph<VertexLabel, WeightType> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight> WeightedGraph<VertexLabel, WeightType> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex without edges. Adding a vertex that already exists does nothing.
    pub fn add_vertex(&mut self, vertex: VertexLabel) {
        self.adjacency.entry(vertex).or_insert_with(Vec::new);
    }

    /// Adds the undirected edge `{a, b}` with the given weight, creating missing endpoints.
    /// If the edge exists already, its weight is overwritten in both directions and the previous weight is returned.
    ///
    /// A self-loop only creates its vertex, it is never stored as an edge.
    /// An edge weighted with [`Weight::infinity`] is stored, but shortest path algorithms treat it as missing.
    pub fn add_edge(
        &mut self,
        a: VertexLabel,
        b: VertexLabel,
        weight: WeightType,
    ) -> Option<WeightType> {
        if a == b {
            warn!("Ignoring self-loop at vertex {:?}", a);
            self.add_vertex(a);
            return None;
        }
        if !weight.is_finite_weight() {
            warn!(
                "Edge {:?} - {:?} has infinite weight, shortest path algorithms will ignore it",
                a, b
            );
        }

        let previous = Self::set_neighbor(
            self.adjacency.entry(a.clone()).or_insert_with(Vec::new),
            b.clone(),
            weight,
        );
        let mirrored = Self::set_neighbor(
            self.adjacency.entry(b).or_insert_with(Vec::new),
            a,
            weight,
        );
        debug_assert_eq!(previous.is_some(), mirrored.is_some());
        previous
    }

    fn set_neighbor(
        neighbors: &mut Vec<Neighbor<VertexLabel, WeightType>>,
        vertex: VertexLabel,
        weight: WeightType,
    ) -> Option<WeightType> {
        if let Some(neighbor) = neighbors.iter_mut().find(|n| n.vertex == vertex) {
            Some(std::mem::replace(&mut neighbor.weight, weight))
        } else {
            neighbors.push(Neighbor { vertex, weight });
            None
        }
    }

    fn take_neighbor(
        neighbors: &mut Vec<Neighbor<VertexLabel, WeightType>>,
        vertex: &VertexLabel,
    ) -> Option<WeightType> {
        let position = neighbors.iter().position(|n| &n.vertex == vertex)?;
        Some(neighbors.remove(position).weight)
    }

    /// Removes the given vertex and all edges incident to it.
    /// Returns false if the vertex does not exist.
    pub fn remove_vertex(&mut self, vertex: &VertexLabel) -> bool {
        if let Some(neighbors) = self.adjacency.remove(vertex) {
            for neighbor in neighbors {
                if let Some(mirrored) = self.adjacency.get_mut(&neighbor.vertex) {
                    mirrored.retain(|n| &n.vertex != vertex);
                }
            }
            true
        } else {
            debug!("Cannot remove vertex {:?}: not in graph", vertex);
            false
        }
    }

    /// Removes the undirected edge `{a, b}` and returns its weight.
    /// Fails with `VertexNotFound` if an endpoint does not exist, and with `EdgeNotFound` if there is no such edge.
    pub fn try_remove_edge(&mut self, a: &VertexLabel, b: &VertexLabel) -> Result<WeightType> {
        if !self.contains_vertex(b) {
            bail!(ErrorKind::VertexNotFound(format!("{:?}", b)));
        }
        let removed = match self.adjacency.get_mut(a) {
            Some(neighbors) => Self::take_neighbor(neighbors, b),
            None => return Err(ErrorKind::VertexNotFound(format!("{:?}", a)).into()),
        };
        let weight = removed.ok_or_else(|| {
            ErrorKind::EdgeNotFound(format!("{:?}", a), format!("{:?}", b))
        })?;
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            Self::take_neighbor(neighbors, a);
        }
        Ok(weight)
    }

    /// Removes the undirected edge `{a, b}`.
    /// Returns false if an endpoint does not exist or if there is no such edge.
    pub fn remove_edge(&mut self, a: &VertexLabel, b: &VertexLabel) -> bool {
        match self.try_remove_edge(a, b) {
            Ok(_) => true,
            Err(error) => {
                debug!("Cannot remove edge: {}", error);
                false
            }
        }
    }

    /// Returns the adjacency list of the given vertex, or `None` if there is no such vertex.
    pub fn neighbors(&self, vertex: &VertexLabel) -> Option<&[Neighbor<VertexLabel, WeightType>]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns an iterator over all vertices in ascending label order.
    pub fn vertices(&self) -> impl '_ + Iterator<Item = &VertexLabel> {
        self.adjacency.keys()
    }

    /// Returns an iterator over all vertices together with their adjacency lists, in ascending label order.
    pub fn adjacency_lists(
        &self,
    ) -> impl '_ + Iterator<Item = (&VertexLabel, &[Neighbor<VertexLabel, WeightType>])> {
        self.adjacency
            .iter()
            .map(|(vertex, neighbors)| (vertex, neighbors.as_slice()))
    }

    /// Returns every undirected edge exactly once, with `from < to`, sorted by `(from, to)`.
    pub fn edges(&self) -> Vec<Edge<VertexLabel, WeightType>> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (vertex, neighbors) in &self.adjacency {
            let first = edges.len();
            edges.extend(
                neighbors
                    .iter()
                    .filter(|neighbor| vertex < &neighbor.vertex)
                    .map(|neighbor| Edge {
                        from: vertex.clone(),
                        to: neighbor.vertex.clone(),
                        weight: neighbor.weight,
                    }),
            );
            edges[first..].sort_by(|e1, e2| e1.to.cmp(&e2.to));
        }
        edges
    }

    /// Returns the weight of the edge `{a, b}`, or `None` if there is no such edge.
    pub fn edge_weight(&self, a: &VertexLabel, b: &VertexLabel) -> Option<WeightType> {
        self.neighbors(a)?
            .iter()
            .find(|neighbor| &neighbor.vertex == b)
            .map(|neighbor| neighbor.weight)
    }

    /// Returns true if this graph contains the given vertex.
    pub fn contains_vertex(&self, vertex: &VertexLabel) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns true if this graph contains the edge `{a, b}`.
    pub fn contains_edge(&self, a: &VertexLabel, b: &VertexLabel) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Returns the amount of edges incident to the given vertex, or `None` if there is no such vertex.
    pub fn degree(&self, vertex: &VertexLabel) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Returns the amount of vertices in this graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the amount of undirected edges in this graph.
    pub fn edge_count(&self) -> usize {
        let directed_count: usize = self.adjacency.values().map(Vec::len).sum();
        debug_assert_eq!(directed_count % 2, 0);
        directed_count / 2
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        // Zero vertices must imply zero edges.
        self.adjacency.is_empty()
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight> PartialEq
    for WeightedGraph<VertexLabel, WeightType>
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices().eq(other.vertices()) && self.edges() == other.edges()
    }
}

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight> Extend<(VertexLabel, VertexLabel, WeightType)>
    for WeightedGraph<VertexLabel, WeightType>
{
    fn extend<T: IntoIterator<Item = (VertexLabel, VertexLabel, WeightType)>>(&mut self, iter: T) {
        for (a, b, weight) in iter {
            self.add_edge(a, b, weight);
        }
    }
}

impl<VertexLabel: Ord + Clone + Debug, WeightType: Weight>
    FromIterator<(VertexLabel, VertexLabel, WeightType)> for WeightedGraph<VertexLabel, WeightType>
{
    fn from_iter<T: IntoIterator<Item = (VertexLabel, VertexLabel, WeightType)>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedGraph;
    use crate::error::ErrorKind;
    use crate::interface::{Edge, Neighbor};

    fn triangle() -> WeightedGraph<&'static str, i32> {
        vec![("A", "B", 4), ("B", "C", 2), ("C", "A", 3)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = WeightedGraph::new();
        assert_eq!(graph.add_edge("A", "B", 7), None);
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(7));
        assert_eq!(graph.edge_weight(&"B", &"A"), Some(7));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = triangle();
        assert_eq!(graph.add_edge("B", "A", 9), Some(4));
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(9));
        assert_eq!(graph.edge_weight(&"B", &"A"), Some(9));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(&"A"), Some(2));
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut once = triangle();
        once.add_vertex("D");
        let mut twice = once.clone();
        twice.add_vertex("D");
        twice.add_vertex("A");
        assert_eq!(once, twice);
        assert_eq!(twice.neighbors(&"D"), Some(&[][..]));
        assert_eq!(twice.neighbors(&"A").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = WeightedGraph::new();
        assert_eq!(graph.add_edge("A", "A", -1), None);
        assert!(graph.contains_vertex(&"A"));
        assert!(!graph.contains_edge(&"A", &"A"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edges_are_reported_once() {
        let graph = triangle();
        assert_eq!(
            graph.edges(),
            vec![
                Edge::new("A", "B", 4),
                Edge::new("A", "C", 3),
                Edge::new("B", "C", 2)
            ]
        );
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();
        assert!(graph.remove_edge(&"A", &"B"));
        assert!(!graph.contains_edge(&"B", &"A"));
        assert!(!graph.remove_edge(&"A", &"B"));
        assert!(!graph.remove_edge(&"A", &"Z"));
        assert!(graph.remove_edge(&"C", &"A"));
        assert_eq!(graph.edges(), vec![Edge::new("B", "C", 2)]);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_try_remove_edge_errors() {
        let mut graph = triangle();
        graph.add_vertex("D");
        match graph.try_remove_edge(&"Z", &"A") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::VertexNotFound(_))),
            Ok(_) => panic!("removed an edge with an unknown endpoint"),
        }
        match graph.try_remove_edge(&"A", &"D") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::EdgeNotFound(_, _))),
            Ok(_) => panic!("removed a missing edge"),
        }
        assert_eq!(graph.try_remove_edge(&"C", &"B").unwrap(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_vertex() {
        let mut graph = triangle();
        assert!(graph.remove_vertex(&"B"));
        assert!(!graph.remove_vertex(&"B"));
        assert!(!graph.remove_vertex(&"Z"));
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(
            graph.neighbors(&"A"),
            Some(&[Neighbor {
                vertex: "C",
                weight: 3
            }][..])
        );
        assert_eq!(graph.edges(), vec![Edge::new("A", "C", 3)]);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let reversed: WeightedGraph<_, i32> = vec![("A", "C", 3), ("C", "B", 2), ("B", "A", 4)]
            .into_iter()
            .collect();
        assert_eq!(reversed, triangle());

        let mut heavier = triangle();
        heavier.add_edge("A", "C", 4);
        assert_ne!(heavier, triangle());
        let mut larger = triangle();
        larger.add_vertex("D");
        assert_ne!(larger, triangle());
    }

    #[test]
    fn test_clear() {
        let mut graph = triangle();
        assert!(!graph.is_empty());
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.edges().is_empty());
        assert_eq!(graph.neighbors(&"A"), None);
    }
}

use crate::algo::traversal::{BfsQueueStrategy, DfsQueueStrategy, PreOrderTraversal};
use crate::algo::union_find::DisjointSet;
use crate::implementation::WeightedGraph;
use crate::index::VertexIndex;
use crate::interface::Weight;
use std::collections::VecDeque;
use std::fmt::Debug;

/// The connected components of a graph, i.e. a partition of its vertices.
///
/// Components are ordered by their smallest vertex.
/// The order of the vertices inside a component depends on the algorithm that computed it; use [`ConnectedComponents::normalized`] to compare partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents<VertexLabel> {
    components: Vec<Vec<VertexLabel>>,
}

impl<VertexLabel: Ord> ConnectedComponents<VertexLabel> {
    /// Wraps the given partition without checking it.
    pub fn new(components: Vec<Vec<VertexLabel>>) -> Self {
        Self { components }
    }

    /// Sorts the vertices in each component and the components themselves,
    /// such that two equal partitions compare equal regardless of the algorithm that produced them.
    pub fn normalized(mut self) -> Self {
        for component in &mut self.components {
            component.sort();
        }
        self.components.sort();
        self
    }

    /// Returns the component containing the given vertex.
    pub fn component_of(&self, vertex: &VertexLabel) -> Option<&[VertexLabel]> {
        self.components
            .iter()
            .find(|component| component.contains(vertex))
            .map(Vec::as_slice)
    }

    /// Returns true if both vertices exist and are in the same component.
    pub fn same_component(&self, a: &VertexLabel, b: &VertexLabel) -> bool {
        self.component_of(a)
            .map(|component| component.contains(b))
            .unwrap_or(false)
    }

    /// Returns the amount of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &Vec<VertexLabel>> {
        self.components.iter()
    }

    /// Returns the components as plain vectors.
    pub fn into_inner(self) -> Vec<Vec<VertexLabel>> {
        self.components
    }
}

impl<'a, VertexLabel> IntoIterator for &'a ConnectedComponents<VertexLabel> {
    type Item = &'a Vec<VertexLabel>;
    type IntoIter = std::slice::Iter<'a, Vec<VertexLabel>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// An algorithm that partitions the vertices of a graph into its connected components.
pub trait ConnectedComponentsAlgorithm {
    /// Returns the connected components of the given graph, ordered by their smallest vertex.
    fn compute_connected_components<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
    ) -> ConnectedComponents<VertexLabel>;
}

/// Computes connected components by repeated breadth first searches.
pub struct BfsComponents;

/// Computes connected components by repeated depth first searches with an explicit stack.
pub struct DfsComponents;

/// Computes connected components by merging the endpoints of every edge in a disjoint-set forest.
pub struct UnionFindComponents;

fn compute_components_by_traversal<
    VertexLabel: Ord + Clone + Debug,
    WeightType: Weight,
    QueueStrategy: crate::algo::traversal::TraversalQueueStrategy<VecDeque<usize>>,
>(
    graph: &WeightedGraph<VertexLabel, WeightType>,
) -> ConnectedComponents<VertexLabel> {
    let mut traversal: PreOrderTraversal<_, _, QueueStrategy, VecDeque<usize>> =
        PreOrderTraversal::new_without_start(graph);
    let mut components = Vec::new();

    for seed in 0..graph.vertex_count() {
        if traversal.continue_traversal_from(seed) {
            let component: Vec<_> = traversal.by_ref().collect();
            components.push(traversal.vertex_index().to_labels(component));
        }
    }

    debug_assert!(traversal.is_complete());
    ConnectedComponents::new(components)
}

impl ConnectedComponentsAlgorithm for BfsComponents {
    fn compute_connected_components<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
    ) -> ConnectedComponents<VertexLabel> {
        compute_components_by_traversal::<_, _, BfsQueueStrategy>(graph)
    }
}

impl ConnectedComponentsAlgorithm for DfsComponents {
    fn compute_connected_components<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
    ) -> ConnectedComponents<VertexLabel> {
        compute_components_by_traversal::<_, _, DfsQueueStrategy>(graph)
    }
}

impl ConnectedComponentsAlgorithm for UnionFindComponents {
    fn compute_connected_components<VertexLabel: Ord + Clone + Debug, WeightType: Weight>(
        graph: &WeightedGraph<VertexLabel, WeightType>,
    ) -> ConnectedComponents<VertexLabel> {
        let index = VertexIndex::new(graph);
        let mut sets = DisjointSet::new(index.len());

        for edge in graph.edges() {
            if let (Some(from), Some(to)) = (index.index_of(&edge.from), index.index_of(&edge.to)) {
                sets.union(from, to);
            }
        }

        // Maps a set representative to the position of its component in the output.
        let mut component_of_root = vec![None; index.len()];
        let mut components: Vec<Vec<VertexLabel>> = Vec::with_capacity(sets.set_count());
        for vertex in 0..index.len() {
            let root = sets.find(vertex);
            let position = *component_of_root[root].get_or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[position].push(index.label(vertex).clone());
        }

        debug_assert_eq!(components.len(), sets.set_count());
        ConnectedComponents::new(components)
    }
}

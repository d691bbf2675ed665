use crate::implementation::WeightedGraph;
use crate::interface::Weight;
use rand::Rng;

/// Adds a binary tree to the given graph, with all edges having the given weight.
/// Assumes that the graph is empty, the vertices are labelled `0..n` in preorder, the root being `0`.
/// A negative depth adds no vertices to the graph, a depth of 0 just the root, a depth of 1 the root an its children, and so on.
pub fn create_binary_tree<WeightType: Weight>(
    graph: &mut WeightedGraph<usize, WeightType>,
    depth: i32,
    weight: WeightType,
) -> Option<usize> {
    if depth < 0 {
        return None;
    }

    let root = graph.vertex_count();
    graph.add_vertex(root);
    create_binary_tree_recursively(graph, depth - 1, root, weight);
    Some(root)
}

fn create_binary_tree_recursively<WeightType: Weight>(
    graph: &mut WeightedGraph<usize, WeightType>,
    depth: i32,
    root: usize,
    weight: WeightType,
) {
    if depth < 0 {
        return;
    }

    for _ in 0..2 {
        let child = graph.vertex_count();
        graph.add_edge(root, child, weight);
        create_binary_tree_recursively(graph, depth - 1, child, weight);
    }
}

/// Adds a path `0 - 1 - ... - (n-1)` where the edge `{i, i+1}` has weight `weight(i)`.
/// Assumes that the graph is empty.
pub fn create_path_graph<WeightType: Weight>(
    graph: &mut WeightedGraph<usize, WeightType>,
    vertex_amount: usize,
    mut weight: impl FnMut(usize) -> WeightType,
) {
    if vertex_amount == 0 {
        return;
    }

    graph.add_vertex(0);
    for vertex in 1..vertex_amount {
        graph.add_edge(vertex - 1, vertex, weight(vertex - 1));
    }
}

/// Adds a cycle `0 - 1 - ... - (n-1) - 0` where the edge `{i, (i+1) % n}` has weight `weight(i)`.
/// Assumes that the graph is empty.
/// With less than three vertices there is no cycle, and a path is created instead.
pub fn create_cycle_graph<WeightType: Weight>(
    graph: &mut WeightedGraph<usize, WeightType>,
    vertex_amount: usize,
    mut weight: impl FnMut(usize) -> WeightType,
) {
    create_path_graph(graph, vertex_amount, &mut weight);
    if vertex_amount >= 3 {
        graph.add_edge(vertex_amount - 1, 0, weight(vertex_amount - 1));
    }
}

/// Adds a complete graph on `0..n` where the edge `{i, j}` has weight `weight(i, j)` for `i < j`.
/// Assumes that the graph is empty.
pub fn create_complete_graph<WeightType: Weight>(
    graph: &mut WeightedGraph<usize, WeightType>,
    vertex_amount: usize,
    mut weight: impl FnMut(usize, usize) -> WeightType,
) {
    for a in 0..vertex_amount {
        graph.add_vertex(a);
        for b in 0..a {
            graph.add_edge(b, a, weight(b, a));
        }
    }
}

fn max_edge_amount(vertex_amount: usize) -> usize {
    vertex_amount * vertex_amount.saturating_sub(1) / 2
}

fn add_random_edges<WeightType: Weight, Random: Rng>(
    graph: &mut WeightedGraph<usize, WeightType>,
    vertex_amount: usize,
    target_edge_amount: usize,
    random: &mut Random,
    random_weight: &mut impl FnMut(&mut Random) -> WeightType,
) {
    let target_edge_amount = target_edge_amount.min(max_edge_amount(vertex_amount));
    while graph.edge_count() < target_edge_amount {
        let a = random.gen_range(0..vertex_amount);
        let b = random.gen_range(0..vertex_amount);

        if a != b && !graph.contains_edge(&a, &b) {
            let weight = random_weight(random);
            graph.add_edge(a, b, weight);
        }
    }
}

/// Creates a random connected graph on the vertices `0..n`.
/// Assumes that the graph is empty.
///
/// First, a random spanning tree is added, where each vertex `i > 0` is attached to a random vertex `j < i`.
/// Then, `extra_edge_amount` random further edges are added, or less if the graph becomes complete.
/// Each edge weight is drawn from `random_weight`.
pub fn create_random_connected_graph<WeightType: Weight, Random: Rng>(
    graph: &mut WeightedGraph<usize, WeightType>,
    vertex_amount: usize,
    extra_edge_amount: usize,
    random: &mut Random,
    mut random_weight: impl FnMut(&mut Random) -> WeightType,
) {
    if vertex_amount == 0 {
        return;
    }

    graph.add_vertex(0);
    for vertex in 1..vertex_amount {
        let parent = random.gen_range(0..vertex);
        let weight = random_weight(random);
        graph.add_edge(parent, vertex, weight);
    }

    add_random_edges(
        graph,
        vertex_amount,
        vertex_amount - 1 + extra_edge_amount,
        random,
        &mut random_weight,
    );
}

/// Creates a random graph on the vertices `0..n` with `edge_amount` random edges, or less if the graph becomes complete.
/// Assumes that the graph is empty.
/// The graph is usually not connected.
pub fn create_random_graph<WeightType: Weight, Random: Rng>(
    graph: &mut WeightedGraph<usize, WeightType>,
    vertex_amount: usize,
    edge_amount: usize,
    random: &mut Random,
    mut random_weight: impl FnMut(&mut Random) -> WeightType,
) {
    for vertex in 0..vertex_amount {
        graph.add_vertex(vertex);
    }

    add_random_edges(graph, vertex_amount, edge_amount, random, &mut random_weight);
}

#[cfg(test)]
mod tests {
    use super::{
        create_binary_tree, create_complete_graph, create_cycle_graph, create_path_graph,
        create_random_connected_graph, create_random_graph,
    };
    use crate::algo::components::{BfsComponents, ConnectedComponentsAlgorithm};
    use crate::implementation::WeightedGraph;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_create_binary_tree_2() {
        let mut graph = WeightedGraph::new();
        assert_eq!(create_binary_tree(&mut graph, 2, 1u32), Some(0));
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.contains_edge(&0, &1));
        assert!(graph.contains_edge(&0, &4));
        assert!(graph.contains_edge(&1, &2));

        let mut graph = WeightedGraph::<usize, u32>::new();
        assert_eq!(create_binary_tree(&mut graph, -1, 1), None);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_create_path_and_complete_graph() {
        let mut path = WeightedGraph::new();
        create_path_graph(&mut path, 4, |i| i as i64 * 10);
        assert_eq!(path.edge_count(), 3);
        assert_eq!(path.edge_weight(&2, &3), Some(20));

        let mut cycle = WeightedGraph::new();
        create_cycle_graph(&mut cycle, 5, |i| i as u8);
        assert_eq!(cycle.edge_count(), 5);
        assert_eq!(cycle.edge_weight(&0, &4), Some(4));
        assert!(cycle.vertices().all(|v| cycle.degree(v) == Some(2)));

        let mut complete = WeightedGraph::new();
        create_complete_graph(&mut complete, 5, |a, b| (a + b) as f64);
        assert_eq!(complete.vertex_count(), 5);
        assert_eq!(complete.edge_count(), 10);
        assert_eq!(complete.edge_weight(&4, &1), Some(5.0));
    }

    #[test]
    fn test_create_random_connected_graph() {
        let mut random = StdRng::seed_from_u64(3);
        for vertex_amount in 1..30 {
            let mut graph = WeightedGraph::new();
            create_random_connected_graph(&mut graph, vertex_amount, 1000, &mut random, |r| {
                r.gen_range(1..=5u32)
            });
            assert_eq!(graph.vertex_count(), vertex_amount);
            assert_eq!(
                graph.edge_count(),
                vertex_amount * (vertex_amount - 1) / 2
            );
            assert_eq!(BfsComponents::compute_connected_components(&graph).len(), 1);
        }
    }

    #[test]
    fn test_create_random_graph() {
        let mut random = StdRng::seed_from_u64(5);
        let mut graph = WeightedGraph::new();
        create_random_graph(&mut graph, 40, 25, &mut random, |_| 1.5f32);
        assert_eq!(graph.vertex_count(), 40);
        assert_eq!(graph.edge_count(), 25);
        assert!(BfsComponents::compute_connected_components(&graph).len() >= 15);
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{LinkedList, VecDeque};
use weightgraph::algo::mst::{Kruskal, MinimumSpanningTreeAlgorithm, Prim};
use weightgraph::algo::predefined_graphs::{create_binary_tree, create_random_connected_graph};
use weightgraph::algo::shortest_path::{
    AStar, BellmanFord, Dijkstra, FloydWarshall, ShortestPathAlgorithm,
};
use weightgraph::algo::traversal::{BfsQueueStrategy, DfsQueueStrategy, PreOrderTraversal};
use weightgraph::WeightedGraph;

fn binary_tree(depth: i32) -> (WeightedGraph<usize, u32>, usize) {
    let mut graph = WeightedGraph::new();
    let root = create_binary_tree(&mut graph, depth, 1).unwrap();
    (graph, root)
}

fn random_connected_graph(vertex_amount: usize, extra_edge_amount: usize) -> WeightedGraph<usize, u64> {
    let mut random = StdRng::seed_from_u64(42);
    let mut graph = WeightedGraph::new();
    create_random_connected_graph(
        &mut graph,
        vertex_amount,
        extra_edge_amount,
        &mut random,
        |r| r.gen_range(1..1000),
    );
    graph
}

fn bench_preorder_bfs_traversal_linked_list_bintree_10(criterion: &mut Criterion) {
    let (graph, root) = binary_tree(10);
    criterion.bench_function("bfs_linkedlist_bintree_10", |b| {
        b.iter(|| {
            let traversal = PreOrderTraversal::<_, _, BfsQueueStrategy, LinkedList<_>>::new(
                &graph, &root,
            )
            .unwrap();
            for e in traversal {
                black_box(e);
            }
        })
    });
}

fn bench_preorder_bfs_traversal_vec_deque_bintree_10(criterion: &mut Criterion) {
    let (graph, root) = binary_tree(10);
    criterion.bench_function("bfs_vecdeque_bintree_10", |b| {
        b.iter(|| {
            let traversal =
                PreOrderTraversal::<_, _, BfsQueueStrategy, VecDeque<_>>::new(&graph, &root)
                    .unwrap();
            for e in traversal {
                black_box(e);
            }
        })
    });
}

fn bench_preorder_dfs_traversal_linked_list_bintree_16(criterion: &mut Criterion) {
    let (graph, root) = binary_tree(16);
    criterion.bench_function("dfs_linkedlist_bintree_16", |b| {
        b.iter(|| {
            let traversal = PreOrderTraversal::<_, _, DfsQueueStrategy, LinkedList<_>>::new(
                &graph, &root,
            )
            .unwrap();
            for e in traversal {
                black_box(e);
            }
        })
    });
}

fn bench_preorder_dfs_traversal_vec_deque_bintree_16(criterion: &mut Criterion) {
    let (graph, root) = binary_tree(16);
    criterion.bench_function("dfs_vecdeque_bintree_16", |b| {
        b.iter(|| {
            let traversal =
                PreOrderTraversal::<_, _, DfsQueueStrategy, VecDeque<_>>::new(&graph, &root)
                    .unwrap();
            for e in traversal {
                black_box(e);
            }
        })
    });
}

fn bench_spanning_trees_random_1000(criterion: &mut Criterion) {
    let graph = random_connected_graph(1000, 5000);
    criterion.bench_function("prim_random_1000", |b| {
        b.iter(|| black_box(Prim::compute_minimum_spanning_tree(&graph, None).total_weight()))
    });
    criterion.bench_function("kruskal_random_1000", |b| {
        b.iter(|| black_box(Kruskal::compute_minimum_spanning_tree(&graph, None).total_weight()))
    });
}

fn bench_single_pair_shortest_paths_random_1000(criterion: &mut Criterion) {
    let graph = random_connected_graph(1000, 5000);
    let (start, end) = (0, 999);
    criterion.bench_function("dijkstra_random_1000", |b| {
        b.iter(|| black_box(Dijkstra.compute_shortest_path(&graph, &start, &end).unwrap()))
    });
    criterion.bench_function("a_star_zero_random_1000", |b| {
        let a_star = AStar::zero();
        b.iter(|| black_box(a_star.compute_shortest_path(&graph, &start, &end).unwrap()))
    });
    criterion.bench_function("bellman_ford_random_1000", |b| {
        b.iter(|| black_box(BellmanFord.compute_shortest_path(&graph, &start, &end).unwrap()))
    });
}

fn bench_floyd_warshall_random_200(criterion: &mut Criterion) {
    let graph = random_connected_graph(200, 800);
    criterion.bench_function("floyd_warshall_random_200", |b| {
        b.iter(|| black_box(FloydWarshall::all_pairs(&graph).has_negative_cycle()))
    });
}

criterion_group!(
    benches,
    bench_preorder_bfs_traversal_linked_list_bintree_10,
    bench_preorder_bfs_traversal_vec_deque_bintree_10,
    bench_preorder_dfs_traversal_linked_list_bintree_16,
    bench_preorder_dfs_traversal_vec_deque_bintree_16,
    bench_spanning_trees_random_1000,
    bench_single_pair_shortest_paths_random_1000,
    bench_floyd_warshall_random_200,
);
criterion_main!(benches);

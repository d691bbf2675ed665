use crate::util::{format_path, read_graph, weights_agree, CliGraph};
use crate::{CliOptions, ErrorKind};
use clap::Parser;
use colored::*;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use weightgraph::algo::components::{
    BfsComponents, ConnectedComponentsAlgorithm, DfsComponents, UnionFindComponents,
};
use weightgraph::algo::mst::{Kruskal, MinimumSpanningTreeAlgorithm, Prim};
use weightgraph::algo::shortest_path::{
    AStar, BellmanFord, Dijkstra, FloydWarshall, ShortestPath, ShortestPathAlgorithm,
};

#[derive(Parser)]
pub struct VerifyCommand {
    #[clap(short, long, help = "The input file in edge list format")]
    pub input: String,

    #[clap(
        long,
        default_value = "100",
        help = "The amount of random vertex pairs on which the shortest path algorithms are compared"
    )]
    pub samples: usize,

    #[clap(
        long,
        default_value = "0",
        help = "The seed of the random number generator used to sample vertex pairs"
    )]
    pub seed: u64,

    #[clap(
        long,
        default_value = "2000",
        help = "Floyd-Warshall is skipped on graphs with more vertices than this, since it needs quadratic memory"
    )]
    pub max_floyd_warshall_vertices: usize,
}

pub(crate) fn verify(_options: &CliOptions, subcommand: &VerifyCommand) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    let mut mismatch_count = 0;
    mismatch_count += verify_components(&graph);
    mismatch_count += verify_spanning_trees(&graph);
    mismatch_count += verify_shortest_paths(&graph, subcommand)?;

    if mismatch_count == 0 {
        info!("{}", "All algorithms agree".green());
        Ok(())
    } else {
        error!(
            "{}",
            format!("Found {} mismatches", mismatch_count).red()
        );
        Err(ErrorKind::VerificationFailed(mismatch_count).into())
    }
}

fn verify_components(graph: &CliGraph) -> usize {
    let bfs = BfsComponents::compute_connected_components(graph).normalized();
    let dfs = DfsComponents::compute_connected_components(graph).normalized();
    let union_find = UnionFindComponents::compute_connected_components(graph).normalized();

    let mut mismatch_count = 0;
    if bfs != dfs {
        warn!(
            "{}",
            format!(
                "BFS found {} components, but DFS found a different partition into {} components",
                bfs.len(),
                dfs.len()
            )
            .yellow()
        );
        mismatch_count += 1;
    }
    if bfs != union_find {
        warn!(
            "{}",
            format!(
                "BFS found {} components, but union-find found a different partition into {} components",
                bfs.len(),
                union_find.len()
            )
            .yellow()
        );
        mismatch_count += 1;
    }

    if mismatch_count == 0 {
        info!(
            "BFS, DFS and union-find agree on {} connected components",
            bfs.len()
        );
    }
    mismatch_count
}

fn verify_spanning_trees(graph: &CliGraph) -> usize {
    let kruskal = Kruskal::compute_minimum_spanning_tree(graph, None);

    // Prim spans one component at a time.
    let components = UnionFindComponents::compute_connected_components(graph);
    let mut prim_weight = 0.0;
    let mut prim_edge_count = 0;
    for component in &components {
        let prim = Prim::compute_minimum_spanning_tree(graph, component.first());
        prim_weight += prim.total_weight();
        prim_edge_count += prim.len();
    }

    let mut mismatch_count = 0;
    if prim_edge_count != kruskal.len() {
        warn!(
            "{}",
            format!(
                "Prim's spanning forest has {} edges, but Kruskal's has {}",
                prim_edge_count,
                kruskal.len()
            )
            .yellow()
        );
        mismatch_count += 1;
    }
    if !weights_agree(prim_weight, kruskal.total_weight()) {
        warn!(
            "{}",
            format!(
                "Prim's spanning forest has weight {}, but Kruskal's has weight {}",
                prim_weight,
                kruskal.total_weight()
            )
            .yellow()
        );
        mismatch_count += 1;
    }

    if mismatch_count == 0 {
        info!(
            "Prim and Kruskal agree on a spanning forest with {} edges and weight {}",
            kruskal.len(),
            kruskal.total_weight()
        );
    }
    mismatch_count
}

/// The outcome of a shortest path query in a form that can be compared across algorithms.
fn describe_result(result: &weightgraph::error::Result<ShortestPath<String, f64>>) -> String {
    match result {
        Ok(path) => match path.path() {
            Some(vertices) => format!("weight {} via {}", path.weight(), format_path(vertices)),
            None => "unreachable".to_string(),
        },
        Err(error) => format!("error '{}'", error),
    }
}

fn results_agree(
    a: &weightgraph::error::Result<ShortestPath<String, f64>>,
    b: &weightgraph::error::Result<ShortestPath<String, f64>>,
) -> bool {
    match (a, b) {
        (Ok(a), Ok(b)) => {
            a.is_reachable() == b.is_reachable() && weights_agree(a.weight(), b.weight())
        }
        (Err(a), Err(b)) => a.to_string() == b.to_string(),
        _ => false,
    }
}

fn verify_shortest_paths(graph: &CliGraph, subcommand: &VerifyCommand) -> crate::Result<usize> {
    let vertices: Vec<_> = graph.vertices().cloned().collect();
    if vertices.is_empty() {
        info!("Graph is empty, skipping shortest path verification");
        return Ok(0);
    }

    let has_negative_edges = graph.edges().iter().any(|edge| edge.weight < 0.0);
    if has_negative_edges {
        warn!("The graph has negative edges, comparing only Bellman-Ford and Floyd-Warshall");
    }
    let all_pairs = if vertices.len() <= subcommand.max_floyd_warshall_vertices {
        Some(FloydWarshall::all_pairs(graph))
    } else {
        warn!(
            "The graph has more than {} vertices, skipping Floyd-Warshall",
            subcommand.max_floyd_warshall_vertices
        );
        None
    };

    let mut random = StdRng::seed_from_u64(subcommand.seed);
    let mut mismatch_count = 0;
    for _ in 0..subcommand.samples {
        let (start, end) = match (vertices.choose(&mut random), vertices.choose(&mut random)) {
            (Some(start), Some(end)) => (start, end),
            _ => break,
        };

        let mut results = vec![("Bellman-Ford", BellmanFord.compute_shortest_path(graph, start, end))];
        if !has_negative_edges {
            results.push(("Dijkstra", Dijkstra.compute_shortest_path(graph, start, end)));
            results.push(("A*", AStar::zero().compute_shortest_path(graph, start, end)));
        }
        if let Some(all_pairs) = &all_pairs {
            results.push(("Floyd-Warshall", all_pairs.shortest_path(start, end)));
        }

        let (reference_name, reference) = &results[0];
        for (name, result) in &results[1..] {
            if !results_agree(reference, result) {
                warn!(
                    "{}",
                    format!(
                        "From {} to {}: {} found {}, but {} found {}",
                        start,
                        end,
                        reference_name,
                        describe_result(reference),
                        name,
                        describe_result(result)
                    )
                    .yellow()
                );
                mismatch_count += 1;
            }
        }
    }

    if mismatch_count == 0 {
        info!(
            "Shortest path algorithms agree on {} sampled vertex pairs",
            subcommand.samples
        );
    }
    Ok(mismatch_count)
}

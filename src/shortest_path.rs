use crate::util::{format_path, read_graph, CliGraph};
use crate::{CliOptions, ErrorKind};
use clap::Parser;
use log::{error, info, warn};
use weightgraph::algo::shortest_path::{
    AStar, BellmanFord, Dijkstra, FloydWarshall, ShortestPath, ShortestPathAlgorithm,
};

#[derive(Parser)]
pub struct ShortestPathCommand {
    #[clap(short, long, help = "The input file in edge list format")]
    pub input: String,

    #[clap(long, help = "The start vertex")]
    pub from: String,

    #[clap(long, help = "The end vertex")]
    pub to: String,

    #[clap(
        short,
        long,
        default_value = "dijkstra",
        help = "The algorithm to use, one of dijkstra, a-star, bellman-ford, floyd-warshall. Edge lists have no coordinates, so a-star uses the zero heuristic"
    )]
    pub algorithm: String,
}

/// Runs the shortest path algorithm with the given name.
/// Returns `None` if there is no algorithm with that name.
pub(crate) fn run_algorithm(
    algorithm: &str,
    graph: &CliGraph,
    from: &String,
    to: &String,
) -> Option<weightgraph::error::Result<ShortestPath<String, f64>>> {
    Some(match algorithm {
        "dijkstra" => Dijkstra.compute_shortest_path(graph, from, to),
        "a-star" => AStar::zero().compute_shortest_path(graph, from, to),
        "bellman-ford" => BellmanFord.compute_shortest_path(graph, from, to),
        "floyd-warshall" => FloydWarshall.compute_shortest_path(graph, from, to),
        _ => return None,
    })
}

pub(crate) fn compute_shortest_path(
    _options: &CliOptions,
    subcommand: &ShortestPathCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    if matches!(subcommand.algorithm.as_str(), "dijkstra" | "a-star")
        && graph.edges().iter().any(|edge| edge.weight < 0.0)
    {
        warn!(
            "The graph has negative edges, the result of '{}' is not reliable",
            subcommand.algorithm
        );
    }

    info!(
        "Computing shortest path from {} to {} with algorithm '{}'",
        subcommand.from, subcommand.to, subcommand.algorithm
    );
    let result = match run_algorithm(
        &subcommand.algorithm,
        &graph,
        &subcommand.from,
        &subcommand.to,
    ) {
        Some(result) => result?,
        None => {
            error!("Unknown shortest path algorithm '{}'", subcommand.algorithm);
            return Err(ErrorKind::Parameter.into());
        }
    };

    match result.path() {
        Some(path) => {
            info!(
                "Shortest path has {} edges and weight {}",
                path.len() - 1,
                result.weight()
            );
            println!("{}", format_path(path));
            println!("{}", result.weight());
        }
        None => {
            info!("{} is not reachable from {}", subcommand.to, subcommand.from);
            println!("unreachable");
        }
    }

    Ok(())
}

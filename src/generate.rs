use crate::{CliOptions, ErrorKind};
use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weightgraph::algo::predefined_graphs::create_random_connected_graph;
use weightgraph::io::write_edge_list_to_file;
use weightgraph::WeightedGraph;

#[derive(Parser)]
pub struct GenerateCommand {
    #[clap(short, long, help = "The file the graph is written to in edge list format")]
    pub output: String,

    #[clap(short = 'n', long, help = "The amount of vertices")]
    pub vertices: usize,

    #[clap(
        short = 'm',
        long,
        default_value = "0",
        help = "The amount of edges added on top of a random spanning tree"
    )]
    pub extra_edges: usize,

    #[clap(
        long,
        default_value = "100",
        help = "Edge weights are drawn uniformly from 1 to this value"
    )]
    pub max_weight: u64,

    #[clap(
        long,
        help = "The seed of the random number generator. If not given, a random seed is chosen and logged"
    )]
    pub seed: Option<u64>,
}

pub(crate) fn generate_graph(
    _options: &CliOptions,
    subcommand: &GenerateCommand,
) -> crate::Result<()> {
    if subcommand.max_weight == 0 {
        error!("The maximum weight must be at least 1");
        return Err(ErrorKind::Parameter.into());
    }

    let seed = subcommand
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    info!("Using seed {}", seed);
    let mut random = StdRng::seed_from_u64(seed);

    let mut graph = WeightedGraph::<usize, u64>::new();
    let max_weight = subcommand.max_weight;
    create_random_connected_graph(
        &mut graph,
        subcommand.vertices,
        subcommand.extra_edges,
        &mut random,
        |random| random.gen_range(1..=max_weight),
    );
    info!(
        "Generated graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    info!("Writing graph to: {}", subcommand.output);
    write_edge_list_to_file(&graph, &subcommand.output)?;
    Ok(())
}

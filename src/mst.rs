use crate::util::{open_output, read_graph};
use crate::{CliOptions, ErrorKind};
use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use weightgraph::algo::mst::{Kruskal, MinimumSpanningTreeAlgorithm, Prim};

#[derive(Parser)]
pub struct MstCommand {
    #[clap(short, long, help = "The input file in edge list format")]
    pub input: String,

    #[clap(
        short,
        long,
        default_value = "kruskal",
        help = "The algorithm to use, one of prim, kruskal. Prim spans only the component of the start vertex, Kruskal spans all components"
    )]
    pub algorithm: String,

    #[clap(
        long,
        help = "The start vertex for Prim's algorithm. Defaults to the smallest vertex"
    )]
    pub start: Option<String>,

    #[clap(
        short,
        long,
        help = "The file the tree edges are written to in edge list format. If not given, the edges are written to stdout"
    )]
    pub output: Option<String>,
}

pub(crate) fn compute_minimum_spanning_tree(
    _options: &CliOptions,
    subcommand: &MstCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;
    let start = subcommand.start.as_ref();

    info!(
        "Computing minimum spanning tree with algorithm '{}'",
        subcommand.algorithm
    );
    let forest = match subcommand.algorithm.as_str() {
        "prim" => Prim::compute_minimum_spanning_tree(&graph, start),
        "kruskal" => {
            if start.is_some() {
                warn!("Kruskal's algorithm ignores the start vertex");
            }
            Kruskal::compute_minimum_spanning_tree(&graph, start)
        }
        unknown => {
            error!("Unknown spanning tree algorithm '{}'", unknown);
            return Err(ErrorKind::Parameter.into());
        }
    };
    info!(
        "Spanning tree has {} edges and total weight {}",
        forest.len(),
        forest.total_weight()
    );

    let mut output = open_output(subcommand.output.as_deref())?;
    for edge in &forest {
        writeln!(output, "{} {} {}", edge.from, edge.to, edge.weight)?;
    }
    output.flush()?;

    Ok(())
}

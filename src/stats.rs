use crate::util::{read_graph, CliGraph};
use crate::CliOptions;
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use weightgraph::algo::components::{ConnectedComponentsAlgorithm, UnionFindComponents};
use weightgraph::interface::total_weight;

#[derive(Parser)]
pub struct StatsCommand {
    #[clap(short, long, help = "The input file in edge list format")]
    pub input: String,

    #[clap(
        short,
        long,
        help = "A file to output the statistics computed by this command formatted as a LaTeX table"
    )]
    pub latex: Option<String>,
}

/// Minimum, maximum, median and mean of a list of sizes.
struct SizeStatistics {
    min: usize,
    max: usize,
    median: usize,
    mean: f64,
}

impl SizeStatistics {
    /// Returns `None` if there are no sizes.
    fn new(sizes: &[usize]) -> Option<Self> {
        let min = *sizes.iter().min()?;
        let max = *sizes.iter().max()?;
        let median = statistical::median(sizes);
        let mean =
            statistical::mean(&sizes.iter().map(|&size| size as f64).collect::<Vec<_>>());
        Some(Self {
            min,
            max,
            median,
            mean,
        })
    }

    fn log(&self, name: &str) {
        info!(
            "{}: min {}, max {}, median {}, mean {:.1}",
            name, self.min, self.max, self.median, self.mean
        );
    }

    fn write_latex(
        statistics: &Option<Self>,
        name: &str,
        latex_file: &mut impl Write,
    ) -> crate::Result<()> {
        match statistics {
            Some(statistics) => {
                writeln!(latex_file, "min {} & {} \\\\", name, statistics.min)?;
                writeln!(latex_file, "max {} & {} \\\\", name, statistics.max)?;
                writeln!(latex_file, "median {} & {} \\\\", name, statistics.median)?;
                writeln!(latex_file, "mean {} & {:.1} \\\\", name, statistics.mean)?;
            }
            None => {
                for aggregate in ["min", "max", "median", "mean"] {
                    writeln!(latex_file, "{} {} & N/A \\\\", aggregate, name)?;
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn print_statistics(
    _options: &CliOptions,
    subcommand: &StatsCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;
    let mut latex_file = if let Some(latex_file_name) = &subcommand.latex {
        info!("Writing LaTeX table to: {}", latex_file_name);
        Some(BufWriter::new(File::create(latex_file_name)?))
    } else {
        None
    };

    print_graph_statistics(&graph, &mut latex_file)?;

    if let Some(latex_file) = latex_file.as_mut() {
        latex_file.flush()?;
    }
    Ok(())
}

fn print_graph_statistics(
    graph: &CliGraph,
    latex_file: &mut Option<impl Write>,
) -> crate::Result<()> {
    info!("");
    info!(" === Graph Statistics === ");
    info!("");

    let edges = graph.edges();
    let negative_edge_count = edges.iter().filter(|edge| edge.weight < 0.0).count();
    let total = total_weight(&edges);
    info!("{} vertices, {} edges", graph.vertex_count(), edges.len());
    info!("Total edge weight: {}", total);
    if negative_edge_count > 0 {
        warn!(
            "{} edges have negative weight, every connected component containing one has a negative cycle",
            negative_edge_count
        );
    }

    let components = UnionFindComponents::compute_connected_components(graph);
    let component_sizes: Vec<_> = components.iter().map(Vec::len).collect();
    let isolated_vertex_count = component_sizes.iter().filter(|&&size| size == 1).count();
    info!(
        "{} connected components, of which {} are isolated vertices",
        components.len(),
        isolated_vertex_count
    );
    let component_statistics = SizeStatistics::new(&component_sizes);
    if let Some(component_statistics) = &component_statistics {
        component_statistics.log("Component size");
    }

    let degrees: Vec<_> = graph
        .adjacency_lists()
        .map(|(_, neighbors)| neighbors.len())
        .collect();
    let degree_statistics = SizeStatistics::new(&degrees);
    if let Some(degree_statistics) = &degree_statistics {
        degree_statistics.log("Degree");
    }

    if let Some(latex_file) = latex_file.as_mut() {
        writeln!(latex_file, "vertices & {} \\\\", graph.vertex_count())?;
        writeln!(latex_file, "edges & {} \\\\", edges.len())?;
        writeln!(latex_file, "negative edges & {} \\\\", negative_edge_count)?;
        writeln!(latex_file, "total weight & {} \\\\", total)?;
        writeln!(latex_file, "components & {} \\\\", components.len())?;
        SizeStatistics::write_latex(&component_statistics, "component size", latex_file)?;
        SizeStatistics::write_latex(&degree_statistics, "degree", latex_file)?;
    }

    Ok(())
}

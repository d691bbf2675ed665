use crate::util::{open_output, read_graph};
use crate::{CliOptions, ErrorKind};
use clap::Parser;
use log::{error, info};
use std::io::Write;
use weightgraph::algo::components::{
    BfsComponents, ConnectedComponentsAlgorithm, DfsComponents, UnionFindComponents,
};

#[derive(Parser)]
pub struct ComponentsCommand {
    #[clap(short, long, help = "The input file in edge list format")]
    pub input: String,

    #[clap(
        short,
        long,
        default_value = "bfs",
        help = "The algorithm to use, one of bfs, dfs, union-find"
    )]
    pub algorithm: String,

    #[clap(
        short,
        long,
        help = "The file the components are written to, one component per line. If not given, the components are written to stdout"
    )]
    pub output: Option<String>,
}

pub(crate) fn compute_components(
    _options: &CliOptions,
    subcommand: &ComponentsCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    info!(
        "Computing connected components with algorithm '{}'",
        subcommand.algorithm
    );
    let components = match subcommand.algorithm.as_str() {
        "bfs" => BfsComponents::compute_connected_components(&graph),
        "dfs" => DfsComponents::compute_connected_components(&graph),
        "union-find" => UnionFindComponents::compute_connected_components(&graph),
        unknown => {
            error!("Unknown components algorithm '{}'", unknown);
            return Err(ErrorKind::Parameter.into());
        }
    };
    info!("Found {} connected components", components.len());

    let mut output = open_output(subcommand.output.as_deref())?;
    for component in &components {
        writeln!(output, "{}", component.join(" "))?;
    }
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::compute_components;
    use crate::util::write_test_graph;
    use crate::{CliOptions, Command, ErrorKind};
    use clap::Parser;

    fn run_components(input: &str, algorithm: &str, output: &str) -> crate::Result<()> {
        let options = CliOptions::parse_from([
            "weightgraph", "components", "-i", input, "-a", algorithm, "-o", output,
        ]);
        match &options.subcommand {
            Command::Components(subcommand) => compute_components(&options, subcommand),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_components_command() {
        let directory = tempfile::tempdir().unwrap();
        let input = write_test_graph(directory.path());
        let output = directory.path().join("components.txt");
        let output = output.to_str().unwrap();

        for algorithm in ["bfs", "dfs", "union-find"] {
            run_components(&input, algorithm, output).unwrap();
            let components: Vec<Vec<String>> = std::fs::read_to_string(output)
                .unwrap()
                .lines()
                .map(|line| {
                    let mut component: Vec<_> = line.split(' ').map(str::to_string).collect();
                    component.sort();
                    component
                })
                .collect();
            assert_eq!(
                components,
                vec![vec!["A", "B", "C", "D"], vec!["X", "Y"]],
                "algorithm {}",
                algorithm
            );
        }

        let result = run_components(&input, "kosaraju", output);
        assert!(matches!(result.unwrap_err().kind(), ErrorKind::Parameter));
    }
}

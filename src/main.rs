#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod components;
mod generate;
mod mst;
mod shortest_path;
mod stats;
mod util;
mod verify;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        Graph(weightgraph::error::Error, weightgraph::error::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }

        VerificationFailed(mismatch_count: usize) {
            description("the algorithms disagree on the input graph, see the log for more details")
            display("the algorithms disagree on the input graph in {} checks, see the log for more details", mismatch_count)
        }
    }
}

#[derive(Parser)]
#[clap(name = "weightgraph", version = env!("CARGO_PKG_VERSION"))]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(about = "Computes the connected components of the input graph.")]
    Components(components::ComponentsCommand),
    #[clap(about = "Computes a minimum spanning tree of the input graph.")]
    Mst(mst::MstCommand),
    #[clap(about = "Computes a shortest path between two vertices of the input graph.")]
    ShortestPath(shortest_path::ShortestPathCommand),
    #[clap(about = "Generates a random connected graph and writes it as edge list.")]
    Generate(generate::GenerateCommand),
    #[clap(about = "Prints statistics about the input graph.")]
    Stats(stats::StatsCommand),
    /// Runs all algorithms on the input graph and checks that they agree.
    Verify(verify::VerifyCommand),
}

// The main is unpacked from an error-chain macro.
// The real main is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Could not initialise logging: {}", error);
        return;
    }

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Components(subcommand) => components::compute_components(options, subcommand),
        Command::Mst(subcommand) => mst::compute_minimum_spanning_tree(options, subcommand),
        Command::ShortestPath(subcommand) => {
            shortest_path::compute_shortest_path(options, subcommand)
        }
        Command::Generate(subcommand) => generate::generate_graph(options, subcommand),
        Command::Stats(subcommand) => stats::print_statistics(options, subcommand),
        Command::Verify(subcommand) => verify::verify(options, subcommand),
    }?;

    info!("Done");
    Ok(())
}

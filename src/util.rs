use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use weightgraph::io::read_edge_list_from_file;
use weightgraph::WeightedGraph;

/// Graphs read by the command line interface have string labels and floating point weights.
pub type CliGraph = WeightedGraph<String, f64>;

pub fn read_graph(input: &str) -> crate::Result<CliGraph> {
    info!("Reading graph from: {}", input);
    let graph: CliGraph = read_edge_list_from_file(input).map_err(|error| {
        error!("Error reading graph file");
        error
    })?;
    info!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Opens the given file for writing, or stdout if there is no file.
pub fn open_output(output: Option<&str>) -> crate::Result<Box<dyn Write>> {
    Ok(match output {
        Some(output) => {
            info!("Writing output to: {}", output);
            Box::new(BufWriter::new(File::create(output)?))
        }
        None => Box::new(std::io::stdout()),
    })
}

/// Returns true if both weights are infinite or equal up to floating point rounding.
pub fn weights_agree(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        a == b
    } else {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }
}

pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Writes a graph with the components `{A, B, C, D}` and `{X, Y}` into the given directory and returns its path.
#[cfg(test)]
pub(crate) fn write_test_graph(directory: &std::path::Path) -> String {
    let graph: CliGraph = vec![
        ("A", "B", 4.0),
        ("B", "C", 3.0),
        ("B", "D", 2.0),
        ("D", "A", 1.0),
        ("X", "Y", 0.5),
    ]
    .into_iter()
    .map(|(a, b, weight)| (a.to_string(), b.to_string(), weight))
    .collect();
    let path = directory.join("graph.txt");
    weightgraph::io::write_edge_list_to_file(&graph, &path).unwrap();
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::{format_path, weights_agree};

    #[test]
    fn test_weights_agree() {
        assert!(weights_agree(0.1 + 0.2, 0.3));
        assert!(weights_agree(f64::INFINITY, f64::INFINITY));
        assert!(!weights_agree(f64::INFINITY, 1e300));
        assert!(!weights_agree(1.0, 1.001));
    }

    #[test]
    fn test_format_path() {
        let path = vec!["A".to_string(), "D".to_string(), "B".to_string()];
        assert_eq!(format_path(&path), "A -> D -> B");
    }
}

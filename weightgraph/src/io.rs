//! The edge list format is line based.
//! Blank lines and lines starting with `#` are ignored.
//! A line `u v w` adds the edge `{u, v}` with weight `w`, and a line with a single token `v` adds the isolated vertex `v`.
//! Tokens are separated by arbitrary whitespace.
//!
//! ```text
//! # a triangle and an isolated vertex
//! A B 4
//! B C 2.5
//! C A 3
//! D
//! ```

use crate::error::{ErrorKind, Result};
use crate::implementation::WeightedGraph;
use crate::interface::Weight;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Reads a graph in edge list format from the given reader.
///
/// A repeated edge overwrites the weight of the earlier one, and self-loops are ignored.
/// Fails with `EdgeListSyntax` if a line does not consist of one or three tokens or a vertex does not parse,
/// and with `WeightParse` if a weight does not parse.
pub fn read_edge_list<VertexLabel, WeightType, Reader>(
    reader: Reader,
) -> Result<WeightedGraph<VertexLabel, WeightType>>
where
    VertexLabel: Ord + Clone + Debug + FromStr,
    WeightType: Weight + FromStr,
    Reader: Read,
{
    let mut graph = WeightedGraph::new();

    for (line_index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<_> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            [vertex] => graph.add_vertex(parse_vertex(vertex, line_number, &line)?),
            [a, b, weight] => {
                let a = parse_vertex(a, line_number, &line)?;
                let b = parse_vertex(b, line_number, &line)?;
                let weight = weight
                    .parse()
                    .map_err(|_| ErrorKind::WeightParse(line_number, weight.to_string()))?;
                if let Some(previous) = graph.add_edge(a, b, weight) {
                    debug!(
                        "Line {} overwrites weight {:?} with {:?}",
                        line_number, previous, weight
                    );
                }
            }
            _ => return Err(ErrorKind::EdgeListSyntax(line_number, line.clone()).into()),
        }
    }

    debug!(
        "Read edge list with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn parse_vertex<VertexLabel: FromStr>(
    token: &str,
    line_number: usize,
    line: &str,
) -> Result<VertexLabel> {
    token
        .parse()
        .map_err(|_| ErrorKind::EdgeListSyntax(line_number, line.to_string()).into())
}

/// Reads a graph in edge list format from the given file.
pub fn read_edge_list_from_file<VertexLabel, WeightType, P: AsRef<Path>>(
    path: P,
) -> Result<WeightedGraph<VertexLabel, WeightType>>
where
    VertexLabel: Ord + Clone + Debug + FromStr,
    WeightType: Weight + FromStr,
{
    read_edge_list(File::open(path)?)
}

/// Writes the given graph in edge list format to the given writer.
///
/// Vertices without edges are written first, one per line, then every edge once, in the order of [`WeightedGraph::edges`].
pub fn write_edge_list<VertexLabel, WeightType, Writer>(
    graph: &WeightedGraph<VertexLabel, WeightType>,
    writer: &mut Writer,
) -> Result<()>
where
    VertexLabel: Ord + Clone + Debug + Display,
    WeightType: Weight + Display,
    Writer: Write,
{
    for (vertex, neighbors) in graph.adjacency_lists() {
        if neighbors.is_empty() {
            writeln!(writer, "{}", vertex)?;
        }
    }
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", edge.from, edge.to, edge.weight)?;
    }
    Ok(())
}

/// Writes the given graph in edge list format to the given file.
pub fn write_edge_list_to_file<VertexLabel, WeightType, P: AsRef<Path>>(
    graph: &WeightedGraph<VertexLabel, WeightType>,
    path: P,
) -> Result<()>
where
    VertexLabel: Ord + Clone + Debug + Display,
    WeightType: Weight + Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_edge_list(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        read_edge_list, read_edge_list_from_file, write_edge_list, write_edge_list_to_file,
    };
    use crate::error::ErrorKind;
    use crate::implementation::WeightedGraph;

    #[test]
    fn test_read_edge_list() {
        let input = "# a triangle\nA B 4\n\n  B   C 2.5\nC A 3\nD\nA B 1\n";
        let graph: WeightedGraph<String, f64> = read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(&"B".to_string(), &"C".to_string()), Some(2.5));
        assert_eq!(graph.edge_weight(&"A".to_string(), &"B".to_string()), Some(1.0));
        assert_eq!(graph.degree(&"D".to_string()), Some(0));
    }

    #[test]
    fn test_read_errors_carry_line_numbers() {
        let result = read_edge_list::<String, i32, _>("A B 1\nA B\n".as_bytes());
        match result.unwrap_err().kind() {
            ErrorKind::EdgeListSyntax(line, content) => {
                assert_eq!(*line, 2);
                assert_eq!(content, "A B");
            }
            other => panic!("unexpected error: {}", other),
        }

        let result = read_edge_list::<String, i32, _>("# header\nA B x1\n".as_bytes());
        match result.unwrap_err().kind() {
            ErrorKind::WeightParse(line, weight) => {
                assert_eq!(*line, 2);
                assert_eq!(weight, "x1");
            }
            other => panic!("unexpected error: {}", other),
        }

        let result = read_edge_list::<u32, i32, _>("1 -2 5\n".as_bytes());
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::EdgeListSyntax(1, _)
        ));
    }

    #[test]
    fn test_write_edge_list() {
        let mut graph: WeightedGraph<u32, i64> =
            vec![(3, 1, -2), (1, 2, 7)].into_iter().collect();
        graph.add_vertex(9);
        graph.add_vertex(0);

        let mut output = Vec::new();
        write_edge_list(&graph, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output.clone()).unwrap(),
            "0\n9\n1 2 7\n1 3 -2\n"
        );
        assert_eq!(read_edge_list::<u32, i64, _>(&output[..]).unwrap(), graph);
    }

    #[test]
    fn test_file_round_trip() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("graph.txt");
        let mut graph: WeightedGraph<u32, i64> =
            vec![(1, 2, 7), (3, 1, -2), (4, 5, 0)].into_iter().collect();
        graph.add_vertex(9);

        write_edge_list_to_file(&graph, &path).unwrap();
        let read: WeightedGraph<u32, i64> = read_edge_list_from_file(&path).unwrap();
        assert_eq!(read, graph);
        assert_eq!(read.degree(&9), Some(0));

        let missing = directory.path().join("missing.txt");
        let result = read_edge_list_from_file::<u32, i64, _>(&missing);
        assert!(matches!(result.unwrap_err().kind(), ErrorKind::Io(_)));
    }
}

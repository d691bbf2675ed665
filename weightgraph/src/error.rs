error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        VertexNotFound(vertex: String) {
            description("vertex not found in graph")
            display("vertex not found in graph: {}", vertex)
        }

        EdgeNotFound(from: String, to: String) {
            description("edge not found in graph")
            display("edge not found in graph: {} - {}", from, to)
        }

        NegativeCycle {
            description("the graph contains a negative cycle reachable from the start vertex, shortest paths are undefined")
            display("the graph contains a negative cycle reachable from the start vertex, shortest paths are undefined")
        }

        EdgeListSyntax(line: usize, content: String) {
            description("malformed edge list line")
            display("malformed edge list line {}: '{}'", line, content)
        }

        WeightParse(line: usize, weight: String) {
            description("edge weight could not be parsed")
            display("edge weight in line {} could not be parsed: '{}'", line, weight)
        }
    }
}

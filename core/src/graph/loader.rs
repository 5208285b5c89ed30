// Graph Input Assembly
//
// The front end feeds graphs from three sources: a fixed example set,
// "source target weight" lines, and a JSON document with an `edges`
// list. Structural failures surface as MalformedInput; the query is
// rejected and the caller re-prompts.

use super::{Edge, Graph};
use crate::RouteError;
use serde::Deserialize;
use std::path::Path as FsPath;

#[derive(Debug, Deserialize)]
struct GraphDocument {
    edges: Vec<Edge>,
}

/// The fixed example graph used by the interactive front end.
pub fn example_graph() -> Graph {
    let mut graph = Graph::new();
    for (source, target, weight) in [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "D", 3.0),
        ("C", "B", 1.0),
        ("C", "D", 5.0),
        ("D", "E", 2.0),
        ("B", "E", 6.0),
    ] {
        graph.add_edge(source, target, weight);
    }
    graph
}

/// Parse one "source target weight" line, e.g. `A B 4`.
pub fn parse_edge_line(line: &str) -> Result<(String, String, f64), RouteError> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(target), Some(weight), None) => {
            let weight = weight.parse::<f64>().map_err(|e| {
                RouteError::MalformedInput(format!("bad edge weight {weight:?}: {e}"))
            })?;
            Ok((source.to_string(), target.to_string(), weight))
        }
        _ => Err(RouteError::MalformedInput(format!(
            "expected 'source target weight', got {line:?}"
        ))),
    }
}

/// Build a graph from a JSON document holding an `edges` list of
/// `{source, target, weight}` records.
pub fn from_json_str(json: &str) -> Result<Graph, RouteError> {
    let document: GraphDocument =
        serde_json::from_str(json).map_err(|e| RouteError::MalformedInput(e.to_string()))?;
    let mut graph = Graph::new();
    for edge in document.edges {
        graph.add_edge(edge.source, edge.target, edge.weight);
    }
    Ok(graph)
}

/// Read and parse a JSON graph file.
pub fn from_json_file(path: impl AsRef<FsPath>) -> Result<Graph, RouteError> {
    let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        RouteError::MalformedInput(format!("{}: {e}", path.as_ref().display()))
    })?;
    from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_example_graph_shape() {
        let graph = example_graph();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(graph.neighbors("A").len(), 2);
        assert!(graph.neighbors("E").is_empty());
    }

    #[test]
    fn test_parse_edge_line() {
        let (source, target, weight) = parse_edge_line("A B 4").unwrap();
        assert_eq!(source, "A");
        assert_eq!(target, "B");
        assert_eq!(weight, 4.0);
    }

    #[test]
    fn test_parse_edge_line_extra_whitespace() {
        let (source, target, weight) = parse_edge_line("  A   B   4.5 ").unwrap();
        assert_eq!((source.as_str(), target.as_str(), weight), ("A", "B", 4.5));
    }

    #[test]
    fn test_parse_edge_line_missing_field() {
        assert!(matches!(
            parse_edge_line("A B"),
            Err(RouteError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_parse_edge_line_trailing_garbage() {
        assert!(parse_edge_line("A B 4 extra").is_err());
    }

    #[test]
    fn test_parse_edge_line_bad_weight() {
        assert!(matches!(
            parse_edge_line("A B heavy"),
            Err(RouteError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"edges": [
            {"source": "A", "target": "B", "weight": 4},
            {"source": "B", "target": "C", "weight": 1.5}
        ]}"#;
        let graph = from_json_str(json).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("B"), &[("C".to_string(), 1.5)]);
    }

    #[test]
    fn test_from_json_str_missing_field() {
        let json = r#"{"edges": [{"source": "A", "weight": 4}]}"#;
        assert!(matches!(
            from_json_str(json),
            Err(RouteError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_json_str_not_a_document() {
        assert!(from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"edges": [{{"source": "X", "target": "Y", "weight": 2}}]}}"#
        )
        .unwrap();
        let graph = from_json_file(file.path()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains("X") && graph.contains("Y"));
    }

    #[test]
    fn test_from_json_file_missing() {
        assert!(matches!(
            from_json_file("/nonexistent/graph.json"),
            Err(RouteError::MalformedInput(_))
        ));
    }
}

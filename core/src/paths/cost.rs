// Path Cost Evaluation
//
// Charges the first matching outgoing edge per consecutive pair, in
// adjacency order. With parallel edges this can disagree with the
// engine, whose relaxation considers every parallel edge; known
// approximation. A consecutive pair with no edge at all silently
// contributes zero; well-formed paths derived from the graph never hit
// that branch.

use super::Path;
use crate::graph::Graph;

/// Sum of edge weights along `path`.
pub fn path_cost(graph: &Graph, path: &Path) -> f64 {
    let mut total = 0.0;
    for pair in path.nodes().windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if let Some((_, weight)) = graph
            .neighbors(current)
            .iter()
            .find(|(neighbor, _)| neighbor == next)
        {
            total += weight;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::loader::example_graph;
    use crate::search::shortest_path_search;

    #[test]
    fn test_cost_of_shortest_path() {
        let graph = example_graph();
        let path = Path::from_nodes(
            ["A", "C", "B", "D", "E"].map(String::from).to_vec(),
        );
        assert_eq!(path_cost(&graph, &path), 8.0);
    }

    #[test]
    fn test_cost_matches_engine_distance() {
        let graph = example_graph();
        let outcome = shortest_path_search(&graph, "A", "E").unwrap();
        let path = crate::paths::reconstruct_path(&outcome.predecessors, "A", "E");
        assert_eq!(path_cost(&graph, &path), outcome.distance_to("E"));
    }

    #[test]
    fn test_cost_of_single_node_path() {
        let graph = example_graph();
        let path = Path::from_nodes(vec!["A".to_string()]);
        assert_eq!(path_cost(&graph, &path), 0.0);
    }

    #[test]
    fn test_parallel_edges_first_match_wins() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("A", "B", 1.0);
        let path = Path::from_nodes(vec!["A".into(), "B".into()]);
        assert_eq!(path_cost(&graph, &path), 5.0);
    }

    #[test]
    fn test_missing_edge_contributes_zero() {
        let graph = example_graph();
        // No direct A -> E edge; the segment silently costs nothing.
        let path = Path::from_nodes(vec!["A".into(), "E".into()]);
        assert_eq!(path_cost(&graph, &path), 0.0);
    }
}

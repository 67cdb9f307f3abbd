use rand::Rng;

use crate::error::GraphError;
use crate::graph::{Graph, Kind, VertexId};

/// Generates a G(n, p) graph on the ids `0..vertex_count`.
///
/// Every possible edge (every ordered pair for directed graphs, every unordered pair for
/// undirected ones) is added independently with probability `edge_probability`.
/// Self-loops are never generated.
pub fn random_graph<K: Kind>(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut impl Rng,
) -> Result<Graph<K>, GraphError> {
    let mut graph = Graph::from_edges(0..vertex_count as VertexId, std::iter::empty())?;
    add_random_edges(&mut graph, edge_probability, rng)?;
    Ok(graph)
}

/// Like [`random_graph`], but first lays down a random spanning tree rooted at `0`.
///
/// Undirected results are always connected; directed results reach every vertex from `0`.
pub fn random_connected_graph<K: Kind>(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut impl Rng,
) -> Result<Graph<K>, GraphError> {
    let mut graph = Graph::from_edges(0..vertex_count as VertexId, std::iter::empty())?;
    for child in 1..vertex_count as VertexId {
        let parent = rng.gen_range(0..child);
        graph.add_edge(parent, child)?;
    }
    add_random_edges(&mut graph, edge_probability, rng)?;
    Ok(graph)
}

fn add_random_edges<K: Kind>(
    graph: &mut Graph<K>,
    edge_probability: f64,
    rng: &mut impl Rng,
) -> Result<(), GraphError> {
    let probability = edge_probability.clamp(0.0, 1.0);
    let count = graph.num_vertices() as VertexId;

    for start in 0..count {
        let first_end = if K::DIRECTED { 0 } else { start + 1 };
        for end in first_end..count {
            if start == end || graph.contains_edge(start, end) {
                continue;
            }
            if rng.gen_bool(probability) {
                graph.add_edge(start, end)?;
            }
        }
    }
    Ok(())
}

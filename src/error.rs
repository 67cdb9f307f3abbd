//! Error types shared by the graph, the dominating set generators and the loader.

use thiserror::Error;

use crate::graph::VertexId;

/// Failures raised by graph mutation, connectivity queries and dominating set generation.
///
/// Every variant aborts the single operation that raised it. Mutations committed earlier
/// in the same call stay in place; a failed `add_edge` never registers a partial neighbor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id below zero was inserted.
    #[error("Vertex value must be positive, got {0}.")]
    InvalidVertex(VertexId),

    #[error("Vertex {0} already exists.")]
    DuplicateVertex(VertexId),

    #[error("Vertex {0} does not exist.")]
    UnknownVertex(VertexId),

    #[error("Edge ({0}, {1}) already exists.")]
    DuplicateEdge(VertexId, VertexId),

    #[error("Edge ({0}, {1}) does not exist.")]
    UnknownEdge(VertexId, VertexId),

    /// Connectivity was queried on a graph without vertices.
    #[error("There are no vertices in the graph.")]
    EmptyGraph,

    /// The connected strategy declined to run because some vertex has no incident edge.
    #[error("No connected dominating set: the graph has vertices without any incident edge.")]
    NoConnectedSet,

    /// The connected strategy ran out of frontier before covering every vertex.
    #[error("No connected dominating set: {uncovered} vertices are unreachable from the covered region.")]
    DisconnectedGraph { uncovered: usize },
}

/// Failures raised while reading an edge list into a graph.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed edge list: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: `{field}` is not a vertex id")]
    Parse { line: u64, field: String },

    #[error("line {line}: expected two vertex ids per record")]
    MissingEndpoint { line: u64 },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

//! Serializable summary of one dominating set computation.

use std::time::Duration;

use serde::Serialize;

use crate::benchmark::Strategy;
use crate::dominating::{DominatingSet, verify};
use crate::graph::{Graph, Kind, VertexId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub directed: bool,
    pub vertices: usize,
    pub edges: usize,
    pub size: usize,
    pub dominating_set: Vec<VertexId>,
    pub pick_order: Vec<VertexId>,
    pub verified: bool,
    pub elapsed_micros: u64,
}

impl Report {
    pub fn new<K: Kind>(
        strategy: Strategy,
        graph: &Graph<K>,
        set: &DominatingSet,
        elapsed: Duration,
    ) -> Self {
        Self {
            strategy,
            directed: graph.is_directed(),
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
            size: set.len(),
            dominating_set: set.ids(),
            pick_order: set.pick_order().to_vec(),
            verified: verify(set, graph),
            elapsed_micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }
}

use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::DominatingSet;
use crate::error::GraphError;
use crate::graph::{Graph, Kind, Vertex, VertexId};

/// When the connected strategy refuses graphs that contain a vertex without incident edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum IsolationCheck {
    /// Only directed graphs are checked.
    #[default]
    DirectedOnly,
    Always,
    Never,
}

impl IsolationCheck {
    fn applies(self, directed: bool) -> bool {
        match self {
            IsolationCheck::DirectedOnly => directed,
            IsolationCheck::Always => true,
            IsolationCheck::Never => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectedGreedyConfig {
    pub isolation_check: IsolationCheck,
}

/// The best vertex of a selection round.
///
/// Field order matters: candidates compare by degree first and fall back to the id,
/// so on equal degree the larger id wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    degree: usize,
    id: VertexId,
}

fn most_connected<'a>(
    vertices: impl IntoIterator<Item = &'a Vertex>,
    degree: impl Fn(&Vertex) -> usize,
) -> Option<Candidate> {
    vertices
        .into_iter()
        .map(|vertex| Candidate {
            degree: degree(vertex),
            id: vertex.id(),
        })
        .max()
}

/// Builds dominating sets on a private clone of the seed graph.
///
/// The greedy strategy tears the clone down while it runs, so each generator produces a
/// single set; both entry points consume it.
#[derive(Debug, Clone)]
pub struct DominatingSetGenerator<K: Kind> {
    graph: Graph<K>,
    dominating_set: DominatingSet,
    covered: BTreeSet<VertexId>,
}

impl<K: Kind> DominatingSetGenerator<K> {
    pub fn new(seed: &Graph<K>) -> Self {
        Self {
            graph: seed.clone(),
            dominating_set: DominatingSet::new(),
            covered: BTreeSet::new(),
        }
    }

    /// Repeatedly takes the vertex with the largest closed neighborhood and removes that
    /// neighborhood from the graph, until no vertex is left.
    pub fn generate_greedy(mut self) -> Result<DominatingSet, GraphError> {
        self.add_self_loops()?;

        while let Some(pick) = most_connected(self.graph.vertices(), Vertex::out_degree) {
            let Some(vertex) = self.graph.vertex(pick.id).cloned() else {
                break;
            };
            let egonet: Vec<VertexId> = vertex.neighbors().iter().copied().collect();
            self.dominating_set.insert(vertex);

            for id in egonet {
                self.graph.remove_vertex(id)?;
            }
        }

        Ok(self.dominating_set)
    }

    /// Grows the set from the most connected vertex, always picking the covered vertex
    /// with the most uncovered neighbors next.
    ///
    /// When no covered vertex can cover anything new, an uncovered vertex next to the
    /// covered region is taken instead. If there is none either, the remaining vertices
    /// can not be reached and [`GraphError::DisconnectedGraph`] is returned.
    pub fn generate_connected_greedy(
        mut self,
        config: &ConnectedGreedyConfig,
    ) -> Result<DominatingSet, GraphError> {
        if config.isolation_check.applies(K::DIRECTED) && self.has_isolated_vertices() {
            return Err(GraphError::NoConnectedSet);
        }

        let Some(first) = most_connected(self.graph.vertices(), Vertex::out_degree) else {
            return Ok(self.dominating_set);
        };
        self.take(first.id);

        while self.covered.len() < self.graph.num_vertices() {
            let next = self
                .best_frontier_vertex()
                .or_else(|| self.best_diversion())
                .ok_or(GraphError::DisconnectedGraph {
                    uncovered: self.graph.num_vertices() - self.covered.len(),
                })?;
            self.take(next);
        }

        Ok(self.dominating_set)
    }

    fn add_self_loops(&mut self) -> Result<(), GraphError> {
        let ids: Vec<VertexId> = self.graph.vertex_ids().collect();
        for id in ids {
            if !self.graph.contains_edge(id, id) {
                self.graph.add_edge(id, id)?;
            }
        }
        Ok(())
    }

    fn has_isolated_vertices(&self) -> bool {
        self.graph
            .vertex_ids()
            .any(|id| self.graph.incident_edges(id).next().is_none())
    }

    fn is_covered(&self, id: VertexId) -> bool {
        self.dominating_set.contains(id) || self.covered.contains(&id)
    }

    fn uncovered_neighbors(&self, vertex: &Vertex) -> usize {
        vertex
            .neighbors()
            .iter()
            .filter(|&&id| !self.is_covered(id))
            .count()
    }

    fn best_frontier_vertex(&self) -> Option<VertexId> {
        let frontier = self.covered.iter().filter_map(|&id| self.graph.vertex(id));
        most_connected(frontier, |vertex| self.uncovered_neighbors(vertex))
            .filter(|candidate| candidate.degree > 0)
            .map(|candidate| candidate.id)
    }

    fn best_diversion(&self) -> Option<VertexId> {
        let bordering = self.graph.vertices().filter(|vertex| {
            !self.is_covered(vertex.id())
                && vertex.neighbors().iter().any(|&id| self.is_covered(id))
        });
        most_connected(bordering, |vertex| self.uncovered_neighbors(vertex))
            .map(|candidate| candidate.id)
    }

    fn take(&mut self, id: VertexId) {
        let Some(vertex) = self.graph.vertex(id) else {
            return;
        };
        self.covered.insert(id);
        self.covered.extend(vertex.neighbors().iter().copied());
        self.dominating_set.insert(vertex.clone());
    }
}

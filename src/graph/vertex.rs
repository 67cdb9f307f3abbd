use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::VertexId;

/// A vertex and the ids of its (out-)neighbors.
///
/// Neighbors are references into the owning graph's vertex table, expressed as ids.
/// Equality, ordering and hashing look at the id only, so a vertex taken from one graph
/// compares equal to the vertex with the same id in any clone of it.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    neighbors: BTreeSet<VertexId>,
}

impl Vertex {
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Ids of the vertices reachable over one edge, in ascending order.
    pub fn neighbors(&self) -> &BTreeSet<VertexId> {
        &self.neighbors
    }

    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains(&id)
    }

    pub(super) fn add_neighbor(&mut self, id: VertexId) {
        self.neighbors.insert(id);
    }

    pub(super) fn remove_neighbor(&mut self, id: VertexId) {
        self.neighbors.remove(&id);
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex{{{}}}", self.id)
    }
}

//! Greedy dominating set construction and verification.
//!
//! The free functions are the usual entry points; [`DominatingSetGenerator`] is exposed
//! for callers that want to pass a [`ConnectedGreedyConfig`] or keep the clone around.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::error::GraphError;
use crate::graph::{Graph, Kind, Vertex, VertexId};

pub mod generator;
pub mod verifier;

pub use self::generator::{ConnectedGreedyConfig, DominatingSetGenerator, IsolationCheck};
pub use self::verifier::{undominated, verify, verify_ids};

/// Approximates a minimum dominating set of any graph, connected or not.
pub fn greedy<K: Kind>(graph: &Graph<K>) -> Result<DominatingSet, GraphError> {
    DominatingSetGenerator::new(graph).generate_greedy()
}

/// Approximates a minimum dominating set whose members grow out of each other's neighborhoods.
///
/// Fails with [`GraphError::NoConnectedSet`] for directed graphs that contain a vertex without
/// any incident edge, and with [`GraphError::DisconnectedGraph`] when the covered region can
/// not be extended any further.
pub fn connected_greedy<K: Kind>(graph: &Graph<K>) -> Result<DominatingSet, GraphError> {
    connected_greedy_with(graph, &ConnectedGreedyConfig::default())
}

pub fn connected_greedy_with<K: Kind>(
    graph: &Graph<K>,
    config: &ConnectedGreedyConfig,
) -> Result<DominatingSet, GraphError> {
    DominatingSetGenerator::new(graph).generate_connected_greedy(config)
}

/// A set of vertices that remembers the order in which they were picked.
///
/// Two sets are equal when they hold the same vertex ids, regardless of pick order.
#[derive(Debug, Clone, Default)]
pub struct DominatingSet {
    members: BTreeSet<Vertex>,
    order: Vec<VertexId>,
}

impl DominatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `vertex`, returning `false` if a vertex with the same id is already present.
    pub fn insert(&mut self, vertex: Vertex) -> bool {
        let id = vertex.id();
        let inserted = self.members.insert(vertex);
        if inserted {
            self.order.push(id);
        }
        inserted
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.members.contains(&Vertex::new(id))
    }

    /// Member ids in ascending order.
    pub fn ids(&self) -> Vec<VertexId> {
        self.members.iter().map(Vertex::id).collect()
    }

    /// Member ids in the order they were picked.
    pub fn pick_order(&self) -> &[VertexId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.members.iter()
    }
}

impl PartialEq for DominatingSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for DominatingSet {}

impl FromIterator<Vertex> for DominatingSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        let mut set = Self::new();
        for vertex in iter {
            set.insert(vertex);
        }
        set
    }
}

impl FromIterator<VertexId> for DominatingSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        iter.into_iter().map(Vertex::new).collect()
    }
}

impl<'a> IntoIterator for &'a DominatingSet {
    type Item = &'a Vertex;
    type IntoIter = std::collections::btree_set::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for DominatingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.members.iter().map(Vertex::id).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_pick_order() {
        let forward: DominatingSet = [1_i64, 5].into_iter().collect();
        let backward: DominatingSet = [5_i64, 1].into_iter().collect();

        assert_eq!(forward, backward);
        assert_eq!(forward.pick_order(), &[1, 5]);
        assert_eq!(backward.pick_order(), &[5, 1]);
        assert_eq!(backward.ids(), vec![1, 5]);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut set = DominatingSet::new();
        assert!(set.insert(Vertex::new(3)));
        assert!(!set.insert(Vertex::new(3)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn display() {
        let set: DominatingSet = [4_i64, 2, 9].into_iter().collect();
        assert_eq!(set.to_string(), "{2, 4, 9}");
        assert_eq!(DominatingSet::new().to_string(), "{}");
    }
}

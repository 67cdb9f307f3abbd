use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::VertexId;

/// An ordered pair of vertex ids with an optional weight.
///
/// The weight is carried along but never consulted: equality, ordering and hashing
/// are defined on `(a, b)` alone.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
    weight: f64,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self::with_weight(a, b, 0.0)
    }

    pub fn with_weight(a: VertexId, b: VertexId, weight: f64) -> Self {
        Self { a, b, weight }
    }

    pub fn a(&self) -> VertexId {
        self.a
    }

    pub fn b(&self) -> VertexId {
        self.b
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.endpoints().cmp(&other.endpoints())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge{{{}, {}, {}}}", self.a, self.b, self.weight)
    }
}

//! The two graph variants.
//!
//! A variant differs from the other in exactly two places: how an edge is built from the
//! endpoints given by the caller, and which neighbor references the edge registers.

use std::collections::BTreeMap;
use std::fmt::Debug;

use super::{Edge, Vertex, VertexId};

pub trait Kind: Clone + Copy + Debug + Default {
    const DIRECTED: bool;

    /// Builds the stored form of the edge between `start` and `end`.
    fn edge(start: VertexId, end: VertexId) -> Edge;

    /// Registers the neighbor references an edge implies.
    fn link(vertices: &mut BTreeMap<VertexId, Vertex>, edge: &Edge);

    /// Drops the neighbor references registered by [`Kind::link`].
    fn unlink(vertices: &mut BTreeMap<VertexId, Vertex>, edge: &Edge);
}

/// Edges point from `start` to `end`; only `start` learns about its neighbor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directed;

/// Edges are stored with `a <= b` and make both endpoints neighbors of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Undirected;

impl Kind for Directed {
    const DIRECTED: bool = true;

    fn edge(start: VertexId, end: VertexId) -> Edge {
        Edge::new(start, end)
    }

    fn link(vertices: &mut BTreeMap<VertexId, Vertex>, edge: &Edge) {
        if let Some(vertex) = vertices.get_mut(&edge.a()) {
            vertex.add_neighbor(edge.b());
        }
    }

    fn unlink(vertices: &mut BTreeMap<VertexId, Vertex>, edge: &Edge) {
        if let Some(vertex) = vertices.get_mut(&edge.a()) {
            vertex.remove_neighbor(edge.b());
        }
    }
}

impl Kind for Undirected {
    const DIRECTED: bool = false;

    fn edge(start: VertexId, end: VertexId) -> Edge {
        Edge::new(start.min(end), start.max(end))
    }

    fn link(vertices: &mut BTreeMap<VertexId, Vertex>, edge: &Edge) {
        if let Some(vertex) = vertices.get_mut(&edge.a()) {
            vertex.add_neighbor(edge.b());
        }
        if let Some(vertex) = vertices.get_mut(&edge.b()) {
            vertex.add_neighbor(edge.a());
        }
    }

    fn unlink(vertices: &mut BTreeMap<VertexId, Vertex>, edge: &Edge) {
        if let Some(vertex) = vertices.get_mut(&edge.a()) {
            vertex.remove_neighbor(edge.b());
        }
        if let Some(vertex) = vertices.get_mut(&edge.b()) {
            vertex.remove_neighbor(edge.a());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_normalized() {
        assert_eq!(Undirected::edge(5, 2).endpoints(), (2, 5));
        assert_eq!(Undirected::edge(2, 5).endpoints(), (2, 5));
        assert_eq!(Directed::edge(5, 2).endpoints(), (5, 2));
    }
}

//! A module for representing directed and undirected graphs keyed by integer vertex ids.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::marker::PhantomData;

use crate::error::GraphError;
use crate::seen::Seen;

pub mod edge;
pub mod kind;
pub mod vertex;

pub use self::edge::Edge;
pub use self::kind::{Directed, Kind, Undirected};
pub use self::vertex::Vertex;

pub type VertexId = i64;

pub type DirectedGraph = Graph<Directed>;
pub type UndirectedGraph = Graph<Undirected>;

/// A sparse graph stored as a vertex table plus per-vertex edge buckets.
///
/// Every edge is filed under both of its endpoints, also for directed graphs, so that
/// either endpoint can find it when it is removed. Neighbor references are ids into the
/// same vertex table; the graph owns all of its storage and `clone` yields a fully
/// independent copy.
///
/// Both tables are ordered by id, which makes every scan over the graph deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph<K: Kind> {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeMap<VertexId, BTreeSet<Edge>>,
    num_edges: usize,
    kind: PhantomData<K>,
}

impl<K: Kind> Graph<K> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            num_edges: 0,
            kind: PhantomData,
        }
    }

    /// Builds a graph from a list of vertex ids and a list of `(start, end)` pairs.
    pub fn from_edges(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for id in vertices {
            graph.add_vertex(id)?;
        }
        for (start, end) in edges {
            graph.add_edge(start, end)?;
        }
        Ok(graph)
    }

    /// Returns whether edges of this graph point from `start` to `end`.
    pub fn is_directed(&self) -> bool {
        K::DIRECTED
    }

    /// Returns the number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether a vertex with `id` exists.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Returns the vertex with `id`, if any.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Iterates over all vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterates over all vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Returns the neighbor ids of `id`, or `None` if the vertex does not exist.
    pub fn neighbors(&self, id: VertexId) -> Option<&BTreeSet<VertexId>> {
        self.vertices.get(&id).map(Vertex::neighbors)
    }

    /// Iterates over the edges filed under `id`, whichever endpoint it is.
    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.get(&id).into_iter().flatten()
    }

    /// Iterates over every distinct edge once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .flat_map(|(&id, bucket)| bucket.iter().filter(move |edge| edge.a() == id))
    }

    /// Returns whether the edge between `start` and `end` exists, normalized per variant.
    pub fn contains_edge(&self, start: VertexId, end: VertexId) -> bool {
        self.has_edge(&K::edge(start, end))
    }

    /// Inserts a vertex with no neighbors.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        if id < 0 {
            return Err(GraphError::InvalidVertex(id));
        }
        self.vertices.insert(id, Vertex::new(id));
        Ok(())
    }

    /// Inserts the vertex unless it is already present.
    pub fn ensure_vertex(&mut self, id: VertexId) -> Result<Seen<VertexId>, GraphError> {
        if self.contains_vertex(id) {
            return Ok(Seen::Old(id));
        }
        self.add_vertex(id)?;
        Ok(Seen::New(id))
    }

    /// Removes a vertex together with every edge incident to it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        if !self.contains_vertex(id) {
            return Err(GraphError::UnknownVertex(id));
        }

        let incident: Vec<Edge> = self.incident_edges(id).copied().collect();
        for edge in incident {
            self.remove_edge(edge.a(), edge.b())?;
        }

        self.edges.remove(&id);
        self.vertices.remove(&id);
        Ok(())
    }

    /// Adds an unweighted edge between two existing vertices.
    pub fn add_edge(&mut self, start: VertexId, end: VertexId) -> Result<(), GraphError> {
        self.add_weighted_edge(start, end, 0.0)
    }

    /// Inserts an edge carrying `weight`. The weight does not take part in edge identity.
    pub fn add_weighted_edge(
        &mut self,
        start: VertexId,
        end: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        let edge = K::edge(start, end);
        let edge = Edge::with_weight(edge.a(), edge.b(), weight);

        for endpoint in [edge.a(), edge.b()] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::UnknownVertex(endpoint));
            }
        }
        if self.has_edge(&edge) {
            return Err(GraphError::DuplicateEdge(edge.a(), edge.b()));
        }

        for endpoint in buckets(edge) {
            self.edges.entry(endpoint).or_default().insert(edge);
        }
        K::link(&mut self.vertices, &edge);
        self.num_edges += 1;
        Ok(())
    }

    /// Removes the edge between `start` and `end` together with its neighbor references.
    pub fn remove_edge(&mut self, start: VertexId, end: VertexId) -> Result<(), GraphError> {
        let edge = K::edge(start, end);
        if !self.has_edge(&edge) {
            return Err(GraphError::UnknownEdge(edge.a(), edge.b()));
        }

        for endpoint in buckets(edge) {
            if let Some(bucket) = self.edges.get_mut(&endpoint) {
                bucket.remove(&edge);
            }
        }
        K::unlink(&mut self.vertices, &edge);
        self.num_edges -= 1;
        Ok(())
    }

    /// Breadth-first search from the smallest vertex id, following neighbor references.
    ///
    /// For directed graphs only out-edges are followed, so the answer is whether every
    /// vertex is reachable from that start vertex.
    pub fn is_connected(&self) -> Result<bool, GraphError> {
        let Some(&start) = self.vertices.keys().next() else {
            return Err(GraphError::EmptyGraph);
        };

        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(id) = queue.pop_front() {
            if seen.len() == self.vertices.len() {
                return Ok(true);
            }
            for &neighbor in self.vertices[&id].neighbors() {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(seen.len() == self.vertices.len())
    }

    /// Returns a string in DOT format representing the graph.
    pub fn to_dot(&self) -> String {
        let (header, arrow) = if K::DIRECTED {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut dot = format!("{header} G {{\n");
        for id in self.vertex_ids() {
            dot.push_str(&format!("    {id};\n"));
        }
        for edge in self.edges() {
            dot.push_str(&format!("    {} {arrow} {};\n", edge.a(), edge.b()));
        }
        dot.push('}');
        dot
    }

    fn has_edge(&self, edge: &Edge) -> bool {
        buckets(*edge).any(|endpoint| {
            self.edges
                .get(&endpoint)
                .is_some_and(|bucket| bucket.contains(edge))
        })
    }
}

/// Ids of the buckets an edge is filed under; a self-loop has only one.
fn buckets(edge: Edge) -> impl Iterator<Item = VertexId> {
    std::iter::once(edge.a()).chain((!edge.is_loop()).then_some(edge.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered<K: Kind>(count: VertexId) -> Graph<K> {
        Graph::from_edges(1..=count, std::iter::empty()).unwrap()
    }

    #[test]
    fn test_graph_new() {
        let graph = DirectedGraph::new();
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.is_directed());
        assert!(!UndirectedGraph::new().is_directed());
    }

    #[test]
    fn test_add_and_remove_vertex() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(1).unwrap();
        assert!(graph.contains_vertex(1));
        assert_eq!(graph.vertex(1), Some(&Vertex::new(1)));

        graph.remove_vertex(1).unwrap();
        assert!(!graph.contains_vertex(1));
    }

    #[test]
    fn test_vertex_errors() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex(1).unwrap();

        assert_eq!(graph.add_vertex(1), Err(GraphError::DuplicateVertex(1)));
        assert_eq!(graph.add_vertex(-1), Err(GraphError::InvalidVertex(-1)));
        assert_eq!(graph.remove_vertex(2), Err(GraphError::UnknownVertex(2)));
        assert_eq!(
            graph.remove_vertex(2).unwrap_err().to_string(),
            "Vertex 2 does not exist."
        );
        assert_eq!(graph.num_vertices(), 1);
    }

    #[test]
    fn test_ensure_vertex() {
        let mut graph = DirectedGraph::new();
        assert_eq!(graph.ensure_vertex(7), Ok(Seen::New(7)));
        assert_eq!(graph.ensure_vertex(7), Ok(Seen::Old(7)));
        assert_eq!(graph.ensure_vertex(-3), Err(GraphError::InvalidVertex(-3)));
        assert_eq!(graph.num_vertices(), 1);
    }

    #[test]
    fn test_removing_vertex_clears_edge_buckets() {
        let mut graph = numbered::<Directed>(3);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(3, 1).unwrap();
        graph.add_edge(2, 1).unwrap();
        assert_eq!(graph.num_edges(), 3);

        graph.remove_vertex(1).unwrap();

        assert_eq!(graph.incident_edges(1).count(), 0);
        assert_eq!(graph.incident_edges(2).count(), 0);
        assert_eq!(graph.incident_edges(3).count(), 0);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_removing_vertex_clears_neighbor_references() {
        let mut graph = numbered::<Directed>(3);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 1).unwrap();
        graph.add_edge(3, 1).unwrap();

        graph.remove_vertex(1).unwrap();

        assert!(graph.neighbors(2).unwrap().is_empty());
        assert!(graph.neighbors(3).unwrap().is_empty());
        assert_eq!(graph.neighbors(1), None);
    }

    #[test]
    fn test_directed_edges() {
        let mut graph = numbered::<Directed>(2);
        graph.add_edge(1, 2).unwrap();

        assert!(graph.incident_edges(1).any(|e| *e == Edge::new(1, 2)));
        assert!(graph.incident_edges(2).any(|e| *e == Edge::new(1, 2)));
        assert!(graph.vertex(1).unwrap().has_neighbor(2));
        assert!(!graph.vertex(2).unwrap().has_neighbor(1));
        assert!(graph.contains_edge(1, 2));
        assert!(!graph.contains_edge(2, 1));

        // the reverse direction is a different edge
        graph.add_edge(2, 1).unwrap();
        assert_eq!(graph.num_edges(), 2);

        graph.remove_edge(1, 2).unwrap();
        assert!(!graph.vertex(1).unwrap().has_neighbor(2));
        assert!(graph.vertex(2).unwrap().has_neighbor(1));
        assert_eq!(graph.incident_edges(1).count(), 1);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_undirected_edges() {
        let mut graph = numbered::<Undirected>(2);
        graph.add_edge(2, 1).unwrap();

        assert!(graph.incident_edges(1).any(|e| e.endpoints() == (1, 2)));
        assert!(graph.vertex(1).unwrap().has_neighbor(2));
        assert!(graph.vertex(2).unwrap().has_neighbor(1));
        assert!(graph.contains_edge(1, 2));
        assert_eq!(graph.add_edge(1, 2), Err(GraphError::DuplicateEdge(1, 2)));

        graph.remove_edge(2, 1).unwrap();
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.neighbors(1).unwrap().is_empty());
        assert!(graph.neighbors(2).unwrap().is_empty());
    }

    #[test]
    fn test_edge_errors() {
        let mut graph = numbered::<Directed>(2);
        assert_eq!(graph.add_edge(1, 3), Err(GraphError::UnknownVertex(3)));
        assert_eq!(graph.add_edge(4, 1), Err(GraphError::UnknownVertex(4)));
        assert_eq!(graph.remove_edge(1, 2), Err(GraphError::UnknownEdge(1, 2)));

        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.add_edge(1, 2), Err(GraphError::DuplicateEdge(1, 2)));
        assert_eq!(graph.num_edges(), 1);
        // a rejected edge leaves no neighbor behind
        assert_eq!(graph.neighbors(1).unwrap().len(), 1);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = numbered::<Undirected>(1);
        graph.add_edge(1, 1).unwrap();
        assert_eq!(graph.num_edges(), 1);
        assert!(graph.vertex(1).unwrap().has_neighbor(1));
        assert_eq!(graph.incident_edges(1).count(), 1);
        assert_eq!(graph.add_edge(1, 1), Err(GraphError::DuplicateEdge(1, 1)));

        graph.remove_edge(1, 1).unwrap();
        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.vertex(1).unwrap().has_neighbor(1));

        graph.add_edge(1, 1).unwrap();

        graph.remove_vertex(1).unwrap();
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_weights_are_carried() {
        let mut graph = numbered::<Undirected>(2);
        graph.add_weighted_edge(2, 1, 1.5).unwrap();
        let edge = graph.edges().next().unwrap();
        assert_eq!(edge.endpoints(), (1, 2));
        assert_eq!(edge.weight(), 1.5);
        assert_eq!(
            graph.add_weighted_edge(1, 2, 3.0),
            Err(GraphError::DuplicateEdge(1, 2))
        );
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = UndirectedGraph::from_edges(1..=4, [(1, 2), (3, 2), (4, 4)]).unwrap();
        let edges: Vec<_> = graph.edges().map(Edge::endpoints).collect();
        assert_eq!(edges, vec![(1, 2), (2, 3), (4, 4)]);
        assert_eq!(graph.num_edges(), edges.len());
    }

    #[test]
    fn test_is_connected_directed() {
        let mut graph = numbered::<Directed>(4);
        for i in 2..=4 {
            graph.add_edge(1, i).unwrap();
        }
        assert_eq!(graph.is_connected(), Ok(true));

        let graph = DirectedGraph::from_edges(1..=4, [(1, 2), (1, 3), (4, 1)]).unwrap();
        assert_eq!(graph.is_connected(), Ok(false));
    }

    #[test]
    fn test_is_connected_undirected() {
        let graph = UndirectedGraph::from_edges(1..=4, [(1, 2), (1, 3), (4, 1)]).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));

        let graph = UndirectedGraph::from_edges(1..=4, [(1, 2), (1, 3)]).unwrap();
        assert_eq!(graph.is_connected(), Ok(false));
    }

    #[test]
    fn test_is_connected_edge_cases() {
        assert_eq!(
            UndirectedGraph::new().is_connected(),
            Err(GraphError::EmptyGraph)
        );
        assert_eq!(numbered::<Undirected>(1).is_connected(), Ok(true));
        assert_eq!(numbered::<Undirected>(3).is_connected(), Ok(false));
        assert_eq!(numbered::<Directed>(2).is_connected(), Ok(false));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = UndirectedGraph::from_edges(1..=3, [(1, 2), (2, 3)]).unwrap();
        let mut copy = original.clone();

        copy.remove_vertex(2).unwrap();
        copy.add_vertex(9).unwrap();
        copy.add_edge(1, 3).unwrap();

        assert_eq!(original.num_vertices(), 3);
        assert_eq!(original.num_edges(), 2);
        assert!(original.contains_edge(1, 2));
        assert!(!original.contains_edge(1, 3));
        assert!(original.vertex(1).unwrap().has_neighbor(2));
    }

    #[test]
    fn test_clone_of_clone() {
        let original = DirectedGraph::from_edges(0..5, [(0, 1), (1, 2), (2, 0), (3, 4)]).unwrap();
        let once = original.clone();
        let twice = once.clone();

        let ids = |g: &DirectedGraph| g.vertex_ids().collect::<Vec<_>>();
        let edges = |g: &DirectedGraph| g.edges().copied().collect::<BTreeSet<_>>();
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(edges(&once), edges(&twice));
        assert_eq!(edges(&original), edges(&twice));
        assert_eq!(twice.num_edges(), 4);
    }

    #[test]
    fn test_dot() {
        let graph = DirectedGraph::from_edges(0..2, [(0, 1)]).unwrap();
        assert_eq!(graph.to_dot(), "digraph G {\n    0;\n    1;\n    0 -> 1;\n}");

        let graph = UndirectedGraph::from_edges(0..2, [(1, 0)]).unwrap();
        assert_eq!(graph.to_dot(), "graph G {\n    0;\n    1;\n    0 -- 1;\n}");
    }
}

use std::collections::BTreeSet;

use crate::graph::{Graph, Kind, Vertex, VertexId};

/// Returns whether `candidate` dominates `graph`.
///
/// Neighborhoods are read from `graph` itself, never from the candidate vertices, so sets
/// produced on a clone (whose neighbor lists were changed or torn down) verify correctly.
pub fn verify<'a, K: Kind>(
    candidate: impl IntoIterator<Item = &'a Vertex>,
    graph: &Graph<K>,
) -> bool {
    verify_ids(candidate.into_iter().map(Vertex::id), graph)
}

/// Same as [`verify`] for a candidate given as plain ids.
pub fn verify_ids<K: Kind>(
    candidate: impl IntoIterator<Item = VertexId>,
    graph: &Graph<K>,
) -> bool {
    let dominated = dominated_by(candidate, graph);
    graph.vertex_ids().all(|id| dominated.contains(&id))
}

/// Lists the vertices of `graph` that `candidate` leaves undominated, in ascending order.
pub fn undominated<K: Kind>(
    candidate: impl IntoIterator<Item = VertexId>,
    graph: &Graph<K>,
) -> Vec<VertexId> {
    let dominated = dominated_by(candidate, graph);
    graph
        .vertex_ids()
        .filter(|id| !dominated.contains(id))
        .collect()
}

// Ids unknown to `graph` contribute nothing.
fn dominated_by<K: Kind>(
    candidate: impl IntoIterator<Item = VertexId>,
    graph: &Graph<K>,
) -> BTreeSet<VertexId> {
    let mut dominated = BTreeSet::new();
    for id in candidate {
        if let Some(vertex) = graph.vertex(id) {
            dominated.extend(vertex.neighbors().iter().copied());
            dominated.insert(id);
        }
    }
    dominated
}

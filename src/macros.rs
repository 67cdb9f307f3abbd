// Macros to simplify building small graphs, mostly in tests.

/// Builds a graph from a vertex id range and `start => end` pairs.
///
/// Expands to [`Graph::from_edges`](crate::graph::Graph::from_edges), so the result is a
/// `Result<_, GraphError>`.
///
/// ```
/// use domset::graph::DirectedGraph;
///
/// let graph = domset::graph!(DirectedGraph; 1..=3; 1 => 2, 2 => 3).unwrap();
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[macro_export]
macro_rules! graph {
    ($graph:ty; $vertices:expr) => {
        <$graph>::from_edges($vertices, ::std::iter::empty())
    };
    ($graph:ty; $vertices:expr; $($start:expr => $end:expr),* $(,)?) => {
        <$graph>::from_edges($vertices, [$(($start, $end)),*])
    };
}

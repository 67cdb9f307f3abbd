//! Approximate minimum dominating sets on directed and undirected graphs.

#[macro_use]
mod macros;

pub mod benchmark;
pub mod dominating;
pub mod error;
pub mod graph;
pub mod loader;
pub mod report;
pub mod seen;
pub mod utils;

pub use dominating::{DominatingSet, connected_greedy, greedy, verify};
pub use error::{GraphError, LoadError};
pub use graph::{DirectedGraph, Graph, UndirectedGraph, VertexId};

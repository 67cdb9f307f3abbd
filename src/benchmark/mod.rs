//! Timing both strategies on random graphs.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::dominating::{DominatingSet, connected_greedy, greedy, verify};
use crate::error::GraphError;
use crate::graph::{Directed, Graph, Kind, Undirected};

pub mod formatter;
pub mod random_generation;

use self::formatter::{Formattable, format_duration, format_duration_csv};
pub use self::random_generation::{random_connected_graph, random_graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Strategy {
    Greedy,
    ConnectedGreedy,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Greedy, Strategy::ConnectedGreedy];

    pub fn run<K: Kind>(self, graph: &Graph<K>) -> Result<DominatingSet, GraphError> {
        match self {
            Strategy::Greedy => greedy(graph),
            Strategy::ConnectedGreedy => connected_greedy(graph),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::ConnectedGreedy => write!(f, "connected-greedy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Verified,
    NotDominating,
    /// Two runs on the same graph returned different results.
    Nondeterministic,
    Declined(GraphError),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Verified => write!(f, "verified"),
            Status::NotDominating => write!(f, "not dominating"),
            Status::Nondeterministic => write!(f, "nondeterministic"),
            Status::Declined(GraphError::NoConnectedSet) => write!(f, "isolated vertices"),
            Status::Declined(GraphError::DisconnectedGraph { uncovered }) => {
                write!(f, "{uncovered} unreachable")
            }
            Status::Declined(err) => write!(f, "{err}"),
        }
    }
}

fn format_size(size: &Option<usize>) -> String {
    size.map_or_else(|| "-".to_string(), |size| size.to_string())
}

#[derive(Clone, Debug, Tabled)]
pub struct Outcome {
    #[tabled(rename = "Strategy")]
    pub strategy: Strategy,
    #[tabled(rename = "Variant")]
    pub variant: &'static str,
    #[tabled(rename = "Vertices")]
    pub vertices: usize,
    #[tabled(rename = "Edges")]
    pub edges: usize,
    #[tabled(rename = "Set Size", display_with = "format_size")]
    pub size: Option<usize>,
    #[tabled(rename = "Status")]
    pub status: Status,
    #[tabled(rename = "Time", display_with = "format_duration")]
    pub time: Duration,
}

impl Formattable for Outcome {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.strategy.to_string(),
            self.variant.to_string(),
            self.vertices.to_string(),
            self.edges.to_string(),
            format_size(&self.size),
            self.status.to_string(),
            format_duration_csv(&self.time),
        ]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["Strategy", "Variant", "Vertices", "Edges", "Set Size", "Status", "Time (ns)"]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub edge_probability: f64,
    /// Timed runs per strategy and graph, after one discarded warm-up run.
    pub runs: usize,
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 200, 400],
            edge_probability: 0.05,
            runs: 5,
            seed: 42,
        }
    }
}

/// Outcomes grouped by graph variant, `"directed"` and `"undirected"`.
pub type GroupedOutcomes = BTreeMap<String, Vec<Outcome>>;

/// Generates one directed and one undirected random graph per configured size and times
/// every strategy on each of them.
pub fn run(config: &BenchmarkConfig) -> Result<GroupedOutcomes, GraphError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut grouped = GroupedOutcomes::new();

    for &size in &config.sizes {
        let directed = random_graph::<Directed>(size, config.edge_probability, &mut rng)?;
        let undirected = random_graph::<Undirected>(size, config.edge_probability, &mut rng)?;

        grouped
            .entry(variant_name(&directed).to_string())
            .or_default()
            .extend(benchmark_graph(&directed, config.runs));
        grouped
            .entry(variant_name(&undirected).to_string())
            .or_default()
            .extend(benchmark_graph(&undirected, config.runs));
    }

    Ok(grouped)
}

pub fn benchmark_graph<K: Kind>(graph: &Graph<K>, runs: usize) -> Vec<Outcome> {
    Strategy::ALL
        .iter()
        .map(|&strategy| benchmark_strategy(graph, strategy, runs))
        .collect()
}

/// Runs `strategy` `runs + 1` times, rejecting the first run as cache warm-up, and
/// averages the remaining times.
///
/// Every timed run is compared against the warm-up result; any difference is reported
/// as [`Status::Nondeterministic`].
pub fn benchmark_strategy<K: Kind>(graph: &Graph<K>, strategy: Strategy, runs: usize) -> Outcome {
    let (expected, _) = timed(graph, strategy);
    let mut total = Duration::ZERO;
    let mut stable = true;

    for _ in 0..runs {
        let (result, time) = timed(graph, strategy);
        stable &= expected == result;
        total += time;
    }

    let (size, status) = classify(&expected, stable, graph);

    Outcome {
        strategy,
        variant: variant_name(graph),
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
        size,
        status,
        time: total / runs.max(1) as u32,
    }
}

fn classify<K: Kind>(
    result: &Result<DominatingSet, GraphError>,
    stable: bool,
    graph: &Graph<K>,
) -> (Option<usize>, Status) {
    match result {
        Ok(set) if !stable => (Some(set.len()), Status::Nondeterministic),
        Err(_) if !stable => (None, Status::Nondeterministic),
        Ok(set) if verify(set, graph) => (Some(set.len()), Status::Verified),
        Ok(set) => (Some(set.len()), Status::NotDominating),
        Err(err) => (None, Status::Declined(*err)),
    }
}

fn variant_name<K: Kind>(graph: &Graph<K>) -> &'static str {
    if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    }
}

fn timed<K: Kind>(
    graph: &Graph<K>,
    strategy: Strategy,
) -> (Result<DominatingSet, GraphError>, Duration) {
    let start = Instant::now();
    let result = strategy.run(graph);
    (result, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    #[test]
    fn outcomes_cover_every_strategy_and_variant() {
        let config = BenchmarkConfig {
            sizes: vec![10, 25],
            edge_probability: 0.3,
            runs: 2,
            seed: 9,
        };
        let grouped = run(&config).unwrap();

        assert_eq!(grouped.len(), 2);
        for outcomes in grouped.values() {
            assert_eq!(outcomes.len(), 4);
            for outcome in outcomes {
                assert_ne!(outcome.status, Status::NotDominating);
            }
            let greedy_outcomes: Vec<_> = outcomes
                .iter()
                .filter(|outcome| outcome.strategy == Strategy::Greedy)
                .collect();
            assert!(greedy_outcomes.iter().all(|outcome| outcome.status == Status::Verified));
        }
    }

    #[test]
    fn declined_runs_have_no_size() {
        let graph = UndirectedGraph::from_edges(0..3, [(0, 1)]).unwrap();
        let outcome = benchmark_strategy(&graph, Strategy::ConnectedGreedy, 1);

        assert_eq!(outcome.size, None);
        assert_eq!(outcome.status.to_string(), "1 unreachable");
        assert_eq!(outcome.to_csv_row()[4], "-");
        assert_eq!(outcome.variant, "undirected");

        let outcome = benchmark_strategy(&graph, Strategy::Greedy, 0);
        assert_eq!(outcome.size, Some(2));
        assert_eq!(outcome.status, Status::Verified);
    }

    #[test]
    fn disagreeing_runs_are_reported() {
        let graph = UndirectedGraph::from_edges(0..3, [(0, 1), (1, 2)]).unwrap();
        let set = greedy(&graph);

        assert_eq!(classify(&set, true, &graph), (Some(1), Status::Verified));
        assert_eq!(
            classify(&set, false, &graph),
            (Some(1), Status::Nondeterministic)
        );

        let declined = Err(GraphError::NoConnectedSet);
        assert_eq!(
            classify(&declined, false, &graph),
            (None, Status::Nondeterministic)
        );

        let partial: Result<DominatingSet, GraphError> = Ok([0_i64].into_iter().collect());
        assert_eq!(
            classify(&partial, true, &graph),
            (Some(1), Status::NotDominating)
        );
        assert_eq!(Status::Nondeterministic.to_string(), "nondeterministic");
    }
}

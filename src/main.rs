//! Command line front end for computing, checking and benchmarking dominating sets.
//!
//! Graphs are read from edge lists with one `start end` pair per line, separated by spaces
//! or tabs unless `--delimiter` says otherwise.
//! Status messages go to stderr so that results on stdout can be piped.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use itertools::Itertools;

use domset::benchmark::formatter::{CsvFormatter, PrettyFormatter};
use domset::benchmark::{self, BenchmarkConfig, Strategy};
use domset::dominating::{
    ConnectedGreedyConfig, IsolationCheck, connected_greedy_with, greedy, undominated,
};
use domset::graph::{Directed, Graph, Kind, Undirected, VertexId};
use domset::loader::{LoaderConfig, load_edge_list_file};
use domset::report::Report;
use domset::utils::json::save_json;

#[derive(Parser, Debug)]
#[command(author, version, about = "Approximate minimum dominating sets of graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Greedy dominating set, no connectivity requirement
    Greedy {
        #[command(flatten)]
        graph: GraphArgs,

        /// Write a JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Dominating set grown outward from the most connected vertex
    Connected {
        #[command(flatten)]
        graph: GraphArgs,

        /// Which graphs are refused when they contain a vertex without incident edges
        #[arg(long, value_enum, default_value = "directed-only")]
        isolation_check: IsolationCheck,

        /// Write a JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that a given set of vertex ids dominates the graph
    Verify {
        #[command(flatten)]
        graph: GraphArgs,

        /// Comma separated vertex ids
        #[arg(short, long, value_delimiter = ',', required = true)]
        set: Vec<VertexId>,
    },
    /// Time both strategies on seeded random graphs
    Bench {
        /// Comma separated vertex counts
        #[arg(long, value_delimiter = ',', default_value = "100,200,400")]
        sizes: Vec<usize>,

        /// Probability of each possible edge
        #[arg(short, long, default_value_t = 0.05)]
        probability: f64,

        /// Timed runs per strategy and graph
        #[arg(short, long, default_value_t = 5)]
        runs: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Edge list file
    #[arg(short, long)]
    input: PathBuf,

    /// Read edges as `start -> end` instead of undirected
    #[arg(short, long)]
    directed: bool,

    /// Field separator of the edge list, any run of whitespace if omitted
    #[arg(long)]
    delimiter: Option<char>,
}

impl GraphArgs {
    fn loader_config(&self) -> Result<LoaderConfig> {
        let delimiter = self
            .delimiter
            .map(|delimiter| {
                u8::try_from(delimiter)
                    .map_err(|_| anyhow!("delimiter must be a single byte, got {delimiter:?}"))
            })
            .transpose()?;
        Ok(LoaderConfig {
            delimiter,
            ..LoaderConfig::default()
        })
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Csv,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli.command) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Greedy { graph, output } => {
            let config = ConnectedGreedyConfig::default();
            if graph.directed {
                solve::<Directed>(&graph, Strategy::Greedy, &config, output.as_deref())
            } else {
                solve::<Undirected>(&graph, Strategy::Greedy, &config, output.as_deref())
            }
        }
        Command::Connected {
            graph,
            isolation_check,
            output,
        } => {
            let config = ConnectedGreedyConfig { isolation_check };
            if graph.directed {
                solve::<Directed>(&graph, Strategy::ConnectedGreedy, &config, output.as_deref())
            } else {
                solve::<Undirected>(&graph, Strategy::ConnectedGreedy, &config, output.as_deref())
            }
        }
        Command::Verify { graph, set } => {
            if graph.directed {
                check::<Directed>(&graph, &set)
            } else {
                check::<Undirected>(&graph, &set)
            }
        }
        Command::Bench {
            sizes,
            probability,
            runs,
            seed,
            format,
        } => {
            let config = BenchmarkConfig {
                sizes,
                edge_probability: probability,
                runs,
                seed,
            };
            bench(&config, format)
        }
    }
}

fn load<K: Kind>(args: &GraphArgs) -> Result<Graph<K>> {
    let config = args.loader_config()?;
    let mut graph = Graph::new();
    let summary = load_edge_list_file(&mut graph, &args.input, &config)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    eprintln!(
        "{} {} vertices and {} edges from {}",
        "Loaded".cyan().bold(),
        graph.num_vertices(),
        graph.num_edges(),
        args.input.display()
    );
    if summary.duplicate_edges > 0 {
        eprintln!(
            "{} skipped {} duplicate edges",
            "warning:".yellow().bold(),
            summary.duplicate_edges
        );
    }

    Ok(graph)
}

fn solve<K: Kind>(
    args: &GraphArgs,
    strategy: Strategy,
    config: &ConnectedGreedyConfig,
    output: Option<&Path>,
) -> Result<()> {
    let graph = load::<K>(args)?;

    let start = Instant::now();
    let result = match strategy {
        Strategy::Greedy => greedy(&graph),
        Strategy::ConnectedGreedy => connected_greedy_with(&graph, config),
    };
    let elapsed = start.elapsed();
    let set = result.with_context(|| format!("{strategy} found no dominating set"))?;

    let report = Report::new(strategy, &graph, &set, elapsed);
    if !report.verified {
        eprintln!(
            "{} the {strategy} set does not dominate the graph",
            "warning:".yellow().bold()
        );
    }

    eprintln!(
        "{} {} vertices in {:?}",
        "Selected".green().bold(),
        report.size,
        elapsed
    );
    println!("{set}");

    if let Some(path) = output {
        save_json(&report, path)
            .map_err(|err| anyhow!("failed to write {}: {err}", path.display()))?;
        eprintln!("{} report to {}", "Wrote".cyan().bold(), path.display());
    }

    Ok(())
}

fn check<K: Kind>(args: &GraphArgs, set: &[VertexId]) -> Result<()> {
    let graph = load::<K>(args)?;

    let unknown = set
        .iter()
        .filter(|&&id| !graph.contains_vertex(id))
        .join(", ");
    if !unknown.is_empty() {
        eprintln!("{} ignoring unknown vertices {unknown}", "warning:".yellow().bold());
    }

    let missing = undominated(set.iter().copied(), &graph);
    if !missing.is_empty() {
        bail!(
            "{} of {} vertices are not dominated: {}",
            missing.len(),
            graph.num_vertices(),
            missing.iter().join(", ")
        );
    }

    println!(
        "{} {} vertices dominate all {} vertices",
        "OK".green().bold(),
        set.len(),
        graph.num_vertices()
    );
    Ok(())
}

fn bench(config: &BenchmarkConfig, format: Format) -> Result<()> {
    eprintln!(
        "{} sizes {:?}, edge probability {}, {} runs, seed {}",
        "Benchmarking".cyan().bold(),
        config.sizes,
        config.edge_probability,
        config.runs,
        config.seed
    );
    let grouped = benchmark::run(config).context("failed to generate benchmark graphs")?;

    match format {
        Format::Table => print!("{}", PrettyFormatter::format_grouped(&grouped)),
        Format::Csv => {
            let outcomes: Vec<_> = grouped.into_values().flatten().collect();
            let csv = CsvFormatter::format(&outcomes)
                .map_err(|err| anyhow!("failed to format outcomes: {err}"))?;
            print!("{csv}");
        }
    }

    Ok(())
}

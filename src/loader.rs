//! Reading edge lists such as the SNAP `facebook_combined.txt` dataset into a graph.
//!
//! Each record holds two vertex ids; anything after them is ignored. Endpoints are added
//! on first sight, so the file does not need a separate vertex section. By default the
//! ids are separated by any run of spaces and tabs, as in the SNAP files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, LoadError};
use crate::graph::{Graph, Kind, VertexId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field separator; `None` splits on any run of ASCII whitespace.
    pub delimiter: Option<u8>,
    /// Records starting with this byte are skipped.
    pub comment: Option<u8>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            comment: Some(b'#'),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub records: usize,
    pub vertices_added: usize,
    pub edges_added: usize,
    /// Records naming an edge the graph already had, e.g. `2 1` after `1 2` when undirected.
    pub duplicate_edges: usize,
}

pub fn load_edge_list_file<K: Kind>(
    graph: &mut Graph<K>,
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<LoadSummary, LoadError> {
    let file = File::open(path)?;
    load_edge_list(graph, BufReader::new(file), config)
}

pub fn load_edge_list<K: Kind>(
    graph: &mut Graph<K>,
    reader: impl Read,
    config: &LoaderConfig,
) -> Result<LoadSummary, LoadError> {
    let mut records = csv::ReaderBuilder::new()
        .delimiter(config.delimiter.unwrap_or(b' '))
        .comment(config.comment)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut summary = LoadSummary::default();

    for record in records.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());

        let fields: Vec<&str> = match config.delimiter {
            None => record.iter().flat_map(str::split_ascii_whitespace).collect(),
            // runs of delimiters produce empty fields
            Some(_) => record.iter().filter(|field| !field.is_empty()).collect(),
        };
        let mut fields = fields.into_iter();
        let (start, end) = match (fields.next(), fields.next()) {
            (None, _) => continue,
            (Some(start), Some(end)) => (parse_id(start, line)?, parse_id(end, line)?),
            (Some(_), None) => return Err(LoadError::MissingEndpoint { line }),
        };
        summary.records += 1;

        for id in [start, end] {
            if graph.ensure_vertex(id)?.is_new() {
                summary.vertices_added += 1;
            }
        }

        match graph.add_edge(start, end) {
            Ok(()) => summary.edges_added += 1,
            Err(GraphError::DuplicateEdge(..)) => summary.duplicate_edges += 1,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(summary)
}

fn parse_id(field: &str, line: u64) -> Result<VertexId, LoadError> {
    field.parse().map_err(|_| LoadError::Parse {
        line,
        field: field.to_string(),
    })
}

//! Plain-text edge lists.
//!
//! One edge per line as `source destination [weight]`, separated by
//! whitespace. Blank lines and lines starting with `#` are skipped and a
//! missing weight means `0`.

use std::path::Path;
use thiserror::Error;
use waygraph_core::{Graph, GraphConfig, Weight};

#[derive(Error, Debug)]
pub enum EdgeListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `source destination [weight]`")]
    MissingField { line: usize },

    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight { line: usize, value: String },

    #[error("line {line}: too many fields")]
    TooManyFields { line: usize },
}

/// A single parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

pub fn parse_edge_list(input: &str) -> Result<Vec<EdgeRecord>, EdgeListError> {
    let mut records = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (Some(source), Some(destination)) = (fields.next(), fields.next()) else {
            return Err(EdgeListError::MissingField { line });
        };
        let weight = match fields.next() {
            Some(value) => value.parse::<Weight>().map_err(|_| EdgeListError::InvalidWeight {
                line,
                value: value.to_string(),
            })?,
            None => 0,
        };
        if fields.next().is_some() {
            return Err(EdgeListError::TooManyFields { line });
        }

        records.push(EdgeRecord {
            source: source.to_string(),
            destination: destination.to_string(),
            weight,
        });
    }

    Ok(records)
}

pub fn read_edge_list(path: impl AsRef<Path>) -> Result<Vec<EdgeRecord>, EdgeListError> {
    let content = std::fs::read_to_string(path)?;
    parse_edge_list(&content)
}

/// Build a graph from the records, inserting in file order
pub fn build_graph(records: Vec<EdgeRecord>, config: GraphConfig) -> Graph<String> {
    let mut graph = Graph::new(config);
    graph.extend_edges(
        records
            .into_iter()
            .map(|r| (r.source, r.destination, r.weight)),
    );
    graph
}

pub fn load_graph(path: impl AsRef<Path>, config: GraphConfig) -> Result<Graph<String>, EdgeListError> {
    Ok(build_graph(read_edge_list(path)?, config))
}

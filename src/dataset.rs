//! Dataset loading: reads a `nodes.csv`/`edges.csv` pair into a [`Hin`].
//!
//! `nodes.csv` is a single column of (trimmed) type labels, one per line,
//! in node-id order. `edges.csv` has at least three comma-separated
//! columns per line; field 0 is the source id, field 2 the destination id,
//! field 1 is ignored (it is not a documented edge type in any dataset this
//! loader has been pointed at, so the edge is treated as untyped).

use std::path::Path;

use crate::error::{HeterogeneousMotifError, Result};
use crate::graph::Hin;

/// Loads a HIN from a dataset directory containing `nodes.csv` and
/// `edges.csv`.
pub fn load_dataset(dir: &Path) -> Result<Hin> {
    let node_types = load_node_types(&dir.join("nodes.csv"))?;
    let edges = load_edges(&dir.join("edges.csv"), node_types.len())?;
    Hin::new(node_types, edges)
}

fn load_node_types(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| io_to_invalid_input(path, source))?;

    let mut node_types = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_to_invalid_input(path, source))?;
        let label = record
            .get(0)
            .ok_or_else(|| HeterogeneousMotifError::InvalidInput {
                path: path.to_path_buf(),
                reason: "node line is empty".to_string(),
            })?
            .trim()
            .to_string();
        node_types.push(label);
    }
    Ok(node_types)
}

fn load_edges(path: &Path, num_nodes: usize) -> Result<Vec<(usize, usize)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| io_to_invalid_input(path, source))?;

    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_to_invalid_input(path, source))?;
        if record.len() < 3 {
            return Err(HeterogeneousMotifError::InvalidInput {
                path: path.to_path_buf(),
                reason: format!(
                    "edge line has {} field(s), need at least 3 (source, ignored, destination)",
                    record.len()
                ),
            });
        }
        let parse = |field: &str| -> Result<usize> {
            field
                .trim()
                .parse::<usize>()
                .map_err(|_| HeterogeneousMotifError::InvalidInput {
                    path: path.to_path_buf(),
                    reason: format!("'{field}' is not a valid node id"),
                })
        };
        let src = parse(&record[0])?;
        let dst = parse(&record[2])?;
        if src >= num_nodes || dst >= num_nodes {
            return Err(HeterogeneousMotifError::InvalidInput {
                path: path.to_path_buf(),
                reason: format!("edge ({src}, {dst}) references a node id outside [0, {num_nodes})"),
            });
        }
        edges.push((src, dst));
    }
    Ok(edges)
}

fn io_to_invalid_input(path: &Path, source: csv::Error) -> HeterogeneousMotifError {
    HeterogeneousMotifError::InvalidInput {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
}

fn csv_to_invalid_input(path: &Path, source: csv::Error) -> HeterogeneousMotifError {
    HeterogeneousMotifError::InvalidInput {
        path: path.to_path_buf(),
        reason: format!("malformed row: {source}"),
    }
}

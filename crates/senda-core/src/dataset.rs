//! Dataset loading
//!
//! Datasets are comma-separated tables with one header row (ignored)
//! followed by one adjacency row per source vertex:
//!
//! ```text
//! column 0        source vertex identity
//! column 1        neighbor count N
//! column 2+3k     k-th neighbor identity, for k in 0..N
//! ```
//!
//! The two columns after each neighbor identity are ignored, as are any
//! trailing columns. The first row naming a source owns its adjacency
//! list; rows for an already-populated source are skipped.

use crate::config::SendaConfig;
use crate::error::{Result, SendaError};
use crate::graph::{Graph, Vertex, VertexId};
use crate::layout::ring_layout;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

const SOURCE_COL: usize = 0;
const NEIGHBOR_COUNT_COL: usize = 1;
const FIRST_NEIGHBOR_COL: usize = 2;
const NEIGHBOR_STRIDE: usize = 3;

/// One parsed adjacency row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub source: VertexId,
    pub neighbors: Vec<VertexId>,
}

/// Parse a dataset into adjacency rows. The first line is a header and
/// is skipped; blank lines are ignored. Line numbers in errors are
/// 1-based.
pub fn parse_table(text: &str) -> Result<Vec<TableRow>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(line, line_no + 1)?);
    }
    Ok(rows)
}

fn parse_row(line: &str, line_no: usize) -> Result<TableRow> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    let source: VertexId = parse_cell(&cells, SOURCE_COL, "source vertex", line_no)?;
    let count: usize = parse_cell(&cells, NEIGHBOR_COUNT_COL, "neighbor count", line_no)?;

    // Cap by what the line can actually hold so a bogus declared count
    // becomes a MalformedRow instead of a huge allocation.
    let mut neighbors = Vec::with_capacity(count.min(cells.len()));
    for i in 0..count {
        let col = FIRST_NEIGHBOR_COL + i * NEIGHBOR_STRIDE;
        neighbors.push(parse_cell(&cells, col, "neighbor vertex", line_no)?);
    }

    Ok(TableRow { source, neighbors })
}

fn parse_cell<T: FromStr>(cells: &[&str], col: usize, what: &str, line_no: usize) -> Result<T> {
    let cell = cells.get(col).ok_or_else(|| {
        SendaError::malformed_row(line_no, format!("missing {what} at column {}", col + 1))
    })?;
    cell.parse::<T>()
        .map_err(|_| SendaError::malformed_row(line_no, format!("invalid {what} {cell:?}")))
}

/// Highest vertex identity mentioned anywhere in the rows
fn infer_vertex_count(rows: &[TableRow]) -> usize {
    let mut highest: VertexId = 0;
    for row in rows {
        highest = highest.max(row.source);
        for &neighbor in &row.neighbors {
            highest = highest.max(neighbor);
        }
    }
    highest as usize
}

/// Build a laid-out graph from adjacency rows.
///
/// Vertices are created for identities `1..=count`, where `count` comes
/// from the config override or from the highest identity the rows
/// mention. Rows naming an identity outside that range are a data
/// error.
pub fn build_graph(rows: &[TableRow], config: &SendaConfig) -> Result<Graph> {
    let count = match config.vertex_count {
        Some(count) => count,
        None => infer_vertex_count(rows),
    };

    let mut graph = Graph::new();
    for (i, pos) in ring_layout(count, config.layout.radius).into_iter().enumerate() {
        graph.add_vertex(Vertex::new((i + 1) as VertexId, pos));
    }

    for row in rows {
        let Some(source) = graph.index_of(row.source) else {
            return Err(SendaError::unknown_vertex(row.source));
        };
        if !graph.adjacency(source).is_empty() {
            tracing::debug!(source = row.source, "duplicate adjacency row ignored");
            continue;
        }
        for &neighbor in &row.neighbors {
            let Some(to) = graph.index_of(neighbor) else {
                return Err(SendaError::unknown_vertex(neighbor));
            };
            graph.add_edge(source, to)?;
        }
    }

    Ok(graph)
}

/// Read, parse, and build a graph from a dataset file
pub fn load_graph(path: &Path, config: &SendaConfig) -> Result<Graph> {
    let start = Instant::now();
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SendaError::DatasetNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SendaError::Io(e)
        }
    })?;

    let rows = parse_table(&text)?;
    let graph = build_graph(&rows, config)?;
    crate::trace_time!(
        start,
        "load_graph",
        rows = rows.len(),
        vertices = graph.vertex_count()
    );
    Ok(graph)
}

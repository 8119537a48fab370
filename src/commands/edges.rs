//! `senda edges` command - list edges
//!
//! All edges in source order, or only those leaving one vertex when an
//! identity is given. Asking about a vertex the graph does not have is
//! a data error.

use senda_core::error::{Result, SendaError};
use senda_core::graph::{Graph, VertexId};
use senda_core::records::format_edge_record;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};

/// Edge entry for JSON output
#[derive(Debug, Clone, Serialize)]
struct EdgeEntry {
    from: VertexId,
    to: VertexId,
}

/// Execute the edges command
pub fn execute(cli: &Cli, graph: &Graph, id: Option<VertexId>) -> Result<()> {
    let vertices = graph.vertices();
    let edges: Vec<(VertexId, VertexId)> = match id {
        Some(id) => {
            let Some(index) = graph.index_of(id) else {
                return Err(SendaError::unknown_vertex(id));
            };
            graph
                .adjacency(index)
                .iter()
                .map(|e| (vertices[e.from].id, vertices[e.to].id))
                .collect()
        }
        None => graph
            .edges()
            .map(|e| (vertices[e.from].id, vertices[e.to].id))
            .collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<EdgeEntry> = edges
                .iter()
                .map(|&(from, to)| EdgeEntry { from, to })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if edges.is_empty() {
                if !cli.quiet {
                    println!("No edges");
                }
            } else {
                for (from, to) in &edges {
                    println!("{} -> {}", from, to);
                }
            }
        }
        OutputFormat::Records => {
            println!("H senda=1 records=1 mode=edges edges={}", edges.len());
            for (from, to) in &edges {
                println!("{}", format_edge_record(*from, *to, false));
            }
        }
    }
    Ok(())
}

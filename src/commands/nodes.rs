//! `senda nodes` command - list vertices
//!
//! One vertex per line with its layout position, in identity order.

use senda_core::error::Result;
use senda_core::graph::{Graph, VertexId};
use senda_core::records::format_node_record;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};

/// Vertex entry for JSON output
#[derive(Debug, Clone, Serialize)]
struct NodeEntry {
    id: VertexId,
    x: f32,
    y: f32,
}

/// Execute the nodes command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<NodeEntry> = graph
                .vertices()
                .iter()
                .map(|v| NodeEntry {
                    id: v.id,
                    x: v.pos.x,
                    y: v.pos.y,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if graph.vertex_count() == 0 {
                if !cli.quiet {
                    println!("No vertices");
                }
            } else {
                for v in graph.vertices() {
                    println!("{} ({:.1}, {:.1})", v.id, v.pos.x, v.pos.y);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H senda=1 records=1 mode=nodes vertices={}",
                graph.vertex_count()
            );
            for v in graph.vertices() {
                println!("{}", format_node_record(v.id, v.pos.x, v.pos.y, false));
            }
        }
    }
    Ok(())
}

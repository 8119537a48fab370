//! `senda path` command - find a path between two vertices
//!
//! A missing path is a valid result, not an error: the command reports
//! it and exits 0, so scripts can probe reachability.

use senda_core::error::Result;
use senda_core::graph::{bfs_path, dfs_path, Algorithm, Graph, PathReport, VertexId};
use senda_core::records::format_path_record;

use crate::cli::{Cli, OutputFormat};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    from: VertexId,
    to: VertexId,
    algorithm: Algorithm,
) -> Result<()> {
    let vertices = match algorithm {
        Algorithm::Bfs => bfs_path(graph, from, to),
        Algorithm::Dfs => dfs_path(graph, from, to),
    };
    let report = PathReport::new(algorithm, from, to, vertices);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if report.found {
                let route = report
                    .vertices
                    .iter()
                    .map(|v| v.id.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!(
                    "{} from {} to {}: {} ({} hops)",
                    algorithm.tag(),
                    from,
                    to,
                    route,
                    report.hops
                );
            } else if !cli.quiet {
                println!("{} from {} to {}: no path", algorithm.tag(), from, to);
            }
        }
        OutputFormat::Records => {
            println!(
                "H senda=1 records=1 mode=path algo={} from={} to={} found={}",
                algorithm, from, to, report.found
            );
            if report.found {
                let ids: Vec<VertexId> = report.vertices.iter().map(|v| v.id).collect();
                println!("{}", format_path_record(&ids));
            }
        }
    }
    Ok(())
}

//! `senda scene` command - emit a renderable snapshot
//!
//! Prints every vertex and edge with path markers plus the status
//! line, in any output format. The records form is one frame: H, N*,
//! E*, optional P, then S.

use senda_core::controller::{Selection, TraversalController};
use senda_core::error::Result;
use senda_core::graph::Graph;
use senda_core::records::{
    format_edge_record, format_node_record, format_path_record, format_status_record,
};
use senda_core::scene::Scene;

use crate::cli::{Cli, OutputFormat};

/// Execute the scene command
pub fn execute(cli: &Cli, graph: &Graph, selection: Selection) -> Result<()> {
    let mut controller = TraversalController::new(selection);
    controller.refresh(graph);
    let scene = Scene::compose(graph, &controller);
    output_scene(cli, &scene)
}

/// Print one scene frame in the requested format. Shared with the
/// explore loop, which emits a frame after every command batch.
pub fn output_scene(cli: &Cli, scene: &Scene) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(scene)?);
        }
        OutputFormat::Human => {
            println!("{}", scene.status);
            if scene.path.is_empty() {
                if !cli.quiet {
                    println!("no path");
                }
            } else {
                let route = scene
                    .path
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!("path: {}", route);
            }
            println!("nodes:");
            for node in &scene.nodes {
                let marker = if node.on_path { " *" } else { "" };
                println!("  {} ({:.1}, {:.1}){}", node.id, node.pos.x, node.pos.y, marker);
            }
            println!("edges:");
            for edge in &scene.edges {
                let marker = if edge.on_path { " *" } else { "" };
                println!("  {} -> {}{}", edge.from, edge.to, marker);
            }
        }
        OutputFormat::Records => {
            println!(
                "H senda=1 records=1 mode=scene vertices={} edges={}",
                scene.nodes.len(),
                scene.edges.len()
            );
            for node in &scene.nodes {
                println!(
                    "{}",
                    format_node_record(node.id, node.pos.x, node.pos.y, node.on_path)
                );
            }
            for edge in &scene.edges {
                println!("{}", format_edge_record(edge.from, edge.to, edge.on_path));
            }
            if !scene.path.is_empty() {
                println!("{}", format_path_record(&scene.path));
            }
            println!("{}", format_status_record(&scene.status));
        }
    }
    Ok(())
}

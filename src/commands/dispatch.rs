//! Command dispatch logic for senda

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use senda_core::controller::Selection;
use senda_core::error::Result;
use senda_core::graph::{Algorithm, VertexId};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Nodes) => handle_nodes(cli, start),

        Some(Commands::Edges { id }) => handle_edges(cli, *id, start),

        Some(Commands::Path { from, to, algo }) => handle_path(cli, *from, *to, *algo, start),

        Some(Commands::Scene { from, to, algo }) => handle_scene(cli, *from, *to, *algo, start),

        Some(Commands::Explore { from, to, algo }) => {
            handle_explore(cli, *from, *to, *algo, start)
        }
    }
}

fn handle_no_command() -> Result<()> {
    println!("senda {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("An interactive graph path explorer.");
    println!();
    println!("Run `senda --help` for usage information.");
    Ok(())
}

fn handle_nodes(cli: &Cli, start: Instant) -> Result<()> {
    let config = commands::helpers::resolve_config(cli)?;
    let graph = commands::helpers::load_graph(&config)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    commands::nodes::execute(cli, &graph)
}

fn handle_edges(cli: &Cli, id: Option<VertexId>, start: Instant) -> Result<()> {
    let config = commands::helpers::resolve_config(cli)?;
    let graph = commands::helpers::load_graph(&config)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    commands::edges::execute(cli, &graph, id)
}

fn handle_path(
    cli: &Cli,
    from: VertexId,
    to: VertexId,
    algo: Option<Algorithm>,
    start: Instant,
) -> Result<()> {
    let config = commands::helpers::resolve_config(cli)?;
    let graph = commands::helpers::load_graph(&config)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    let algorithm = algo.unwrap_or(config.algorithm);
    commands::path::execute(cli, &graph, from, to, algorithm)
}

fn handle_scene(
    cli: &Cli,
    from: VertexId,
    to: VertexId,
    algo: Option<Algorithm>,
    start: Instant,
) -> Result<()> {
    let config = commands::helpers::resolve_config(cli)?;
    let graph = commands::helpers::load_graph(&config)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    let selection = Selection::new(from, to, algo.unwrap_or(config.algorithm));
    commands::scene::execute(cli, &graph, selection)
}

fn handle_explore(
    cli: &Cli,
    from: VertexId,
    to: VertexId,
    algo: Option<Algorithm>,
    start: Instant,
) -> Result<()> {
    let config = commands::helpers::resolve_config(cli)?;
    let graph = commands::helpers::load_graph(&config)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    let selection = Selection::new(from, to, algo.unwrap_or(config.algorithm));
    commands::explore::execute(cli, &graph, selection)
}

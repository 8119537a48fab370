//! CLI argument parsing for senda
//!
//! Uses clap for argument parsing. Global flags: --data, --config,
//! --vertices, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use senda_core::format::OutputFormat;
use senda_core::graph::{Algorithm, VertexId};

/// Senda - interactive graph path explorer
#[derive(Parser, Debug)]
#[command(name = "senda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dataset file with adjacency rows
    #[arg(long, global = true, env = "SENDA_DATA")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to ./senda.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vertex count override (default: inferred from the dataset)
    #[arg(long, global = true)]
    pub vertices: Option<usize>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List vertices with their layout positions
    Nodes,

    /// List edges, optionally only those leaving one vertex
    Edges {
        /// Restrict to edges leaving this vertex
        id: Option<VertexId>,
    },

    /// Find a path between two vertices
    Path {
        /// Starting vertex
        from: VertexId,

        /// Destination vertex
        to: VertexId,

        /// Search algorithm (bfs or dfs; default from config)
        #[arg(long, value_parser = parse_algorithm)]
        algo: Option<Algorithm>,
    },

    /// Emit a scene snapshot: all vertices and edges plus the current path
    Scene {
        /// Starting vertex
        #[arg(long, default_value = "1")]
        from: VertexId,

        /// Destination vertex
        #[arg(long, default_value = "1")]
        to: VertexId,

        /// Search algorithm (bfs or dfs; default from config)
        #[arg(long, value_parser = parse_algorithm)]
        algo: Option<Algorithm>,
    },

    /// Explore interactively: read selection commands from stdin
    ///
    /// Commands (whitespace-separated, one batch per line): src+ src-
    /// dst+ dst- toggle, with arrow-key aliases right/left/up/down and
    /// space for toggle. quit, exit, or EOF ends the session.
    Explore {
        /// Starting vertex
        #[arg(long, default_value = "1")]
        from: VertexId,

        /// Destination vertex
        #[arg(long, default_value = "1")]
        to: VertexId,

        /// Search algorithm (bfs or dfs; default from config)
        #[arg(long, value_parser = parse_algorithm)]
        algo: Option<Algorithm>,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search algorithm from string
fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

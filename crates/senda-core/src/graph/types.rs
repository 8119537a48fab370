//! Core graph types

use crate::error::SendaError;
use crate::layout::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// External vertex identity, as it appears in datasets and on the CLI
pub type VertexId = u32;

/// A vertex: stable identity plus a layout position
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: Vec2,
}

impl Vertex {
    pub fn new(id: VertexId, pos: Vec2) -> Self {
        Vertex { id, pos }
    }
}

// Vertices compare by identity; positions are presentation data.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A directed edge between two vertex slots
///
/// Endpoints are internal indices into the graph's vertex table, not
/// vertex identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

/// Which search drives path queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
}

impl Algorithm {
    /// The other algorithm
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Bfs => Algorithm::Dfs,
            Algorithm::Dfs => Algorithm::Bfs,
        }
    }

    /// Upper-case tag for status lines
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(SendaError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

/// Outcome of a single path query
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub algorithm: Algorithm,
    pub from: VertexId,
    pub to: VertexId,
    pub found: bool,
    pub hops: usize,
    pub vertices: Vec<Vertex>,
}

impl PathReport {
    pub fn new(algorithm: Algorithm, from: VertexId, to: VertexId, vertices: Vec<Vertex>) -> Self {
        PathReport {
            algorithm,
            from,
            to,
            found: !vertices.is_empty(),
            hops: vertices.len().saturating_sub(1),
            vertices,
        }
    }
}

//! Directed graph with breadth-first and depth-first path search
//!
//! Vertices carry a stable external identity and a layout position;
//! searches resolve identities through the graph's id-to-slot map and
//! return full vertex paths.

pub mod adjacency;
pub mod bfs;
pub mod dfs;
mod path;
pub mod types;

pub use adjacency::Graph;
pub use bfs::bfs_path;
pub use dfs::dfs_path;
pub use types::{Algorithm, Edge, PathReport, Vertex, VertexId};

//! Adjacency-list graph storage
//!
//! Vertices live in a flat table; each slot owns the list of edges
//! leaving it, kept in insertion order. A side map resolves external
//! vertex identities to table slots.

use crate::error::{Result, SendaError};
use crate::graph::types::{Edge, Vertex, VertexId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    index_by_id: HashMap<VertexId, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Append a vertex and return its slot index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.index_by_id.insert(vertex.id, index);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        index
    }

    /// Add a directed edge between two slots
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.vertices.len();
        if from >= count {
            return Err(SendaError::EdgeOutOfRange { index: from, count });
        }
        if to >= count {
            return Err(SendaError::EdgeOutOfRange { index: to, count });
        }
        self.adjacency[from].push(Edge { from, to });
        Ok(())
    }

    /// Edges leaving a slot, in insertion order; empty for unknown slots
    pub fn adjacency(&self, index: usize) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Look up a vertex by its external identity
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index_of(id).map(|index| &self.vertices[index])
    }

    /// Resolve an external identity to its slot index
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index_by_id.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// All edges, grouped by source slot
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }
}

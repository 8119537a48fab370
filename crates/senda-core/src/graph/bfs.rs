//! Breadth-first path search

use crate::graph::adjacency::Graph;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Vertex, VertexId};
use std::collections::{HashMap, VecDeque};

/// Shortest path from `from` to `to` by hop count.
///
/// Returns the full vertex path including both endpoints, or an empty
/// vector when either endpoint is unknown or the destination is
/// unreachable. Equal-length candidates resolve by edge insertion
/// order.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn bfs_path(graph: &Graph, from: VertexId, to: VertexId) -> Vec<Vertex> {
    let Some(start) = graph.index_of(from) else {
        tracing::debug!("source vertex not in graph");
        return Vec::new();
    };

    if from == to {
        return vec![graph.vertices()[start]];
    }

    let Some(goal) = graph.index_of(to) else {
        tracing::debug!("destination vertex not in graph");
        return Vec::new();
    };

    // The predecessor map doubles as the visited set; the start vertex
    // is seeded as its own predecessor.
    let mut predecessors: HashMap<usize, usize> = HashMap::new();
    predecessors.insert(start, start);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return reconstruct_path(graph, &predecessors, start, goal);
        }
        for edge in graph.adjacency(current) {
            if predecessors.contains_key(&edge.to) {
                continue;
            }
            predecessors.insert(edge.to, current);
            queue.push_back(edge.to);
        }
    }

    tracing::debug!("destination unreachable from source");
    Vec::new()
}

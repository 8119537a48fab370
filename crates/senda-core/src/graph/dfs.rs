//! Depth-first path search

use crate::graph::adjacency::Graph;
use crate::graph::types::{Vertex, VertexId};
use std::collections::HashSet;

/// First path found from `from` to `to`, exploring edges depth-first
/// in insertion order.
///
/// The result is the exploration stack at the moment the destination is
/// reached, so an earlier-listed edge wins even when a shorter route
/// exists. Empty when either endpoint is unknown or the destination is
/// unreachable.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn dfs_path(graph: &Graph, from: VertexId, to: VertexId) -> Vec<Vertex> {
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

    // Each frame pairs a slot with a cursor into its adjacency list;
    // the stack itself is the candidate path.
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    let mut visited: HashSet<usize> = HashSet::new();
    visited.insert(start);

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let (current, cursor) = stack[top];

        match graph.adjacency(current).get(cursor).copied() {
            None => {
                // Slot exhausted; back out of it.
                stack.pop();
            }
            Some(edge) => {
                stack[top].1 += 1;
                if edge.to == goal {
                    let vertices = graph.vertices();
                    let mut path: Vec<Vertex> =
                        stack.iter().map(|&(slot, _)| vertices[slot]).collect();
                    path.push(vertices[goal]);
                    return path;
                }
                if visited.insert(edge.to) {
                    stack.push((edge.to, 0));
                }
            }
        }
    }

    tracing::debug!("destination unreachable from source");
    Vec::new()
}

//! Path reconstruction from predecessor links

use crate::graph::adjacency::Graph;
use crate::graph::types::Vertex;
use std::collections::HashMap;

/// Walk predecessor links from the goal back to the start and return
/// the path in forward order. The start vertex is its own predecessor,
/// which terminates the walk.
pub(crate) fn reconstruct_path(
    graph: &Graph,
    predecessors: &HashMap<usize, usize>,
    start: usize,
    goal: usize,
) -> Vec<Vertex> {
    let vertices = graph.vertices();
    let mut path = vec![vertices[goal]];
    let mut current = goal;

    while current != start {
        match predecessors.get(&current) {
            Some(&pred) => {
                path.push(vertices[pred]);
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

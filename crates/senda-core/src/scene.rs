//! Scene composition
//!
//! A [`Scene`] is a renderer-agnostic snapshot of the graph and the
//! current search result: every vertex and edge with a path-membership
//! flag, plus the path itself and the status line. Output layers format
//! it; nothing here knows about terminals or canvases.

use crate::controller::TraversalController;
use crate::graph::{Graph, VertexId};
use crate::layout::Vec2;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    pub id: VertexId,
    pub pos: Vec2,
    pub on_path: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub on_path: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    pub path: Vec<VertexId>,
    pub status: String,
}

impl Scene {
    /// Snapshot the graph against the controller's current result.
    ///
    /// An edge is on the path when its endpoints are consecutive path
    /// vertices in edge direction.
    pub fn compose(graph: &Graph, controller: &TraversalController) -> Scene {
        let path: Vec<VertexId> = controller.path().iter().map(|v| v.id).collect();
        let path_vertices: HashSet<VertexId> = path.iter().copied().collect();
        let path_pairs: HashSet<(VertexId, VertexId)> =
            path.windows(2).map(|pair| (pair[0], pair[1])).collect();

        let vertices = graph.vertices();
        let nodes = vertices
            .iter()
            .map(|v| SceneNode {
                id: v.id,
                pos: v.pos,
                on_path: path_vertices.contains(&v.id),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|e| {
                let from = vertices[e.from].id;
                let to = vertices[e.to].id;
                SceneEdge {
                    from,
                    to,
                    on_path: path_pairs.contains(&(from, to)),
                }
            })
            .collect();

        Scene {
            nodes,
            edges,
            path,
            status: controller.status().to_string(),
        }
    }
}

//! Interactive traversal state
//!
//! A [`TraversalController`] owns the endpoint/algorithm selection and
//! the most recent search result. Selection commands only move the
//! selection; [`TraversalController::refresh`] clamps it against the
//! graph and reruns the search, so stale paths never outlive a command
//! batch.

use crate::graph::{bfs_path, dfs_path, Algorithm, Graph, Vertex, VertexId};
use serde::{Deserialize, Serialize};

/// One step of selection input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCommand {
    RaiseSource,
    LowerSource,
    RaiseDest,
    LowerDest,
    ToggleAlgorithm,
}

/// Source, destination, and search algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub source: VertexId,
    pub dest: VertexId,
    pub algorithm: Algorithm,
}

impl Selection {
    pub fn new(source: VertexId, dest: VertexId, algorithm: Algorithm) -> Self {
        Selection {
            source,
            dest,
            algorithm,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(1, 1, Algorithm::Bfs)
    }
}

/// Selection plus the search result it last produced
#[derive(Debug, Clone, Default)]
pub struct TraversalController {
    selection: Selection,
    path: Vec<Vertex>,
    status: String,
}

impl TraversalController {
    pub fn new(selection: Selection) -> Self {
        TraversalController {
            selection,
            path: Vec::new(),
            status: String::new(),
        }
    }

    /// Apply one selection command. The path is not recomputed; call
    /// [`TraversalController::refresh`] after a batch of commands.
    pub fn apply(&mut self, command: SelectionCommand) {
        match command {
            SelectionCommand::RaiseSource => {
                self.selection.source = self.selection.source.saturating_add(1);
            }
            SelectionCommand::LowerSource => {
                self.selection.source = self.selection.source.saturating_sub(1);
            }
            SelectionCommand::RaiseDest => {
                self.selection.dest = self.selection.dest.saturating_add(1);
            }
            SelectionCommand::LowerDest => {
                self.selection.dest = self.selection.dest.saturating_sub(1);
            }
            SelectionCommand::ToggleAlgorithm => {
                self.selection.algorithm = self.selection.algorithm.toggled();
            }
        }
        tracing::trace!(?command, selection = ?self.selection, "selection updated");
    }

    /// Clamp the selection to the graph's identity range, rerun the
    /// search, and rebuild the status line.
    pub fn refresh(&mut self, graph: &Graph) {
        // Identities start at 1 even for an empty graph.
        let highest = graph.vertex_count().max(1) as VertexId;
        self.selection.source = self.selection.source.clamp(1, highest);
        self.selection.dest = self.selection.dest.clamp(1, highest);

        let Selection {
            source,
            dest,
            algorithm,
        } = self.selection;

        self.path = match algorithm {
            Algorithm::Bfs => bfs_path(graph, source, dest),
            Algorithm::Dfs => dfs_path(graph, source, dest),
        };
        self.status = format!("{} from {source} to {dest}", algorithm.tag());
        tracing::debug!(status = %self.status, path_len = self.path.len(), "refreshed");
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn path(&self) -> &[Vertex] {
        &self.path
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

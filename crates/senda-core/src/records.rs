//! Utilities for records output format

use crate::graph::VertexId;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format a node line in records format
///
/// Returns an N-line with identity and layout position; nodes on the
/// current path carry a trailing `path` marker.
pub fn format_node_record(id: VertexId, x: f32, y: f32, on_path: bool) -> String {
    if on_path {
        format!("N {} {} {} path", id, x, y)
    } else {
        format!("N {} {} {}", id, x, y)
    }
}

/// Format an edge line in records format
///
/// Returns an E-line from source identity to destination identity.
pub fn format_edge_record(from: VertexId, to: VertexId, on_path: bool) -> String {
    if on_path {
        format!("E {} {} path", from, to)
    } else {
        format!("E {} {}", from, to)
    }
}

/// Format the current path as a single P-line
///
/// Callers skip the line entirely when the path is empty.
pub fn format_path_record(ids: &[VertexId]) -> String {
    let mut line = String::from("P");
    for id in ids {
        line.push(' ');
        line.push_str(&id.to_string());
    }
    line
}

/// Format a status line in records format
pub fn format_status_record(status: &str) -> String {
    format!("S \"{}\"", escape_quotes(status))
}

//! Error types and exit codes for senda
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing dataset, malformed rows, unknown vertices)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset, malformed rows (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during senda operations
#[derive(Error, Debug)]
pub enum SendaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("unknown vertex: {id}")]
    UnknownVertex { id: u32 },

    // Generic failures (exit code 1)
    #[error("edge endpoint index {index} out of range (vertex count {count})")]
    EdgeOutOfRange { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SendaError {
    /// Create an error for a malformed dataset row
    pub fn malformed_row(line: usize, reason: impl std::fmt::Display) -> Self {
        SendaError::MalformedRow {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a vertex identity absent from the graph
    pub fn unknown_vertex(id: u32) -> Self {
        SendaError::UnknownVertex { id }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            SendaError::UnknownFormat(_)
            | SendaError::UnknownAlgorithm(_)
            | SendaError::UsageError(_) => ExitCode::Usage,

            // Data errors
            SendaError::DatasetNotFound { .. }
            | SendaError::MalformedRow { .. }
            | SendaError::UnknownVertex { .. } => ExitCode::Data,

            // Generic failures
            SendaError::EdgeOutOfRange { .. }
            | SendaError::Io(_)
            | SendaError::Json(_)
            | SendaError::Toml(_)
            | SendaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> String {
        match self {
            SendaError::UnknownFormat(_) => "unknown_format".to_string(),
            SendaError::UnknownAlgorithm(_) => "unknown_algorithm".to_string(),
            SendaError::UsageError(_) => "usage_error".to_string(),
            SendaError::DatasetNotFound { .. } => "dataset_not_found".to_string(),
            SendaError::MalformedRow { .. } => "malformed_row".to_string(),
            SendaError::UnknownVertex { .. } => "unknown_vertex".to_string(),
            SendaError::EdgeOutOfRange { .. } => "edge_out_of_range".to_string(),
            SendaError::Io(_) => "io_error".to_string(),
            SendaError::Json(_) => "json_error".to_string(),
            SendaError::Toml(_) => "toml_error".to_string(),
            SendaError::Other(_) => "other".to_string(),
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for senda operations
pub type Result<T> = std::result::Result<T, SendaError>;

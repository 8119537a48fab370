//! Demo configuration for senda
//!
//! Configuration lives in an optional `senda.toml`; every field has a
//! default so a missing file or a partial file both work. CLI flags
//! override whatever the file says.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SendaError};
use crate::graph::Algorithm;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendaConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Dataset path (optional, overrides the built-in default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,

    /// Vertex count override; by default the count is inferred from the
    /// highest identity mentioned in the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex_count: Option<usize>,

    /// Default search algorithm
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Vertex layout configuration
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Configuration for the circular vertex layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Ring radius for vertex placement
    #[serde(default = "default_radius")]
    pub radius: f32,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_radius() -> f32 {
    200.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            radius: default_radius(),
        }
    }
}

impl Default for SendaConfig {
    fn default() -> Self {
        SendaConfig {
            version: CONFIG_FORMAT_VERSION,
            data_path: None,
            vertex_count: None,
            algorithm: Algorithm::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl SendaConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SendaConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SendaError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

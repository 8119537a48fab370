//! Shared helpers for command handlers

use std::path::{Path, PathBuf};

use senda_core::config::SendaConfig;
use senda_core::dataset;
use senda_core::error::{Result, SendaError};
use senda_core::graph::Graph;

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is
/// not given
pub const DEFAULT_CONFIG_FILE: &str = "senda.toml";

/// Resolve the effective config: the `--config` file, else
/// `./senda.toml` when present, else defaults. CLI flags override file
/// values.
pub fn resolve_config(cli: &Cli) -> Result<SendaConfig> {
    let mut config = match &cli.config {
        Some(path) => SendaConfig::load(path)?,
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default.exists() {
                SendaConfig::load(&default)?
            } else {
                SendaConfig::default()
            }
        }
    };

    if let Some(count) = cli.vertices {
        config.vertex_count = Some(count);
    }
    if let Some(data) = &cli.data {
        config.data_path = Some(data.display().to_string());
    }

    Ok(config)
}

/// Load the dataset named by the resolved config
pub fn load_graph(config: &SendaConfig) -> Result<Graph> {
    let Some(path) = config.data_path.as_deref() else {
        return Err(SendaError::UsageError(
            "no dataset: pass --data <FILE> or set data_path in senda.toml".to_string(),
        ));
    };
    dataset::load_graph(Path::new(path), config)
}

//! Config loading for the headless tool.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::Path;

use scene::catalog::ModelCatalog;
use scene::config::EditorConfig;
use tracing::{debug, info};

use crate::error::CliError;

/// Load the editor config from `path`, or the built-in config when absent.
///
/// # Errors
///
/// Returns `Read` if the file cannot be read and `Scene(InvalidConfig)` if
/// it does not parse or validate.
pub fn load(path: Option<&Path>) -> Result<EditorConfig, CliError> {
    let Some(path) = path else {
        debug!("using built-in config");
        return Ok(EditorConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let config = EditorConfig::from_json(&text)?;
    info!(path = %path.display(), models = config.models.len(), "config loaded");
    Ok(config)
}

/// Catalog with every configured model treated as loaded. There is no
/// renderer here, so only keys need to resolve.
#[must_use]
pub fn headless_catalog(config: &EditorConfig) -> ModelCatalog {
    let mut catalog = config.catalog();
    catalog.mark_all_loaded();
    catalog
}

//! Settings sources: TOML files on disk and inline TOML documents.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Read a required settings file.
pub fn read_file(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    debug!(config_path = %path.display(), "Reading settings file");
    std::fs::read_to_string(path).map_err(|e| ConfigError::Foreign(Box::new(e)))
}

/// Add an inline TOML document to the builder.
pub fn add_str(builder: ConfigBuilder<DefaultState>, contents: &str) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from_str(contents, FileFormat::Toml))
}

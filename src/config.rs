//! Read and rewrite the project configuration file.
//!
//! The config is an arbitrary JSON object that carries a `version` field.
//! Everything else is passed through untouched, in its original key order.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseBumpError, Result};

/// The project configuration record, with key order preserved.
pub type ProjectConfig = Map<String, Value>;

/// Loads the project configuration from `path`.
///
/// # Returns
/// * `Ok(ProjectConfig)` - Parsed top-level JSON object
/// * `Err` - If the file is missing, unreadable, malformed, or not an object
pub fn load(path: &Path) -> Result<ProjectConfig> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReleaseBumpError::config(format!("config file not found: {}", path.display()))
        } else {
            ReleaseBumpError::Io(e)
        }
    })?;

    let value: Value = serde_json::from_str(&raw)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ReleaseBumpError::config(format!(
            "{}: expected a JSON object at the top level",
            path.display()
        ))),
    }
}

/// Extracts the `version` field from the configuration.
pub fn version_field(config: &ProjectConfig) -> Result<&str> {
    config
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| ReleaseBumpError::config("missing or non-string 'version' field"))
}

/// Replaces the `version` field, leaving its position in the key order intact.
pub fn set_version(config: &mut ProjectConfig, version: &str) {
    config.insert("version".to_string(), Value::String(version.to_string()));
}

/// Serializes the configuration back to `path` with 4-space indentation,
/// overwriting the file in place.
pub fn save(path: &Path, config: &ProjectConfig) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}

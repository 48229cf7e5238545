//! Serialization and race-safe writes for configuration files.

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::ConfigError;

use super::DisplayConfig;

/// Render a display configuration as JSON indented by four spaces.
pub fn to_pretty_json(config: &DisplayConfig) -> Result<String, ConfigError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ConfigError::Invalid(e.to_string()))
}

/// Write `contents` to `path` unless the file already exists.
///
/// Returns `true` when this call created the file. Parent directories are
/// created as needed.
pub fn write_if_absent(path: &Path, contents: &str) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // create_new avoids clobbering a file another shell just wrote.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

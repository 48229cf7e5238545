//! Top-level config loading pipeline.
//!
//! Loading never fails. A missing config file is bootstrapped with the
//! defaults, an unreadable or malformed one degrades to an empty menu, and a
//! missing art file is replaced by the built-in art.

use std::io;
use std::path::Path;

use super::defaults::DEFAULT_ASCII_ART;
use super::init::{ensure_default_art, ensure_default_config, ConfigPaths};
use super::parse::parse_display_config;
use super::{ConfigOrigin, DisplayConfig, LoadedConfig};

/// Load the display configuration and art, bootstrapping absent files.
pub fn load_config(paths: &ConfigPaths) -> LoadedConfig {
    load_config_from_sources(
        paths,
        |path| std::fs::read_to_string(path),
        |path| ensure_default_config(path).map_err(|e| e.to_string()),
        |path| ensure_default_art(path).map_err(|e| e.to_string()),
    )
}

/// Built-in configuration used when no config location can be resolved.
pub fn in_memory_defaults() -> LoadedConfig {
    LoadedConfig {
        display: DisplayConfig::default(),
        art: DEFAULT_ASCII_ART.to_string(),
        origin: ConfigOrigin::InMemoryDefaults,
    }
}

pub(super) fn load_config_from_sources<FRead, FWriteConfig, FWriteArt>(
    paths: &ConfigPaths,
    read_file: FRead,
    write_default_config: FWriteConfig,
    write_default_art: FWriteArt,
) -> LoadedConfig
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
    FWriteConfig: Fn(&Path) -> Result<bool, String>,
    FWriteArt: Fn(&Path) -> Result<bool, String>,
{
    let (display, origin) = load_display(&paths.config_file, &read_file, &write_default_config);
    let art = load_art(&paths.art_file, &read_file, &write_default_art);
    LoadedConfig {
        display,
        art,
        origin,
    }
}

fn load_display<FRead, FWrite>(
    path: &Path,
    read_file: &FRead,
    write_default: &FWrite,
) -> (DisplayConfig, ConfigOrigin)
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
    FWrite: Fn(&Path) -> Result<bool, String>,
{
    match read_file(path) {
        Ok(text) => {
            tracing::debug!("loaded config from {}", path.display());
            return (parse_display_config(&text), ConfigOrigin::File(path.to_path_buf()));
        }
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            tracing::warn!("failed to read {}: {e}; using an empty configuration", path.display());
            return (DisplayConfig::empty(), ConfigOrigin::File(path.to_path_buf()));
        }
        Err(_) => {}
    }

    match write_default(path) {
        Ok(true) => {
            tracing::debug!("wrote default config to {}", path.display());
            (DisplayConfig::default(), ConfigOrigin::Bootstrapped(path.to_path_buf()))
        }
        // Another process created the file between our read and write.
        Ok(false) => match read_file(path) {
            Ok(text) => (parse_display_config(&text), ConfigOrigin::File(path.to_path_buf())),
            Err(_) => (DisplayConfig::default(), ConfigOrigin::InMemoryDefaults),
        },
        Err(e) => {
            tracing::warn!("failed to write default config to {}: {e}", path.display());
            (DisplayConfig::default(), ConfigOrigin::InMemoryDefaults)
        }
    }
}

fn load_art<FRead, FWrite>(path: &Path, read_file: &FRead, write_default: &FWrite) -> String
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
    FWrite: Fn(&Path) -> Result<bool, String>,
{
    match read_file(path) {
        Ok(text) => return text,
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            tracing::warn!("failed to read {}: {e}; using built-in art", path.display());
            return DEFAULT_ASCII_ART.to_string();
        }
        Err(_) => {}
    }

    if let Err(e) = write_default(path) {
        tracing::warn!("failed to write default art to {}: {e}", path.display());
    }
    DEFAULT_ASCII_ART.to_string()
}

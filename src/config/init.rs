//! Config-path resolution and `salut init`.
//!
//! All writes use create-new semantics where possible so two shells starting
//! at once never clobber each other's files.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{ART_FILE_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ASCII_ART};
use super::persist::{to_pretty_json, write_if_absent};
use super::{ConfigInitResult, DisplayConfig};

/// Locations of the JSON config and the custom art file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub art_file: PathBuf,
}

impl ConfigPaths {
    /// Both files inside one directory, using their default names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config_file: dir.join(CONFIG_FILE_NAME),
            art_file: dir.join(ART_FILE_NAME),
        }
    }

    /// Resolve paths from CLI overrides, falling back to the per-user
    /// config directory.
    pub fn resolve(
        config_override: Option<&Path>,
        art_override: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(config_override, art_override, default_config_dir)
    }

    pub(super) fn resolve_with<FDir>(
        config_override: Option<&Path>,
        art_override: Option<&Path>,
        config_dir: FDir,
    ) -> Result<Self, ConfigError>
    where
        FDir: Fn() -> Option<PathBuf>,
    {
        if let (Some(config_file), Some(art_file)) = (config_override, art_override) {
            return Ok(Self {
                config_file: config_file.to_path_buf(),
                art_file: art_file.to_path_buf(),
            });
        }
        let dir = config_dir().ok_or_else(|| {
            ConfigError::Invalid(
                "unable to resolve config directory; set XDG_CONFIG_HOME or HOME".to_string(),
            )
        })?;
        let defaults = Self::in_dir(&dir);
        Ok(Self {
            config_file: config_override
                .map(Path::to_path_buf)
                .unwrap_or(defaults.config_file),
            art_file: art_override
                .map(Path::to_path_buf)
                .unwrap_or(defaults.art_file),
        })
    }
}

/// Return the per-user config directory (`~/.config/salut`).
pub fn default_config_dir() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    config_root_dir_with(|name| std::env::var(name).ok(), dirs::home_dir)
}

pub(super) fn config_root_dir_with<FEnv, FHome>(env_lookup: FEnv, home_dir: FHome) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    if let Some(path) = env_lookup("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Write the default art file when it does not exist yet.
pub fn ensure_default_art(path: &Path) -> Result<bool, ConfigError> {
    write_if_absent(path, DEFAULT_ASCII_ART)
}

/// Write the default JSON config when it does not exist yet.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
    write_if_absent(path, &to_pretty_json(&DisplayConfig::default())?)
}

/// Initialize config files at `paths`, with optional force overwrite of the
/// JSON config. The art file is only ever created, never replaced.
pub fn initialize_default_config(
    paths: &ConfigPaths,
    force: bool,
) -> Result<ConfigInitResult, ConfigError> {
    ensure_default_art(&paths.art_file)?;

    let path = &paths.config_file;
    if ensure_default_config(path)? {
        return Ok(ConfigInitResult::Created {
            path: path.to_path_buf(),
        });
    }
    if !force {
        return Ok(ConfigInitResult::AlreadyInitialized {
            path: path.to_path_buf(),
        });
    }

    // Preserve the existing file before replacing it with the defaults.
    let backup_path = timestamped_backup_path(path);
    std::fs::copy(path, &backup_path)?;
    std::fs::write(path, to_pretty_json(&DisplayConfig::default())?)?;
    Ok(ConfigInitResult::Overwritten {
        path: path.to_path_buf(),
        backup_path,
    })
}

/// Build a non-colliding backup path in the same directory as `path`.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    for suffix in 0..1000usize {
        let candidate_name = if suffix == 0 {
            format!("{file_name}.{timestamp}.bak")
        } else {
            format!("{file_name}.{timestamp}.{suffix}.bak")
        };
        let candidate = path.with_file_name(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
    }

    path.with_file_name(format!(
        "{file_name}.{timestamp}.{}.bak",
        std::process::id()
    ))
}

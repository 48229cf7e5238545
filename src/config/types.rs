//! Configuration data model.
//!
//! These types are built once at startup and read-only afterwards. Parsing
//! logic lives in `config::parse`; the structs here only carry values plus
//! the serialized shape used when writing the default file.

use serde::Serialize;
use std::path::PathBuf;

use super::defaults::{
    default_programs, DEFAULT_PROGRAM_NAME, DEFAULT_SEPARATOR_COMMANDS,
    DEFAULT_SEPARATOR_SUBTITLE,
};

/// One launchable menu entry.
///
/// Shortcuts compare case-sensitively. Duplicates are allowed; dispatch picks
/// the first entry in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub name: String,
    pub icon: String,
    pub shortcut: String,
    pub command: String,
}

impl Program {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        shortcut: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            shortcut: shortcut.into(),
            command: command.into(),
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME, "", "", "")
    }
}

/// Configured color for one screen block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorSpec {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Resolved once per process to a single concrete color.
    #[default]
    Random,
}

impl ColorSpec {
    /// Map a config color name to a spec. Case-sensitive; anything unknown is
    /// `Random`.
    pub fn resolve(name: &str) -> Self {
        match name {
            "RED" => Self::Red,
            "GREEN" => Self::Green,
            "YELLOW" => Self::Yellow,
            "BLUE" => Self::Blue,
            "MAGENTA" => Self::Magenta,
            "CYAN" => Self::Cyan,
            "WHITE" => Self::White,
            _ => Self::Random,
        }
    }
}

/// Display options plus the program menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayConfig {
    pub separator_subtitle: String,
    pub separator_commands: String,
    pub color_art: ColorSpec,
    pub color_subtitle: ColorSpec,
    pub color_commands: ColorSpec,
    pub programs: Vec<Program>,
}

impl DisplayConfig {
    /// Display defaults with an empty menu, used for legacy and malformed files.
    pub fn empty() -> Self {
        Self {
            separator_subtitle: DEFAULT_SEPARATOR_SUBTITLE.to_string(),
            separator_commands: DEFAULT_SEPARATOR_COMMANDS.to_string(),
            color_art: ColorSpec::Random,
            color_subtitle: ColorSpec::Random,
            color_commands: ColorSpec::Random,
            programs: Vec::new(),
        }
    }

    /// Find the first program whose shortcut equals `token`.
    pub fn find_shortcut(&self, token: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.shortcut == token)
    }
}

impl Default for DisplayConfig {
    /// First-run configuration with the starter program list.
    fn default() -> Self {
        Self {
            programs: default_programs(),
            ..Self::empty()
        }
    }
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    File(PathBuf),
    /// File was absent; defaults were written to this path.
    Bootstrapped(PathBuf),
    /// File was absent and could not be written; defaults live in memory only.
    InMemoryDefaults,
}

/// Loaded configuration plus the custom art block.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub display: DisplayConfig,
    pub art: String,
    pub origin: ConfigOrigin,
}

/// Outcome of `salut init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
    Overwritten { path: PathBuf, backup_path: PathBuf },
}

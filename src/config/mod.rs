//! Configuration loading from the JSON config file and custom art file.
//!
//! Files live in `$XDG_CONFIG_HOME/salut` (or `~/.config/salut`) unless
//! overridden on the command line:
//! - `config.json`: display options and the program menu. A bare array of
//!   programs is accepted as the legacy shape.
//! - `custom-ascii-art.txt`: art shown at the top of the screen.
//!
//! Both are created with built-in defaults on first run. Config is read once
//! at startup and never reloaded.

mod defaults;
mod init;
mod loader;
mod parse;
mod persist;
mod types;

pub use init::{
    config_root_dir, default_config_dir, ensure_default_art, ensure_default_config,
    initialize_default_config, ConfigPaths,
};
pub use loader::{in_memory_defaults, load_config};
pub use parse::{display_config_from_value, parse_config, parse_display_config, parse_programs};
pub use persist::to_pretty_json;
pub use types::{
    ColorSpec, ConfigInitResult, ConfigOrigin, DisplayConfig, LoadedConfig, Program,
};

//! Default configuration constants and the starter program list.
//!
//! Keeping defaults in one module lets the parser, the first-run writer, and
//! `salut init` share the same literals.

use super::Program;

/// Built-in ASCII art written to `custom-ascii-art.txt` on first run.
pub(super) const DEFAULT_ASCII_ART: &str = include_str!("../templates/custom-ascii-art.txt");
/// Directory name under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "salut";
/// JSON configuration file name.
pub(super) const CONFIG_FILE_NAME: &str = "config.json";
/// Custom ASCII art file name.
pub(super) const ART_FILE_NAME: &str = "custom-ascii-art.txt";
/// Separator interleaved into the subtitle line.
pub(super) const DEFAULT_SEPARATOR_SUBTITLE: &str = "\u{f444} ";
/// Separator between menu entries on the same row.
pub(super) const DEFAULT_SEPARATOR_COMMANDS: &str = "\t";
/// Name given to program entries that omit one.
pub(super) const DEFAULT_PROGRAM_NAME: &str = "unknown";

/// Starter menu written on first run.
pub(super) fn default_programs() -> Vec<Program> {
    vec![
        Program::new("Neovim", "\u{f36f} ", "nv", "nvim"),
        Program::new("Fastfetch", "\u{eeed} ", "ft", "fastfetch"),
        Program::new("Bash", "\u{e760} ", "bs", "bash"),
        Program::new("Btop", "\u{ec19} ", "bp", "btop"),
    ]
}

//! Terminal building blocks.
//!
//! This module hosts text-block layout, keystroke/line input, and command
//! parsing. None of it knows about the composed screen or process launch.

pub mod commands;
pub mod input;
pub mod text;

pub use commands::{parse_command, Command, COMMAND_PREFIX};
pub use input::{InputSource, StreamInput, TerminalInput, TerminalModeGuard};
pub use text::{center_horizontal, center_vertical, visible_width, TerminalGeometry};

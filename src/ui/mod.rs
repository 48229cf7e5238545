//! Screen-facing UI: color theme and screen composition.

pub mod screen;
pub mod theme;

pub use screen::{build_subtitle, compose_screen, format_menu, Screens, HELP_TEXT};
pub use theme::{colorize, AnsiColor, ColorResolver, Palette, Styler};

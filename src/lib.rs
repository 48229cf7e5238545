//! Salut: a terminal greeter.
//!
//! On shell startup Salut draws ASCII art, a subtitle with user, directory,
//! and host, and a menu of configured programs, all centered in the
//! terminal. A single `:` keeps it open for commands; any other key closes
//! it. Commands show help, redraw the screen, quit, or exec a program in
//! place of the greeter.
//!
//! # Quick start
//!
//! ```no_run
//! use salut::config::{load_config, ConfigPaths};
//! use salut::ui::format_menu;
//!
//! let paths = ConfigPaths::resolve(None, None).unwrap();
//! let loaded = load_config(&paths);
//! print!("{}", format_menu(&loaded.display.programs, "\t"));
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod error;
pub mod platform;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;

//! Startup wiring: config, host facts, screen, and the greeter loop.

use std::io;
use std::path::PathBuf;

use crate::config::{
    in_memory_defaults, initialize_default_config, load_config, ConfigInitResult, ConfigPaths,
    LoadedConfig,
};
use crate::error::GreeterError;
use crate::platform::{self, HostSummary, PlatformInfo};
use crate::tui::input::TerminalInput;
use crate::tui::text::TerminalGeometry;
use crate::ui::screen::Screens;
use crate::ui::theme::{ColorResolver, Styler};

use super::greeter::Greeter;
use super::launch::ExecLauncher;

/// Runtime options gathered from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub quick_tap: bool,
    pub config_path: Option<PathBuf>,
    pub art_path: Option<PathBuf>,
    pub color: bool,
    /// Exit silently when no graphical session is present.
    pub display_check: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            quick_tap: false,
            config_path: None,
            art_path: None,
            color: true,
            display_check: true,
        }
    }
}

/// Run the greeter on the current terminal and return the exit status.
///
/// A successful launch never returns: the process image is replaced.
pub fn run(options: &RunOptions) -> i32 {
    let platform = platform::detect();
    match run_with_platform(options, &platform) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("salut: {e}");
            1
        }
    }
}

fn run_with_platform<P: PlatformInfo>(
    options: &RunOptions,
    platform: &P,
) -> Result<(), GreeterError> {
    if options.display_check && !platform.has_graphical_session() {
        tracing::debug!("no graphical session; exiting silently");
        return Ok(());
    }

    let loaded = load_for_options(options);
    let geometry = TerminalGeometry::detect();
    let resolver = ColorResolver::new();
    let host = HostSummary::collect(platform);
    let screens = Screens::build(
        &loaded.display,
        &loaded.art,
        &host,
        geometry,
        resolver.palette(&loaded.display),
        Styler::new(options.color),
    );

    let stdout = io::stdout();
    let mut greeter = Greeter::new(
        &loaded.display,
        &screens,
        TerminalInput::new(),
        ExecLauncher,
        stdout.lock(),
    )
    .quick_tap(options.quick_tap);
    greeter.run()
}

fn load_for_options(options: &RunOptions) -> LoadedConfig {
    match ConfigPaths::resolve(options.config_path.as_deref(), options.art_path.as_deref()) {
        Ok(paths) => load_config(&paths),
        Err(e) => {
            tracing::warn!("{e}; using built-in defaults");
            in_memory_defaults()
        }
    }
}

/// Write default config files and report what happened.
pub fn run_init(options: &RunOptions, force: bool) -> i32 {
    let result = ConfigPaths::resolve(options.config_path.as_deref(), options.art_path.as_deref())
        .and_then(|paths| initialize_default_config(&paths, force));
    match result {
        Ok(ConfigInitResult::Created { path }) => {
            println!("Created {}", path.display());
            0
        }
        Ok(ConfigInitResult::AlreadyInitialized { path }) => {
            println!(
                "{} already exists; rerun with --force to overwrite it",
                path.display()
            );
            0
        }
        Ok(ConfigInitResult::Overwritten { path, backup_path }) => {
            println!(
                "Rewrote {} (previous config saved to {})",
                path.display(),
                backup_path.display()
            );
            0
        }
        Err(e) => {
            eprintln!("salut: {e}");
            1
        }
    }
}

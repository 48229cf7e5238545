//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use salut::app::RunOptions;
use salut::build_info::LONG_VERSION;

/// A terminal greeter. Press `:` to keep it open, any other key to close it.
#[derive(Debug, Parser)]
#[command(name = "salut", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Treat the first keystroke as a command instead of the dismiss check.
    #[arg(long = "quick-tap")]
    pub quick_tap: bool,

    /// Path to the JSON config (default: ~/.config/salut/config.json).
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the ASCII art file (default: ~/.config/salut/custom-ascii-art.txt).
    #[arg(long = "art", value_name = "FILE")]
    pub art: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Show the greeter even without a graphical session.
    #[arg(long = "no-display-check")]
    pub no_display_check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the default config and art files.
    Init {
        /// Back up and overwrite an existing config.
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            quick_tap: self.quick_tap,
            config_path: self.config.clone(),
            art_path: self.art.clone(),
            color: !self.no_color,
            display_check: !self.no_display_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn quick_tap_flag_parses() {
        let args = Args::parse_from(["salut", "--quick-tap"]);
        assert!(args.quick_tap);
        assert!(args.run_options().quick_tap);
        assert!(args.command.is_none());
    }

    #[test]
    fn defaults_enable_color_and_display_check() {
        let options = Args::parse_from(["salut"]).run_options();
        assert!(options.color);
        assert!(options.display_check);
        assert!(!options.quick_tap);
    }

    #[test]
    fn path_overrides_and_toggles_map_to_options() {
        let args = Args::parse_from([
            "salut",
            "-c",
            "/tmp/c.json",
            "--art",
            "/tmp/a.txt",
            "--no-color",
            "--no-display-check",
        ]);
        let options = args.run_options();
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(options.art_path, Some(PathBuf::from("/tmp/a.txt")));
        assert!(!options.color);
        assert!(!options.display_check);
    }

    #[test]
    fn init_subcommand_parses_force() {
        let args = Args::parse_from(["salut", "init", "--force"]);
        assert!(matches!(args.command, Some(Command::Init { force: true })));
    }
}

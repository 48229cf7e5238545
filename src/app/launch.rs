//! Process replacement for launching configured programs.

use crate::config::Program;
use crate::error::LaunchFailure;

/// Replaces the greeter with a configured program.
pub trait Launcher {
    /// Exec `program` in place of this process. Returns only on failure.
    fn launch(&mut self, program: &Program) -> LaunchFailure;
}

/// Split a configured command into argv tokens on single spaces.
///
/// Consecutive spaces produce empty arguments; no quoting is interpreted.
pub fn split_command(command: &str) -> Vec<&str> {
    command.split(' ').collect()
}

/// Launcher backed by the OS exec call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

impl Launcher for ExecLauncher {
    fn launch(&mut self, program: &Program) -> LaunchFailure {
        let argv = split_command(&program.command);
        let Some((exe, args)) = argv.split_first().filter(|(exe, _)| !exe.is_empty()) else {
            return LaunchFailure::empty_command(&program.command);
        };
        tracing::debug!("exec {exe} with {} args for `{}`", args.len(), program.name);
        LaunchFailure::exec(&program.command, replace_process(exe, args))
    }
}

#[cfg(unix)]
fn replace_process(exe: &str, args: &[&str]) -> std::io::Error {
    use std::os::unix::process::CommandExt;
    std::process::Command::new(exe).args(args).exec()
}

/// Without exec, run the program to completion and exit with its status.
#[cfg(not(unix))]
fn replace_process(exe: &str, args: &[&str]) -> std::io::Error {
    match std::process::Command::new(exe).args(args).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => e,
    }
}

//! Error types for config bootstrap, program launch, and the greeter loop.
//!
//! Most configuration problems never surface here: malformed files, missing
//! fields, and unknown color names all degrade to defaults. What remains are
//! the failures that can actually stop the greeter.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when writing or locating configuration files.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// LaunchFailure
// ---------------------------------------------------------------------------

/// Why replacing the process image failed.
#[derive(Debug)]
pub enum LaunchFailureKind {
    /// The configured command had no executable token.
    EmptyCommand,
    /// The OS rejected the exec call (not found, not executable, ...).
    Exec(std::io::Error),
}

/// A program launch that returned instead of replacing this process.
#[derive(Debug)]
pub struct LaunchFailure {
    /// The command string as configured.
    pub command: String,
    pub kind: LaunchFailureKind,
}

impl LaunchFailure {
    pub fn empty_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            kind: LaunchFailureKind::EmptyCommand,
        }
    }

    pub fn exec(command: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            command: command.into(),
            kind: LaunchFailureKind::Exec(source),
        }
    }
}

impl fmt::Display for LaunchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LaunchFailureKind::EmptyCommand => {
                write!(f, "failed to launch `{}`: command is empty", self.command)
            }
            LaunchFailureKind::Exec(e) => {
                write!(f, "failed to launch `{}`: {e}", self.command)
            }
        }
    }
}

impl std::error::Error for LaunchFailure {}

// ---------------------------------------------------------------------------
// GreeterError
// ---------------------------------------------------------------------------

/// Top-level error type for a greeter run.
#[derive(Debug)]
pub enum GreeterError {
    Launch(LaunchFailure),
    /// Terminal read/write failure.
    Io(std::io::Error),
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "terminal: {e}"),
        }
    }
}

impl std::error::Error for GreeterError {}

impl From<LaunchFailure> for GreeterError {
    fn from(e: LaunchFailure) -> Self {
        Self::Launch(e)
    }
}

impl From<std::io::Error> for GreeterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{unclosed").unwrap_err();
        let e = ConfigError::from(json_err);
        assert!(e.to_string().starts_with("json:"));
    }

    #[test]
    fn launch_failure_names_the_command() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let e = LaunchFailure::exec("nvimm --clean", io_err);
        assert_eq!(
            e.to_string(),
            "failed to launch `nvimm --clean`: No such file"
        );
        assert_eq!(
            LaunchFailure::empty_command("").to_string(),
            "failed to launch ``: command is empty"
        );
    }

    #[test]
    fn greeter_error_wraps_launch_failure_verbatim() {
        let ge = GreeterError::from(LaunchFailure::empty_command("  "));
        assert!(ge.to_string().starts_with("failed to launch"), "got: {ge}");
    }

    #[test]
    fn greeter_error_from_terminal_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let ge = GreeterError::from(io_err);
        assert!(matches!(ge, GreeterError::Io(_)));
        assert_eq!(ge.to_string(), "terminal: closed");
    }
}

//! Shared test fixtures for config, platform, and greeter-loop tests.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::launch::Launcher;
use crate::config::Program;
use crate::error::LaunchFailure;
use crate::tui::input::InputSource;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "salut-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Input source replaying queued keystrokes and lines, then end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<char>,
    lines: VecDeque<String>,
    line_reads: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: char) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn line(mut self, line: &str) -> Self {
        self.lines.push_back(line.to_string());
        self
    }

    /// Number of `read_line` calls so far, including the one that hit EOF.
    pub fn line_reads(&self) -> usize {
        self.line_reads
    }
}

impl InputSource for ScriptedInput {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.keys.pop_front())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.line_reads += 1;
        Ok(self.lines.pop_front())
    }
}

/// Launcher that records program names and always fails as "not found".
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub launched: Vec<String>,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, program: &Program) -> LaunchFailure {
        self.launched.push(program.name.clone());
        LaunchFailure::exec(
            &program.command,
            io::Error::new(io::ErrorKind::NotFound, "recorded"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn scripted_input_replays_then_reports_eof() {
        let mut input = ScriptedInput::new().key(':').line("h");
        assert_eq!(input.read_key().unwrap(), Some(':'));
        assert_eq!(input.read_key().unwrap(), None);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("h"));
        assert_eq!(input.read_line().unwrap(), None);
        assert_eq!(input.line_reads(), 2);
    }
}

//! Keystroke and line input from the terminal.
//!
//! Keys and lines come from one buffered byte stream, so anything typed or
//! pasted after the dismiss key is still there for the next line read.
//! Single keystrokes are read in raw mode under a `TerminalModeGuard`, which
//! restores the previous terminal attributes on every return path. Lines are
//! read in the normal cooked mode so the shell's own echo and editing apply.

use crossterm::terminal;
use std::io::{self, BufRead, IsTerminal, Read};

/// Blocking source of greeter input.
pub trait InputSource {
    /// Read exactly one keystroke. `None` at end of input.
    fn read_key(&mut self) -> io::Result<Option<char>>;
    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Input from the process's stdin, using raw mode for keystrokes when stdin
/// is a terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        let stdin = io::stdin();
        let _guard = if stdin.is_terminal() {
            Some(TerminalModeGuard::acquire()?)
        } else {
            None
        };
        read_char(&mut stdin.lock())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_from(&mut io::stdin().lock())
    }
}

/// Input drawn from any buffered reader. Keys and lines share its buffer.
#[derive(Debug)]
pub struct StreamInput<R> {
    reader: R,
}

impl<R: BufRead> StreamInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StreamInput<R> {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        read_char(&mut self.reader)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_from(&mut self.reader)
    }
}

/// Raw-mode lifetime guard so terminal state is restored on any return path.
///
/// Dropped before any process replacement, since nothing runs after exec.
pub struct TerminalModeGuard;

impl TerminalModeGuard {
    /// Enable raw, no-echo mode and return a guard that disables it on drop.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Read one UTF-8 character from a byte stream.
pub fn read_char<R: Read>(reader: &mut R) -> io::Result<Option<char>> {
    let mut buf = [0u8; 4];
    if reader.read(&mut buf[..1])? == 0 {
        return Ok(None);
    }
    let len = match buf[0] {
        b if b < 0x80 => 1,
        b if b >> 5 == 0b110 => 2,
        b if b >> 4 == 0b1110 => 3,
        b if b >> 3 == 0b11110 => 4,
        _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
    };
    reader.read_exact(&mut buf[1..len])?;
    let ch = std::str::from_utf8(&buf[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(Some(ch))
}

/// Read one line and strip its `\n` / `\r\n` terminator.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

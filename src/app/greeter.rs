//! Interactive greeter loop.
//!
//! `Init` draws the screen. `AwaitingDismiss` reads one raw keystroke: the
//! command prefix opens command mode, anything else quits. In `Interactive`
//! mode each token is dispatched to help, quit, redraw, or a program launch.
//! Unknown tokens are ignored.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::collections::VecDeque;
use std::io::{self, Write};

use crate::config::DisplayConfig;
use crate::error::GreeterError;
use crate::tui::commands::{parse_command, Command, COMMAND_PREFIX};
use crate::tui::input::InputSource;
use crate::ui::screen::Screens;

use super::launch::Launcher;

/// Which screen is showing while in command mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    Help,
}

/// Greeter state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreeterState {
    Init,
    AwaitingDismiss,
    Interactive(View),
    Terminated,
}

/// Drives one greeter session over injectable input, output, and launcher.
pub struct Greeter<'a, I, L, W> {
    display: &'a DisplayConfig,
    screens: &'a Screens,
    input: I,
    launcher: L,
    out: W,
    state: GreeterState,
    quick_tap: bool,
    pending: VecDeque<String>,
}

impl<'a, I, L, W> Greeter<'a, I, L, W>
where
    I: InputSource,
    L: Launcher,
    W: Write,
{
    pub fn new(
        display: &'a DisplayConfig,
        screens: &'a Screens,
        input: I,
        launcher: L,
        out: W,
    ) -> Self {
        Self {
            display,
            screens,
            input,
            launcher,
            out,
            state: GreeterState::Init,
            quick_tap: false,
            pending: VecDeque::new(),
        }
    }

    /// Skip the dismiss check; the first keystroke is the first command.
    pub fn quick_tap(mut self, enabled: bool) -> Self {
        self.quick_tap = enabled;
        self
    }

    pub fn state(&self) -> GreeterState {
        self.state
    }

    /// Output sink, for inspection after a run.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until the user quits. Returns an error only for launch failures
    /// and terminal I/O errors.
    pub fn run(&mut self) -> Result<(), GreeterError> {
        while self.state != GreeterState::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> Result<GreeterState, GreeterError> {
        match self.state {
            GreeterState::Init => {
                self.out.write_all(self.screens.main().as_bytes())?;
                self.out.flush()?;
                self.state = if self.quick_tap {
                    GreeterState::Interactive(View::Main)
                } else {
                    GreeterState::AwaitingDismiss
                };
            }
            GreeterState::AwaitingDismiss => match self.input.read_key()? {
                Some(COMMAND_PREFIX) => self.state = GreeterState::Interactive(View::Main),
                _ => self.quit()?,
            },
            GreeterState::Interactive(_) => match self.next_token()? {
                Some(token) => self.dispatch(&token)?,
                None => self.quit()?,
            },
            GreeterState::Terminated => {}
        }
        Ok(self.state)
    }

    /// Apply one command token to the current state.
    pub fn dispatch(&mut self, token: &str) -> Result<(), GreeterError> {
        match parse_command(token, self.display) {
            Command::Help => {
                tracing::debug!("showing help");
                self.clear_screen()?;
                self.out.write_all(self.screens.help().as_bytes())?;
                self.out.flush()?;
                self.state = GreeterState::Interactive(View::Help);
            }
            Command::Quit => self.quit()?,
            Command::Main => {
                self.out.write_all(self.screens.main_returned().as_bytes())?;
                self.out.flush()?;
                self.state = GreeterState::Interactive(View::Main);
            }
            Command::Launch(program) => {
                tracing::debug!("launching `{}` via shortcut `{token}`", program.name);
                self.clear_screen()?;
                self.out.flush()?;
                let failure = self.launcher.launch(program);
                self.state = GreeterState::Terminated;
                return Err(failure.into());
            }
            Command::Unknown(other) => {
                tracing::debug!("ignoring unknown command `{other}`");
            }
        }
        Ok(())
    }

    /// Next command token: one raw keystroke in quick-tap mode (once), then
    /// whitespace-separated words from prompted lines.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        if self.quick_tap {
            self.quick_tap = false;
            return Ok(self.input.read_key()?.map(String::from));
        }

        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            write!(self.out, "{COMMAND_PREFIX}")?;
            self.out.flush()?;
            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn quit(&mut self) -> io::Result<()> {
        self.clear_screen()?;
        self.out.flush()?;
        self.state = GreeterState::Terminated;
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(MoveTo(0, 0))?;
        Ok(())
    }
}

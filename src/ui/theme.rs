//! Screen colors.
//!
//! Config names a `ColorSpec` per block. A single `ColorResolver` built at
//! startup turns those into concrete ANSI colors; every `Random` block shares
//! the one color it drew.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{ColorSpec, DisplayConfig};

/// Concrete foreground color, emitted as a basic SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    /// Terminal default foreground.
    White,
}

impl AnsiColor {
    /// Colors a `Random` spec may resolve to.
    pub const RANDOM_POOL: [AnsiColor; 6] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
    ];

    pub fn sgr_code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 0,
        }
    }
}

/// Owns the once-per-process random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorResolver {
    random: AnsiColor,
}

impl ColorResolver {
    /// Draw the shared random color from the thread RNG.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let random = *AnsiColor::RANDOM_POOL
            .choose(rng)
            .unwrap_or(&AnsiColor::White);
        tracing::debug!("random color resolved to {random:?}");
        Self { random }
    }

    /// Resolver whose `Random` draw is fixed in advance.
    pub fn with_random(random: AnsiColor) -> Self {
        Self { random }
    }

    pub fn random(&self) -> AnsiColor {
        self.random
    }

    pub fn resolve(&self, spec: ColorSpec) -> AnsiColor {
        match spec {
            ColorSpec::Red => AnsiColor::Red,
            ColorSpec::Green => AnsiColor::Green,
            ColorSpec::Yellow => AnsiColor::Yellow,
            ColorSpec::Blue => AnsiColor::Blue,
            ColorSpec::Magenta => AnsiColor::Magenta,
            ColorSpec::Cyan => AnsiColor::Cyan,
            ColorSpec::White => AnsiColor::White,
            ColorSpec::Random => self.random,
        }
    }

    /// Resolve the three block colors of a display config in one go.
    pub fn palette(&self, display: &DisplayConfig) -> Palette {
        Palette {
            art: self.resolve(display.color_art),
            subtitle: self.resolve(display.color_subtitle),
            commands: self.resolve(display.color_commands),
        }
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved colors for the three screen blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub art: AnsiColor,
    pub subtitle: AnsiColor,
    pub commands: AnsiColor,
}

/// Wraps text in SGR color codes, or passes it through when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    pub enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, color: AnsiColor) -> String {
        if self.enabled {
            colorize(text, color)
        } else {
            text.to_string()
        }
    }

    /// Bare SGR prefix used to tint an already-composed screen.
    pub fn begin(&self, color: AnsiColor) -> String {
        if self.enabled {
            format!("\x1b[{}m", color.sgr_code())
        } else {
            String::new()
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in the color's SGR code followed by a reset.
pub fn colorize(text: &str, color: AnsiColor) -> String {
    format!("\x1b[{}m{text}{RESET}", color.sgr_code())
}

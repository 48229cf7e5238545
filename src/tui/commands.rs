//! Greeter command parsing.

use crate::config::{DisplayConfig, Program};

/// Keystroke that keeps the greeter open and enters command mode.
pub const COMMAND_PREFIX: char = ':';

/// Parsed command actions consumed by the greeter loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Quit,
    Main,
    /// First program (in list order) whose shortcut matched.
    Launch(&'a Program),
    Unknown(String),
}

/// Parse one command token. Matching is exact and case-sensitive.
///
/// Built-ins are checked before program shortcuts, so a program configured
/// with `h`, `q`, or `main` as its shortcut is unreachable.
pub fn parse_command<'a>(token: &str, display: &'a DisplayConfig) -> Command<'a> {
    match token {
        "h" => Command::Help,
        "q" => Command::Quit,
        "main" => Command::Main,
        other => match display.find_shortcut(other) {
            Some(program) => Command::Launch(program),
            None => Command::Unknown(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayConfig {
        DisplayConfig {
            programs: vec![
                Program::new("Neovim", "", "nv", "nvim"),
                Program::new("Other", "", "nv", "vim"),
                Program::new("Shadowed", "", "h", "htop"),
            ],
            ..DisplayConfig::empty()
        }
    }

    #[test]
    fn parse_builtin_commands() {
        let display = display();
        assert_eq!(parse_command("h", &display), Command::Help);
        assert_eq!(parse_command("q", &display), Command::Quit);
        assert_eq!(parse_command("main", &display), Command::Main);
    }

    #[test]
    fn builtins_shadow_program_shortcuts() {
        let display = display();
        assert_eq!(parse_command("h", &display), Command::Help);
        assert!(matches!(parse_command("nv", &display), Command::Launch(_)));
    }

    #[test]
    fn duplicate_shortcuts_resolve_to_first_entry() {
        let display = display();
        let Command::Launch(program) = parse_command("nv", &display) else {
            panic!("expected launch");
        };
        assert_eq!(program.name, "Neovim");
    }

    #[test]
    fn shortcuts_are_case_sensitive() {
        let display = display();
        assert_eq!(
            parse_command("NV", &display),
            Command::Unknown("NV".to_string())
        );
        assert_eq!(
            parse_command("Q", &display),
            Command::Unknown("Q".to_string())
        );
    }

    #[test]
    fn empty_shortcut_never_matches_a_real_token() {
        let display = DisplayConfig {
            programs: vec![Program::new("Blank", "", "", "true")],
            ..DisplayConfig::empty()
        };
        assert_eq!(
            parse_command("x", &display),
            Command::Unknown("x".to_string())
        );
    }
}

//! Screen composition: art, subtitle, and program menu as one text block.

use crate::config::{DisplayConfig, Program};
use crate::platform::HostSummary;
use crate::tui::text::{center_horizontal, center_vertical, TerminalGeometry};

use super::theme::{AnsiColor, Palette, Styler};

/// Static help screen body.
pub const HELP_TEXT: &str = "Salut is a terminal greeter application\n\n\
                             Close this message with :main\n\
                             Open this message with :h\n\
                             Quit with :q\n";

/// Entries per menu row. Fixed layout policy, not configurable.
const MENU_ENTRIES_PER_ROW: usize = 2;

/// Render programs as `<icon> <name> [:<shortcut>]`, two per row.
///
/// Entries on a row are joined by `separator`; every second entry ends the
/// row with a newline instead. The last entry keeps its joiner.
pub fn format_menu(programs: &[Program], separator: &str) -> String {
    let mut out = String::new();
    for (idx, program) in programs.iter().enumerate() {
        let joiner = if (idx + 1) % MENU_ENTRIES_PER_ROW == 0 {
            "\n"
        } else {
            separator
        };
        out.push_str(&format!(
            "{} {} [:{}]{joiner}",
            program.icon, program.name, program.shortcut
        ));
    }
    out
}

/// Build the single subtitle line from host facts.
pub fn build_subtitle(separator: &str, host: &HostSummary) -> String {
    format!(
        "{sep} \u{f2bd}  {user} {sep} \u{f07b}  {path} {sep} {icon} {host} {sep}",
        sep = separator,
        user = host.username,
        path = host.path,
        icon = host.os_icon,
        host = host.hostname,
    )
}

/// Colorize and horizontally center the three blocks, joined by newlines.
///
/// Vertical centering is left to the caller so it applies to the whole
/// screen at once.
pub fn compose_screen(
    art: &str,
    subtitle: &str,
    menu: &str,
    geometry: TerminalGeometry,
    palette: Palette,
    styler: Styler,
) -> String {
    let width = usize::from(geometry.columns);
    format!(
        "{}\n{}\n{}",
        styler.paint(&center_horizontal(art, width), palette.art),
        styler.paint(&center_horizontal(subtitle, width), palette.subtitle),
        styler.paint(&center_horizontal(menu, width), palette.commands),
    )
}

/// Pre-rendered screens for one greeter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screens {
    composed: String,
    geometry: TerminalGeometry,
    palette: Palette,
    styler: Styler,
}

impl Screens {
    pub fn build(
        display: &DisplayConfig,
        art: &str,
        host: &HostSummary,
        geometry: TerminalGeometry,
        palette: Palette,
        styler: Styler,
    ) -> Self {
        let subtitle = build_subtitle(&display.separator_subtitle, host);
        let menu = format_menu(&display.programs, &display.separator_commands);
        let composed = compose_screen(art, &subtitle, &menu, geometry, palette, styler);
        Self {
            composed,
            geometry,
            palette,
            styler,
        }
    }

    /// Composed screen before vertical centering.
    pub fn composed(&self) -> &str {
        &self.composed
    }

    /// Initial screen, vertically centered and followed by a reset.
    pub fn main(&self) -> String {
        format!("{}{}", self.centered(), self.styler.reset())
    }

    /// Main screen tinted yellow to mark the return from another view.
    pub fn main_returned(&self) -> String {
        format!(
            "{}{}{}",
            self.styler.begin(AnsiColor::Yellow),
            self.centered(),
            self.styler.reset()
        )
    }

    /// Help text centered on both axes in the art color.
    pub fn help(&self) -> String {
        let centered = center_vertical(
            &center_horizontal(HELP_TEXT, usize::from(self.geometry.columns)),
            usize::from(self.geometry.rows),
            true,
        );
        self.styler.paint(&centered, self.palette.art)
    }

    fn centered(&self) -> String {
        center_vertical(&self.composed, usize::from(self.geometry.rows), true)
    }
}

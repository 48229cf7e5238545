//! Text-block layout: horizontal and vertical centering of multi-line text.
//!
//! A block is measured by its first line only. ASCII art is assumed to be
//! rectangular, so ragged blocks keep their relative shape and are shifted as
//! a unit rather than aligned line by line.

/// Terminal size used as layout input. Zero when the size is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalGeometry {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Query the controlling terminal, degrading to zero size on failure.
    pub fn detect() -> Self {
        match crossterm::terminal::size() {
            Ok((columns, rows)) => Self { columns, rows },
            Err(e) => {
                tracing::debug!("terminal size unavailable: {e}");
                Self::default()
            }
        }
    }
}

/// Count visible character width (one cell per codepoint).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Width of the first line of `text`, used as the reference for the block.
pub fn reference_width(text: &str) -> usize {
    visible_width(text.split('\n').next().unwrap_or(""))
}

/// Center every line of `text` within `width` columns.
///
/// Each line gets the same left padding, derived from the first line's width,
/// and is terminated by a newline. When the block is at least as wide as the
/// terminal the text is returned unchanged.
pub fn center_horizontal(text: &str, width: usize) -> String {
    let reference = reference_width(text);
    if width <= reference {
        return text.to_string();
    }
    let padding = (width - reference) / 2;
    if padding == 0 {
        return text.to_string();
    }

    let pad = " ".repeat(padding);
    let mut out = String::with_capacity(text.len() + (pad.len() + 1) * 4);
    for line in text.split('\n') {
        out.push_str(&pad);
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Pad `text` with blank lines so it sits near the middle of `height` rows.
///
/// Padding is `(height - lines) / 2 + 1`, so the block lands one row lower
/// than exact centering. Top padding is always applied; bottom padding only
/// when `fill` is set. A block taller than `height` is returned unchanged.
pub fn center_vertical(text: &str, height: usize, fill: bool) -> String {
    let padding = vertical_padding(text, height);
    if padding == 0 {
        return text.to_string();
    }

    let blank = "\n".repeat(padding);
    let mut out = String::with_capacity(text.len() + blank.len() * 2);
    out.push_str(&blank);
    out.push_str(text);
    if fill {
        out.push_str(&blank);
    }
    out
}

/// Blank lines `center_vertical` would add above `text`. Zero when the
/// block does not fit in `height` rows.
pub fn vertical_padding(text: &str, height: usize) -> usize {
    let lines = text.split('\n').count();
    height.checked_sub(lines).map_or(0, |room| room / 2 + 1)
}

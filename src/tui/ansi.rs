//! Writes a `GridFrame` as ANSI-styled text, for output that doesn't go
//! through the interactive terminal (key scripts, piped output).

use std::fmt::Write;

use crossterm::style::{self as ct, Stylize};
use ratatui::style::{Color, Modifier};

use crate::core::render::GridFrame;
use crate::tui::palette::Palette;

/// Render `frame` with escape sequences per the palette, no trailing newline.
/// A disabled palette yields exactly `frame.to_plain_string()`.
pub fn frame_to_ansi(frame: &GridFrame, palette: &Palette) -> String {
    if !palette.enabled {
        return frame.to_plain_string();
    }

    let mut out = String::new();
    for (i, line) in frame.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for segment in &line.segments {
            let style = palette.style(segment.tone);
            let mut styled = ct::style(segment.text.as_str());
            if let Some(fg) = style.fg {
                styled = styled.with(to_crossterm(fg));
            }
            if style.add_modifier.contains(Modifier::BOLD) {
                styled = styled.bold();
            }
            if style.add_modifier.contains(Modifier::DIM) {
                styled = styled.dim();
            }
            let _ = write!(out, "{styled}");
        }
    }
    out
}

fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Reset => ct::Color::Reset,
        Color::Black => ct::Color::Black,
        Color::Red => ct::Color::DarkRed,
        Color::Green => ct::Color::DarkGreen,
        Color::Yellow => ct::Color::DarkYellow,
        Color::Blue => ct::Color::DarkBlue,
        Color::Magenta => ct::Color::DarkMagenta,
        Color::Cyan => ct::Color::DarkCyan,
        Color::Gray => ct::Color::Grey,
        Color::DarkGray => ct::Color::DarkGrey,
        Color::LightRed => ct::Color::Red,
        Color::LightGreen => ct::Color::Green,
        Color::LightYellow => ct::Color::Yellow,
        Color::LightBlue => ct::Color::Blue,
        Color::LightMagenta => ct::Color::Magenta,
        Color::LightCyan => ct::Color::Cyan,
        Color::White => ct::Color::White,
        Color::Rgb(r, g, b) => ct::Color::Rgb { r, g, b },
        Color::Indexed(i) => ct::Color::AnsiValue(i),
    }
}

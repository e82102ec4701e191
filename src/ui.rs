//! Terminal styling helpers for operator-facing output

use anstyle::{AnsiColor, Color, Style};

/// Plugin crate names
pub const PLUGIN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// The bump strategy in the confirmation prompt
pub const BUMP: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// The released count in the summary line
pub const COUNT: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Wrap `text` in the ANSI sequences for `style`.
pub fn paint(style: Style, text: &str) -> String {
  format!("{}{}{}", style.render(), text, style.render_reset())
}

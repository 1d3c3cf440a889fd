//! Prompt appearance.

use crate::render::Color;

/// Glyphs and colors shared by the prompt widgets.
///
/// The default reproduces the stock look: a green `?` badge, bright white
/// message, cyan hints and selection pointer, yellow default-value hint.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Badge printed before every prompt message.
    pub badge: &'static str,
    /// Marker for the selected option.
    pub pointer: &'static str,
    /// Glyph prefixing success lines.
    pub success_glyph: &'static str,
    /// Glyph prefixing failure lines.
    pub failure_glyph: &'static str,

    pub badge_color: Color,
    pub message_color: Color,
    /// Hints: the arrows notice, `[Y/N]`, and the confirmed value.
    pub hint_color: Color,
    /// The selected option row.
    pub selected_color: Color,
    /// Unselected option rows.
    pub option_color: Color,
    /// The bracketed default in the line widget.
    pub default_color: Color,
    /// Typed input and the echoed final line.
    pub input_color: Color,
    pub success_color: Color,
    pub failure_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            badge: "? ",
            pointer: "> ",
            success_glyph: "\u{2713} ",
            failure_glyph: "\u{2717} ",
            badge_color: Color::BrightGreen,
            message_color: Color::BrightWhite,
            hint_color: Color::Cyan,
            selected_color: Color::Cyan,
            option_color: Color::White,
            default_color: Color::Yellow,
            input_color: Color::Cyan,
            success_color: Color::BrightGreen,
            failure_color: Color::BrightRed,
        }
    }
}

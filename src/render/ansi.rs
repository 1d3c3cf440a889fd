//! ANSI escape sequences for terminal control.
//!
//! Stateless one-to-one code mappings: cursor movement and visibility,
//! clearing, scrolling, and colors (16-color palette and TrueColor).
//! Amounts and coordinates are emitted in decimal, 1-based where the
//! sequence calls for it.

use std::io::{self, Write};

// =============================================================================
// Color
// =============================================================================

/// 16-color palette.
///
/// Discriminants are SGR offsets: adding the code to 30 gives the foreground
/// parameter, to 40 the background one. The bright block starts at 60, which
/// lands on the 90-97 / 100-107 ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey = 60,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// SGR code offset for this color.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Clear mode for [`clear_display`] and [`clear_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Clear {
    /// From the cursor to the end.
    #[default]
    ToEnd = 0,
    /// From the start to the cursor.
    ToStart = 1,
    /// Everything.
    All = 2,
}

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move cursor up by n rows.
#[inline]
pub fn cursor_up<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 { write!(w, "\x1b[{}A", n) } else { Ok(()) }
}

/// Move cursor down by n rows.
#[inline]
pub fn cursor_down<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 { write!(w, "\x1b[{}B", n) } else { Ok(()) }
}

/// Move cursor forward (right) by n columns.
#[inline]
pub fn cursor_forward<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 { write!(w, "\x1b[{}C", n) } else { Ok(()) }
}

/// Move cursor backward (left) by n columns.
#[inline]
pub fn cursor_back<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 { write!(w, "\x1b[{}D", n) } else { Ok(()) }
}

/// Move cursor to the start of the line n rows down.
#[inline]
pub fn cursor_next_line<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 { write!(w, "\x1b[{}E", n) } else { Ok(()) }
}

/// Move cursor to the start of the line n rows up.
#[inline]
pub fn cursor_prev_line<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 { write!(w, "\x1b[{}F", n) } else { Ok(()) }
}

/// Move cursor to an absolute column (1-based).
#[inline]
pub fn cursor_to_column<W: Write>(w: &mut W, column: u16) -> io::Result<()> {
    write!(w, "\x1b[{}G", column)
}

/// Move cursor to an absolute position (1-based row and column).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, row: u16, column: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", row, column)
}

/// Save the cursor position.
#[inline]
pub fn cursor_save<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[s")
}

/// Restore the saved cursor position.
#[inline]
pub fn cursor_restore<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[u")
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Clearing and Scrolling
// =============================================================================

/// Clear part of the display relative to the cursor.
#[inline]
pub fn clear_display<W: Write>(w: &mut W, mode: Clear) -> io::Result<()> {
    write!(w, "\x1b[{}J", mode as u8)
}

/// Clear part of the current line relative to the cursor.
#[inline]
pub fn clear_line<W: Write>(w: &mut W, mode: Clear) -> io::Result<()> {
    write!(w, "\x1b[{}K", mode as u8)
}

/// Scroll the display up by n lines.
#[inline]
pub fn scroll_up<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    write!(w, "\x1b[{}S", n)
}

/// Scroll the display down by n lines.
#[inline]
pub fn scroll_down<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    write!(w, "\x1b[{}T", n)
}

// =============================================================================
// Colors
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set the foreground to a palette color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    write!(w, "\x1b[{}m", 30 + color.code())
}

/// Set the background to a palette color.
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    write!(w, "\x1b[{}m", 40 + color.code())
}

/// Set a TrueColor foreground.
#[inline]
pub fn fg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", r, g, b)
}

/// Set a TrueColor background.
#[inline]
pub fn bg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", r, g, b)
}

/// TrueColor foreground from a packed `0xRRGGBB` value.
#[inline]
pub fn fg_hex<W: Write>(w: &mut W, rgb: u32) -> io::Result<()> {
    fg_rgb(w, (rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// TrueColor background from a packed `0xRRGGBB` value.
#[inline]
pub fn bg_hex<W: Write>(w: &mut W, rgb: u32) -> io::Result<()> {
    bg_rgb(w, (rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

// =============================================================================
// Tests
// =============================================================================

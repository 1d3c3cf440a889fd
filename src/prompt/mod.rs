//! Interactive prompt widgets.
//!
//! Each widget is a small render+input loop: draw a frame into an
//! [`OutputBuffer`], flush it in one write, block on the next logical key,
//! update local state, redraw in place. Nothing persists between widget
//! calls except the theme; the terminal's cursor and color state is the one
//! shared resource, and every widget leaves it sane (cursor visible, colors
//! reset) on every exit path, including early error returns.

mod confirm;
mod line;
mod select;
mod status;
mod theme;

pub use theme::Theme;

use std::io::{self, Write};

use crate::error::Result;
use crate::input::{InputChannel, InputSource};
use crate::render::{OutputBuffer, ansi};
use crate::terminal::StdinSource;

/// Interactive prompt session over an input source and an output sink.
///
/// All widgets run on `&mut self`. [`Prompt::stdio`] wires the process
/// terminal; tests substitute scripted input and a byte-vector sink.
pub struct Prompt<S, W> {
    input: InputChannel<S>,
    out: W,
    theme: Theme,
}

impl Prompt<StdinSource, io::Stdout> {
    /// A prompt session on the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(StdinSource::new(), io::stdout())
    }
}

impl<S: InputSource, W: Write> Prompt<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            input: InputChannel::new(source),
            out,
            theme: Theme::default(),
        }
    }

    /// Replace the default theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Single-choice selection list. Returns the chosen index.
    ///
    /// Arrow keys move the pointer with wraparound, `Enter` confirms, other
    /// keys are ignored. Panics if `options` is empty.
    pub fn select(&mut self, message: &str, options: &[impl AsRef<str>]) -> Result<usize> {
        let Self { input, out, theme } = self;
        select::run(input, out, theme, message, options)
    }

    /// Yes/no confirmation. Only `y`/`Y` and `n`/`N` are accepted.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        let Self { input, out, theme } = self;
        confirm::run(input, out, theme, message)
    }

    /// Line input with a default. An empty entry yields `default` verbatim;
    /// anything else is returned untrimmed.
    pub fn read_line(&mut self, message: &str, default: &str) -> Result<String> {
        let Self { input, out, theme } = self;
        line::run(input, out, theme, message, default)
    }

    /// Print a success status line.
    pub fn success(&mut self, message: &str) -> Result<()> {
        status::success(&mut self.out, &self.theme, message)
    }

    /// Print a failure status line.
    pub fn failure(&mut self, message: &str) -> Result<()> {
        status::failure(&mut self.out, &self.theme, message)
    }

    /// Tear down the session, returning the source and sink.
    pub fn into_parts(self) -> (S, W) {
        (self.input.into_source(), self.out)
    }
}

/// One-shot [`Prompt::select`] on the process terminal.
pub fn select(message: &str, options: &[impl AsRef<str>]) -> Result<usize> {
    Prompt::stdio().select(message, options)
}

/// One-shot [`Prompt::confirm`] on the process terminal.
pub fn confirm(message: &str) -> Result<bool> {
    Prompt::stdio().confirm(message)
}

/// One-shot [`Prompt::read_line`] on the process terminal.
pub fn read_line(message: &str, default: &str) -> Result<String> {
    Prompt::stdio().read_line(message, default)
}

/// One-shot [`Prompt::success`] on the process terminal.
pub fn success(message: &str) -> Result<()> {
    Prompt::stdio().success(message)
}

/// One-shot [`Prompt::failure`] on the process terminal.
pub fn failure(message: &str) -> Result<()> {
    Prompt::stdio().failure(message)
}

/// Restores the terminal on every exit path of a widget.
///
/// Dropping the guard shows the cursor and resets colors, so a `?` on a
/// failed read still leaves the terminal usable.
struct DisplayGuard<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> DisplayGuard<'a, W> {
    /// Hide the cursor for the duration of the widget.
    fn hide(out: &'a mut W) -> io::Result<Self> {
        ansi::cursor_hide(out)?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Keep the cursor visible (line input) but still restore on exit.
    fn keep(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for DisplayGuard<'_, W> {
    fn drop(&mut self) {
        let _ = ansi::cursor_show(self.out);
        let _ = ansi::reset(self.out);
        let _ = self.out.flush();
    }
}

/// The prompt line: colored badge, message, two-space gap, hint, newline.
fn frame_message(
    frame: &mut OutputBuffer,
    theme: &Theme,
    message: &str,
    hint: &str,
) -> io::Result<()> {
    ansi::fg(frame, theme.badge_color)?;
    frame.write_str(theme.badge);
    ansi::fg(frame, theme.message_color)?;
    frame.write_str(message);
    ansi::fg(frame, theme.hint_color)?;
    frame.write_str("  ");
    frame.write_str(hint);
    frame.write_str("\n");
    ansi::reset(frame)
}

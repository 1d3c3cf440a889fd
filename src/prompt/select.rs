//! Single-choice selection list.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::input::{InputChannel, InputSource, Key};
use crate::render::{Clear, OutputBuffer, ansi};

use super::{DisplayGuard, Theme, frame_message};

pub(super) fn run<S: InputSource, W: Write>(
    input: &mut InputChannel<S>,
    out: &mut W,
    theme: &Theme,
    message: &str,
    options: &[impl AsRef<str>],
) -> Result<usize> {
    assert!(!options.is_empty(), "select requires a non-empty option list");

    let guard = DisplayGuard::hide(out)?;
    let mut frame = OutputBuffer::new();

    frame_message(&mut frame, theme, message, "[Use arrows to move]")?;
    frame.flush_to(guard.out)?;
    guard.out.flush()?;

    let mut current = 0;
    loop {
        render_options(&mut frame, theme, options, current)?;
        frame.flush_to(guard.out)?;
        guard.out.flush()?;

        match input.next_key()? {
            Key::Up | Key::Left => current = (current + options.len() - 1) % options.len(),
            Key::Down | Key::Right => current = (current + 1) % options.len(),
            Key::Enter => break,
            _ => {}
        }
    }

    // Erase the prompt and option block, leave a single summary line.
    ansi::cursor_prev_line(&mut frame, 1)?;
    ansi::clear_display(&mut frame, Clear::ToEnd)?;
    frame_message(&mut frame, theme, message, options[current].as_ref())?;
    frame.flush_to(guard.out)?;
    guard.out.flush()?;
    drop(guard);

    debug!(index = current, "selection confirmed");
    Ok(current)
}

/// Render all options with the current one marked, then reposition the
/// cursor to the top of the block so the next frame overwrites in place.
fn render_options(
    frame: &mut OutputBuffer,
    theme: &Theme,
    options: &[impl AsRef<str>],
    selected: usize,
) -> io::Result<()> {
    for (i, option) in options.iter().enumerate() {
        if i == selected {
            ansi::fg(frame, theme.selected_color)?;
            frame.write_str(theme.pointer);
        } else {
            ansi::fg(frame, theme.option_color)?;
            frame.write_str("  ");
        }
        frame.write_str(option.as_ref());
        frame.write_str("\n");
    }
    ansi::cursor_prev_line(frame, options.len() as u16)
}

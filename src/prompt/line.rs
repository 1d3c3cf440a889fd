//! Line input with a default value.
//!
//! The one widget that reads in cooked mode: the prompt shows a bracketed
//! default, the entry is a single line-buffered read, and the final value is
//! redrawn in place over the hint.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::input::{InputChannel, InputSource};
use crate::render::{Clear, OutputBuffer, ansi};

use super::{DisplayGuard, Theme};

pub(super) fn run<S: InputSource, W: Write>(
    input: &mut InputChannel<S>,
    out: &mut W,
    theme: &Theme,
    message: &str,
    default: &str,
) -> Result<String> {
    let guard = DisplayGuard::keep(out);
    let mut frame = OutputBuffer::new();

    ansi::fg(&mut frame, theme.badge_color)?;
    frame.write_str(theme.badge);
    ansi::fg(&mut frame, theme.message_color)?;
    frame.write_str(message);
    frame.write_str(" ");
    ansi::cursor_save(&mut frame)?;
    ansi::fg(&mut frame, theme.default_color)?;
    frame.write_str("[");
    frame.write_str(default);
    frame.write_str("]  ");
    ansi::fg(&mut frame, theme.input_color)?;
    frame.flush_to(guard.out)?;
    guard.out.flush()?;

    let entered = input.read_line()?;
    let used_default = entered.is_empty();
    let value = if used_default {
        default.to_string()
    } else {
        entered
    };

    // Wipe the hint and the echoed entry, redraw the final value.
    ansi::cursor_restore(&mut frame)?;
    ansi::clear_display(&mut frame, Clear::ToEnd)?;
    ansi::fg(&mut frame, theme.input_color)?;
    frame.write_str(" ");
    frame.write_str(&value);
    frame.write_str("\n");
    frame.flush_to(guard.out)?;
    guard.out.flush()?;
    drop(guard);

    debug!(used_default, "line entered");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use crate::prompt::Prompt;
    use crate::prompt::script::Script;

    fn run(lines: &[&str], default: &str) -> (String, String) {
        let mut prompt = Prompt::new(Script::lines(lines), Vec::new());
        let value = prompt.read_line("name", default).unwrap();
        let (_, out) = prompt.into_parts();
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_entry_yields_default() {
        let (value, _) = run(&[""], "foo");
        assert_eq!(value, "foo");
    }

    #[test]
    fn test_entry_wins_over_default() {
        let (value, _) = run(&["bar"], "foo");
        assert_eq!(value, "bar");
    }

    #[test]
    fn test_entry_is_not_trimmed() {
        let (value, _) = run(&["  padded  "], "foo");
        assert_eq!(value, "  padded  ");
    }

    #[test]
    fn test_eof_yields_default() {
        let (value, _) = run(&[], "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_redraws_over_hint() {
        let (_, out) = run(&["bar"], "foo");
        assert!(out.contains("[foo]"));
        assert!(out.contains("\x1b[u\x1b[0J"));
        assert!(out.contains(" bar\n"));
    }
}

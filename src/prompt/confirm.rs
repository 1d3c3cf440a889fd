//! Yes/no confirmation.

use std::io::Write;

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
) -> Result<bool> {
    let guard = DisplayGuard::hide(out)?;
    let mut frame = OutputBuffer::new();

    frame_message(&mut frame, theme, message, "[Y/N]")?;
    frame.flush_to(guard.out)?;
    guard.out.flush()?;

    // The decoder upper-cases letters, so one variant per answer.
    let value = loop {
        match input.next_key()? {
            Key::Char('Y') => break true,
            Key::Char('N') => break false,
            _ => continue,
        }
    };

    ansi::cursor_prev_line(&mut frame, 1)?;
    ansi::clear_display(&mut frame, Clear::ToEnd)?;
    frame_message(&mut frame, theme, message, if value { "Yes" } else { "No" })?;
    frame.flush_to(guard.out)?;
    guard.out.flush()?;
    drop(guard);

    debug!(value, "confirmation answered");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use crate::prompt::Prompt;
    use crate::prompt::script::Script;

    fn run(bytes: &[u8]) -> (bool, usize, String) {
        let mut prompt = Prompt::new(Script::keys(bytes), Vec::new());
        let value = prompt.confirm("proceed?").unwrap();
        let (script, out) = prompt.into_parts();
        (value, script.remaining(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_yes() {
        let (value, _, out) = run(b"y");
        assert!(value);
        assert!(out.contains("Yes"));
    }

    #[test]
    fn test_no() {
        let (value, _, out) = run(b"n");
        assert!(!value);
        assert!(out.contains("No"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(run(b"Y").0);
        assert!(!run(b"N").0);
    }

    #[test]
    fn test_other_keys_ignored() {
        // Up, then 'x', then 'n': exactly three key reads, answer is no.
        let (value, remaining, _) = run(b"\x1b[Axn");
        assert!(!value);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_cursor_restored() {
        let (_, _, out) = run(b"y");
        assert!(out.starts_with("\x1b[?25l"));
        assert!(out.ends_with("\x1b[?25h\x1b[0m"));
    }
}

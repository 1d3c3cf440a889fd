//! Success and failure status lines.

use std::io::Write;

use crate::error::Result;
use crate::render::{OutputBuffer, ansi};

use super::Theme;

pub(super) fn success<W: Write>(out: &mut W, theme: &Theme, message: &str) -> Result<()> {
    let mut frame = OutputBuffer::new();
    ansi::fg(&mut frame, theme.success_color)?;
    frame.write_str(theme.success_glyph);
    ansi::fg(&mut frame, theme.message_color)?;
    frame.write_str(message);
    frame.write_str("\n");
    ansi::reset(&mut frame)?;
    frame.flush_to(out)?;
    out.flush()?;
    Ok(())
}

pub(super) fn failure<W: Write>(out: &mut W, theme: &Theme, message: &str) -> Result<()> {
    let mut frame = OutputBuffer::new();
    ansi::fg(&mut frame, theme.failure_color)?;
    frame.write_str(theme.failure_glyph);
    frame.write_str(message);
    frame.write_str("\n");
    ansi::reset(&mut frame)?;
    frame.flush_to(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::prompt::Prompt;
    use crate::prompt::script::Script;

    fn session() -> Prompt<Script, Vec<u8>> {
        Prompt::new(Script::keys(b""), Vec::new())
    }

    #[test]
    fn test_success_line() {
        let mut prompt = session();
        prompt.success("written").unwrap();
        let (_, out) = prompt.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\u{2713} "));
        assert!(out.contains("written\n"));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_failure_line() {
        let mut prompt = session();
        prompt.failure("nothing written").unwrap();
        let (_, out) = prompt.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\u{2717} "));
        assert!(out.contains("nothing written\n"));
    }
}

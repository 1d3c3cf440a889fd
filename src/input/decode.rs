//! Escape sequence decoder.
//!
//! Normalizes raw bytes into logical keys. Two arrow conventions are
//! recognized unconditionally, so the same binary behaves correctly against
//! either: `ESC [ A..D` (Linux and friends) and `224 H/P/M/K` (Windows
//! consoles). On a partial match the speculatively consumed bytes are pushed
//! back in LIFO order and the prefix byte is returned verbatim, so a future
//! call sees the original stream.

use std::io;

use tracing::trace;

use super::channel::{InputChannel, InputSource};

/// ESC, the Linux-style arrow prefix.
const ESC: u8 = 0x1b;

/// The Windows-style arrow prefix.
const WIN_PREFIX: u8 = 224;

/// A logical key.
///
/// Letters are case-normalized to uppercase so widget loops match a single
/// variant. Bytes with no named mapping come through as [`Key::Raw`],
/// including a lone ESC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable ASCII; letters normalized to uppercase.
    Char(char),
    Enter,
    Tab,
    Backspace,
    Space,
    Up,
    Down,
    Left,
    Right,
    /// Any other byte, verbatim.
    Raw(u8),
}

impl<S: InputSource> InputChannel<S> {
    /// Decode the next logical key, blocking until one is available.
    pub fn next_key(&mut self) -> io::Result<Key> {
        let b0 = self.read_byte(false)?;

        let key = match b0 {
            b'\r' | b'\n' => Key::Enter,
            ESC => self.decode_csi()?,
            WIN_PREFIX => self.decode_win()?,
            0x08 => Key::Backspace,
            b'\t' => Key::Tab,
            b' ' => Key::Space,
            b'a'..=b'z' => Key::Char((b0 - b'a' + b'A') as char),
            0x21..=0x7e => Key::Char(b0 as char),
            other => Key::Raw(other),
        };

        trace!(?key, "decoded key");
        Ok(key)
    }

    fn decode_csi(&mut self) -> io::Result<Key> {
        let b1 = self.read_byte(false)?;
        if b1 != b'[' {
            self.unread_byte(b1);
            return Ok(Key::Raw(ESC));
        }
        let b2 = self.read_byte(false)?;
        Ok(match b2 {
            b'A' => Key::Up,
            b'B' => Key::Down,
            b'C' => Key::Right,
            b'D' => Key::Left,
            _ => {
                // LIFO: a future read sees '[' first, then b2.
                self.unread_byte(b2);
                self.unread_byte(b'[');
                Key::Raw(ESC)
            }
        })
    }

    fn decode_win(&mut self) -> io::Result<Key> {
        let b1 = self.read_byte(false)?;
        Ok(match b1 {
            b'H' => Key::Up,
            b'P' => Key::Down,
            b'M' => Key::Right,
            b'K' => Key::Left,
            _ => {
                self.unread_byte(b1);
                Key::Raw(WIN_PREFIX)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bytes(Vec<u8>);

    impl InputSource for Bytes {
        fn read_byte(&mut self, _echo: bool) -> io::Result<u8> {
            if self.0.is_empty() {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
            }
            Ok(self.0.remove(0))
        }

        fn read_line(&mut self, _buf: &mut String) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::Unsupported))
        }
    }

    fn channel(bytes: &[u8]) -> InputChannel<Bytes> {
        InputChannel::new(Bytes(bytes.to_vec()))
    }

    #[test]
    fn test_enter() {
        assert_eq!(channel(b"\r").next_key().unwrap(), Key::Enter);
        assert_eq!(channel(b"\n").next_key().unwrap(), Key::Enter);
    }

    #[test]
    fn test_linux_arrows() {
        assert_eq!(channel(b"\x1b[A").next_key().unwrap(), Key::Up);
        assert_eq!(channel(b"\x1b[B").next_key().unwrap(), Key::Down);
        assert_eq!(channel(b"\x1b[C").next_key().unwrap(), Key::Right);
        assert_eq!(channel(b"\x1b[D").next_key().unwrap(), Key::Left);
    }

    #[test]
    fn test_windows_arrows() {
        assert_eq!(channel(&[224, b'H']).next_key().unwrap(), Key::Up);
        assert_eq!(channel(&[224, b'P']).next_key().unwrap(), Key::Down);
        assert_eq!(channel(&[224, b'M']).next_key().unwrap(), Key::Right);
        assert_eq!(channel(&[224, b'K']).next_key().unwrap(), Key::Left);
    }

    #[test]
    fn test_escape_pushback() {
        let mut chan = channel(b"\x1bX");
        assert_eq!(chan.next_key().unwrap(), Key::Raw(0x1b));
        assert_eq!(chan.next_key().unwrap(), Key::Char('X'));
    }

    #[test]
    fn test_ambiguous_csi_pushback_is_lifo() {
        let mut chan = channel(b"\x1b[Z");
        assert_eq!(chan.next_key().unwrap(), Key::Raw(0x1b));
        // Both consumed bytes restored in stream order.
        assert_eq!(chan.read_byte(false).unwrap(), b'[');
        assert_eq!(chan.read_byte(false).unwrap(), b'Z');
    }

    #[test]
    fn test_ambiguous_csi_redecodes() {
        let mut chan = channel(b"\x1b[Z");
        assert_eq!(chan.next_key().unwrap(), Key::Raw(0x1b));
        assert_eq!(chan.next_key().unwrap(), Key::Char('['));
        assert_eq!(chan.next_key().unwrap(), Key::Char('Z'));
    }

    #[test]
    fn test_windows_prefix_pushback() {
        let mut chan = channel(&[224, b'Z']);
        assert_eq!(chan.next_key().unwrap(), Key::Raw(224));
        assert_eq!(chan.next_key().unwrap(), Key::Char('Z'));
    }

    #[test]
    fn test_lowercase_normalized() {
        for (lower, upper) in (b'a'..=b'z').zip(b'A'..=b'Z') {
            assert_eq!(
                channel(&[lower]).next_key().unwrap(),
                Key::Char(upper as char)
            );
        }
    }

    #[test]
    fn test_uppercase_and_digits_verbatim() {
        assert_eq!(channel(b"Q").next_key().unwrap(), Key::Char('Q'));
        assert_eq!(channel(b"7").next_key().unwrap(), Key::Char('7'));
        assert_eq!(channel(b"!").next_key().unwrap(), Key::Char('!'));
    }

    #[test]
    fn test_named_bytes() {
        assert_eq!(channel(b"\t").next_key().unwrap(), Key::Tab);
        assert_eq!(channel(b"\x08").next_key().unwrap(), Key::Backspace);
        assert_eq!(channel(b" ").next_key().unwrap(), Key::Space);
    }

    #[test]
    fn test_unnamed_bytes_verbatim() {
        assert_eq!(channel(&[0x01]).next_key().unwrap(), Key::Raw(0x01));
        assert_eq!(channel(&[0x7f]).next_key().unwrap(), Key::Raw(0x7f));
    }

    #[test]
    fn test_mixed_conventions_in_one_stream() {
        let mut chan = channel(b"\x1b[A\xe0P\r");
        assert_eq!(chan.next_key().unwrap(), Key::Up);
        assert_eq!(chan.next_key().unwrap(), Key::Down);
        assert_eq!(chan.next_key().unwrap(), Key::Enter);
    }

    #[test]
    fn test_eof_is_an_error() {
        assert!(channel(b"").next_key().is_err());
    }
}

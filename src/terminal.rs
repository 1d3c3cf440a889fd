//! Platform terminal layer.
//!
//! Raw-mode byte reads and the console size query. The terminal's mode flags
//! are process-wide state: they are switched to non-canonical mode only for
//! the duration of a single read and restored on every return path via an
//! RAII guard, so a failed read cannot leave the terminal raw.

use std::io::{self, Read};

use crate::input::InputSource;

/// Process-stdin input source.
///
/// Implements [`InputSource`] with a per-read raw-mode toggle: termios on
/// Unix, console modes on Windows. On other platforms, and when stdin is not
/// a tty (piped input, tests), bytes are read as-is.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinSource {
    fn read_byte(&mut self, echo: bool) -> io::Result<u8> {
        sys::read_byte(echo)
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Query the console size as `(rows, columns)`.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    sys::terminal_size()
}

fn read_stdin_byte() -> io::Result<u8> {
    let mut byte = [0u8; 1];
    io::stdin().lock().read_exact(&mut byte)?;
    Ok(byte[0])
}

#[cfg(unix)]
mod sys {
    use std::io;
    use std::os::unix::io::AsRawFd;

    use tracing::trace;

    use super::read_stdin_byte;

    /// Scoped non-canonical mode. Restores the saved termios on drop.
    struct RawMode {
        fd: libc::c_int,
        prev: libc::termios,
    }

    impl RawMode {
        fn enter(fd: libc::c_int, echo: bool) -> io::Result<Self> {
            unsafe {
                let mut prev: libc::termios = std::mem::zeroed();
                if libc::tcgetattr(fd, &mut prev) != 0 {
                    return Err(io::Error::last_os_error());
                }

                let mut raw = prev;
                raw.c_lflag &= !libc::ICANON;
                if !echo {
                    raw.c_lflag &= !libc::ECHO;
                }
                raw.c_cc[libc::VMIN] = 1;
                raw.c_cc[libc::VTIME] = 0;

                if libc::tcsetattr(fd, libc::TCSANOW, &raw) != 0 {
                    return Err(io::Error::last_os_error());
                }
                trace!(echo, "entered raw mode");
                Ok(Self { fd, prev })
            }
        }
    }

    impl Drop for RawMode {
        fn drop(&mut self) {
            // Nothing useful to do with a failure here.
            unsafe {
                let _ = libc::tcsetattr(self.fd, libc::TCSANOW, &self.prev);
            }
        }
    }

    pub fn read_byte(echo: bool) -> io::Result<u8> {
        let fd = io::stdin().as_raw_fd();

        // Not a tty (piped input, tests): no mode to toggle.
        if unsafe { libc::isatty(fd) } == 0 {
            return read_stdin_byte();
        }

        let _raw = RawMode::enter(fd, echo)?;
        read_stdin_byte()
    }

    pub fn terminal_size() -> io::Result<(u16, u16)> {
        let fd = io::stdout().as_raw_fd();
        unsafe {
            let mut ws: libc::winsize = std::mem::zeroed();
            if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok((ws.ws_row, ws.ws_col))
        }
    }
}

#[cfg(windows)]
mod sys {
    use std::io;

    use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
    use windows_sys::Win32::System::Console::{
        CONSOLE_MODE, CONSOLE_SCREEN_BUFFER_INFO, ENABLE_ECHO_INPUT, ENABLE_LINE_INPUT,
        ENABLE_VIRTUAL_TERMINAL_INPUT, GetConsoleMode, GetConsoleScreenBufferInfo, GetStdHandle,
        ReadConsoleA, STD_INPUT_HANDLE, STD_OUTPUT_HANDLE, SetConsoleMode,
    };

    /// Scoped non-canonical console mode. Restores the saved mode on drop.
    ///
    /// Virtual terminal input is enabled for the read so arrow keys arrive
    /// as `ESC [ A..D`; legacy `224`-prefixed streams are handled by the
    /// decoder regardless.
    struct RawMode {
        handle: HANDLE,
        prev: CONSOLE_MODE,
    }

    impl RawMode {
        fn enter(handle: HANDLE, echo: bool) -> io::Result<Self> {
            unsafe {
                let mut prev: CONSOLE_MODE = 0;
                if GetConsoleMode(handle, &mut prev) == 0 {
                    return Err(io::Error::last_os_error());
                }

                let mut raw = (prev & !ENABLE_LINE_INPUT) | ENABLE_VIRTUAL_TERMINAL_INPUT;
                if !echo {
                    raw &= !ENABLE_ECHO_INPUT;
                }

                if SetConsoleMode(handle, raw) == 0 {
                    return Err(io::Error::last_os_error());
                }
                Ok(Self { handle, prev })
            }
        }
    }

    impl Drop for RawMode {
        fn drop(&mut self) {
            unsafe {
                let _ = SetConsoleMode(self.handle, self.prev);
            }
        }
    }

    pub fn read_byte(echo: bool) -> io::Result<u8> {
        unsafe {
            let handle = GetStdHandle(STD_INPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE {
                return Err(io::Error::last_os_error());
            }

            // Not a console (piped input, tests): no mode to toggle.
            let mut mode: CONSOLE_MODE = 0;
            if GetConsoleMode(handle, &mut mode) == 0 {
                return super::read_stdin_byte();
            }

            let _raw = RawMode::enter(handle, echo)?;

            let mut byte = 0u8;
            let mut read = 0u32;
            let ok = ReadConsoleA(
                handle,
                (&mut byte as *mut u8).cast(),
                1,
                &mut read,
                std::ptr::null(),
            );
            if ok == 0 {
                return Err(io::Error::last_os_error());
            }
            if read == 0 {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
            }
            Ok(byte)
        }
    }

    pub fn terminal_size() -> io::Result<(u16, u16)> {
        unsafe {
            let handle = GetStdHandle(STD_OUTPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE {
                return Err(io::Error::last_os_error());
            }

            let mut info: CONSOLE_SCREEN_BUFFER_INFO = std::mem::zeroed();
            if GetConsoleScreenBufferInfo(handle, &mut info) == 0 {
                return Err(io::Error::last_os_error());
            }

            let rows = (info.srWindow.Bottom - info.srWindow.Top + 1) as u16;
            let columns = (info.srWindow.Right - info.srWindow.Left + 1) as u16;
            Ok((rows, columns))
        }
    }
}

#[cfg(not(any(unix, windows)))]
mod sys {
    use std::io;

    use super::read_stdin_byte;

    pub fn read_byte(_echo: bool) -> io::Result<u8> {
        read_stdin_byte()
    }

    pub fn terminal_size() -> io::Result<(u16, u16)> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }
}

//! Raw terminal input.
//!
//! Three layers, leaf-first:
//!
//! - [`InputSource`] - the OS capability: read one byte in non-canonical
//!   mode (optionally echoed) and read one cooked-mode line.
//! - [`InputChannel`] - wraps a source with a small bounded LIFO push-back
//!   buffer, checked before any real read.
//! - [`Key`] decoding - [`InputChannel::next_key`] resolves multi-byte
//!   escape sequences into one logical key per call.

pub mod channel;
pub mod decode;

pub use channel::{InputChannel, InputSource};
pub use decode::Key;

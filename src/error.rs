//! Crate error type.
//!
//! The library has essentially no recoverable-error taxonomy: unexpected
//! input bytes are absorbed by the decoder's push-back policy or ignored by
//! the widget loops, and an empty option list is a programmer error that
//! fails fast. What remains is the input channel itself failing — raw-mode
//! toggling, a byte read, end of input — surfaced as a single condition for
//! the caller to retry or abort.

use std::io;

/// Errors returned by prompts and input reads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The terminal input channel failed or reached end of input.
    #[error("input channel failure: {0}")]
    Input(#[from] io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

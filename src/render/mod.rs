//! Terminal output primitives.
//!
//! [`ansi`] is the stateless escape-sequence layer: each function formats
//! exactly one control sequence into any `Write`. [`OutputBuffer`] batches a
//! frame's writes so each redraw reaches the terminal in a single flush.

pub mod ansi;
pub mod output;

pub use ansi::{Clear, Color};
pub use output::OutputBuffer;

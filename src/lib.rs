//! # spark-prompt
//!
//! Interactive terminal prompts for Rust.
//!
//! A small cross-platform terminal control and prompt library: ANSI/VT escape
//! output (cursor movement, clearing, scrolling, 16-color and TrueColor),
//! raw keyboard input normalized into a single logical [`Key`] enumeration,
//! and three interactive widgets built on top — a selection list, a yes/no
//! confirmation, and a line editor with a default value — plus success and
//! failure status lines.
//!
//! ## Architecture
//!
//! ```text
//! InputSource (OS raw reads) → InputChannel (push-back) → Key decoder
//!                                                              ↓
//!        terminal ← OutputBuffer ← render::ansi ← prompt widgets
//! ```
//!
//! The decoder is the only place escape-sequence ambiguity is resolved: both
//! the Linux (`ESC [ A..D`) and Windows (`224` prefix) arrow conventions are
//! recognized unconditionally, and partial matches are unwound byte-by-byte
//! back into the channel.
//!
//! ## Modules
//!
//! - [`input`] - Raw input channel, push-back buffer, key decoding
//! - [`render`] - ANSI escape primitives and output batching
//! - [`prompt`] - Interactive widgets and status messages
//! - [`terminal`] - Platform layer (raw mode toggling, console size)
//!
//! ## Example
//!
//! ```no_run
//! use spark_prompt::Prompt;
//!
//! fn main() -> spark_prompt::Result<()> {
//!     let mut prompt = Prompt::stdio();
//!     let theme = prompt.select("Color theme", &["terminal", "dracula", "nord"])?;
//!     let name = prompt.read_line("Project name", "untitled")?;
//!     if prompt.confirm("Write configuration?")? {
//!         prompt.success(&format!("{name} configured (theme #{theme})"))?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod input;
pub mod prompt;
pub mod render;
pub mod terminal;

// Re-export commonly used items
pub use error::{Error, Result};
pub use input::{InputChannel, InputSource, Key};
pub use prompt::{Prompt, Theme, confirm, failure, read_line, select, success};
pub use render::{Clear, Color, OutputBuffer};
pub use terminal::{StdinSource, terminal_size};

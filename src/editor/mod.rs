//! Editing session for a formatted document.
//!
//! Pairs a [`Document`](crate::document::Document) with a selection and
//! exposes caret movement, plain-text editing, and the formatting
//! [`Command`]s bound to key chords.

mod command;
mod session;

pub use command::{BINDINGS, Command};
pub use session::{Direction, EditorSession};

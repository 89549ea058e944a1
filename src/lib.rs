// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. document::DocumentError)
    clippy::module_name_repetitions
)]

//! # Richedit
//!
//! A terminal rich-text editor built around a small formatted document model.
//!
//! A document is a list of blocks (paragraphs or code blocks), and each block
//! is a list of text runs carrying the marks bold, italic, underline and code.
//! Formatting commands toggle a mark over the selection or switch the block
//! type of every block the selection touches.
//!
//! ## Architecture
//!
//! Richedit uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`document`]: Document model, selections, formatting and edits
//! - [`editor`]: Editing session and formatting commands
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing and render debug log

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{
        BlockType, Document, Mark, Point, SelectionRange, is_block_type_active, is_mark_active,
        toggle_block_type, toggle_mark,
    };
    pub use crate::editor::{Command, EditorSession};
}

//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`style`]: Block and mark styling
//! - document rendering with selection highlighting
//! - the status bar and help overlay

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{block_line, render};

//! Formatted document model.
//!
//! This module handles:
//! - The block/run tree and its normal form
//! - Block/offset selections
//! - Mark and block-type toggling
//! - Plain-text edits at a caret
//! - Loading and saving documents as JSON

mod edit;
mod format;
mod selection;
mod types;

use std::path::Path;

pub use format::{is_block_type_active, is_mark_active, toggle_block_type, toggle_mark};
pub use selection::{Point, SelectionRange};
pub use types::{Block, BlockType, Document, Mark, Marks, Run};

/// Errors from reading or writing a document file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Document {
    /// Parse a document from its JSON form, normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] when the input is not an array of
    /// blocks.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Write the document to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        std::fs::write(path, format!("{json}\n")).map_err(|source| DocumentError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}

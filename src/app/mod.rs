//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::document::Document;

/// Main application struct that owns the document and runs the event loop.
pub struct App {
    document: Document,
    file_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application editing `document`.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            file_path: None,
            output_path: None,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Record the file the document was loaded from.
    pub fn with_file_path(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    /// Set where Ctrl+S writes the document. Defaults to the file it was
    /// loaded from.
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Hand the document and paths over to a fresh [`Model`].
    fn take_model(&mut self) -> Model {
        let mut model = Model::new(std::mem::take(&mut self.document));
        model.file_path.clone_from(&self.file_path);
        model.output_path = self.output_path.clone().or_else(|| self.file_path.clone());
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        model
    }
}

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::Document;
use crate::editor::EditorSession;

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The document being edited, with its selection
    pub session: EditorSession,
    /// File the document was loaded from, if any
    pub file_path: Option<PathBuf>,
    /// Where Ctrl+S writes the document
    pub output_path: Option<PathBuf>,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// First wrapped screen line drawn in the document pane
    pub scroll_offset: usize,
    /// Whether the terminal accepted keyboard enhancement flags
    pub keyboard_enhanced: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("session", &self.session)
            .field("file_path", &self.file_path)
            .field("output_path", &self.output_path)
            .field("help_visible", &self.help_visible)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model editing `document`.
    pub fn new(document: Document) -> Self {
        Self {
            session: EditorSession::new(document),
            file_path: None,
            output_path: None,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            scroll_offset: 0,
            keyboard_enhanced: false,
            toast: None,
            should_quit: false,
            quit_confirmed: false,
        }
    }

    /// Display name for the status bar.
    pub fn display_name(&self) -> String {
        self.output_path
            .as_ref()
            .or(self.file_path.as_ref())
            .and_then(|p| p.file_name())
            .map_or_else(
                || "untitled".to_string(),
                |s| s.to_string_lossy().to_string(),
            )
    }

    /// Whether quitting now would lose edits.
    pub const fn has_unsaved_changes(&self) -> bool {
        self.session.is_dirty()
    }

    /// Scroll so wrapped line `line` is inside a pane of `height` lines.
    pub const fn ensure_line_visible(&mut self, line: usize, height: usize) {
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if height > 0 && line >= self.scroll_offset + height {
            self.scroll_offset = line + 1 - height;
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Document::initial())
    }
}

use crate::document::{BlockType, Mark};

use super::EditorSession;

/// A formatting command bound to a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleMark(Mark),
    ToggleBlock(BlockType),
}

/// Key chords and the commands they trigger, as shown in the help overlay.
pub const BINDINGS: &[(&str, Command)] = &[
    ("Ctrl+B", Command::ToggleMark(Mark::Bold)),
    ("Ctrl+I", Command::ToggleMark(Mark::Italic)),
    ("Ctrl+U", Command::ToggleMark(Mark::Underline)),
    ("Ctrl+T", Command::ToggleMark(Mark::Code)),
    ("Ctrl+`", Command::ToggleBlock(BlockType::Code)),
];

impl Command {
    /// Look up the command for a Ctrl+`key` chord.
    pub const fn for_ctrl_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'b' => Some(Self::ToggleMark(Mark::Bold)),
            'i' => Some(Self::ToggleMark(Mark::Italic)),
            'u' => Some(Self::ToggleMark(Mark::Underline)),
            't' => Some(Self::ToggleMark(Mark::Code)),
            // Most terminals send Ctrl+` as NUL, which arrives as Ctrl+Space.
            '`' | ' ' => Some(Self::ToggleBlock(BlockType::Code)),
            _ => None,
        }
    }

    /// Apply to the session's current selection. Returns `true` if the
    /// document changed.
    pub fn apply(self, session: &mut EditorSession) -> bool {
        let changed = match self {
            Self::ToggleMark(mark) => session.toggle_mark(mark),
            Self::ToggleBlock(block_type) => session.toggle_block_type(block_type),
        };
        if !changed {
            tracing::debug!(command = ?self, "command had no effect on the selection");
        }
        changed
    }

    /// Short description for help and status messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ToggleMark(Mark::Bold) => "Toggle bold",
            Self::ToggleMark(Mark::Italic) => "Toggle italic",
            Self::ToggleMark(Mark::Underline) => "Toggle underline",
            Self::ToggleMark(Mark::Code) => "Toggle inline code",
            Self::ToggleBlock(BlockType::Code) => "Toggle code block",
            Self::ToggleBlock(BlockType::Paragraph) => "Reset to paragraph",
        }
    }
}

use crate::app::{Model, ToastLevel};
use crate::editor::{Command, Direction};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Formatting
    /// Apply a formatting command to the selection
    Command(Command),

    // Caret
    /// Move caret in a direction, collapsing the selection
    MoveCaret(Direction),
    /// Move the selection focus in a direction (Shift+arrow)
    ExtendSelection(Direction),
    /// Move caret to beginning of block (Home)
    MoveHome,
    /// Move caret to end of block (End)
    MoveEnd,
    /// Extend selection to beginning of block (Shift+Home)
    ExtendHome,
    /// Extend selection to end of block (Shift+End)
    ExtendEnd,
    /// Move caret to start of document (Ctrl+Home)
    MoveToStart,
    /// Move caret to end of document (Ctrl+End)
    MoveToEnd,
    /// Select the whole document
    SelectAll,
    /// Select the text of the block holding the caret
    SelectBlock,
    /// Collapse the selection to its focus
    CollapseSelection,

    // Editing
    /// Insert a character at the caret
    InsertChar(char),
    /// Split block at caret (Enter)
    SplitBlock,
    /// Delete selection or character before caret (Backspace)
    DeleteBack,
    /// Write the document to the output file
    Save,

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// File I/O for `Save` happens afterwards in the side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Reset confirmation on any action other than the confirmed one.
    // Save preserves it so Ctrl+S can complete a pending quit.
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }

    let session = &mut model.session;
    match msg {
        Message::Command(command) => {
            let collapsed = session.selection().is_collapsed();
            if !command.apply(session) && collapsed {
                model.show_toast(ToastLevel::Info, "Select text to format");
            }
        }

        Message::MoveCaret(direction) => session.move_caret(direction, false),
        Message::ExtendSelection(direction) => session.move_caret(direction, true),
        Message::MoveHome => session.move_home(false),
        Message::MoveEnd => session.move_end(false),
        Message::ExtendHome => session.move_home(true),
        Message::ExtendEnd => session.move_end(true),
        Message::MoveToStart => session.move_to_start(false),
        Message::MoveToEnd => session.move_to_end(false),
        Message::SelectAll => session.select_all(),
        Message::SelectBlock => session.select_block(),
        Message::CollapseSelection => {
            let caret = session.caret();
            session.move_to(caret.block, caret.offset);
        }

        Message::InsertChar(ch) => session.insert_char(ch),
        Message::SplitBlock => session.split_block(),
        Message::DeleteBack => {
            session.delete_back();
        }
        Message::Save | Message::Resize(_, _) | Message::Redraw => {}

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        Message::Quit => {
            if model.has_unsaved_changes() && !model.quit_confirmed {
                model.quit_confirmed = true;
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes: Ctrl+S to save, Ctrl+Q again to quit",
                );
            } else {
                model.should_quit = true;
            }
        }
    }

    model
}

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::document::Mark;
use crate::editor::{Command, Direction};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            Event::FocusGained => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if ctrl {
            return match key.code {
                KeyCode::Char('q' | 'c') => Some(Message::Quit),
                KeyCode::Char('s') => Some(Message::Save),
                KeyCode::Char('a') => Some(Message::SelectAll),
                KeyCode::Char('l') => Some(Message::SelectBlock),
                KeyCode::Home => Some(Message::MoveToStart),
                KeyCode::End => Some(Message::MoveToEnd),
                KeyCode::Char(c) => Command::for_ctrl_key(c).map(Message::Command),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Left => Some(arrow(Direction::Left, shift)),
            KeyCode::Right => Some(arrow(Direction::Right, shift)),
            KeyCode::Up => Some(arrow(Direction::Up, shift)),
            KeyCode::Down => Some(arrow(Direction::Down, shift)),
            KeyCode::Home if shift => Some(Message::ExtendHome),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End if shift => Some(Message::ExtendEnd),
            KeyCode::End => Some(Message::MoveEnd),
            // Without keyboard enhancement, Ctrl+I arrives as Tab.
            KeyCode::Tab if !model.keyboard_enhanced => {
                Some(Message::Command(Command::ToggleMark(Mark::Italic)))
            }
            KeyCode::Tab => Some(Message::InsertChar('\t')),
            KeyCode::Enter => Some(Message::SplitBlock),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Esc => Some(Message::CollapseSelection),
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

const fn arrow(direction: Direction, extend: bool) -> Message {
    if extend {
        Message::ExtendSelection(direction)
    } else {
        Message::MoveCaret(direction)
    }
}

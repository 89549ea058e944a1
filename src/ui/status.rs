use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::document::Mark;

const STATUS_HINT: &str = "F1:help  Ctrl+Q:quit ";

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let bar_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let dirty_indicator = if model.session.is_dirty() {
        " [modified]"
    } else {
        ""
    };
    let caret = model.session.caret();
    let left = format!(
        " {}{}  Blk {}, Col {}  {}  ",
        model.display_name(),
        dirty_indicator,
        caret.block + 1,
        caret.offset + 1,
        model.session.caret_block_type().name(),
    );

    let marks = model.session.marks_at_selection();
    let mut spans = vec![Span::raw(left.clone())];
    let mut used = left.width();
    for mark in Mark::ALL {
        let label = mark_label(mark);
        let style = if marks.get(mark) {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        used += label.width() + 1;
    }

    let padding = (area.width as usize).saturating_sub(used + STATUS_HINT.width());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::raw(STATUS_HINT));

    let status_bar = Paragraph::new(Line::from(spans)).style(bar_style);
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}

const fn mark_label(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "B",
        Mark::Italic => "I",
        Mark::Underline => "U",
        Mark::Code => "<>",
    }
}

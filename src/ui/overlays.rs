use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::editor::BINDINGS;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut all_lines: Vec<Line> = Vec::new();

    // Formatting
    all_lines.push(Line::styled("Formatting", section_style));
    for (chord, command) in BINDINGS {
        all_lines.push(Line::raw(format!("  {chord:<20}{}", command.describe())));
    }
    all_lines.push(Line::raw(""));

    // Editing
    all_lines.push(Line::styled("Editing", section_style));
    all_lines.push(Line::raw("  Arrows, Home/End    Move caret"));
    all_lines.push(Line::raw("  Shift+movement      Extend selection"));
    all_lines.push(Line::raw("  Ctrl+Home/End       Document start / end"));
    all_lines.push(Line::raw("  Ctrl+A              Select all"));
    all_lines.push(Line::raw("  Ctrl+L              Select block"));
    all_lines.push(Line::raw("  Esc                 Collapse selection"));
    all_lines.push(Line::raw("  Enter / Backspace   Split / join blocks"));
    all_lines.push(Line::raw(""));

    // Other
    all_lines.push(Line::styled("Other", section_style));
    all_lines.push(Line::raw("  Ctrl+S              Save document"));
    all_lines.push(Line::raw("  Ctrl+Q / Ctrl+C     Quit"));
    all_lines.push(Line::raw("  F1                  Toggle help"));
    all_lines.push(Line::raw(""));

    // Config
    all_lines.push(Line::styled("Config", section_style));
    all_lines.push(Line::raw(format!("  Global: {global_cfg}")));
    all_lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    let end = (content_height as usize).min(all_lines.len());
    let visible: Vec<Line> = all_lines[..end].to_vec();

    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(visible), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("Any key closes", dim_style);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::document::{Block, SelectionRange};

use super::{overlays, status, style};

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let document_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_document(model, frame, document_area);

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_document(model: &mut Model, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width).max(1);
    let selection = model.session.selection();
    let caret = model.session.caret();

    let mut rows: Vec<Line> = Vec::new();
    let mut caret_row = 0;
    for (index, block) in model.session.document().blocks().iter().enumerate() {
        let line = block_line(block, index, &selection);
        let (wrapped, starts) = wrap_line(line, width);
        if index == caret.block {
            // Caret cell index within the line, counting the gutter.
            let cell = style::gutter_for_block(block.block_type()).chars().count() + caret.offset;
            caret_row = rows.len() + starts.iter().rposition(|&s| s <= cell).unwrap_or(0);
        }
        rows.extend(wrapped);
    }

    model.ensure_line_visible(caret_row, usize::from(area.height));
    let visible: Vec<Line> = rows
        .into_iter()
        .skip(model.scroll_offset)
        .take(usize::from(area.height))
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(visible), area);
}

/// Break `line` into rows no wider than `width` cells.
///
/// Returns the rows and, for each row, the index of its first character
/// in `line`. Wrapping is per character so offsets map straight to rows.
pub(super) fn wrap_line(line: Line<'static>, width: usize) -> (Vec<Line<'static>>, Vec<usize>) {
    let line_style = line.style;
    let mut rows = Vec::new();
    let mut starts = vec![0];
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    let mut index = 0;

    for span in line.spans {
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used > 0 && used + w > width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut current)).style(line_style));
                starts.push(index);
                used = 0;
            }
            chunk.push(ch);
            used += w;
            index += 1;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, span.style));
        }
    }
    rows.push(Line::from(current).style(line_style));
    (rows, starts)
}

/// Build the styled line for one block, highlighting the part of
/// `selection` that falls inside it (or the caret cell when collapsed).
pub fn block_line(block: &Block, index: usize, selection: &SelectionRange) -> Line<'static> {
    let block_type = block.block_type();
    let base = style::style_for_block(block_type);
    let highlight = highlight_in_block(block, index, selection);

    let mut spans = vec![Span::styled(
        style::gutter_for_block(block_type),
        style::style_for_gutter(block_type),
    )];

    for (run_span, run) in block.spans() {
        let run_style = style::style_for_marks(base, run.marks);
        let mut cuts = vec![run_span.start, run_span.end];
        if let Some(hl) = &highlight {
            cuts.extend([hl.start, hl.end].into_iter().filter(|c| run_span.contains(c)));
        }
        cuts.sort_unstable();
        cuts.dedup();

        let chars: Vec<char> = run.text.chars().collect();
        for pair in cuts.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            let text: String = chars[lo - run_span.start..hi - run_span.start]
                .iter()
                .map(|&c| if c.is_control() { ' ' } else { c })
                .collect();
            let selected = highlight
                .as_ref()
                .is_some_and(|hl| lo >= hl.start && hi <= hl.end);
            let span_style = if selected {
                style::style_for_selection(run_style)
            } else {
                run_style
            };
            spans.push(Span::styled(text, span_style));
        }
    }

    // Caret sitting after the last character gets a blank cell.
    let len = block.text_len();
    if highlight.as_ref().is_some_and(|hl| hl.start == len && hl.end == len + 1) {
        let marks = block.marks_at(len);
        let caret_style = style::style_for_selection(style::style_for_marks(base, marks));
        spans.push(Span::styled(" ", caret_style));
    }

    Line::from(spans).style(base)
}

/// Character span to draw highlighted in block `index`.
fn highlight_in_block(
    block: &Block,
    index: usize,
    selection: &SelectionRange,
) -> Option<std::ops::Range<usize>> {
    let (start, end) = (selection.start(), selection.end());
    if selection.is_collapsed() {
        return (start.block == index).then(|| start.offset..start.offset + 1);
    }
    if index < start.block || index > end.block {
        return None;
    }
    let lo = if index == start.block { start.offset } else { 0 };
    let hi = if index == end.block {
        end.offset
    } else {
        block.text_len()
    };
    (lo < hi).then_some(lo..hi)
}

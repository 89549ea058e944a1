//! Theming and color definitions.
//!
//! Maps block types and run marks to terminal styles. Uses ANSI colors
//! that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::document::{BlockType, Marks};

/// Gutter drawn before each line of a code block.
pub const CODE_GUTTER: &str = "\u{258e} ";
/// Gutter drawn before each paragraph line, same width as [`CODE_GUTTER`].
pub const PARAGRAPH_GUTTER: &str = "  ";

/// Base style for every run in a block of the given type.
pub fn style_for_block(block_type: BlockType) -> Style {
    match block_type {
        BlockType::Paragraph => Style::default(),
        // Code blocks - dim grey panel so they read as preformatted text
        BlockType::Code => Style::default()
            .fg(Color::Indexed(252))
            .bg(Color::Indexed(236)),
    }
}

/// Style of the gutter column for a block.
pub fn style_for_gutter(block_type: BlockType) -> Style {
    match block_type {
        BlockType::Paragraph => Style::default(),
        BlockType::Code => Style::default().fg(Color::Indexed(244)),
    }
}

pub const fn gutter_for_block(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::Paragraph => PARAGRAPH_GUTTER,
        BlockType::Code => CODE_GUTTER,
    }
}

/// Get the style for a run's marks, merged with a base block style.
pub fn style_for_marks(base: Style, marks: Marks) -> Style {
    let mut style = base;

    if marks.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if marks.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if marks.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if marks.code {
        style = style.fg(Color::Red).bg(Color::Indexed(235));
    }

    style
}

/// Style for selected text and the caret cell.
pub fn style_for_selection(base: Style) -> Style {
    base.add_modifier(Modifier::REVERSED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Mark;

    #[test]
    fn test_marks_map_to_modifiers() {
        let marks = Marks::default()
            .with(Mark::Bold)
            .with(Mark::Italic)
            .with(Mark::Underline);
        let style = style_for_marks(Style::default(), marks);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(style.fg, None);
    }

    #[test]
    fn test_code_mark_sets_monospace_colors() {
        let style = style_for_marks(Style::default(), Marks::default().with(Mark::Code));
        assert_eq!(style.fg, Some(Color::Red));
        assert!(!style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_code_block_has_background() {
        assert_eq!(style_for_block(BlockType::Paragraph), Style::default());
        assert_eq!(style_for_block(BlockType::Code).bg, Some(Color::Indexed(236)));
    }

    #[test]
    fn test_gutters_have_equal_width() {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(CODE_GUTTER.width(), PARAGRAPH_GUTTER.width());
    }
}

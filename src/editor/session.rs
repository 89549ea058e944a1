use crate::document::{
    BlockType, Document, Mark, Marks, Point, SelectionRange, is_block_type_active, is_mark_active,
};

/// Direction for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An editing session over one document.
///
/// Holds the document and the current selection. The selection is kept
/// inside document bounds after every operation.
pub struct EditorSession {
    document: Document,
    selection: SelectionRange,
    /// Remembered offset for vertical movement (sticky column).
    offset_memory: usize,
    dirty: bool,
}

impl EditorSession {
    /// Start a session with the caret at the start of the document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: SelectionRange::default(),
            offset_memory: 0,
            dirty: false,
        }
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub const fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// The caret: the focus end of the selection.
    pub const fn caret(&self) -> Point {
        self.selection.focus
    }

    /// Whether the document has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the document as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Replace the selection, clamping both endpoints into the document.
    pub fn select(&mut self, selection: SelectionRange) {
        self.selection = SelectionRange::new(
            self.clamp(selection.anchor),
            self.clamp(selection.focus),
        );
        self.offset_memory = self.selection.focus.offset;
    }

    /// Select the whole document (Ctrl+A).
    pub fn select_all(&mut self) {
        self.select(self.document.full_range());
    }

    /// Select all text in the block holding the caret.
    pub fn select_block(&mut self) {
        let block = self.caret().block;
        let len = self.block_len(block);
        self.select(SelectionRange::within(block, 0..len));
    }

    // --- Formatting ---

    /// Toggle a mark over the selection. Returns `true` if the document
    /// changed.
    pub fn toggle_mark(&mut self, mark: Mark) -> bool {
        let covers_text = self
            .document
            .block_spans(&self.selection)
            .is_some_and(|spans| spans.iter().any(|(_, span)| !span.is_empty()));
        crate::document::toggle_mark(&mut self.document, &self.selection, mark);
        self.dirty |= covers_text;
        covers_text
    }

    /// Toggle a block type over the selection. Returns `true` if the
    /// document changed.
    pub fn toggle_block_type(&mut self, block_type: BlockType) -> bool {
        let before: Vec<BlockType> = self.document.blocks().iter().map(|b| b.block_type()).collect();
        crate::document::toggle_block_type(&mut self.document, &self.selection, block_type);
        let changed = self
            .document
            .blocks()
            .iter()
            .zip(before)
            .any(|(block, old)| block.block_type() != old);
        self.dirty |= changed;
        changed
    }

    pub fn is_mark_active(&self, mark: Mark) -> bool {
        is_mark_active(&self.document, &self.selection, mark)
    }

    pub fn is_block_type_active(&self, block_type: BlockType) -> bool {
        is_block_type_active(&self.document, &self.selection, block_type)
    }

    /// Marks shown in the status bar: those active over the selection, or
    /// the marks typed text would take at a collapsed caret.
    pub fn marks_at_selection(&self) -> Marks {
        if self.selection.is_collapsed() {
            let caret = self.caret();
            return self
                .document
                .block(caret.block)
                .map(|block| block.marks_at(caret.offset))
                .unwrap_or_default();
        }
        let mut marks = Marks::default();
        for mark in Mark::ALL {
            marks.set(mark, self.is_mark_active(mark));
        }
        marks
    }

    /// Type of the block holding the caret.
    pub fn caret_block_type(&self) -> BlockType {
        self.document
            .block(self.caret().block)
            .map_or(BlockType::Paragraph, crate::document::Block::block_type)
    }

    // --- Text editing ---

    /// Insert a character at the caret, replacing any selected text.
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Insert a string at the caret, replacing any selected text.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let caret = self.delete_selection().unwrap_or_else(|| self.caret());
        let caret = self.document.insert_text(caret, s);
        self.collapse_to(caret);
        self.dirty = true;
    }

    /// Split the current block at the caret (Enter).
    pub fn split_block(&mut self) {
        let caret = self.delete_selection().unwrap_or_else(|| self.caret());
        let caret = self.document.split_block(caret);
        self.collapse_to(caret);
        self.dirty = true;
    }

    /// Delete the selection, or the character before the caret (Backspace).
    /// At the start of a block, joins it with the previous block.
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if let Some(caret) = self.delete_selection() {
            self.collapse_to(caret);
            self.dirty = true;
            return true;
        }
        let caret = self.caret();
        let range = if caret.offset > 0 {
            SelectionRange::within(caret.block, caret.offset - 1..caret.offset)
        } else if caret.block > 0 {
            let prev = caret.block - 1;
            SelectionRange::new(Point::new(prev, self.block_len(prev)), caret)
        } else {
            return false;
        };
        let caret = self.document.delete_range(&range);
        self.collapse_to(caret);
        self.dirty = true;
        true
    }

    // --- Caret movement ---

    /// Move the caret, collapsing the selection. With `extend`, only the
    /// focus moves and the anchor stays put.
    pub fn move_caret(&mut self, direction: Direction, extend: bool) {
        let target = match direction {
            Direction::Left => self.point_left(),
            Direction::Right => self.point_right(),
            Direction::Up => self.point_vertical(-1),
            Direction::Down => self.point_vertical(1),
        };
        let keep_memory = matches!(direction, Direction::Up | Direction::Down);
        self.place_focus(target, extend, keep_memory);
    }

    /// Move the caret to the beginning of the block (Home).
    pub fn move_home(&mut self, extend: bool) {
        let target = Point::new(self.caret().block, 0);
        self.place_focus(target, extend, false);
    }

    /// Move the caret to the end of the block (End).
    pub fn move_end(&mut self, extend: bool) {
        let block = self.caret().block;
        let target = Point::new(block, self.block_len(block));
        self.place_focus(target, extend, false);
    }

    /// Move the caret to the start of the document (Ctrl+Home).
    pub fn move_to_start(&mut self, extend: bool) {
        self.place_focus(Point::new(0, 0), extend, false);
    }

    /// Move the caret to the end of the document (Ctrl+End).
    pub fn move_to_end(&mut self, extend: bool) {
        let end = self.document.full_range().end();
        self.place_focus(end, extend, false);
    }

    /// Move the caret to a specific block and offset, clamped.
    pub fn move_to(&mut self, block: usize, offset: usize) {
        self.collapse_to(Point::new(block, offset));
    }

    // --- Private helpers ---

    fn block_len(&self, block: usize) -> usize {
        self.document.block(block).map_or(0, crate::document::Block::text_len)
    }

    fn clamp(&self, point: Point) -> Point {
        let block = point.block.min(self.document.len().saturating_sub(1));
        Point::new(block, point.offset.min(self.block_len(block)))
    }

    fn collapse_to(&mut self, point: Point) {
        self.select(SelectionRange::collapsed(point));
    }

    fn place_focus(&mut self, target: Point, extend: bool, keep_memory: bool) {
        let target = self.clamp(target);
        self.selection = if extend {
            SelectionRange::new(self.selection.anchor, target)
        } else {
            SelectionRange::collapsed(target)
        };
        if !keep_memory {
            self.offset_memory = target.offset;
        }
    }

    /// Delete the selected text if the selection is expanded, returning the
    /// new caret.
    fn delete_selection(&mut self) -> Option<Point> {
        if self.selection.is_collapsed() {
            return None;
        }
        Some(self.document.delete_range(&self.selection))
    }

    fn point_left(&self) -> Point {
        let caret = self.caret();
        if caret.offset > 0 {
            Point::new(caret.block, caret.offset - 1)
        } else if caret.block > 0 {
            Point::new(caret.block - 1, self.block_len(caret.block - 1))
        } else {
            caret
        }
    }

    fn point_right(&self) -> Point {
        let caret = self.caret();
        if caret.offset < self.block_len(caret.block) {
            Point::new(caret.block, caret.offset + 1)
        } else if caret.block + 1 < self.document.len() {
            Point::new(caret.block + 1, 0)
        } else {
            caret
        }
    }

    fn point_vertical(&self, step: isize) -> Point {
        let caret = self.caret();
        let Some(block) = caret.block.checked_add_signed(step) else {
            return caret;
        };
        if block >= self.document.len() {
            return caret;
        }
        Point::new(block, self.offset_memory.min(self.block_len(block)))
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field(
                "document",
                &format_args!("Document({} blocks)", self.document.len()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(Document::initial())
    }
}

//! Plain-text edits at a caret: insertion, deletion, and block splitting.
//!
//! Each edit takes caret positions and returns where the caret lands
//! afterwards. Positions outside the document leave it unchanged.

use super::types::byte_index;
use super::{Block, Document, Point, Run, SelectionRange};

impl Document {
    /// Insert `text` at `at`. The text joins the run to the left of the
    /// caret and takes its marks.
    ///
    /// `text` must not contain newlines; use [`Document::split_block`].
    pub fn insert_text(&mut self, at: Point, text: &str) -> Point {
        if text.is_empty() || !self.contains_point(at) {
            return at;
        }
        self.blocks[at.block].insert_text(at.offset, text);
        Point::new(at.block, at.offset + text.chars().count())
    }

    /// Remove the text between the endpoints of `range`, joining the first
    /// and last block when the range spans several. The joined block keeps
    /// the first block's type.
    pub fn delete_range(&mut self, range: &SelectionRange) -> Point {
        let (start, end) = (range.start(), range.end());
        if range.is_collapsed() || !self.contains_range(range) {
            return start;
        }
        if start.block == end.block {
            let block = &mut self.blocks[start.block];
            let tail = block.split_off(end.offset);
            block.split_off(start.offset);
            block.runs.extend(tail);
            block.normalize();
        } else {
            let tail = self.blocks[end.block].split_off(end.offset);
            let first = &mut self.blocks[start.block];
            first.split_off(start.offset);
            first.runs.extend(tail);
            first.normalize();
            self.blocks.drain(start.block + 1..=end.block);
        }
        start
    }

    /// Split the block at `at` into two blocks of the same type. The caret
    /// moves to the start of the new block.
    pub fn split_block(&mut self, at: Point) -> Point {
        if !self.contains_point(at) {
            return at;
        }
        let block = &mut self.blocks[at.block];
        let tail = block.split_off(at.offset);
        let next = Block::new(block.block_type, tail);
        block.normalize();
        self.blocks.insert(at.block + 1, next);
        Point::new(at.block + 1, 0)
    }
}

impl Block {
    fn insert_text(&mut self, offset: usize, text: &str) {
        let last = self.runs.len().saturating_sub(1);
        let mut pos = 0;
        for (index, run) in self.runs.iter_mut().enumerate() {
            let len = run.char_len();
            if offset <= pos + len || index == last {
                let at = byte_index(&run.text, offset.saturating_sub(pos));
                run.text.insert_str(at, text);
                return;
            }
            pos += len;
        }
    }

    /// Keep the text before `offset` and return the runs after it.
    ///
    /// Neither side is left without a run: an empty side gets an empty run
    /// carrying the marks found at the split point.
    fn split_off(&mut self, offset: usize) -> Vec<Run> {
        let mut head = Vec::with_capacity(self.runs.len());
        let mut tail = Vec::new();
        let mut pos = 0;
        for run in std::mem::take(&mut self.runs) {
            let len = run.char_len();
            if pos + len <= offset {
                head.push(run);
            } else if pos >= offset {
                tail.push(run);
            } else {
                let (a, b) = run.split_at(offset - pos);
                head.push(a);
                tail.push(b);
            }
            pos += len;
        }
        if head.is_empty() {
            let marks = tail.first().map(|run| run.marks).unwrap_or_default();
            head.push(Run::with_marks(String::new(), marks));
        }
        if tail.is_empty() {
            let marks = head.last().map(|run| run.marks).unwrap_or_default();
            tail.push(Run::with_marks(String::new(), marks));
        }
        self.runs = head;
        tail
    }
}

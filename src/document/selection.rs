//! Block/offset addressing for selections.

use std::ops::Range;

use super::Document;

/// A caret position: a block index and a character offset inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub block: usize,
    pub offset: usize,
}

impl Point {
    pub const fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// A span of the document between an anchor and a focus.
///
/// The focus may come before the anchor (a backward selection);
/// [`SelectionRange::start`] and [`SelectionRange::end`] return the
/// endpoints in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub anchor: Point,
    pub focus: Point,
}

impl SelectionRange {
    pub const fn new(anchor: Point, focus: Point) -> Self {
        Self { anchor, focus }
    }

    /// A selection with both endpoints at `point`.
    pub const fn collapsed(point: Point) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    /// Shorthand for a selection inside one block.
    pub fn within(block: usize, offsets: Range<usize>) -> Self {
        Self {
            anchor: Point::new(block, offsets.start),
            focus: Point::new(block, offsets.end),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    pub fn is_backward(&self) -> bool {
        self.focus < self.anchor
    }

    pub fn start(&self) -> Point {
        self.anchor.min(self.focus)
    }

    pub fn end(&self) -> Point {
        self.anchor.max(self.focus)
    }
}

impl Document {
    /// Whether `point` addresses an existing block and an offset no greater
    /// than that block's length.
    pub fn contains_point(&self, point: Point) -> bool {
        self.blocks
            .get(point.block)
            .is_some_and(|block| point.offset <= block.text_len())
    }

    /// Whether both endpoints of `range` are inside the document.
    pub fn contains_range(&self, range: &SelectionRange) -> bool {
        self.contains_point(range.anchor) && self.contains_point(range.focus)
    }

    /// A range spanning the whole document, from the start of the first
    /// block to the end of the last.
    pub fn full_range(&self) -> SelectionRange {
        let last = self.blocks.len().saturating_sub(1);
        let end = self.blocks.get(last).map_or(0, super::Block::text_len);
        SelectionRange::new(Point::new(0, 0), Point::new(last, end))
    }

    /// The per-block character spans a range covers, in document order.
    ///
    /// Returns `None` when the range is collapsed or out of bounds. Every
    /// block between the endpoints is listed, including those where the
    /// span is empty (e.g. a selection starting at the end of a block).
    pub(crate) fn block_spans(&self, range: &SelectionRange) -> Option<Vec<(usize, Range<usize>)>> {
        if range.is_collapsed() || !self.contains_range(range) {
            return None;
        }
        let (start, end) = (range.start(), range.end());
        let spans = (start.block..=end.block)
            .map(|index| {
                let lo = if index == start.block { start.offset } else { 0 };
                let hi = if index == end.block {
                    end.offset
                } else {
                    self.blocks[index].text_len()
                };
                (index, lo..hi)
            })
            .collect();
        Some(spans)
    }
}

//! Core document types.

use serde::{Deserialize, Deserializer, Serialize};

/// Text shown when the editor starts without a document file.
const INITIAL_TEXT: &str = "A line of text in a paragraph.";

/// A boolean formatting attribute that can be toggled on a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Mark {
    /// All marks, in the order they are listed in the status bar.
    pub const ALL: [Self; 4] = [Self::Bold, Self::Italic, Self::Underline, Self::Code];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Code => "code",
        }
    }
}

/// The set of marks active on a run.
///
/// Every mark is an explicit boolean. Missing fields in serialized input
/// default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

impl Marks {
    pub const fn get(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Code => self.code,
        }
    }

    pub const fn set(&mut self, mark: Mark, value: bool) {
        match mark {
            Mark::Bold => self.bold = value,
            Mark::Italic => self.italic = value,
            Mark::Underline => self.underline = value,
            Mark::Code => self.code = value,
        }
    }

    /// Builder-style variant of [`Marks::set`].
    #[must_use]
    pub const fn with(mut self, mark: Mark) -> Self {
        self.set(mark, true);
        self
    }

    /// Iterate over the marks that are set.
    pub fn active(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(|mark| self.get(*mark))
    }
}

/// A contiguous span of text sharing the same marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(flatten)]
    pub marks: Marks,
}

impl Run {
    /// A run with no marks.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
        }
    }

    pub fn with_marks(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Split at a character offset. Both halves keep this run's marks.
    pub(crate) fn split_at(self, offset: usize) -> (Self, Self) {
        let at = byte_index(&self.text, offset);
        let tail = self.text[at..].to_string();
        let mut head = self.text;
        head.truncate(at);
        (
            Self::with_marks(head, self.marks),
            Self::with_marks(tail, self.marks),
        )
    }
}

/// Structural type of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Paragraph,
    Code,
}

impl BlockType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Code => "code",
        }
    }
}

/// A paragraph or code block holding ordered runs.
///
/// A block always holds at least one run. Adjacent runs never share the same
/// marks, and empty runs only appear as the single run of an empty block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type", default)]
    pub(crate) block_type: BlockType,
    #[serde(rename = "children", default)]
    pub(crate) runs: Vec<Run>,
}

impl Block {
    pub fn new(block_type: BlockType, runs: Vec<Run>) -> Self {
        let mut block = Self { block_type, runs };
        block.normalize();
        block
    }

    pub fn paragraph(runs: Vec<Run>) -> Self {
        Self::new(BlockType::Paragraph, runs)
    }

    pub fn code(runs: Vec<Run>) -> Self {
        Self::new(BlockType::Code, runs)
    }

    pub const fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Length of the block's text in characters.
    pub fn text_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Runs paired with their character span inside the block.
    pub fn spans(&self) -> impl Iterator<Item = (std::ops::Range<usize>, &Run)> + '_ {
        self.runs.iter().scan(0, |pos, run| {
            let start = *pos;
            *pos += run.char_len();
            Some((start..*pos, run))
        })
    }

    /// Marks in effect at a caret position, taken from the run to the left
    /// of the caret (or the first run at offset 0).
    pub fn marks_at(&self, offset: usize) -> Marks {
        self.spans()
            .find(|(span, _)| offset <= span.end)
            .or_else(|| self.spans().last())
            .map(|(_, run)| run.marks)
            .unwrap_or_default()
    }

    /// Merge adjacent runs with identical marks and drop empty runs,
    /// keeping one empty run when the block has no text.
    pub(crate) fn normalize(&mut self) {
        let fallback = self.runs.first().map(|run| run.marks).unwrap_or_default();
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in std::mem::take(&mut self.runs) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(prev) if prev.marks == run.marks => prev.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        if merged.is_empty() {
            merged.push(Run::with_marks(String::new(), fallback));
        }
        self.runs = merged;
    }
}

/// An ordered sequence of blocks: the formatted document being edited.
///
/// A document always holds at least one block and is kept in normal form
/// (see [`Block`]), so structurally equal content compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub(crate) blocks: Vec<Block>,
}

impl Document {
    /// Build a document, normalizing every block.
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut blocks = blocks;
        for block in &mut blocks {
            block.normalize();
        }
        if blocks.is_empty() {
            blocks.push(Block::paragraph(Vec::new()));
        }
        Self { blocks }
    }

    /// A document with a single empty paragraph.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The document shown when the editor starts without a file.
    pub fn initial() -> Self {
        Self::new(vec![Block::paragraph(vec![Run::plain(INITIAL_TEXT)])])
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block texts joined with newlines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Block>::deserialize(deserializer).map(Self::new)
    }
}

/// Byte index of a character offset, clamped to the end of the string.
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices().nth(offset).map_or(text.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_holds_one_empty_run() {
        let block = Block::paragraph(Vec::new());
        assert_eq!(block.runs(), &[Run::plain("")]);
        assert_eq!(block.text_len(), 0);
    }

    #[test]
    fn test_normalize_merges_adjacent_runs_with_same_marks() {
        let bold = Marks::default().with(Mark::Bold);
        let block = Block::paragraph(vec![
            Run::plain("ab"),
            Run::plain("cd"),
            Run::with_marks("", bold),
            Run::with_marks("ef", bold),
            Run::with_marks("gh", bold),
        ]);
        assert_eq!(
            block.runs(),
            &[Run::plain("abcd"), Run::with_marks("efgh", bold)]
        );
    }

    #[test]
    fn test_normalize_keeps_marks_of_empty_block() {
        let italic = Marks::default().with(Mark::Italic);
        let block = Block::paragraph(vec![Run::with_marks("", italic), Run::plain("")]);
        assert_eq!(block.runs(), &[Run::with_marks("", italic)]);
    }

    #[test]
    fn test_document_never_has_zero_blocks() {
        let doc = Document::new(Vec::new());
        assert_eq!(doc.len(), 1);
        assert!(!doc.is_empty());
        assert_eq!(doc.blocks()[0].block_type(), BlockType::Paragraph);
    }

    #[test]
    fn test_initial_document_is_single_paragraph() {
        let doc = Document::initial();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.plain_text(), "A line of text in a paragraph.");
    }

    #[test]
    fn test_run_split_at_multibyte_offset() {
        let run = Run::with_marks("café au lait", Marks::default().with(Mark::Code));
        let (head, tail) = run.split_at(4);
        assert_eq!(head.text, "café");
        assert_eq!(tail.text, " au lait");
        assert!(head.marks.code && tail.marks.code);
    }

    #[test]
    fn test_spans_report_character_ranges() {
        let block = Block::paragraph(vec![
            Run::plain("hé"),
            Run::with_marks("llo", Marks::default().with(Mark::Bold)),
        ]);
        let spans: Vec<_> = block.spans().map(|(span, _)| span).collect();
        assert_eq!(spans, vec![0..2, 2..5]);
    }

    #[test]
    fn test_marks_at_prefers_run_left_of_caret() {
        let bold = Marks::default().with(Mark::Bold);
        let block = Block::paragraph(vec![Run::with_marks("ab", bold), Run::plain("cd")]);
        assert_eq!(block.marks_at(0), bold);
        assert_eq!(block.marks_at(2), bold);
        assert_eq!(block.marks_at(3), Marks::default());
        assert_eq!(block.marks_at(99), Marks::default());
    }

    #[test]
    fn test_marks_active_lists_set_marks_in_order() {
        let marks = Marks::default().with(Mark::Code).with(Mark::Bold);
        let active: Vec<_> = marks.active().collect();
        assert_eq!(active, vec![Mark::Bold, Mark::Code]);
    }
}

//! Mark and block-type toggling.
//!
//! All four operations take a [`SelectionRange`] and treat a collapsed or
//! out-of-bounds range as "nothing selected": queries return `false` and
//! toggles leave the document untouched.

use std::ops::Range;

use super::{Block, BlockType, Document, Mark, SelectionRange};

/// Whether every run overlapping `range` has `mark` set.
///
/// A run counts as covered when it shares at least one character with the
/// range. Returns `false` when nothing is covered.
pub fn is_mark_active(document: &Document, range: &SelectionRange, mark: Mark) -> bool {
    let Some(spans) = document.block_spans(range) else {
        return false;
    };
    let mut covered = spans
        .iter()
        .flat_map(|(index, span)| covered_runs(&document.blocks[*index], span.clone()))
        .peekable();
    covered.peek().is_some() && covered.all(|marks| marks.get(mark))
}

/// Flip `mark` over the covered text.
///
/// If the mark is active on every covered run it is cleared, otherwise it is
/// set on all of them. Runs straddling a range boundary are split so that
/// text outside the range keeps its marks.
pub fn toggle_mark(document: &mut Document, range: &SelectionRange, mark: Mark) {
    let Some(spans) = document.block_spans(range) else {
        return;
    };
    if spans.iter().all(|(_, span)| span.is_empty()) {
        tracing::debug!(mark = mark.name(), "toggle_mark: selection covers no text");
        return;
    }
    let value = !is_mark_active(document, range, mark);
    for (index, span) in spans {
        if !span.is_empty() {
            document.blocks[index].set_mark(span, mark, value);
        }
    }
    tracing::debug!(mark = mark.name(), value, "toggle_mark applied");
}

/// Whether every block intersecting `range` has type `block_type`.
pub fn is_block_type_active(
    document: &Document,
    range: &SelectionRange,
    block_type: BlockType,
) -> bool {
    document.block_spans(range).is_some_and(|spans| {
        spans
            .iter()
            .all(|(index, _)| document.blocks[*index].block_type == block_type)
    })
}

/// Set every block intersecting `range` to `block_type`, or back to
/// [`BlockType::Paragraph`] when they already all have that type.
///
/// Works on whole blocks; runs are never touched.
pub fn toggle_block_type(document: &mut Document, range: &SelectionRange, block_type: BlockType) {
    let Some(spans) = document.block_spans(range) else {
        return;
    };
    let target = if is_block_type_active(document, range, block_type) {
        BlockType::Paragraph
    } else {
        block_type
    };
    for (index, _) in spans {
        document.blocks[index].block_type = target;
    }
    tracing::debug!(block_type = target.name(), "toggle_block_type applied");
}

/// Marks of each run sharing at least one character with `span`.
fn covered_runs(block: &Block, span: Range<usize>) -> impl Iterator<Item = super::Marks> + '_ {
    block
        .spans()
        .filter(move |(run_span, _)| run_span.start.max(span.start) < run_span.end.min(span.end))
        .map(|(_, run)| run.marks)
}

impl Block {
    /// Set `mark` to `value` on the characters in `span`, splitting runs at
    /// the span boundaries.
    fn set_mark(&mut self, span: Range<usize>, mark: Mark, value: bool) {
        let mut out = Vec::with_capacity(self.runs.len() + 2);
        let mut pos = 0;
        for run in std::mem::take(&mut self.runs) {
            let len = run.char_len();
            let (start, end) = (pos, pos + len);
            pos = end;
            if end <= span.start || start >= span.end {
                out.push(run);
                continue;
            }
            let cut_lo = span.start.max(start) - start;
            let cut_hi = span.end.min(end) - start;
            let (head, rest) = run.split_at(cut_lo);
            let (mut middle, tail) = rest.split_at(cut_hi - cut_lo);
            middle.marks.set(mark, value);
            out.extend([head, middle, tail]);
        }
        self.runs = out;
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Marks, Point, Run};

    fn bold() -> Marks {
        Marks::default().with(Mark::Bold)
    }

    fn single(text: &str) -> Document {
        Document::new(vec![Block::paragraph(vec![Run::plain(text)])])
    }

    #[test]
    fn test_toggle_bold_on_suffix_splits_run() {
        let mut doc = single("HelloWorld");
        toggle_mark(&mut doc, &SelectionRange::within(0, 5..10), Mark::Bold);
        assert_eq!(
            doc.blocks()[0].runs(),
            &[Run::plain("Hello"), Run::with_marks("World", bold())]
        );
    }

    #[test]
    fn test_toggle_bold_in_middle_yields_three_runs() {
        let mut doc = single("0123456789");
        toggle_mark(&mut doc, &SelectionRange::within(0, 3..8), Mark::Bold);
        assert_eq!(
            doc.blocks()[0].runs(),
            &[
                Run::plain("012"),
                Run::with_marks("34567", bold()),
                Run::plain("89"),
            ]
        );
    }

    #[test]
    fn test_toggle_twice_restores_document() {
        let original = single("HelloWorld");
        let mut doc = original.clone();
        let range = SelectionRange::within(0, 2..7);
        toggle_mark(&mut doc, &range, Mark::Italic);
        assert_ne!(doc, original);
        toggle_mark(&mut doc, &range, Mark::Italic);
        assert_eq!(doc, original);
    }

    #[test]
    fn test_toggle_keeps_other_marks_outside_range() {
        let mut doc = Document::new(vec![Block::paragraph(vec![Run::with_marks(
            "abcdef",
            Marks::default().with(Mark::Underline),
        )])]);
        toggle_mark(&mut doc, &SelectionRange::within(0, 0..3), Mark::Bold);
        let underline = Marks::default().with(Mark::Underline);
        assert_eq!(
            doc.blocks()[0].runs(),
            &[
                Run::with_marks("abc", underline.with(Mark::Bold)),
                Run::with_marks("def", underline),
            ]
        );
    }

    #[test]
    fn test_mixed_selection_sets_mark_everywhere() {
        let mut doc = Document::new(vec![Block::paragraph(vec![
            Run::with_marks("ab", bold()),
            Run::plain("cd"),
        ])]);
        let range = SelectionRange::within(0, 0..4);
        assert!(!is_mark_active(&doc, &range, Mark::Bold));
        toggle_mark(&mut doc, &range, Mark::Bold);
        assert_eq!(doc.blocks()[0].runs(), &[Run::with_marks("abcd", bold())]);
        assert!(is_mark_active(&doc, &range, Mark::Bold));
    }

    #[test]
    fn test_partially_covered_run_counts_as_covered() {
        let doc = Document::new(vec![Block::paragraph(vec![
            Run::with_marks("ab", bold()),
            Run::plain("cd"),
        ])]);
        assert!(is_mark_active(&doc, &SelectionRange::within(0, 1..2), Mark::Bold));
        assert!(!is_mark_active(&doc, &SelectionRange::within(0, 1..3), Mark::Bold));
    }

    #[test]
    fn test_toggle_mark_across_blocks() {
        let mut doc = Document::new(vec![
            Block::paragraph(vec![Run::plain("first")]),
            Block::code(vec![Run::plain("second")]),
        ]);
        let range = SelectionRange::new(Point::new(0, 3), Point::new(1, 2));
        toggle_mark(&mut doc, &range, Mark::Code);
        let code = Marks::default().with(Mark::Code);
        assert_eq!(
            doc.blocks()[0].runs(),
            &[Run::plain("fir"), Run::with_marks("st", code)]
        );
        assert_eq!(
            doc.blocks()[1].runs(),
            &[Run::with_marks("se", code), Run::plain("cond")]
        );
        assert!(is_mark_active(&doc, &range, Mark::Code));
        assert_eq!(doc.blocks()[1].block_type(), BlockType::Code);
    }

    #[test]
    fn test_collapsed_selection_is_noop() {
        let original = single("abc");
        let mut doc = original.clone();
        let range = SelectionRange::collapsed(Point::new(0, 1));
        assert!(!is_mark_active(&doc, &range, Mark::Bold));
        toggle_mark(&mut doc, &range, Mark::Bold);
        toggle_block_type(&mut doc, &range, BlockType::Code);
        assert_eq!(doc, original);
    }

    #[test]
    fn test_out_of_bounds_selection_is_noop() {
        let original = single("abc");
        let mut doc = original.clone();
        for range in [
            SelectionRange::within(0, 1..4),
            SelectionRange::within(1, 0..1),
            SelectionRange::new(Point::new(0, 0), Point::new(3, 0)),
        ] {
            toggle_mark(&mut doc, &range, Mark::Bold);
            toggle_block_type(&mut doc, &range, BlockType::Code);
            assert!(!is_block_type_active(&doc, &range, BlockType::Paragraph));
        }
        assert_eq!(doc, original);
    }

    #[test]
    fn test_selection_covering_no_characters_is_noop() {
        let original = Document::new(vec![
            Block::paragraph(vec![Run::plain("ab")]),
            Block::paragraph(Vec::new()),
        ]);
        let mut doc = original.clone();
        let range = SelectionRange::new(Point::new(0, 2), Point::new(1, 0));
        assert!(!is_mark_active(&doc, &range, Mark::Bold));
        toggle_mark(&mut doc, &range, Mark::Bold);
        assert_eq!(doc, original);
    }

    #[test]
    fn test_toggle_block_type_round_trip() {
        let mut doc = single("abc");
        let range = SelectionRange::within(0, 0..1);
        toggle_block_type(&mut doc, &range, BlockType::Code);
        assert_eq!(doc.blocks()[0].block_type(), BlockType::Code);
        assert!(is_block_type_active(&doc, &range, BlockType::Code));
        toggle_block_type(&mut doc, &range, BlockType::Code);
        assert_eq!(doc.blocks()[0].block_type(), BlockType::Paragraph);
    }

    #[test]
    fn test_toggle_block_type_mixed_blocks_become_code() {
        let mut doc = Document::new(vec![
            Block::code(vec![Run::plain("a")]),
            Block::paragraph(vec![Run::plain("b")]),
            Block::paragraph(vec![Run::plain("c")]),
        ]);
        let range = SelectionRange::new(Point::new(0, 0), Point::new(1, 1));
        assert!(!is_block_type_active(&doc, &range, BlockType::Code));
        toggle_block_type(&mut doc, &range, BlockType::Code);
        let types: Vec<_> = doc.blocks().iter().map(Block::block_type).collect();
        assert_eq!(
            types,
            vec![BlockType::Code, BlockType::Code, BlockType::Paragraph]
        );
    }

    #[test]
    fn test_block_toggle_leaves_runs_and_mark_toggle_leaves_type() {
        let mut doc = single("abc");
        let range = doc.full_range();
        toggle_block_type(&mut doc, &range, BlockType::Code);
        assert_eq!(doc.blocks()[0].runs(), &[Run::plain("abc")]);
        toggle_mark(&mut doc, &range, Mark::Bold);
        assert_eq!(doc.blocks()[0].block_type(), BlockType::Code);
        assert_eq!(doc.blocks()[0].runs(), &[Run::with_marks("abc", bold())]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_marks() -> impl Strategy<Value = Marks> {
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
                |(bold, italic, underline, code)| Marks {
                    bold,
                    italic,
                    underline,
                    code,
                },
            )
        }

        fn arb_block() -> impl Strategy<Value = Block> {
            (
                any::<bool>(),
                prop::collection::vec(("[a-zé ]{0,6}", arb_marks()), 1..5),
            )
                .prop_map(|(code, runs)| {
                    let runs = runs
                        .into_iter()
                        .map(|(text, marks)| Run::with_marks(text, marks))
                        .collect();
                    if code {
                        Block::code(runs)
                    } else {
                        Block::paragraph(runs)
                    }
                })
        }

        fn arb_doc_and_range() -> impl Strategy<Value = (Document, SelectionRange)> {
            prop::collection::vec(arb_block(), 1..4)
                .prop_map(Document::new)
                .prop_flat_map(|doc| {
                    let points: Vec<Point> = doc
                        .blocks()
                        .iter()
                        .enumerate()
                        .flat_map(|(block, b)| {
                            (0..=b.text_len()).map(move |offset| Point::new(block, offset))
                        })
                        .collect();
                    let n = points.len();
                    (Just(doc), Just(points), 0..n, 0..n)
                })
                .prop_map(|(doc, points, a, f)| (doc, SelectionRange::new(points[a], points[f])))
        }

        fn arb_mark() -> impl Strategy<Value = Mark> {
            prop::sample::select(Mark::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn toggle_mark_flips_activity((doc, range) in arb_doc_and_range(), mark in arb_mark()) {
                let mut doc = doc;
                let before = is_mark_active(&doc, &range, mark);
                toggle_mark(&mut doc, &range, mark);
                let covers_text = doc
                    .block_spans(&range)
                    .is_some_and(|spans| spans.iter().any(|(_, span)| !span.is_empty()));
                prop_assert_eq!(is_mark_active(&doc, &range, mark), covers_text && !before);
            }

            #[test]
            fn two_toggles_cancel_when_covered_runs_agree(
                (doc, range) in arb_doc_and_range(),
                mark in arb_mark(),
            ) {
                let uniform = doc.block_spans(&range).is_none_or(|spans| {
                    let values: Vec<bool> = spans
                        .iter()
                        .flat_map(|(index, span)| covered_runs(&doc.blocks()[*index], span.clone()))
                        .map(|marks| marks.get(mark))
                        .collect();
                    values.iter().all(|v| *v) || values.iter().all(|v| !*v)
                });
                prop_assume!(uniform);
                let mut toggled = doc.clone();
                toggle_mark(&mut toggled, &range, mark);
                toggle_mark(&mut toggled, &range, mark);
                prop_assert_eq!(toggled, doc);
            }

            #[test]
            fn toggle_mark_preserves_text_and_block_types(
                (doc, range) in arb_doc_and_range(),
                mark in arb_mark(),
            ) {
                let mut toggled = doc.clone();
                toggle_mark(&mut toggled, &range, mark);
                prop_assert_eq!(toggled.plain_text(), doc.plain_text());
                let types = |d: &Document| d.blocks().iter().map(Block::block_type).collect::<Vec<_>>();
                prop_assert_eq!(types(&toggled), types(&doc));
            }

            #[test]
            fn toggled_documents_stay_normalized(
                (doc, range) in arb_doc_and_range(),
                mark in arb_mark(),
            ) {
                let mut toggled = doc;
                toggle_mark(&mut toggled, &range, mark);
                for block in toggled.blocks() {
                    prop_assert!(!block.runs().is_empty());
                    for pair in block.runs().windows(2) {
                        prop_assert_ne!(pair[0].marks, pair[1].marks);
                        prop_assert!(!pair[0].text.is_empty() && !pair[1].text.is_empty());
                    }
                }
            }

            #[test]
            fn block_toggle_twice_resets_to_paragraph_or_restores(
                (doc, range) in arb_doc_and_range(),
            ) {
                let mut toggled = doc.clone();
                toggle_block_type(&mut toggled, &range, BlockType::Code);
                toggle_block_type(&mut toggled, &range, BlockType::Code);
                for (index, block) in toggled.blocks().iter().enumerate() {
                    prop_assert_eq!(block.runs(), doc.blocks()[index].runs());
                }
                if is_block_type_active(&doc, &range, BlockType::Code)
                    || doc.block_spans(&range).is_none()
                {
                    prop_assert_eq!(toggled, doc);
                }
            }
        }
    }
}

use crate::geometry::{TextRange, texts_range};
use crate::tree::{Block, Text};

/// Layout hints consumed when paragraphs are stitched back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParagraphShape {
    pub has_paragraph_indentation: bool,
    pub has_last_line_touch_end: bool,
}

/// Shape of a paragraph whose lines are `texts`, measured against `range`.
///
/// Offsets are compared against the mean line height: an indent must exceed
/// it, and the gap left after the last line must stay below it.
pub fn paragraph_shape(texts: &[Text], range: TextRange) -> ParagraphShape {
    let (Some(first), Some(last)) = (texts.first(), texts.last()) else {
        return ParagraphShape::default();
    };

    let first_delta_x = (first.rect.lt.x + first.rect.lb.x) / 2.0 - range.x1;
    let last_delta_x = range.x2 - (last.rect.rt.x + last.rect.rb.x) / 2.0;

    ParagraphShape {
        has_paragraph_indentation: first_delta_x > range.mean_line_height,
        has_last_line_touch_end: last_delta_x < range.mean_line_height,
    }
}

/// Set the paragraph flags of every non-abandoned text block on a page.
///
/// Multi-line blocks are measured against their own lines. A single line says
/// nothing about its column, so it is measured against the whole page.
pub fn classify_paragraph_shapes(blocks: &mut [Block]) {
    let page_range = texts_range(blocks.iter());
    tracing::trace!(?page_range, "page text range");

    for block in blocks.iter_mut() {
        let Block::Text(text_block) = block else {
            continue;
        };
        if text_block.is_abandon() || text_block.texts.is_empty() {
            continue;
        }

        let range = if text_block.texts.len() == 1 {
            page_range
        } else {
            TextRange::from_texts(&text_block.texts)
        };

        let shape = paragraph_shape(&text_block.texts, range);
        text_block.has_paragraph_indentation = shape.has_paragraph_indentation;
        text_block.has_last_line_touch_end = shape.has_last_line_touch_end;
    }
}

use serde::Serialize;

use crate::tree::{Block, Text};

/// Horizontal extent and typical line height of a set of text lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextRange {
    pub mean_line_height: f64,
    /// Leftmost x over every corner of every line.
    pub x1: f64,
    /// Rightmost x over every corner of every line.
    pub x2: f64,
}

impl TextRange {
    /// Statistics over `texts`; all zero when there are none.
    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a Text>,
    {
        let mut sum_lines_height = 0.0;
        let mut texts_count = 0usize;
        let mut x1 = f64::INFINITY;
        let mut x2 = f64::NEG_INFINITY;

        for text in texts {
            sum_lines_height += text.rect.height();
            texts_count += 1;
            for point in &text.rect {
                x1 = x1.min(point.x);
                x2 = x2.max(point.x);
            }
        }

        if texts_count == 0 {
            return Self::default();
        }

        Self {
            mean_line_height: sum_lines_height / texts_count as f64,
            x1,
            x2,
        }
    }
}

/// Page statistics over body text only.
///
/// Asset captions and abandoned blocks are left out so that headers,
/// footers and figure labels do not stretch the text column.
pub fn texts_range<'a, I>(blocks: I) -> TextRange
where
    I: IntoIterator<Item = &'a Block>,
{
    TextRange::from_texts(
        blocks
            .into_iter()
            .filter_map(Block::as_text)
            .filter(|block| !block.is_abandon())
            .flat_map(|block| block.texts.iter()),
    )
}

use image::DynamicImage;
use layout::{OcrFragment, Rectangle};
use serde::Serialize;

/// One recognized line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub content: String,
    pub rank: f32,
    pub rect: Rectangle,
}

impl From<&OcrFragment> for Text {
    fn from(fragment: &OcrFragment) -> Self {
        Self {
            content: fragment.text.clone(),
            rank: fragment.rank,
            rect: fragment.rect,
        }
    }
}

pub(crate) fn convert_fragments(fragments: &[OcrFragment]) -> Vec<Text> {
    fragments.iter().map(Text::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Title,
    PlainText,
    /// Headers, footers and noise. Kept for traceability, never reflowed.
    Abandon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub rect: Rectangle,
    pub kind: TextKind,
    pub texts: Vec<Text>,
    /// First line starts noticeably right of the text's left edge.
    pub has_paragraph_indentation: bool,
    /// Last line runs (almost) to the right edge, so the paragraph likely
    /// continues in the next block.
    pub has_last_line_touch_end: bool,
}

impl TextBlock {
    pub fn new(rect: Rectangle, kind: TextKind, texts: Vec<Text>) -> Self {
        Self {
            rect,
            kind,
            texts,
            has_paragraph_indentation: false,
            has_last_line_touch_end: false,
        }
    }

    pub fn is_abandon(&self) -> bool {
        self.kind == TextKind::Abandon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Figure,
    Table,
    Formula,
}

/// Figure, table or formula cut out of the page, with any captions and
/// footnotes attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct AssetBlock {
    pub rect: Rectangle,
    pub kind: AssetKind,
    #[serde(skip)]
    image: DynamicImage,
    pub texts: Vec<Text>,
}

impl AssetBlock {
    pub fn new(rect: Rectangle, kind: AssetKind, image: DynamicImage) -> Self {
        Self {
            rect,
            kind,
            image,
            texts: Vec::new(),
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Text(TextBlock),
    Asset(AssetBlock),
}

impl Block {
    pub fn texts(&self) -> &[Text] {
        match self {
            Block::Text(block) => &block.texts,
            Block::Asset(block) => &block.texts,
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(block) => Some(block),
            Block::Asset(_) => None,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetBlock> {
        match self {
            Block::Text(_) => None,
            Block::Asset(block) => Some(block),
        }
    }
}

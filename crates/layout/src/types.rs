use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::geometry::Rectangle;

/// Region class emitted by the layout model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LayoutClass {
    Title,
    PlainText,
    /// Page headers, footers, and other noise.
    Abandon,
    Figure,
    FigureCaption,
    Table,
    TableCaption,
    TableFootnote,
    IsolateFormula,
    FormulaCaption,
    /// Any class this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

impl LayoutClass {
    /// Asset class a caption-like region belongs to, or `None` for
    /// everything that is not a caption.
    pub fn caption_target(self) -> Option<LayoutClass> {
        match self {
            LayoutClass::FigureCaption => Some(LayoutClass::Figure),
            LayoutClass::TableCaption | LayoutClass::TableFootnote => Some(LayoutClass::Table),
            LayoutClass::FormulaCaption => Some(LayoutClass::IsolateFormula),
            _ => None,
        }
    }
}

/// A recognized text line inside a layout region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrFragment {
    pub text: String,
    /// Recognition confidence.
    pub rank: f32,
    pub rect: Rectangle,
}

/// Classified page region with the OCR fragments found inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub class: LayoutClass,
    pub rect: Rectangle,
    #[serde(default)]
    pub fragments: Vec<OcrFragment>,
}

impl Layout {
    pub fn new(class: LayoutClass, rect: Rectangle) -> Self {
        Self {
            class,
            rect,
            fragments: Vec::new(),
        }
    }

    pub fn with_fragments(mut self, fragments: Vec<OcrFragment>) -> Self {
        self.fragments = fragments;
        self
    }
}

/// One page as produced by the upstream layout run.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Zero-based page index within the document.
    pub index: usize,
    /// Rendered page raster; layout coordinates are in its pixel space.
    pub image: DynamicImage,
    /// Regions in reading order.
    pub layouts: Vec<Layout>,
}

//! Page block extraction.
//!
//! Turns the classified regions of a page (as produced by an upstream
//! layout/OCR run) into an ordered list of [`Block`]s: titles and paragraphs
//! with paragraph-shape hints, and figures, tables and formulas carrying their
//! captions.

pub mod assembler;
pub mod clip;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod shape;
pub mod source;
pub mod tree;

pub use assembler::assemble_blocks;
pub use clip::{PageClipper, RasterClipper};
pub use config::{ConfigError, ConfigResult, ExtractorConfig};
pub use error::{BoxError, ExtractError, ExtractResult};
pub use geometry::{TextRange, texts_range};
pub use pipeline::{PageExtractor, Pages};
pub use shape::{ParagraphShape, classify_paragraph_shapes, paragraph_shape};
pub use source::LayoutSource;
pub use tree::{AssetBlock, AssetKind, Block, Text, TextBlock, TextKind};

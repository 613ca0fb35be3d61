//! Records produced by the upstream layout/OCR run for a document page.
//!
//! Everything here is plain data: classified regions, the OCR fragments inside
//! them, and the page raster they were detected on.

pub mod geometry;
pub mod types;

pub use geometry::Rectangle;
pub use types::{ExtractedPage, Layout, LayoutClass, OcrFragment};

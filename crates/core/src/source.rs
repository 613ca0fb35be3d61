use std::path::Path;

use layout::ExtractedPage;

/// Upstream document extractor: renders pages and runs layout detection and
/// OCR on them.
///
/// `open` only prepares the document; pages are produced lazily by the
/// returned iterator, one at a time, and cannot be rewound.
pub trait LayoutSource {
    type Error: std::error::Error + Send + Sync + 'static;
    type Pages: Iterator<Item = Result<ExtractedPage, Self::Error>>;

    /// Open `document`, recognizing text in `lang`.
    fn open(&self, document: &Path, lang: &str) -> Result<Self::Pages, Self::Error>;
}

use std::path::Path;

use layout::ExtractedPage;
use snafu::ResultExt;

use crate::assembler::assemble_blocks;
use crate::clip::{PageClipper, RasterClipper};
use crate::error::{BoxError, ExtractResult, OpenDocumentSnafu, ReadPageSnafu};
use crate::shape::classify_paragraph_shapes;
use crate::source::LayoutSource;
use crate::tree::Block;

/// Turns upstream layout pages into block lists, one page at a time.
#[derive(Debug, Clone, Default)]
pub struct PageExtractor<C = RasterClipper> {
    clipper: C,
}

impl PageExtractor<RasterClipper> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: PageClipper> PageExtractor<C> {
    pub fn with_clipper(clipper: C) -> Self {
        Self { clipper }
    }

    /// Assemble the blocks of one page and classify their paragraph shape.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(page = page.index, regions = page.layouts.len())
    )]
    pub fn extract_page(&self, page: &ExtractedPage) -> ExtractResult<Vec<Block>> {
        let mut blocks = assemble_blocks(page, &self.clipper)?;
        classify_paragraph_shapes(&mut blocks);
        tracing::debug!(blocks = blocks.len(), "assembled page");
        Ok(blocks)
    }

    /// Open `document` through `source` and extract its pages lazily.
    pub fn extract<S>(
        &self,
        source: &S,
        document: &Path,
        lang: &str,
    ) -> ExtractResult<Pages<'_, C, S::Pages>>
    where
        S: LayoutSource,
    {
        let pages = source
            .open(document, lang)
            .map_err(|error| Box::new(error) as BoxError)
            .context(OpenDocumentSnafu {
                stage: "open-layout-source",
                document,
            })?;
        tracing::info!(?document, lang, "opened document");
        Ok(self.extract_pages(pages))
    }

    /// Extract blocks from an already opened stream of pages.
    pub fn extract_pages<I, E>(&self, pages: I) -> Pages<'_, C, I::IntoIter>
    where
        I: IntoIterator<Item = Result<ExtractedPage, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Pages {
            extractor: self,
            pages: pages.into_iter(),
            position: 0,
        }
    }
}

/// Iterator over the block lists of a document, in page order.
///
/// A page that fails to load or assemble yields an error; iteration can
/// continue with the following pages.
pub struct Pages<'a, C, I> {
    extractor: &'a PageExtractor<C>,
    pages: I,
    position: usize,
}

impl<C, I, E> Iterator for Pages<'_, C, I>
where
    C: PageClipper,
    I: Iterator<Item = Result<ExtractedPage, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Item = ExtractResult<Vec<Block>>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.pages.next()?;
        let position = self.position;
        self.position += 1;

        let page = match next {
            Ok(page) => page,
            Err(error) => {
                return Some(Err(Box::new(error) as BoxError).context(ReadPageSnafu {
                    stage: "read-layout-page",
                    page: position,
                }));
            }
        };
        Some(self.extractor.extract_page(&page))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pages.size_hint()
    }
}

use std::io;
use std::path::{Path, PathBuf};
use std::vec;

use folio_core::{
    Block, ExtractError, LayoutSource, PageExtractor, TextKind, TextRange, texts_range,
};
use image::DynamicImage;
use layout::{ExtractedPage, Layout, LayoutClass, OcrFragment, Rectangle};
use pretty_assertions::assert_eq;

/// Serves pre-built pages; `None` stands for a page the upstream run failed on.
struct MemorySource {
    pages: Vec<Option<Vec<Layout>>>,
}

impl LayoutSource for MemorySource {
    type Error = io::Error;
    type Pages = vec::IntoIter<Result<ExtractedPage, io::Error>>;

    fn open(&self, document: &Path, _lang: &str) -> Result<Self::Pages, Self::Error> {
        if document.as_os_str().is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no document"));
        }

        let pages: Vec<_> = self
            .pages
            .iter()
            .enumerate()
            .map(|(index, layouts)| match layouts {
                Some(layouts) => Ok(ExtractedPage {
                    index,
                    image: DynamicImage::new_rgb8(600, 800),
                    layouts: layouts.clone(),
                }),
                None => Err(io::Error::other("layout model crashed")),
            })
            .collect();
        Ok(pages.into_iter())
    }
}

fn fragment(text: &str, x0: f64, y0: f64, x1: f64) -> OcrFragment {
    OcrFragment {
        text: text.to_string(),
        rank: 0.95,
        rect: Rectangle::from_bounds(x0, y0, x1, y0 + 12.0),
    }
}

fn region(class: LayoutClass, fragments: Vec<OcrFragment>) -> Layout {
    let rect = fragments
        .iter()
        .map(|fragment| fragment.rect)
        .reduce(|a, b| {
            Rectangle::from_bounds(
                a.lt.x.min(b.lt.x),
                a.lt.y.min(b.lt.y),
                a.rb.x.max(b.rb.x),
                a.rb.y.max(b.rb.y),
            )
        })
        .unwrap_or(Rectangle::from_bounds(50.0, 300.0, 550.0, 500.0));
    Layout::new(class, rect).with_fragments(fragments)
}

fn article_page() -> Vec<Layout> {
    vec![
        region(
            LayoutClass::Abandon,
            vec![fragment("Journal of Examples", 200.0, 10.0, 400.0)],
        ),
        region(LayoutClass::Title, vec![fragment("1 Introduction", 50.0, 40.0, 200.0)]),
        // Indented first line, last line ends short of the column.
        region(
            LayoutClass::PlainText,
            vec![
                fragment("Paragraphs start with an indent", 80.0, 60.0, 550.0),
                fragment("and wrap onto following lines", 50.0, 76.0, 550.0),
                fragment("until they end.", 50.0, 92.0, 300.0),
            ],
        ),
        // Continues onto the next block: no indent, runs to the margin.
        region(
            LayoutClass::PlainText,
            vec![
                fragment("Another paragraph that", 50.0, 110.0, 550.0),
                fragment("continues past this block", 50.0, 126.0, 548.0),
            ],
        ),
        region(LayoutClass::Figure, Vec::new()),
        region(LayoutClass::Abandon, vec![fragment("3", 290.0, 780.0, 300.0)]),
        region(
            LayoutClass::FigureCaption,
            vec![fragment("Figure 1: A diagram.", 200.0, 510.0, 400.0)],
        ),
    ]
}

#[test]
fn extracts_article_page() {
    let source = MemorySource {
        pages: vec![Some(article_page())],
    };
    let extractor = PageExtractor::new();
    let pages: Vec<_> = extractor
        .extract(&source, Path::new("article.pdf"), "en")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(pages.len(), 1);
    let blocks = &pages[0];
    assert_eq!(blocks.len(), 6);

    let intro = blocks[2].as_text().unwrap();
    assert_eq!(intro.kind, TextKind::PlainText);
    assert!(intro.has_paragraph_indentation);
    assert!(!intro.has_last_line_touch_end);

    let continued = blocks[3].as_text().unwrap();
    assert!(!continued.has_paragraph_indentation);
    assert!(continued.has_last_line_touch_end);

    let figure = blocks[4].as_asset().unwrap();
    assert_eq!(figure.texts.len(), 1);
    assert_eq!(figure.texts[0].content, "Figure 1: A diagram.");
    assert_eq!(
        (figure.image().width(), figure.image().height()),
        (500, 200)
    );

    let header = blocks[0].as_text().unwrap();
    assert_eq!(header.kind, TextKind::Abandon);
    assert!(!header.has_paragraph_indentation);
    assert!(!header.has_last_line_touch_end);
}

#[test]
fn abandon_only_page_has_degenerate_geometry() {
    let layouts = vec![
        region(LayoutClass::Abandon, vec![fragment("header", 100.0, 10.0, 500.0)]),
        region(LayoutClass::Abandon, vec![fragment("footer", 280.0, 780.0, 320.0)]),
    ];
    let page = ExtractedPage {
        index: 0,
        image: DynamicImage::new_rgb8(600, 800),
        layouts,
    };

    let blocks = PageExtractor::new().extract_page(&page).unwrap();
    assert_eq!(texts_range(&blocks), TextRange::default());
    for block in &blocks {
        let text = block.as_text().unwrap();
        assert!(!text.has_paragraph_indentation);
        assert!(!text.has_last_line_touch_end);
    }
}

#[test]
fn failed_page_does_not_stop_iteration() {
    let source = MemorySource {
        pages: vec![Some(article_page()), None, Some(Vec::new())],
    };
    let extractor = PageExtractor::new();
    let results: Vec<_> = extractor
        .extract(&source, Path::new("article.pdf"), "en")
        .unwrap()
        .collect();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(ExtractError::ReadPage { page: 1, .. })
    ));
    assert!(results[2].as_ref().unwrap().is_empty());
}

#[test]
fn open_failures_are_reported() {
    let source = MemorySource { pages: Vec::new() };
    let err = PageExtractor::new()
        .extract(&source, &PathBuf::new(), "en")
        .err()
        .unwrap();
    assert!(matches!(err, ExtractError::OpenDocument { .. }));
}

#[test]
fn custom_clipper_is_used_for_assets() {
    let clipper = |_: &ExtractedPage, _: &Rectangle| -> Result<DynamicImage, raster::ClipError> {
        Ok(DynamicImage::new_luma8(3, 4))
    };
    let extractor = PageExtractor::with_clipper(clipper);
    let page = ExtractedPage {
        index: 7,
        image: DynamicImage::new_rgb8(1, 1),
        layouts: vec![region(LayoutClass::Table, Vec::new())],
    };

    let blocks = extractor.extract_page(&page).unwrap();
    let Block::Asset(table) = &blocks[0] else {
        panic!("expected an asset block");
    };
    assert_eq!((table.image().width(), table.image().height()), (3, 4));
}

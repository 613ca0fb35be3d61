//! Layout dumps: the recorded output of an upstream layout/OCR run.
//!
//! A dump directory holds `manifest.json` plus one rendered image per page:
//!
//! ```json
//! { "lang": "en", "pages": [{ "image": "page_001.png", "layouts": [] }] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::LayoutSource;
use layout::{ExtractedPage, Layout};
use serde::Deserialize;
use snafu::{ResultExt, Snafu};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Debug, Deserialize)]
pub struct DumpManifest {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub pages: Vec<DumpPage>,
}

#[derive(Debug, Deserialize)]
pub struct DumpPage {
    /// Page image, relative to the dump directory.
    pub image: PathBuf,
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DumpError {
    #[snafu(display("failed to read dump manifest at {path:?} on `{stage}`: {source}"))]
    ReadManifest {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to parse dump manifest at {path:?} on `{stage}`: {source}"))]
    ParseManifest {
        stage: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },
    #[snafu(display("failed to decode page image {path:?} on `{stage}`: {source}"))]
    DecodeImage {
        stage: &'static str,
        path: PathBuf,
        source: image::ImageError,
    },
}

/// [`LayoutSource`] reading layout dumps from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpSource;

impl LayoutSource for DumpSource {
    type Error = DumpError;
    type Pages = DumpPages;

    fn open(&self, document: &Path, lang: &str) -> Result<DumpPages, DumpError> {
        let path = document.join(MANIFEST_FILE_NAME);
        let content = fs::read_to_string(&path).context(ReadManifestSnafu {
            stage: "read-dump-manifest",
            path: path.clone(),
        })?;
        let manifest: DumpManifest = serde_json::from_str(&content).context(ParseManifestSnafu {
            stage: "parse-dump-manifest",
            path: path.clone(),
        })?;

        if let Some(recorded) = manifest.lang.as_deref()
            && recorded != lang
        {
            tracing::warn!(
                recorded,
                requested = lang,
                "dump was recognized with a different language"
            );
        }

        Ok(DumpPages {
            root: document.to_path_buf(),
            pages: manifest.pages.into_iter().enumerate(),
        })
    }
}

/// Pages of a dump, decoding each page image only when it is reached.
pub struct DumpPages {
    root: PathBuf,
    pages: std::iter::Enumerate<std::vec::IntoIter<DumpPage>>,
}

impl Iterator for DumpPages {
    type Item = Result<ExtractedPage, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, page) = self.pages.next()?;
        let path = self.root.join(&page.image);
        let image = match image::open(&path).context(DecodeImageSnafu {
            stage: "decode-page-image",
            path,
        }) {
            Ok(image) => image,
            Err(error) => return Some(Err(error)),
        };

        Some(Ok(ExtractedPage {
            index,
            image,
            layouts: page.layouts,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pages.size_hint()
    }
}

use std::path::PathBuf;

use layout::LayoutClass;
use raster::ClipError;
use snafu::Snafu;

/// Error type produced by upstream page sources once it crosses into this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExtractError {
    #[snafu(display("failed to open document {document:?} on `{stage}`: {source}"))]
    OpenDocument {
        stage: &'static str,
        document: PathBuf,
        source: BoxError,
    },
    #[snafu(display("layout source failed to produce page {page} on `{stage}`: {source}"))]
    ReadPage {
        stage: &'static str,
        page: usize,
        source: BoxError,
    },
    #[snafu(display("failed to clip {class:?} region on page {page} on `{stage}`: {source}"))]
    ClipRegion {
        stage: &'static str,
        page: usize,
        class: LayoutClass,
        source: ClipError,
    },
}

pub type ExtractResult<T> = Result<T, ExtractError>;

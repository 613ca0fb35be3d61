use std::fs;
use std::path::{Path, PathBuf};

use folio_core::Block;
use snafu::{ResultExt, Snafu};

/// Writes per-page block dumps and asset crops for inspection.
#[derive(Debug, Clone)]
pub struct DebugWriter {
    dir: PathBuf,
}

impl DebugWriter {
    pub fn create(dir: &Path) -> Result<Self, DebugOutputError> {
        fs::create_dir_all(dir).context(CreateDirSnafu {
            stage: "create-debug-directory",
            path: dir.to_path_buf(),
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// `page_NNN.json` with the blocks, plus `page_NNN_asset_MM.png` per asset.
    /// Page numbers are one-based.
    pub fn write_page(&self, index: usize, blocks: &[Block]) -> Result<(), DebugOutputError> {
        let page_number = index + 1;

        let content = serde_json::to_string_pretty(blocks).context(SerializeBlocksSnafu {
            stage: "serialize-debug-blocks",
        })?;
        let json_path = self.dir.join(format!("page_{page_number:03}.json"));
        fs::write(&json_path, content).context(WriteFileSnafu {
            stage: "write-debug-blocks",
            path: json_path.clone(),
        })?;

        for (asset_index, asset) in blocks.iter().filter_map(Block::as_asset).enumerate() {
            let image_path = self
                .dir
                .join(format!("page_{page_number:03}_asset_{asset_index:02}.png"));
            asset.image().save(&image_path).context(SaveImageSnafu {
                stage: "write-debug-asset",
                path: image_path.clone(),
            })?;
        }

        tracing::debug!(page = page_number, dir = ?self.dir, "wrote debug output");
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DebugOutputError {
    #[snafu(display("failed to create debug directory at {path:?} on `{stage}`: {source}"))]
    CreateDir {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to serialize blocks on `{stage}`: {source}"))]
    SerializeBlocks {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("failed to write debug file at {path:?} on `{stage}`: {source}"))]
    WriteFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to save asset image at {path:?} on `{stage}`: {source}"))]
    SaveImage {
        stage: &'static str,
        path: PathBuf,
        source: image::ImageError,
    },
}

//! Folds the classified regions of one page into blocks.

use layout::{ExtractedPage, Layout, LayoutClass};
use snafu::ResultExt;

use crate::clip::PageClipper;
use crate::error::{ClipRegionSnafu, ExtractResult};
use crate::tree::{AssetBlock, AssetKind, Block, TextBlock, TextKind, convert_fragments};

/// Build the block list for `page`, in region order.
///
/// Text regions become text blocks and asset regions become asset blocks
/// clipped from the page. Captions and footnotes never produce blocks of their
/// own: they are appended to the closest earlier asset of the matching class,
/// looking past abandoned regions only. Captions with no such asset are dropped.
pub fn assemble_blocks<C>(page: &ExtractedPage, clipper: &C) -> ExtractResult<Vec<Block>>
where
    C: PageClipper + ?Sized,
{
    let mut store: Vec<(LayoutClass, Block)> = Vec::with_capacity(page.layouts.len());

    for layout in &page.layouts {
        match layout.class {
            LayoutClass::Title => store.push((layout.class, text_block(layout, TextKind::Title))),
            LayoutClass::PlainText => {
                store.push((layout.class, text_block(layout, TextKind::PlainText)))
            }
            LayoutClass::Abandon => {
                store.push((layout.class, text_block(layout, TextKind::Abandon)))
            }
            LayoutClass::Figure => {
                let block = asset_block(page, layout, AssetKind::Figure, clipper)?;
                store.push((layout.class, block));
            }
            LayoutClass::Table => {
                let block = asset_block(page, layout, AssetKind::Table, clipper)?;
                store.push((layout.class, block));
            }
            LayoutClass::IsolateFormula => {
                let block = asset_block(page, layout, AssetKind::Formula, clipper)?;
                store.push((layout.class, block));
            }
            LayoutClass::FigureCaption
            | LayoutClass::TableCaption
            | LayoutClass::TableFootnote
            | LayoutClass::FormulaCaption => attach_caption(&mut store, layout),
            LayoutClass::Unknown => {
                tracing::debug!(page = page.index, "skipping region of unknown class");
            }
        }
    }

    Ok(store.into_iter().map(|(_, block)| block).collect())
}

fn text_block(layout: &Layout, kind: TextKind) -> Block {
    Block::Text(TextBlock::new(
        layout.rect,
        kind,
        convert_fragments(&layout.fragments),
    ))
}

fn asset_block<C>(
    page: &ExtractedPage,
    layout: &Layout,
    kind: AssetKind,
    clipper: &C,
) -> ExtractResult<Block>
where
    C: PageClipper + ?Sized,
{
    let image = clipper
        .clip(page, &layout.rect)
        .context(ClipRegionSnafu {
            stage: "clip-asset-region",
            page: page.index,
            class: layout.class,
        })?;
    Ok(Block::Asset(AssetBlock::new(layout.rect, kind, image)))
}

fn attach_caption(store: &mut [(LayoutClass, Block)], layout: &Layout) {
    let Some(target) = layout.class.caption_target() else {
        return;
    };
    let Some(index) = previous_block(store, target) else {
        tracing::trace!(class = ?layout.class, "dropping caption without a preceding {target:?}");
        return;
    };

    match &mut store[index].1 {
        Block::Asset(asset) => asset.texts.extend(convert_fragments(&layout.fragments)),
        Block::Text(_) => panic!(
            "{:?} caption resolved to a text block stored as {target:?}",
            layout.class
        ),
    }
}

/// Index of the closest entry of class `target`. Abandoned entries are
/// skipped; any other class ends the search.
fn previous_block(store: &[(LayoutClass, Block)], target: LayoutClass) -> Option<usize> {
    let mut index = store.len();
    while index > 0 {
        index -= 1;
        let class = store[index].0;
        if class == target {
            return Some(index);
        }
        if class != LayoutClass::Abandon {
            return None;
        }
    }
    None
}

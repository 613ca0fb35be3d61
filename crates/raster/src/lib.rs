//! Raster helpers for cutting layout regions out of a rendered page.
//!
//! Layout coordinates are fractional and may overshoot the page edge slightly,
//! so clipping snaps outward to whole pixels and clamps to the raster. Regions
//! that end up with no pixels (hairlines, boxes past the page edge) still clip
//! to a single pixel so the page keeps its asset.

use image::DynamicImage;
use kurbo::Rect;
use layout::Rectangle;
use snafu::{Snafu, ensure};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ClipError {
    #[snafu(display("region bounds {bounds:?} are not finite on `{stage}`"))]
    NonFinite { stage: &'static str, bounds: Rect },
}

pub type ClipResult<T> = Result<T, ClipError>;

/// Whole-pixel window `(x, y, width, height)` of `rect` inside a raster of the
/// given size. Empty windows collapse to the nearest in-raster pixel.
pub fn pixel_window(rect: &Rectangle, width: u32, height: u32) -> ClipResult<(u32, u32, u32, u32)> {
    let bounds = rect.bounds();
    ensure!(
        rect.iter().all(|corner| corner.is_finite()),
        NonFiniteSnafu {
            stage: "check-region-bounds",
            bounds,
        }
    );

    let max_x = f64::from(width);
    let max_y = f64::from(height);
    let x0 = bounds.x0.floor().clamp(0.0, max_x) as u32;
    let y0 = bounds.y0.floor().clamp(0.0, max_y) as u32;
    let x1 = bounds.x1.ceil().clamp(0.0, max_x) as u32;
    let y1 = bounds.y1.ceil().clamp(0.0, max_y) as u32;

    if x1 <= x0 || y1 <= y0 {
        tracing::warn!(
            ?bounds,
            width,
            height,
            "region covers no pixels of the raster, clipping a single pixel"
        );
        let x = x0.min(width.saturating_sub(1));
        let y = y0.min(height.saturating_sub(1));
        return Ok((x, y, width.min(1), height.min(1)));
    }

    Ok((x0, y0, x1 - x0, y1 - y0))
}

/// Crop `page` to the region covered by `rect`.
pub fn clip(page: &DynamicImage, rect: &Rectangle) -> ClipResult<DynamicImage> {
    let (x, y, width, height) = pixel_window(rect, page.width(), page.height())?;
    Ok(page.crop_imm(x, y, width, height))
}

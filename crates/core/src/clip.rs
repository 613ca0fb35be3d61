use image::DynamicImage;
use layout::{ExtractedPage, Rectangle};
use raster::ClipError;

/// Produces the raster for an asset region of a page.
pub trait PageClipper {
    fn clip(&self, page: &ExtractedPage, rect: &Rectangle) -> Result<DynamicImage, ClipError>;
}

/// Crops straight from the page raster the layout run was performed on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterClipper;

impl PageClipper for RasterClipper {
    fn clip(&self, page: &ExtractedPage, rect: &Rectangle) -> Result<DynamicImage, ClipError> {
        raster::clip(&page.image, rect)
    }
}

impl<F> PageClipper for F
where
    F: Fn(&ExtractedPage, &Rectangle) -> Result<DynamicImage, ClipError>,
{
    fn clip(&self, page: &ExtractedPage, rect: &Rectangle) -> Result<DynamicImage, ClipError> {
        self(page, rect)
    }
}

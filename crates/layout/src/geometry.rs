use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Quadrilateral reported by the layout/OCR detector.
///
/// Corners are stored clockwise starting at the top-left, in page raster
/// coordinates. Detected text lines may be slightly rotated, so the corners are
/// not assumed to form an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub lt: Point,
    pub rt: Point,
    pub rb: Point,
    pub lb: Point,
}

impl Rectangle {
    pub fn new(lt: Point, rt: Point, rb: Point, lb: Point) -> Self {
        Self { lt, rt, rb, lb }
    }

    /// Axis-aligned rectangle spanning `(x0, y0)` to `(x1, y1)`.
    pub fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            lt: Point::new(x0, y0),
            rt: Point::new(x1, y0),
            rb: Point::new(x1, y1),
            lb: Point::new(x0, y1),
        }
    }

    /// Corners in `lt, rt, rb, lb` order.
    pub fn corners(&self) -> [Point; 4] {
        [self.lt, self.rt, self.rb, self.lb]
    }

    pub fn iter(&self) -> std::array::IntoIter<Point, 4> {
        self.corners().into_iter()
    }

    /// `(width, height)` as the mean of opposite edge lengths.
    pub fn size(&self) -> (f64, f64) {
        let width = (self.lt.distance(self.rt) + self.lb.distance(self.rb)) / 2.0;
        let height = (self.lt.distance(self.lb) + self.rt.distance(self.rb)) / 2.0;
        (width, height)
    }

    pub fn width(&self) -> f64 {
        self.size().0
    }

    pub fn height(&self) -> f64 {
        self.size().1
    }

    /// Smallest axis-aligned box containing all four corners.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.lt, self.rb)
            .union_pt(self.rt)
            .union_pt(self.lb)
    }
}

impl IntoIterator for &Rectangle {
    type Item = Point;
    type IntoIter = std::array::IntoIter<Point, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

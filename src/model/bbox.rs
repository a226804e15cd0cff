//! Axis-aligned bounding box in image coordinates.

use serde::{Deserialize, Serialize};

/// Bounding box stored as corner coordinates: `[x1, y1, x2, y2]`
/// (top-left x, top-left y, bottom-right x, bottom-right y).
///
/// Serializes as a plain 4-element array, the shape annotation interchange
/// formats use. An absent box on a [`Detection`](crate::Detection) means the
/// detection applies to the whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    /// Top-left x coordinate
    pub x1: f64,
    /// Top-left y coordinate
    pub y1: f64,
    /// Bottom-right x coordinate
    pub x2: f64,
    /// Bottom-right y coordinate
    pub y2: f64,
}

impl BBox {
    /// Create a new BBox from corner coordinates.
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a BBox from top-left coordinates and dimensions.
    #[inline]
    pub fn from_tlwh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Corner coordinates as `[x1, y1, x2, y2]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Width of the bounding box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the bounding box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Area of the bounding box.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Point inside the box at unit position `(u, v)`, rounded to whole
    /// pixels. `(0.5, 0.5)` is the centroid.
    pub fn point_at(&self, u: f64, v: f64) -> (i64, i64) {
        (
            ((self.x2 * u) + (self.x1 * u)).round() as i64,
            ((self.y2 * v) + (self.y1 * v)).round() as i64,
        )
    }

    /// Centroid of the box, rounded to whole pixels.
    #[inline]
    pub fn center(&self) -> (i64, i64) {
        self.point_at(0.5, 0.5)
    }

    /// Uniformly scale all coordinates, e.g. to map between a source
    /// resolution and a display resolution.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x1: self.x1 * factor,
            y1: self.y1 * factor,
            x2: self.x2 * factor,
            y2: self.y2 * factor,
        }
    }

    /// Coordinate-wise blend: `a * self + b * other`.
    ///
    /// Used by temporal interpolation with `a + b == 1`.
    pub fn blend(&self, other: &BBox, a: f64, b: f64) -> Self {
        Self {
            x1: self.x1 * a + other.x1 * b,
            y1: self.y1 * a + other.y1 * b,
            x2: self.x2 * a + other.x2 * b,
            y2: self.y2 * a + other.y2 * b,
        }
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BBox> for [f64; 4] {
    fn from(b: BBox) -> Self {
        b.to_array()
    }
}

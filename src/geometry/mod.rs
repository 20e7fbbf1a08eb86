//! Geometric primitives for fragment positions.
//!
//! Fragment bounding boxes arrive as `(x0, y0, x1, y1)` corner tuples in page
//! space, with `y` growing downwards. Reading order only ever needs the top edge.

use serde::{Deserialize, Serialize};

/// A rectangle in page space, stored as its two corners.
///
/// Serialized as the corner array `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_points(x, y, x + width, y + height)
    }

    /// Create a rectangle from two corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.left(), 10.0);
    /// assert_eq!(rect.top(), 20.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x0
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x1
    }

    /// Get the top edge y-coordinate (`y0`).
    pub fn top(&self) -> f32 {
        self.y0
    }

    /// Get the bottom edge y-coordinate (`y1`).
    pub fn bottom(&self) -> f32 {
        self.y1
    }

    /// Width of the rectangle. May overflow to infinity for extreme corners.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Corner tuple `(x0, y0, x1, y1)`.
    pub fn corners(&self) -> (f32, f32, f32, f32) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    /// Check that every corner coordinate is finite and the corners are ordered
    /// (`x0 <= x1`, `y0 <= y1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    ///
    /// assert!(Rect::from_points(0.0, 0.0, 10.0, 10.0).is_well_formed());
    /// assert!(!Rect::from_points(10.0, 0.0, 0.0, 10.0).is_well_formed());
    /// assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_well_formed());
    /// ```
    pub fn is_well_formed(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|v| v.is_finite())
            && self.x0 <= self.x1
            && self.y0 <= self.y1
    }
}

impl From<[f32; 4]> for Rect {
    fn from(c: [f32; 4]) -> Self {
        Rect::from_points(c[0], c[1], c[2], c[3])
    }
}

impl From<Rect> for [f32; 4] {
    fn from(r: Rect) -> Self {
        [r.x0, r.y0, r.x1, r.y1]
    }
}

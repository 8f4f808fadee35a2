// Chunk: docs/chunks/text_layout - Windowed text layout engine

//! Pixel-space geometry: points, sizes, rectangles and padding.
//!
//! All values are `f32` pixels with the origin at the top-left of the text
//! area and y growing downwards.

use serde::{Deserialize, Serialize};

use crate::error::MetricError;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn add_xy(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair, as reported by a font metric provider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rejects negative or non-finite dimensions.
    ///
    /// `what` describes the measured thing for the error message and is only
    /// evaluated on failure.
    pub fn validated(self, what: impl FnOnce() -> String) -> Result<Self, MetricError> {
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(MetricError::InvalidSize {
                what: what(),
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle spanned from `top_left` to `bottom_right`.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }

    /// Returns this rectangle moved by `offset`.
    pub fn translate(self, offset: Point) -> Self {
        Self::new(
            self.x + offset.x,
            self.y + offset.y,
            self.width,
            self.height,
        )
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Insets around the text area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on all four sides.
    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Offset of the text origin: `(left, top)`.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

//! Lengths and rectangles. Every absolute quantity is expressed in millimeters.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A length that is either absolute (in mm) or proportional to a reference
/// dimension only known at use time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Length {
    /// An absolute length in millimeters.
    Absolute(f32),
    /// A fraction of the reference dimension, in `[0, 1]`.
    Proportional(f32),
}

impl Length {
    pub const ZERO: Length = Length::Absolute(0.0);

    pub fn mm(value: f32) -> Self {
        Length::Absolute(value)
    }

    /// Builds a proportional length from a percentage (`50.0` is half the reference).
    pub fn percent(value: f32) -> Self {
        Length::Proportional(value / 100.0)
    }

    /// Resolves the length against `reference` (in mm).
    pub fn resolve(&self, reference: f32) -> f32 {
        match self {
            Length::Absolute(mm) => *mm,
            Length::Proportional(fraction) => reference * fraction,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Absolute(mm) => write!(f, "{}mm", mm),
            Length::Proportional(fraction) => write!(f, "{}%", fraction * 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis-aligned rectangle in page coordinates: origin at the top-left corner
/// of the sheet, `y` growing downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Builds a rectangle; negative extents are clamped to zero.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    /// Scales the extents keeping the top-left corner in place.
    /// Negative factors are treated as zero.
    pub fn scale(&mut self, factor: f32) {
        let factor = factor.max(0.0);
        self.width *= factor;
        self.height *= factor;
    }

    /// Scales the extents keeping the center in place.
    pub fn scale_about_center(&mut self, factor: f32) {
        let (cx, cy) = self.center();
        self.scale(factor);
        self.x = cx - self.width / 2.0;
        self.y = cy - self.height / 2.0;
    }

    /// Moves the rectangle so that its `edge` lies on `target`.
    /// The extents are unchanged.
    pub fn align_edge(&mut self, edge: Edge, target: f32) {
        match edge {
            Edge::Left => self.x = target,
            Edge::Right => self.x = target - self.width,
            Edge::Top => self.y = target,
            Edge::Bottom => self.y = target - self.height,
        }
    }

    /// Splits the rectangle horizontally at `top_height`, leaving `gap` between
    /// the two parts.
    pub fn split_rows(&self, top_height: f32, gap: f32) -> (Rect, Rect) {
        let top_height = top_height.clamp(0.0, self.height);
        let top = Rect::new(self.x, self.y, self.width, top_height);
        let bottom = Rect::new(
            self.x,
            self.y + top_height + gap,
            self.width,
            self.height - top_height - gap,
        );
        (top, bottom)
    }

    /// Splits the rectangle vertically at `left_width`, leaving `gap` between
    /// the two parts.
    pub fn split_columns(&self, left_width: f32, gap: f32) -> (Rect, Rect) {
        let left_width = left_width.clamp(0.0, self.width);
        let left = Rect::new(self.x, self.y, left_width, self.height);
        let right = Rect::new(
            self.x + left_width + gap,
            self.y,
            self.width - left_width - gap,
            self.height,
        );
        (left, right)
    }
}

//! Plain geometry types used by the layout engine.
//!
//! All coordinates are in user units with y growing downward. Boxes are
//! axis-aligned; a rect with zero width and zero height is "null" and acts
//! as the identity for [`Rect::united`], so an absent glyph box can be
//! folded into a bounding box without special-casing.

use serde::{Deserialize, Serialize};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in page or glyph-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The zero rect at the origin.
    pub fn null() -> Self {
        Self::default()
    }

    /// True when both dimensions are zero.
    pub fn is_null(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest rect covering `self` and `other`. A null rect is the
    /// identity on either side.
    pub fn united(&self, other: &Rect) -> Rect {
        if self.is_null() {
            return *other;
        }
        if other.is_null() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// The same rect shifted by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn united_ignores_null_rects() {
        let digit = Rect::new(0.0, 0.0, 12.0, 18.0);
        assert_eq!(digit.united(&Rect::null()), digit);
        assert_eq!(Rect::null().united(&digit), digit);
    }

    #[test]
    fn united_covers_both_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -20.0, 10.0, 10.0);
        let u = a.united(&b);
        assert_eq!(u, Rect::new(0.0, -20.0, 15.0, 30.0));
    }
}

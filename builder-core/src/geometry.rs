//! Surface-local pixel geometry.
//!
//! All coordinates are absolute pixels relative to the top-left corner of the
//! design surface. Nothing here clamps: negative or out-of-surface positions
//! are representable and preserved.

use serde::{Deserialize, Serialize};

/// Minimum extent (exclusive) a rubber-band rectangle needs on both axes
/// before it materializes as an element.
pub const MIN_DRAW_EXTENT: f64 = 10.0;

/// A point on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Pixels from the left edge.
    pub x: f64,
    /// Pixels from the top edge.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `delta`.
    #[must_use]
    pub fn offset(self, delta: Delta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A pointer displacement, as reported at the end of a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Horizontal displacement.
    pub dx: f64,
    /// Vertical displacement.
    pub dy: f64,
}

impl Delta {
    /// Create a delta.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and non-negative.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Normalize a drag between two points into a rectangle.
    ///
    /// The result is the same whichever corner the drag started from.
    #[must_use]
    pub fn from_drag(start: Point, end: Point) -> Self {
        Self {
            origin: Point::new(start.x.min(end.x), start.y.min(end.y)),
            size: Size::new((end.x - start.x).abs(), (end.y - start.y).abs()),
        }
    }

    /// Whether both sides are strictly larger than [`MIN_DRAW_EXTENT`].
    #[must_use]
    pub fn exceeds_draw_threshold(&self) -> bool {
        self.size.width > MIN_DRAW_EXTENT && self.size.height > MIN_DRAW_EXTENT
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_drag_is_direction_independent() {
        let a = Point::new(12.0, 40.0);
        let b = Point::new(80.0, 5.0);
        assert_eq!(Rect::from_drag(a, b), Rect::from_drag(b, a));

        let rect = Rect::from_drag(a, b);
        assert_eq!(rect.origin, Point::new(12.0, 5.0));
        assert_eq!(rect.size, Size::new(68.0, 35.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let origin = Point::new(0.0, 0.0);
        assert!(!Rect::from_drag(origin, Point::new(10.0, 50.0)).exceeds_draw_threshold());
        assert!(!Rect::from_drag(origin, Point::new(50.0, 10.0)).exceeds_draw_threshold());
        assert!(Rect::from_drag(origin, Point::new(10.5, 10.5)).exceeds_draw_threshold());
    }

    #[test]
    fn test_offset_allows_negative_positions() {
        let moved = Point::new(5.0, 5.0).offset(Delta::new(-20.0, -1.5));
        assert_eq!(moved, Point::new(-15.0, 3.5));
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(0.0, 0.0).is_valid());
        assert!(!Size::new(-1.0, 4.0).is_valid());
        assert!(!Size::new(f64::NAN, 4.0).is_valid());
    }
}

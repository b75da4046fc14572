//! Geometric primitives for document coordinate spaces.
//!
//! # Overview
//!
//! - [`Rect`] - An axis-aligned rectangle defined by its top-left corner and size
//!
//! # Coordinate System
//!
//! Vellum uses the SVG user coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use std::fmt;

/// An axis-aligned rectangle stored as `x`, `y`, `width` and `height`.
///
/// This is the shape of an SVG `viewBox`. The type only guarantees the shape
/// of the value; whether a negative size is acceptable is up to the caller.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::Rect;
/// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
///
/// assert_eq!(rect.width(), 100.0);
/// assert_eq!(rect.max_x(), 100.0);
/// assert_eq!(rect.max_y(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// The view box used when a document does not declare a usable one.
    pub const DEFAULT_VIEW_BOX: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1024.0,
        height: 1024.0,
    };

    /// Creates a new rectangle from its top-left corner and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the x-coordinate of the top-left corner
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the top-left corner
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the x-coordinate of the right edge
    pub fn max_x(self) -> f64 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn max_y(self) -> f64 {
        self.y + self.height
    }

    /// Returns true if all four components are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns true if neither width nor height is negative
    pub fn has_non_negative_size(self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<[f64; 4]> for Rect {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_default() {
        let rect = Rect::default();
        assert_eq!(rect.x(), 0.0);
        assert_eq!(rect.y(), 0.0);
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn test_default_view_box() {
        let rect = Rect::DEFAULT_VIEW_BOX;
        assert_eq!(rect, Rect::new(0.0, 0.0, 1024.0, 1024.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(-10.0, 5.0, 30.0, 20.0);
        assert_eq!(rect.max_x(), 20.0);
        assert_eq!(rect.max_y(), 25.0);
    }

    #[test]
    fn test_rect_from_array() {
        let rect = Rect::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rect_size_checks() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).has_non_negative_size());
        assert!(!Rect::new(0.0, 0.0, -1.0, 5.0).has_non_negative_size());
        assert!(!Rect::new(0.0, 0.0, 1.0, f64::NAN).is_finite());
        assert!(Rect::new(-3.0, 4.0, 1.0, 1.0).is_finite());
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(Rect::new(0.0, 0.0, 200.0, 100.5).to_string(), "0 0 200 100.5");
    }
}

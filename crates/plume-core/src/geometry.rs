//! Geometric primitives for diagram layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Plume uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Every layout engine places its content in canvas space directly: the canvas
//! origin is the top-left corner of the emitted document and nothing is
//! translated afterwards.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use plume_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both dimensions are finite and strictly positive.
    ///
    /// Canvas extents must satisfy this before they are emitted.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(100.0, 40.0));
        assert_approx_eq!(f32, mid.x(), 50.0);
        assert_approx_eq!(f32, mid.y(), 20.0);
    }

    #[test]
    fn test_point_with_coordinates() {
        let p = Point::new(1.0, 2.0).with_x(10.0).with_y(20.0);
        assert_eq!(p, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_size_is_drawable() {
        assert!(Size::new(600.0, 320.0).is_drawable());
        assert!(!Size::new(0.0, 320.0).is_drawable());
        assert!(!Size::new(600.0, -1.0).is_drawable());
        assert!(!Size::new(f32::NAN, 10.0).is_drawable());
        assert!(!Size::new(f32::INFINITY, 10.0).is_drawable());
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(100.0, 40.0), Size::new(80.0, 40.0));
        assert_approx_eq!(f32, bounds.min_x(), 60.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_x(), 140.0);
        assert_approx_eq!(f32, bounds.height(), 40.0);
        assert_eq!(bounds.center(), Point::new(100.0, 40.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(200.0, 120.0));
        assert_eq!(bounds.min_point(), Point::new(50.0, 50.0));
        assert_approx_eq!(f32, bounds.width(), 200.0);
        assert_approx_eq!(f32, bounds.height(), 120.0);
        assert_eq!(bounds.center(), Point::new(150.0, 110.0));
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// The center of centered bounds is the original center.
    fn check_center_roundtrip(center: Point, size: Size) -> Result<(), TestCaseError> {
        let roundtrip = Bounds::new_from_center(center, size).center();
        prop_assert!(approx_eq!(f32, roundtrip.x(), center.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, roundtrip.y(), center.y(), epsilon = 0.001));
        Ok(())
    }

    proptest! {
        #[test]
        fn center_roundtrip(center in point_strategy(), size in size_strategy()) {
            check_center_roundtrip(center, size)?;
        }
    }
}

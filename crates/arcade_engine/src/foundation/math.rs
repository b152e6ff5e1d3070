//! Math utilities and types
//!
//! Provides the fundamental 2D math types the simulation and render pass
//! work in: screen-space points, an axis-aligned rectangle, and the
//! squared-distance helpers collision checks use to avoid square roots.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type (screen-space, y grows downward)
pub type Point2 = nalgebra::Point2<f32>;

/// Squared distance between two points
///
/// Collision checks compare this against a squared radius sum so the square
/// root is never taken.
pub fn distance_squared(a: Point2, b: Point2) -> f32 {
    (a - b).norm_squared()
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,

    /// Top edge
    pub y: f32,

    /// Width
    pub w: f32,

    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a square rectangle with its top-left corner at `position`
    pub fn square(position: Point2, size: f32) -> Self {
        Self::new(position.x, position.y, size, size)
    }

    /// Center of the rectangle
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Axis-aligned overlap test
    ///
    /// Rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x + self.w <= other.x
            || other.x + other.w <= self.x
            || self.y + self.h <= other.y
            || other.y + other.h <= self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(distance_squared(a, b), 25.0);
        assert_eq!(distance_squared(b, a), 25.0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 40.0, 40.0);
        assert_eq!(rect.center(), Point2::new(30.0, 40.0));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_rect_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
    }
}

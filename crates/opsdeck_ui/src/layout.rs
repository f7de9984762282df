//! Geometry primitives shared by layout, drawing and hit testing.

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by the given deltas.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A 2D size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the point lies inside (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Translate by the given deltas.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink by padding on each side. Degenerate results collapse to zero size.
    pub fn shrink(&self, padding: Padding) -> Self {
        let width = (self.width - padding.left - padding.right).max(0.0);
        let height = (self.height - padding.top - padding.bottom).max(0.0);
        Self::new(self.x + padding.left, self.y + padding.top, width, height)
    }

    /// Intersection with another rectangle, or `None` when disjoint.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Bounds::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

/// Per-side padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Uniform padding on all sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding: one value for top/bottom, one for left/right.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Size constraints handed to a widget during layout.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_width: f32,
    pub max_height: f32,
}

impl Limits {
    /// Fixed available space.
    pub fn new(max_width: f32, max_height: f32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Unbounded in both axes (used when measuring scrollable content).
    pub fn unbounded() -> Self {
        Self {
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
        }
    }

    /// Same width limit, unbounded height (vertical scroll content).
    pub fn with_unbounded_height(&self) -> Self {
        Self {
            max_width: self.max_width,
            max_height: f32::INFINITY,
        }
    }

    /// Shrink both axes by the padding, never below zero.
    pub fn shrunk(&self, padding: Padding) -> Self {
        Self {
            max_width: (self.max_width - padding.horizontal()).max(0.0),
            max_height: (self.max_height - padding.vertical()).max(0.0),
        }
    }

    /// Clamp a proposed size into these limits.
    pub fn resolve(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max_width),
            size.height.min(self.max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_edges() {
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(30.0, 30.0)));
        assert!(!b.contains(Point::new(30.1, 30.0)));
    }

    #[test]
    fn test_bounds_shrink() {
        let b = Bounds::new(0.0, 0.0, 100.0, 50.0).shrink(Padding::uniform(8.0));
        assert_eq!(b, Bounds::new(8.0, 8.0, 84.0, 34.0));
    }

    #[test]
    fn test_bounds_shrink_degenerate() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0).shrink(Padding::uniform(8.0));
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
    }

    #[test]
    fn test_intersection() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(Bounds::new(5.0, 5.0, 5.0, 5.0)));

        let c = Bounds::new(20.0, 20.0, 5.0, 5.0);
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_limits_resolve() {
        let limits = Limits::new(100.0, 50.0);
        let size = limits.resolve(Size::new(200.0, 20.0));
        assert_eq!(size, Size::new(100.0, 20.0));
    }
}

//! Axis-aligned bounding box collision
//!
//! Sprites are tested as screen-space rectangles anchored at their top-left
//! corner. Overlap is strict on every edge, so rectangles that only touch do
//! not collide.

use crate::math::Vec2;

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Creates a rectangle from raw coordinates
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.position.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Check whether a point lies within this rectangle grown by `margin` on every side
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x >= self.left() - margin
            && point.x <= self.right() + margin
            && point.y >= self.top() - margin
            && point.y <= self.bottom() + margin
    }
}

/// Test two rectangles for overlap.
///
/// Edges that merely touch do not count as a collision.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

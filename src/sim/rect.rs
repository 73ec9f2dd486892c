//! Axis-aligned rectangles for hit-boxes and walls
//!
//! Screen space, origin at the bottom-left, y grows upward:
//! - (x, y): bottom-left corner
//! - width, height: extent to the right and upward

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at `pos` (bottom-left corner) with the given size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Left edge
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// True when width and height are strictly positive and every field is finite
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Strict AABB overlap test (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }

    /// Overlap extent on each axis, `None` when the rectangles do not overlap
    pub fn overlap(&self, other: &Rect) -> Option<Vec2> {
        if !self.overlaps(other) {
            return None;
        }
        let overlap_x = self.right().min(other.right()) - self.left().max(other.left());
        let overlap_y = self.top().min(other.top()) - self.bottom().max(other.bottom());
        Some(Vec2::new(overlap_x, overlap_y))
    }
}

//! Axis-aligned bounding boxes
//!
//! Everything in the playfield is a box: the avatar's square, the solid
//! obstacle columns above and below each gap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, `min` inclusive top-left, `max` bottom-right (screen coords, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Box from top-left corner and size
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Strict overlap on the x axis (touching edges do not overlap)
    #[inline]
    pub fn overlaps_x(&self, left: i32, right: i32) -> bool {
        self.max.x > left && self.min.x < right
    }

    /// True if the vertical extent lies within `[top, bottom]`
    #[inline]
    pub fn within_y(&self, top: i32, bottom: i32) -> bool {
        self.min.y >= top && self.max.y <= bottom
    }

    /// Strict overlap with another box
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.overlaps_x(other.min.x, other.max.x)
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pos_size() {
        let b = Aabb::from_pos_size(IVec2::new(100, 300), IVec2::splat(30));
        assert_eq!(b.max, IVec2::new(130, 330));
        assert_eq!(b.width(), 30);
        assert_eq!(b.height(), 30);
    }

    #[test]
    fn test_overlaps_x_touching_edges() {
        let b = Aabb::from_pos_size(IVec2::new(100, 0), IVec2::splat(30));
        assert!(b.overlaps_x(90, 140));
        assert!(!b.overlaps_x(130, 180));
        assert!(!b.overlaps_x(50, 100));
    }

    #[test]
    fn test_within_y() {
        let b = Aabb::from_pos_size(IVec2::new(0, 300), IVec2::splat(30));
        assert!(b.within_y(200, 350));
        assert!(b.within_y(300, 330));
        assert!(!b.within_y(301, 350));
        assert!(!b.within_y(200, 329));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::new(IVec2::new(0, 0), IVec2::new(10, 10));
        let b = Aabb::new(IVec2::new(5, 5), IVec2::new(15, 15));
        let c = Aabb::new(IVec2::new(10, 0), IVec2::new(20, 10));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}

//! Axis-aligned rectangle math for room placement.
//!
//! All coordinates are meters in a shared 2D frame; a rectangle's (x, y) is
//! its lower-left corner. Overlap tests take an explicit margin so callers
//! can tolerate floating-point noise from scaling and jitter.

use crate::catalog::Wall;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: lower-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when the interiors intersect, shrunk by `margin` on each side.
    pub fn overlaps(&self, other: &Rect, margin: f32) -> bool {
        let overlap_x = self.x < other.max_x() - margin && self.max_x() > other.x + margin;
        let overlap_y = self.y < other.max_y() - margin && self.max_y() > other.y + margin;
        overlap_x && overlap_y
    }

    /// Overlap extent along each axis, clamped at zero.
    pub fn overlap_extent(&self, other: &Rect) -> (f32, f32) {
        let overlap_x = self.max_x().min(other.max_x()) - self.x.max(other.x);
        let overlap_y = self.max_y().min(other.max_y()) - self.y.max(other.y);
        (overlap_x.max(0.0), overlap_y.max(0.0))
    }

    /// True when the rectangles share a wall segment of positive length
    /// (abutting at a single corner point does not count).
    pub fn touches(&self, other: &Rect, tolerance: f32) -> bool {
        self.shared_wall(other, tolerance).is_some()
    }

    /// Find the wall segment this rectangle shares with `other`.
    ///
    /// The wall side is named from `self`'s frame: `East` means `other`
    /// sits against this rectangle's right edge. Returns the side and the
    /// segment's (start, end) along the wall axis, or `None` when the
    /// rectangles do not coincide along any edge with positive overlap.
    pub fn shared_wall(&self, other: &Rect, tolerance: f32) -> Option<(Wall, f32, f32)> {
        // Vertical walls: compare x edges, require y overlap.
        if (self.max_x() - other.x).abs() < tolerance {
            let start = self.y.max(other.y);
            let end = self.max_y().min(other.max_y());
            if end > start {
                return Some((Wall::East, start, end));
            }
        }
        if (self.x - other.max_x()).abs() < tolerance {
            let start = self.y.max(other.y);
            let end = self.max_y().min(other.max_y());
            if end > start {
                return Some((Wall::West, start, end));
            }
        }

        // Horizontal walls: compare y edges, require x overlap.
        if (self.max_y() - other.y).abs() < tolerance {
            let start = self.x.max(other.x);
            let end = self.max_x().min(other.max_x());
            if end > start {
                return Some((Wall::North, start, end));
            }
        }
        if (self.y - other.max_y()).abs() < tolerance {
            let start = self.x.max(other.x);
            let end = self.max_x().min(other.max_x());
            if end > start {
                return Some((Wall::South, start, end));
            }
        }

        None
    }

    /// Smallest rectangle containing every rectangle in `rects`.
    pub fn bounding(rects: &[Rect]) -> Option<Rect> {
        let first = rects.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.max_x();
        let mut max_y = first.max_y();
        for r in &rects[1..] {
            min_x = min_x.min(r.x);
            min_y = min_y.min(r.y);
            max_x = max_x.max(r.max_x());
            max_y = max_y.max(r.max_y());
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

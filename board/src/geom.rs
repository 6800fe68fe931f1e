//! Quadrant geometry: rectangles, hit-testing, and position clamping.
//!
//! The board surface reads the four quadrant panels' live bounding
//! rectangles from the DOM and hands them to [`locate_quadrant`] to turn a
//! viewport click into a quadrant index plus quadrant-local coordinates.
//! [`clamp_note_position`] is applied once, on drag release, against the
//! owning quadrant's current size.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::{NOTE_HEIGHT, NOTE_WIDTH};

/// A point in CSS pixels. Whether it is viewport-relative or
/// quadrant-relative depends on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Whether `p` (viewport coordinates) falls inside this rectangle.
    /// Edges count as inside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.left + self.width && p.y >= self.top && p.y <= self.top + self.height
    }

    /// Convert a viewport point into coordinates relative to this
    /// rectangle's top-left corner.
    #[must_use]
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.left, p.y - self.top)
    }
}

/// Find which quadrant (if any) contains the viewport point `p`.
///
/// Returns the quadrant index and the point converted to quadrant-local
/// coordinates. The first matching rectangle wins; quadrants are assumed
/// non-overlapping so ordering is immaterial in practice.
#[must_use]
pub fn locate_quadrant(p: Point, rects: &[Rect]) -> Option<(usize, Point)> {
    rects
        .iter()
        .position(|r| r.contains(p))
        .map(|i| (i, rects[i].to_local(p)))
}

/// Clamp a note's released position so the note stays inside a quadrant of
/// the given size.
///
/// The result satisfies `x ∈ [0, max(0, width − NOTE_WIDTH)]` and
/// `y ∈ [0, max(0, height − NOTE_HEIGHT)]`.
#[must_use]
pub fn clamp_note_position(x: f64, y: f64, quad_width: f64, quad_height: f64) -> (f64, f64) {
    let max_x = (quad_width - NOTE_WIDTH).max(0.0);
    let max_y = (quad_height - NOTE_HEIGHT).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}

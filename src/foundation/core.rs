pub use kurbo::{Affine, Point, Rect, Size};

/// Address of an item cell: the section plus the item index inside that section.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl IndexPath {
    /// Build an index path.
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Axis-aligned overlap test. Rectangles that only share an edge do not overlap.
pub(crate) fn rects_overlap(a: Rect, b: Rect) -> bool {
    !(a.x1 <= b.x0 || a.x0 >= b.x1 || a.y1 <= b.y0 || a.y0 >= b.y1)
}

/// Clamp a length to `[0, +inf)`; non-finite input collapses to 0.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Build a rect from origin and extent, with the extent clamped to be non-negative.
pub(crate) fn rect_at(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + non_negative(width), y + non_negative(height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

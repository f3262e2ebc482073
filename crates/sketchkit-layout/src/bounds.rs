//! # Bounds
//!
//! Aggregate axis-aligned bounds over a collection of paths.

use sketchkit_core::BoundingBox;

/// A path-like value that knows its own bounding box.
///
/// `Clone` is the copy operation: grid layout hands every cell its own
/// duplicate of the source path.
pub trait BoundedPath: Clone {
    fn bounds(&self) -> BoundingBox;
}

impl BoundedPath for BoundingBox {
    fn bounds(&self) -> BoundingBox {
        *self
    }
}

/// Compute the bounding box enclosing every path in `paths`.
///
/// An empty slice yields [`BoundingBox::EMPTY`] rather than an inverted
/// infinite box.
pub fn compute_bounds<P: BoundedPath>(paths: &[P]) -> BoundingBox {
    if paths.is_empty() {
        return BoundingBox::EMPTY;
    }

    let mut left = f64::INFINITY;
    let mut top = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut bottom = f64::NEG_INFINITY;

    for path in paths {
        let bb = path.bounds();
        left = left.min(bb.x());
        top = top.min(bb.y());
        right = right.max(bb.x() + bb.width());
        bottom = bottom.max(bb.y() + bb.height());
    }

    BoundingBox::new(left, top, right - left, bottom - top)
}

/// Translation that moves the aggregate bounds' top-left corner to `(0, 0)`.
pub fn compute_zero_offset<P: BoundedPath>(paths: &[P]) -> (f64, f64) {
    let bb = compute_bounds(paths);
    (-bb.x(), -bb.y())
}

use geo::{Coord, Rect};
use rstar::{RTreeObject, AABB};

/// A shape's representative point in an R-tree, associated with the shape by index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IndexedPoint {
    idx: usize, // Index of corresponding shape in the candidate list
    point: Coord<f64>,
}

impl IndexedPoint {
    pub(crate) fn new(idx: usize, point: Coord<f64>) -> Self {
        Self { idx, point }
    }

    /// Get the index of the corresponding shape.
    #[inline] pub(crate) fn idx(&self) -> usize { self.idx }

    /// Get the indexed point.
    #[inline] pub(crate) fn point(&self) -> Coord<f64> { self.point }
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point.into())
    }
}

/// Convert a rectangle into an R-tree envelope.
#[inline]
pub(crate) fn envelope(rect: &Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners(rect.min().into(), rect.max().into())
}

/// Euclidean gap between two axis-aligned rectangles, zero if they overlap.
///
/// Every vertex-to-edge distance between two polygons is at least the gap
/// between their bounding boxes, so this is a lower bound for
/// [`super::polygon_polygon_distance`].
#[inline]
pub(crate) fn rect_distance(a: &Rect<f64>, b: &Rect<f64>) -> f64 {
    let dx = (b.min().x - a.max().x).max(a.min().x - b.max().x).max(0.0);
    let dy = (b.min().y - a.max().y).max(a.min().y - b.max().y).max(0.0);
    dx.hypot(dy)
}

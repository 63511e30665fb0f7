use crate::error::{Result, SelectionError};

use super::{Point, Polygon};

/// Distances at or below this are treated as touching.
pub const EPSILON: f64 = 1e-9;

/// Euclidean distance between two points.
#[inline]
pub fn point_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Euclidean distance from `p` to the segment `[a, b]`.
///
/// Projects `p` onto the line through `a` and `b` and clamps the projection to
/// the segment. A segment shorter than [`EPSILON`] is treated as the point `a`.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 <= EPSILON * EPSILON { return point_distance(p, a) }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    point_distance(p, Point { x: a.x + t * dx, y: a.y + t * dy })
}

/// Minimum distance from `p` to the boundary of `polygon`.
///
/// Points strictly inside the polygon get their distance to the nearest edge,
/// not zero.
pub fn point_polygon_distance(p: Point, polygon: &Polygon) -> f64 {
    min_edge_distance(p, polygon.edges())
}

/// Minimum distance from `p` to an unvalidated closed ring.
///
/// Fails for rings with fewer than two points, which have no edges.
pub fn ring_distance(p: Point, ring: &[Point]) -> Result<f64> {
    if ring.len() < 2 {
        return Err(SelectionError::DegeneratePolygon { vertices: ring.len() });
    }

    let edges = ring.iter().copied().zip(ring.iter().copied().cycle().skip(1));
    Ok(min_edge_distance(p, edges))
}

fn min_edge_distance(p: Point, edges: impl Iterator<Item = (Point, Point)>) -> f64 {
    let mut best = f64::INFINITY;
    for (a, b) in edges {
        best = best.min(point_segment_distance(p, a, b));
        if best <= EPSILON { break }
    }
    best
}

/// Approximate minimum distance between two polygons.
///
/// Takes the smallest vertex-to-boundary distance in both directions and
/// returns `0.0` as soon as one falls to [`EPSILON`]. This is exact when the
/// polygons touch at a vertex or are separated by a gap between convex
/// shapes. For concave shapes whose edges cross without any vertex lying on
/// the other boundary it overestimates the true distance, and containment is
/// not detected. Selection results are defined against this approximation.
pub fn polygon_polygon_distance(a: &Polygon, b: &Polygon) -> f64 {
    let mut best = f64::INFINITY;
    for (src, dst) in [(a, b), (b, a)] {
        for &vertex in src.points() {
            let d = point_polygon_distance(vertex, dst);
            if d <= EPSILON { return 0.0 }
            best = best.min(d);
        }
    }
    best
}

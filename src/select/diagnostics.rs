use std::borrow::Borrow;

use crate::geom::{polygon_polygon_distance, rect_distance, Polygon};

/// Selections whose minimum pairwise distance falls below this are likely to
/// contain contiguous or overlapping cells.
pub const CONTIGUITY_THRESHOLD: f64 = 2.0;

/// The closest pair of polygons and their distance, or `None` for fewer than two.
///
/// Pairs whose bounding boxes are already at least as far apart as the best
/// pair found so far are skipped.
pub fn closest_pair<P: Borrow<Polygon>>(polygons: &[P]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..polygons.len() {
        let a = polygons[i].borrow();
        for (j, b) in polygons.iter().enumerate().skip(i + 1) {
            let b = b.borrow();
            let bound = best.map_or(f64::INFINITY, |(_, _, d)| d);
            if rect_distance(&a.bounds(), &b.bounds()) >= bound { continue }

            let d = polygon_polygon_distance(a, b);
            if d < bound {
                best = Some((i, j, d));
                if d == 0.0 { return best }
            }
        }
    }
    best
}

/// Minimum distance over all pairs of `polygons`, or `+inf` for fewer than two.
pub fn min_pairwise_distance<P: Borrow<Polygon>>(polygons: &[P]) -> f64 {
    closest_pair(polygons).map_or(f64::INFINITY, |(_, _, d)| d)
}

/// All pairs `(i, j)`, `i < j`, closer than `threshold`.
pub fn contiguous_pairs<P: Borrow<Polygon>>(polygons: &[P], threshold: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..polygons.len() {
        let a = polygons[i].borrow();
        for (j, b) in polygons.iter().enumerate().skip(i + 1) {
            let b = b.borrow();
            if rect_distance(&a.bounds(), &b.bounds()) >= threshold { continue }
            if polygon_polygon_distance(a, b) < threshold { pairs.push((i, j)) }
        }
    }
    pairs
}

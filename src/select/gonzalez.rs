use std::{iter::FusedIterator, ops::Range};

use tracing::{debug, trace};

use crate::{
    error::{Result, SelectionError},
    geom::{Point, Polygon},
    select::{LazyOracle, Oracle, PointOracle, Selection},
};

/// Greedy farthest-point traversal (Gonzalez) over an oracle's candidates.
///
/// Yields index 0 first, then repeatedly the candidate farthest from every
/// index yielded so far, breaking ties toward the lowest index. The first k
/// items are a 2-approximation of the optimal k-center set.
///
/// Each step costs one oracle query per remaining candidate: the distance to
/// the nearest chosen center is kept per candidate and only compared against
/// the newest center.
#[derive(Debug, Clone)]
pub struct FarthestPoints<'a, O: Oracle + ?Sized> {
    oracle: &'a O,
    nearest: Vec<f64>,  // Distance from each candidate to its nearest chosen center
    chosen: Vec<bool>,
    last: Option<usize>, // Newest center, not yet folded into `nearest`
    remaining: usize,
}

impl<'a, O: Oracle + ?Sized> FarthestPoints<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        let n = oracle.len();
        Self {
            oracle,
            nearest: vec![f64::INFINITY; n],
            chosen: vec![false; n],
            last: None,
            remaining: n,
        }
    }

    /// Distance from `candidate` to the nearest center yielded before the most recent one.
    #[inline] pub fn nearest(&self, candidate: usize) -> f64 { self.nearest[candidate] }

    /// Fold the newest center into the per-candidate nearest distances.
    fn absorb_last(&mut self) {
        let Some(center) = self.last.take() else { return };
        for j in 0..self.nearest.len() {
            if self.chosen[j] { continue }
            let d = self.oracle.distance(j, center);
            if d < self.nearest[j] { self.nearest[j] = d }
        }
    }
}

impl<O: Oracle + ?Sized> Iterator for FarthestPoints<'_, O> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 { return None }
        self.absorb_last();

        // Every distance starts at infinity, so the first pick is index 0.
        let mut best: Option<(usize, f64)> = None;
        for (j, &d) in self.nearest.iter().enumerate() {
            if self.chosen[j] { continue }
            if best.is_none_or(|(_, best_d)| d > best_d) { best = Some((j, d)) }
        }

        let (pick, radius) = best?;
        trace!(pick, radius, "farthest point");
        self.chosen[pick] = true;
        self.last = Some(pick);
        self.remaining -= 1;
        Some(pick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<O: Oracle + ?Sized> ExactSizeIterator for FarthestPoints<'_, O> {}

impl<O: Oracle + ?Sized> FusedIterator for FarthestPoints<'_, O> {}

/// The picks for one candidate set: everything in input order when k covers
/// the whole set, otherwise the first k farthest points.
pub(crate) enum Picks<'a, O: Oracle + ?Sized> {
    All(Range<usize>),
    Greedy(std::iter::Take<FarthestPoints<'a, O>>),
}

impl<'a, O: Oracle + ?Sized> Picks<'a, O> {
    /// Plan a selection of `k` candidates; fails if k > 0 and there are no candidates.
    pub(crate) fn new(oracle: &'a O, k: usize) -> Result<Self> {
        let n = oracle.len();
        if n == 0 && k > 0 { return Err(SelectionError::EmptyCandidates { k }) }

        Ok(if k >= n {
            Self::All(0..n)
        } else {
            Self::Greedy(FarthestPoints::new(oracle).take(k))
        })
    }
}

impl<O: Oracle + ?Sized> Iterator for Picks<'_, O> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        match self {
            Self::All(range) => range.next(),
            Self::Greedy(points) => points.next(),
        }
    }
}

/// Select `k` well-spread candidates from any oracle.
///
/// Returns every index in input order when `k >= n`; the selection reports a
/// shortfall when `k > n`. Fails only for an empty candidate set with `k > 0`.
pub fn select_k_center_with<O: Oracle + ?Sized>(oracle: &O, k: usize) -> Result<Selection> {
    let indices = Picks::new(oracle, k)?.collect::<Vec<_>>();
    debug!(n = oracle.len(), k, selected = indices.len(), "k-center selection");
    Ok(Selection::new(indices, k))
}

/// Select `k` well-spread polygons by greedy k-center on polygon distance.
pub fn select_k_center(polygons: &[Polygon], k: usize) -> Result<Selection> {
    select_k_center_with(&LazyOracle::new(polygons), k)
}

/// Select `k` well-spread points by greedy k-center on Euclidean distance.
pub fn select_k_center_points(points: &[Point], k: usize) -> Result<Selection> {
    select_k_center_with(&PointOracle::new(points), k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::DistanceMatrix;

    fn line(xs: &[f64]) -> Vec<Point> {
        xs.iter().map(|&x| Point { x, y: 0.0 }).collect()
    }

    #[test]
    fn traversal_visits_every_candidate_once() {
        let points = line(&[0.0, 1.0, 5.0, 9.0, 2.0]);
        let oracle = PointOracle::new(&points);
        let order = FarthestPoints::new(&oracle).collect::<Vec<_>>();
        assert_eq!(order.len(), 5);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        assert_eq!(order[..2], [0, 3]);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        // 1 and 2 are both 10 away from the seed.
        let points = [Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 0.0 }, Point { x: -10.0, y: 0.0 }];
        let selection = select_k_center_points(&points, 2).unwrap();
        assert_eq!(selection.indices(), &[0, 1]);
    }

    #[test]
    fn duplicates_are_still_picked_in_index_order() {
        let points = line(&[1.0, 1.0, 1.0, 1.0]);
        let oracle = PointOracle::new(&points);
        assert_eq!(FarthestPoints::new(&oracle).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let points = line(&[0.0, 1.0, 2.0]);
        let oracle = PointOracle::new(&points);
        let mut iter = FarthestPoints::new(&oracle);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn nearest_distances_follow_centers() {
        let points = line(&[0.0, 4.0, 10.0]);
        let oracle = PointOracle::new(&points);
        let mut iter = FarthestPoints::new(&oracle);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.nearest(1), 4.0);
    }

    #[test]
    fn k_zero_selects_nothing() {
        let selection = select_k_center_points(&line(&[0.0, 1.0]), 0).unwrap();
        assert!(selection.is_empty());
        assert!(!selection.is_undersupplied());
    }

    #[test]
    fn k_equal_to_n_returns_input_order() {
        let selection = select_k_center_points(&line(&[5.0, 0.0, 9.0]), 3).unwrap();
        assert_eq!(selection.indices(), &[0, 1, 2]);
        assert!(!selection.is_undersupplied());
    }

    #[test]
    fn empty_candidates_fail_only_when_k_positive() {
        assert_eq!(select_k_center_points(&[], 1), Err(SelectionError::EmptyCandidates { k: 1 }));
        assert_eq!(select_k_center_points(&[], 0).unwrap().len(), 0);
    }

    #[test]
    fn precomputed_matrix_gives_same_selection() {
        let points = line(&[0.0, 3.0, 4.0, 8.0, 15.0, 16.0, 23.0]);
        let matrix = DistanceMatrix::build(&PointOracle::new(&points));
        assert_eq!(
            select_k_center_with(&matrix, 4).unwrap(),
            select_k_center_points(&points, 4).unwrap()
        );
    }
}

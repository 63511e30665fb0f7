use crate::geom::{point_distance, polygon_polygon_distance, Point, Polygon};

/// Pairwise distances over a candidate set indexed `0..len()`.
///
/// Implementations must be symmetric and non-negative. Distances are computed
/// per call and never retained between selections.
pub trait Oracle {
    /// Get the number of candidates.
    fn len(&self) -> usize;

    /// Check if there are no candidates.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Distance between candidates `i` and `j`.
    fn distance(&self, i: usize, j: usize) -> f64;

    /// Distance from `candidate` to the nearest member of `selected`,
    /// or `+inf` if `selected` is empty.
    fn min_dist_to_set(&self, candidate: usize, selected: &[usize]) -> f64 {
        selected.iter()
            .map(|&i| self.distance(candidate, i))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Polygon distances computed on demand.
#[derive(Debug, Clone, Copy)]
pub struct LazyOracle<'a> {
    polygons: &'a [Polygon],
}

impl<'a> LazyOracle<'a> {
    pub fn new(polygons: &'a [Polygon]) -> Self { Self { polygons } }
}

impl Oracle for LazyOracle<'_> {
    #[inline] fn len(&self) -> usize { self.polygons.len() }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        polygon_polygon_distance(&self.polygons[i], &self.polygons[j])
    }
}

/// Polygon distances over a subset of a larger shape list.
///
/// Candidate `i` is `shapes[members[i]]`, so selections index into `members`.
/// The shapes are borrowed, so anything holding a polygon can be used.
#[derive(Debug, Clone)]
pub struct SubsetOracle<'a, P = Polygon> {
    shapes: &'a [P],
    members: &'a [usize],
}

impl<'a, P: AsRef<Polygon>> SubsetOracle<'a, P> {
    pub fn new(shapes: &'a [P], members: &'a [usize]) -> Self {
        debug_assert!(members.iter().all(|&m| m < shapes.len()), "members must index into shapes");
        Self { shapes, members }
    }
}

impl<P: AsRef<Polygon>> Oracle for SubsetOracle<'_, P> {
    #[inline] fn len(&self) -> usize { self.members.len() }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        polygon_polygon_distance(self.shapes[self.members[i]].as_ref(), self.shapes[self.members[j]].as_ref())
    }
}

/// Euclidean distances between points.
#[derive(Debug, Clone, Copy)]
pub struct PointOracle<'a> {
    points: &'a [Point],
}

impl<'a> PointOracle<'a> {
    pub fn new(points: &'a [Point]) -> Self { Self { points } }
}

impl Oracle for PointOracle<'_> {
    #[inline] fn len(&self) -> usize { self.points.len() }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        point_distance(self.points[i], self.points[j])
    }
}

/// A dense, symmetric n×n distance matrix materialized from another oracle.
///
/// Costs n(n-1)/2 evaluations up front; worthwhile when the same candidate set
/// is queried many times within one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>, // row-major, size * size
}

impl DistanceMatrix {
    /// Evaluate every pair of `oracle`'s candidates.
    pub fn build<O: Oracle + ?Sized>(oracle: &O) -> Self {
        let size = oracle.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            for j in i + 1..size {
                let d = oracle.distance(i, j);
                values[i * size + j] = d;
                values[j * size + i] = d;
            }
        }

        Self { size, values }
    }

    /// Get row `i` of the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}

impl Oracle for DistanceMatrix {
    #[inline] fn len(&self) -> usize { self.size }

    #[inline] fn distance(&self, i: usize, j: usize) -> f64 { self.values[i * self.size + j] }
}

/// Distance from `polygons[candidate]` to the nearest of `polygons[selected]`,
/// or `+inf` if nothing is selected yet.
pub fn min_dist_to_set(candidate: usize, selected: &[usize], polygons: &[Polygon]) -> f64 {
    LazyOracle::new(polygons).min_dist_to_set(candidate, selected)
}

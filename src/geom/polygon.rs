use geo::{Coord, LineString, Rect};

use crate::error::{Result, SelectionError};

/// A 2D point. Plain value type with no identity.
pub type Point = Coord<f64>;

/// A closed cell boundary with at least three finite vertices.
///
/// The ring is stored open: the closing vertex is implied and any repeats of
/// the first vertex at the end of the input are dropped, unless every vertex
/// is the same point. Self-intersecting and degenerate rings
/// (duplicate vertices, zero-length edges) are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    bounds: Rect<f64>,
}

impl Polygon {
    /// Construct a polygon from its vertices in boundary order.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self> {
        let mut points: Vec<Point> = points.into();
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(SelectionError::NonFiniteCoordinate);
        }

        // Trailing repeats of the first vertex close the ring. A ring collapsed
        // onto a single point is kept as given.
        let closing = points.iter().rev().take_while(|p| Some(*p) == points.first()).count();
        if closing < points.len() { points.truncate(points.len() - closing); }

        if points.len() < 3 {
            return Err(SelectionError::DegeneratePolygon { vertices: points.len() });
        }

        let (min, max) = points.iter().fold(
            (points[0], points[0]),
            |(min, max), p| (
                Coord { x: min.x.min(p.x), y: min.y.min(p.y) },
                Coord { x: max.x.max(p.x), y: max.y.max(p.y) },
            ),
        );

        Ok(Self { points, bounds: Rect::new(min, max) })
    }

    /// Construct a polygon from `(x, y)` pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>())
    }

    /// Get the vertices in boundary order (without the closing vertex).
    #[inline] pub fn points(&self) -> &[Point] { &self.points }

    /// Get the number of vertices.
    #[inline] pub fn len(&self) -> usize { self.points.len() }

    /// Always false: a polygon has at least three vertices.
    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Get the axis-aligned bounding rectangle.
    #[inline] pub fn bounds(&self) -> Rect<f64> { self.bounds }

    /// Iterate over the boundary edges, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied()
            .zip(self.points.iter().copied().cycle().skip(1))
    }

    /// Mean of the vertices.
    ///
    /// This is the representative point used for active-region membership,
    /// not the area centroid.
    pub fn centroid(&self) -> Point {
        let n = self.points.len() as f64;
        let sum = self.points.iter().fold(Coord { x: 0.0, y: 0.0 }, |acc, p| acc + *p);
        Coord { x: sum.x / n, y: sum.y / n }
    }

    /// Multiply every coordinate by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        Self::new(self.points.iter().map(|p| *p * factor).collect::<Vec<_>>())
    }

    /// Convert into a `geo::Polygon` with no holes.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(LineString::from(self.points.clone()), vec![])
    }
}

impl AsRef<Polygon> for Polygon {
    fn as_ref(&self) -> &Polygon { self }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = SelectionError;

    fn try_from(points: Vec<Point>) -> Result<Self> { Self::new(points) }
}

impl TryFrom<&geo::Polygon<f64>> for Polygon {
    type Error = SelectionError;

    /// Uses the exterior ring only; holes do not take part in cell distance.
    fn try_from(polygon: &geo::Polygon<f64>) -> Result<Self> {
        Self::new(polygon.exterior().0.clone())
    }
}

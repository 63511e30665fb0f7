mod bbox;
mod distance;
mod polygon;

pub(crate) use bbox::{envelope, rect_distance, IndexedPoint};
pub use distance::{
    point_distance, point_polygon_distance, point_segment_distance, polygon_polygon_distance,
    ring_distance, EPSILON,
};
pub use polygon::{Point, Polygon};

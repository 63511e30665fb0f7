#![doc = "CellPick public API"]
mod error;
mod geom;
mod pick;
mod region;
mod select;

#[doc(inline)]
pub use error::{Result, SelectionError};

#[doc(inline)]
pub use geom::{
    point_distance, point_polygon_distance, point_segment_distance, polygon_polygon_distance,
    ring_distance, Point, Polygon, EPSILON,
};

#[doc(inline)]
pub use select::{
    closest_pair, contiguous_pairs, min_dist_to_set, min_pairwise_distance, select_k_center,
    select_k_center_points, select_k_center_with, select_k_per_group, select_k_per_group_points,
    select_k_per_group_with, DistanceMatrix, FarthestPoints, GroupSelection, LazyOracle, Oracle,
    PointOracle, Selection, SubsetOracle, CONTIGUITY_THRESHOLD,
};

#[doc(inline)]
pub use region::{active_shapes, label_groups, region_groups, Group};

#[doc(inline)]
pub use pick::{pick, Pick, PickedGroup, SelectionMode, Shape};

mod diagnostics;
mod gonzalez;
mod oracle;
mod round_robin;
mod selection;

pub use diagnostics::{closest_pair, contiguous_pairs, min_pairwise_distance, CONTIGUITY_THRESHOLD};
pub use gonzalez::{select_k_center, select_k_center_points, select_k_center_with, FarthestPoints};
pub use oracle::{min_dist_to_set, DistanceMatrix, LazyOracle, Oracle, PointOracle, SubsetOracle};
pub use round_robin::{select_k_per_group, select_k_per_group_points, select_k_per_group_with, GroupSelection};
pub use selection::Selection;

use geo::Intersects;
use rstar::RTree;

use crate::geom::{envelope, IndexedPoint, Polygon};

use super::Group;

/// Partition shapes by the active region containing their centroid.
///
/// A shape belongs to the first region (in input order) whose interior or
/// boundary contains its vertex-mean centroid; shapes outside every region
/// are left out. Members are sorted by shape index. Groups are named
/// `region 1`, `region 2`, ... after their position.
pub fn region_groups<P: AsRef<Polygon>>(shapes: &[P], regions: &[Polygon]) -> Vec<Group> {
    let tree = RTree::bulk_load(
        shapes.iter().enumerate()
            .map(|(i, shape)| IndexedPoint::new(i, shape.as_ref().centroid()))
            .collect()
    );

    let mut assigned = vec![false; shapes.len()];
    regions.iter().enumerate().map(|(r, region)| {
        let outline = region.to_geo();
        let mut members = tree.locate_in_envelope_intersecting(&envelope(&region.bounds()))
            .filter(|entry| !assigned[entry.idx()] && outline.intersects(&entry.point()))
            .map(IndexedPoint::idx)
            .collect::<Vec<_>>();
        members.sort_unstable();
        members.iter().for_each(|&m| assigned[m] = true);

        Group::new(format!("region {}", r + 1), members)
    }).collect()
}

/// Indices of shapes whose centroid lies in any active region, in index order.
///
/// With no regions every shape is active.
pub fn active_shapes<P: AsRef<Polygon>>(shapes: &[P], regions: &[Polygon]) -> Vec<usize> {
    if regions.is_empty() { return (0..shapes.len()).collect() }

    let mut active = region_groups(shapes, regions).into_iter()
        .flat_map(|group| group.members)
        .collect::<Vec<_>>();
    active.sort_unstable();
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::from_xy(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)]).unwrap()
    }

    #[test]
    fn no_regions_means_everything_is_active() {
        let shapes = [square(0.0, 0.0, 1.0), square(50.0, 50.0, 1.0)];
        assert_eq!(active_shapes(&shapes, &[]), vec![0, 1]);
        assert!(region_groups(&shapes, &[]).is_empty());
    }

    #[test]
    fn centroid_decides_membership() {
        // Shape 1 straddles the region edge but its centroid is outside.
        let shapes = [square(1.0, 1.0, 2.0), square(9.0, 1.0, 4.0), square(20.0, 20.0, 1.0)];
        let region = square(0.0, 0.0, 10.0);
        assert_eq!(active_shapes(&shapes, &[region]), vec![0]);
    }

    #[test]
    fn boundary_centroid_counts_as_inside() {
        let shapes = [square(9.0, 4.0, 2.0)]; // centroid (10, 5)
        assert_eq!(active_shapes(&shapes, &[square(0.0, 0.0, 10.0)]), vec![0]);
    }

    #[test]
    fn overlapping_regions_assign_to_first() {
        let shapes = [square(1.0, 1.0, 1.0), square(6.0, 6.0, 1.0), square(12.0, 12.0, 1.0)];
        let regions = [square(0.0, 0.0, 8.0), square(5.0, 5.0, 10.0)];
        let groups = region_groups(&shapes, &regions);
        assert_eq!(groups[0], Group::new("region 1", vec![0, 1]));
        assert_eq!(groups[1], Group::new("region 2", vec![2]));
        assert_eq!(active_shapes(&shapes, &regions), vec![0, 1, 2]);
    }

    #[test]
    fn concave_region_excludes_notch() {
        // An L-shaped region; the square in the missing corner is excluded.
        let region = Polygon::from_xy(&[
            (0.0, 0.0), (10.0, 0.0), (10.0, 4.0), (4.0, 4.0), (4.0, 10.0), (0.0, 10.0),
        ]).unwrap();
        let shapes = [square(1.0, 1.0, 1.0), square(7.0, 7.0, 1.0), square(1.0, 7.0, 1.0)];
        assert_eq!(active_shapes(&shapes, &[region]), vec![0, 2]);
    }
}

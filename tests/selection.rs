// Integration tests for greedy k-center selection:
//   determinism, count, uniqueness, seeding, undersupply and spread quality.

use cellpick::{
    min_pairwise_distance, point_distance, select_k_center, select_k_center_points, DistanceMatrix,
    GroupSelection, Pick, Point, Polygon, Selection, SelectionError,
};
use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

fn unit_square(x: f64, y: f64) -> Polygon {
    Polygon::from_xy(&[(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)]).unwrap()
}

fn scattered_squares(seed: u64, n: usize) -> Vec<Polygon> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| unit_square(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0)))
        .collect()
}

#[test]
fn squares_in_a_row_pick_ends_then_middle() {
    let squares = [0.0, 10.0, 20.0, 30.0, 40.0].map(|x| unit_square(x, 0.0));
    let selection = select_k_center(&squares, 3).unwrap();
    assert_eq!(selection.indices(), &[0, 4, 2]);
    assert!(!selection.is_undersupplied());
}

#[test]
fn too_few_candidates_returns_all_and_flags_undersupply() {
    let squares = [0.0, 10.0, 20.0].map(|x| unit_square(x, 0.0));
    let selection = select_k_center(&squares, 5).unwrap();
    assert_eq!(selection.len(), 3);
    let mut indices = selection.indices().to_vec();
    indices.sort();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(selection.is_undersupplied());
    assert_eq!(selection.shortfall(), 2);
}

#[test]
fn selection_is_deterministic() {
    let squares = scattered_squares(1, 80);
    assert_eq!(select_k_center(&squares, 12).unwrap(), select_k_center(&squares, 12).unwrap());
}

#[test]
fn count_uniqueness_and_seed() {
    let squares = scattered_squares(2, 40);
    for k in 0..=45 {
        let selection = select_k_center(&squares, k).unwrap();
        assert_eq!(selection.len(), k.min(squares.len()));
        assert_eq!(selection.is_undersupplied(), k > squares.len());

        let mut indices = selection.indices().to_vec();
        assert!(indices.iter().all(|&i| i < squares.len()));
        indices.sort();
        indices.dedup();
        assert_eq!(indices.len(), selection.len());

        if k >= 1 {
            assert!(selection.contains(0));
        }
    }
}

#[test]
fn smaller_k_is_a_prefix_of_larger_k() {
    let squares = scattered_squares(4, 60);
    let large = select_k_center(&squares, 20).unwrap();
    let small = select_k_center(&squares, 7).unwrap();
    assert_eq!(&large.indices()[..7], small.indices());
}

#[test]
fn empty_candidates_are_invalid() {
    let empty: [Polygon; 0] = [];
    assert_eq!(select_k_center(&empty, 3), Err(SelectionError::EmptyCandidates { k: 3 }));
    assert!(select_k_center(&empty, 0).unwrap().is_empty());
}

#[test]
fn greedy_spread_beats_half_of_random_subsets() {
    // Farthest-point traversal is a 2-approximation for max-min dispersion,
    // so it can never fall below half of any other k-subset's spread.
    let mut rng = StdRng::seed_from_u64(9);
    let points = (0..150)
        .map(|_| Point { x: rng.random_range(0.0..100.0), y: rng.random_range(0.0..100.0) })
        .collect::<Vec<_>>();
    let k = 10;

    let spread = |indices: &[usize]| {
        let mut best = f64::INFINITY;
        for (a, &i) in indices.iter().enumerate() {
            for &j in &indices[a + 1..] {
                best = best.min(point_distance(points[i], points[j]));
            }
        }
        best
    };

    let greedy = spread(select_k_center_points(&points, k).unwrap().indices());
    let best_random = (0..200)
        .map(|_| spread(&index::sample(&mut rng, points.len(), k).into_vec()))
        .fold(0.0, f64::max);

    assert!(greedy >= best_random / 2.0, "greedy {greedy} vs random {best_random}");
}

#[test]
fn selected_polygons_are_well_separated() {
    let squares = scattered_squares(6, 200);
    let selection = select_k_center(&squares, 15).unwrap();
    let chosen = selection.indices().iter().map(|&i| &squares[i]).collect::<Vec<_>>();
    let naive = squares[..15].iter().collect::<Vec<_>>();
    assert!(min_pairwise_distance(&chosen) >= min_pairwise_distance(&naive) / 2.0);
}

#[test]
fn results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Polygon>();
    assert_send_sync::<Selection>();
    assert_send_sync::<GroupSelection>();
    assert_send_sync::<Pick>();
    assert_send_sync::<DistanceMatrix>();
    assert_send_sync::<SelectionError>();
}

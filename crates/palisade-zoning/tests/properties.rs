//! Property tests for the zoning engine's invariants.

use palisade_zoning::{
    estimate_k, seed_centroids, silhouette_score, KBounds, SimilarityMatrix,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Arbitrary square similarity matrix with entries in [0, 1].
fn similarity_matrix(max_n: usize) -> impl Strategy<Value = SimilarityMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0.0f64..=1.0, n), n)
            .prop_map(|rows| SimilarityMatrix::from_rows(rows).expect("square by construction"))
    })
}

proptest! {
    #[test]
    fn seeder_returns_min_k_n_distinct_indices(
        matrix in similarity_matrix(12),
        k in 1usize..=16,
        seed in any::<u64>(),
    ) {
        let n = matrix.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = seed_centroids(&matrix, k, &mut rng);

        prop_assert_eq!(seeds.len(), k.min(n));
        prop_assert!(seeds.iter().all(|&i| i < n));
        let mut sorted = seeds.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), seeds.len(), "indices must be distinct");
    }

    #[test]
    fn silhouette_stays_in_range(
        matrix in similarity_matrix(10),
        seed in any::<u64>(),
        k in 1usize..=5,
    ) {
        let n = matrix.len();
        let mut rng = StdRng::seed_from_u64(seed);
        // Random but valid assignment
        let assignments: Vec<usize> =
            (0..n).map(|_| rand::Rng::gen_range(&mut rng, 0..k)).collect();
        let score = silhouette_score(&matrix, &assignments, k);
        prop_assert!((-1.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn estimator_respects_bounds(
        matrix in similarity_matrix(14),
        max_k in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let n = matrix.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let k = estimate_k(&matrix, KBounds::with_max(max_k), &mut rng);

        prop_assert!(k >= 1);
        prop_assert!(k <= max_k.max(1), "k={} above ceiling {}", k, max_k);
        if n >= 2 {
            let floor = 2usize.min(max_k.max(1));
            prop_assert!(k >= floor, "k={} below floor {}", k, floor);
        }
    }
}

#[test]
fn silhouette_of_empty_matrix_is_negative_one() {
    let matrix = SimilarityMatrix::from_rows(vec![]).unwrap();
    assert_eq!(silhouette_score(&matrix, &[], 3), -1.0);
}

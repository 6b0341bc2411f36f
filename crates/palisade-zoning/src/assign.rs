//! Nearest-centroid assignment and the centroid refinement step.
//!
//! Assignment deliberately uses plain Euclidean distance over raw
//! similarity rows, NOT the affinity distance used for seeding and
//! scoring (see the [`crate::distance`] module docs for the rationale).

use rand::Rng;

use crate::distance::euclidean_distance;
use crate::matrix::SimilarityMatrix;

/// Assign every node to its nearest centroid.
///
/// Each centroid is a feature vector of length n: a real similarity row
/// during the seed phase, or the mean of several rows after refinement.
/// Ties break toward the lowest centroid index (first minimum under a
/// strict `<` comparison in centroid order). Requires at least one
/// centroid.
pub fn assign_clusters(matrix: &SimilarityMatrix, centroids: &[Vec<f64>]) -> Vec<usize> {
    let n = matrix.len();
    let mut assignments = Vec::with_capacity(n);

    for i in 0..n {
        let features = matrix.row(i);
        let mut best_cluster = 0;
        let mut min_dist = f64::INFINITY;
        for (c, centroid) in centroids.iter().enumerate() {
            let dist = euclidean_distance(features, centroid);
            if dist < min_dist {
                min_dist = dist;
                best_cluster = c;
            }
        }
        assignments.push(best_cluster);
    }

    assignments
}

/// Recompute each cluster's centroid as the mean feature vector of its
/// current members.
///
/// An empty cluster is replaced by a uniformly random node's row so it
/// gets another chance on the next reassignment instead of staying empty
/// for the rest of the search.
pub fn refine_centroids<R: Rng + ?Sized>(
    matrix: &SimilarityMatrix,
    assignments: &[usize],
    k: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let n = matrix.len();
    let mut centroids = Vec::with_capacity(k);

    for cluster in 0..k {
        let members: Vec<usize> = (0..n).filter(|&i| assignments[i] == cluster).collect();
        if members.is_empty() {
            let random_node = rng.gen_range(0..n);
            centroids.push(matrix.row(random_node).to_vec());
            continue;
        }

        let mut mean = vec![0.0; n];
        for &i in &members {
            for (slot, value) in mean.iter_mut().zip(matrix.row(i)) {
                *slot += value;
            }
        }
        let count = members.len() as f64;
        for slot in &mut mean {
            *slot /= count;
        }
        centroids.push(mean);
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_group_matrix() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.1, 0.1],
            vec![0.9, 1.0, 0.1, 0.1],
            vec![0.1, 0.1, 1.0, 0.9],
            vec![0.1, 0.1, 0.9, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn assigns_to_nearest_centroid() {
        let matrix = two_group_matrix();
        let centroids = vec![matrix.row(0).to_vec(), matrix.row(2).to_vec()];
        let assignments = assign_clusters(&matrix, &centroids);
        assert_eq!(assignments, vec![0, 0, 1, 1]);
    }

    #[test]
    fn ties_break_toward_lowest_centroid_index() {
        let matrix = two_group_matrix();
        // Identical centroids: every node is equidistant to both
        let centroids = vec![matrix.row(0).to_vec(), matrix.row(0).to_vec()];
        let assignments = assign_clusters(&matrix, &centroids);
        assert!(assignments.iter().all(|&c| c == 0));
    }

    #[test]
    fn refinement_averages_member_rows() {
        let matrix = two_group_matrix();
        let assignments = vec![0, 0, 1, 1];
        let mut rng = StdRng::seed_from_u64(3);
        let centroids = refine_centroids(&matrix, &assignments, 2, &mut rng);
        assert_eq!(centroids.len(), 2);
        // Mean of rows 0 and 1
        assert_eq!(centroids[0], vec![0.95, 0.95, 0.1, 0.1]);
        // Mean of rows 2 and 3
        assert_eq!(centroids[1], vec![0.1, 0.1, 0.95, 0.95]);
    }

    #[test]
    fn empty_cluster_reseeded_from_a_real_row() {
        let matrix = two_group_matrix();
        // Cluster 2 has no members
        let assignments = vec![0, 0, 1, 1];
        let mut rng = StdRng::seed_from_u64(11);
        let centroids = refine_centroids(&matrix, &assignments, 3, &mut rng);
        assert_eq!(centroids.len(), 3);
        let replacement = &centroids[2];
        assert!(
            (0..matrix.len()).any(|i| matrix.row(i) == replacement.as_slice()),
            "empty-cluster centroid must be an existing node's row"
        );
    }

    #[test]
    fn refinement_then_reassignment_is_stable_on_separated_groups() {
        let matrix = two_group_matrix();
        let mut rng = StdRng::seed_from_u64(5);
        let mut centroids = vec![matrix.row(0).to_vec(), matrix.row(2).to_vec()];
        let mut assignments = assign_clusters(&matrix, &centroids);
        for _ in 0..3 {
            centroids = refine_centroids(&matrix, &assignments, 2, &mut rng);
            assignments = assign_clusters(&matrix, &centroids);
        }
        assert_eq!(assignments, vec![0, 0, 1, 1]);
    }
}

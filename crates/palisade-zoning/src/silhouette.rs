//! Silhouette scoring of a clustering over affinity distances.
//!
//! For node `i`, `a(i)` is the mean affinity distance to the rest of its
//! own cluster (cohesion) and `b(i)` the smallest mean affinity distance
//! to any other non-empty cluster (separation). The per-node score
//! `(b - a) / max(a, b)` lands in `[-1, 1]`; the clustering's score is
//! the mean over all nodes. Higher means better-separated zones.

use crate::distance::affinity_distance;
use crate::matrix::SimilarityMatrix;

/// Score a clustering's quality in `[-1.0, 1.0]`.
///
/// Edge cases resolve to documented values rather than errors:
/// a singleton cluster contributes `a(i) = 0`, a node with no other
/// non-empty cluster uses `b(i) = a(i)`, a node with
/// `max(a, b) = 0` contributes `0`, and the empty clustering scores
/// `-1.0`.
pub fn silhouette_score(matrix: &SimilarityMatrix, assignments: &[usize], k: usize) -> f64 {
    let n = matrix.len();
    if n == 0 {
        return -1.0;
    }

    let max_sim = matrix.max_similarity();
    let mut total = 0.0;

    for i in 0..n {
        let own_cluster = assignments[i];

        // Cohesion: mean distance to the rest of the node's own cluster.
        let mut same_sum = 0.0;
        let mut same_count = 0usize;
        for j in 0..n {
            if j != i && assignments[j] == own_cluster {
                same_sum += affinity_distance(max_sim, matrix.similarity(i, j));
                same_count += 1;
            }
        }
        let a_i = if same_count > 0 {
            same_sum / same_count as f64
        } else {
            0.0
        };

        // Separation: smallest mean distance to any other non-empty cluster.
        let mut min_other = f64::INFINITY;
        for other in 0..k {
            if other == own_cluster {
                continue;
            }
            let mut other_sum = 0.0;
            let mut other_count = 0usize;
            for j in 0..n {
                if assignments[j] == other {
                    other_sum += affinity_distance(max_sim, matrix.similarity(i, j));
                    other_count += 1;
                }
            }
            if other_count > 0 {
                min_other = min_other.min(other_sum / other_count as f64);
            }
        }
        let b_i = if min_other.is_finite() { min_other } else { a_i };

        let denom = a_i.max(b_i);
        total += if denom == 0.0 { 0.0 } else { (b_i - a_i) / denom };
    }

    total / n as f64
}

//! Optimal cluster-count estimation.
//!
//! Orchestrates seeding, assignment, and silhouette scoring over a small
//! set of candidate `k` values and returns the best-scoring one, plus the
//! seed centroids a caller needs to run the actual clustering. Large
//! inputs skip the trial clustering entirely and use a size lookup; this
//! bounds worst-case latency without any cancellation machinery.

use rand::Rng;
use tracing::debug;

use crate::assign::{assign_clusters, refine_centroids};
use crate::matrix::SimilarityMatrix;
use crate::seeding::seed_centroids;
use crate::silhouette::silhouette_score;

/// Default lower bound on the candidate cluster count.
pub const DEFAULT_MIN_K: usize = 2;

/// Node counts above this skip trial clustering and use the size lookup.
pub const FAST_PATH_NODES: usize = 50;

/// Centroid refinement rounds per candidate `k` during the search.
pub const REFINEMENT_ROUNDS: usize = 3;

/// Minimum silhouette score for a search result to be trusted; anything
/// below it falls back to the size table.
pub const MIN_ACCEPTED_SCORE: f64 = 0.1;

/// Bounds on the cluster-count search.
#[derive(Debug, Clone, Copy)]
pub struct KBounds {
    /// Smallest `k` worth considering.
    pub min_k: usize,
    /// Caller-supplied ceiling; `None` derives `min(n / 2, 10)`.
    pub max_k: Option<usize>,
}

impl Default for KBounds {
    fn default() -> Self {
        Self {
            min_k: DEFAULT_MIN_K,
            max_k: None,
        }
    }
}

impl KBounds {
    /// Bounds with an explicit ceiling and the default floor.
    pub fn with_max(max_k: usize) -> Self {
        Self {
            min_k: DEFAULT_MIN_K,
            max_k: Some(max_k),
        }
    }
}

/// The advisor's output: a cluster count and the seed centroids to start
/// the actual zone clustering from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoningRecommendation {
    /// Recommended number of zones.
    pub k: usize,
    /// Seed centroid node indices, `min(k, n)` distinct entries.
    #[cfg_attr(feature = "serde", serde(rename = "initial_centroids"))]
    pub seed_centroids: Vec<usize>,
}

/// Estimate the optimal cluster count for a similarity matrix.
///
/// Guarantees `1 <= k <= max_k` and, for `n >= 2`,
/// `k >= min(min_k, max_k)`. Given the same matrix, bounds, and rng
/// seed, the result is identical across calls.
pub fn estimate_k<R: Rng + ?Sized>(
    matrix: &SimilarityMatrix,
    bounds: KBounds,
    rng: &mut R,
) -> usize {
    let n = matrix.len();
    if n < 2 {
        return 1;
    }

    let mut max_k = bounds.max_k.unwrap_or_else(|| (n / 2).min(10));
    max_k = max_k.min(n);
    let min_k = bounds.min_k.min(max_k.max(1)).max(1);
    if max_k < min_k {
        return min_k;
    }

    // Large mesh: trial clustering is too expensive, use the size lookup.
    if n > FAST_PATH_NODES {
        let k = lookup_k_for_size(n).min(max_k);
        debug!(n, k, "large input, using size lookup instead of search");
        return k;
    }

    // Try at most 4 consecutive candidates plus the ceiling itself.
    let mut candidates: Vec<usize> = (min_k..=max_k.min(min_k + 3)).collect();
    if !candidates.contains(&max_k) {
        candidates.push(max_k);
    }

    let mut best_k = min_k;
    let mut best_score = -1.0;

    for &k in &candidates {
        let seeds = seed_centroids(matrix, k, rng);
        let mut centroids: Vec<Vec<f64>> =
            seeds.iter().map(|&idx| matrix.row(idx).to_vec()).collect();
        let mut assignments = assign_clusters(matrix, &centroids);

        for _ in 0..REFINEMENT_ROUNDS {
            centroids = refine_centroids(matrix, &assignments, k, rng);
            assignments = assign_clusters(matrix, &centroids);
        }

        // Silhouette is meaningless unless at least 2 clusters survived.
        if distinct_clusters(&assignments) < 2 {
            debug!(k, "candidate collapsed to a single cluster, skipping");
            continue;
        }

        let score = silhouette_score(matrix, &assignments, k);
        debug!(k, score, "scored candidate");
        if score > best_score {
            best_score = score;
            best_k = k;
        }
    }

    if best_score < MIN_ACCEPTED_SCORE {
        let fallback = fallback_k_for_size(n, max_k).min(max_k);
        debug!(
            best_score,
            fallback, "no candidate scored well, using size fallback"
        );
        return fallback;
    }

    best_k
}

/// Estimate `k` and pick seed centroids in one pass, enforcing the
/// caller's zone ceiling.
///
/// This is the full clustering-recommendation operation: the caller
/// takes the result and runs its own k-means to convergence to actually
/// form zones.
pub fn recommend_zones<R: Rng + ?Sized>(
    matrix: &SimilarityMatrix,
    max_zones: usize,
    rng: &mut R,
) -> ZoningRecommendation {
    let k = estimate_k(matrix, KBounds::with_max(max_zones), rng)
        .min(max_zones)
        .max(1);
    let seed_centroids = seed_centroids(matrix, k, rng);
    ZoningRecommendation { k, seed_centroids }
}

/// Fixed k for large meshes where trial clustering would be too slow.
fn lookup_k_for_size(n: usize) -> usize {
    if n <= 100 {
        4
    } else if n <= 200 {
        5
    } else {
        6
    }
}

/// Size-based fallback when the silhouette search found nothing convincing.
fn fallback_k_for_size(n: usize, max_k: usize) -> usize {
    if n <= 10 {
        2
    } else if n <= 30 {
        3
    } else if n <= 100 {
        4
    } else {
        5.min(max_k)
    }
}

fn distinct_clusters(assignments: &[usize]) -> usize {
    let mut seen: Vec<usize> = assignments.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

//! The two distance semantics used by the zoning engine.
//!
//! Seeding and silhouette scoring work on *affinity distance*: the
//! similarity score flipped around the matrix's global maximum, so that
//! high-affinity pairs are close. Cluster assignment instead treats each
//! node's similarity row as a raw feature vector and uses plain Euclidean
//! distance. Keep these separate: seeding wants affinity-aware spread,
//! assignment wants geometric nearest-centroid. Do not unify them.

/// Offset keeping converted distances strictly positive.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Convert an affinity score into a non-negative distance.
///
/// `max_similarity` is the global maximum over the whole matrix, so the
/// most-similar pair maps to `DISTANCE_EPSILON` and everything else
/// further out.
pub fn affinity_distance(max_similarity: f64, similarity: f64) -> f64 {
    max_similarity - similarity + DISTANCE_EPSILON
}

/// Plain Euclidean distance between two feature vectors.
///
/// Used only in the assignment step, on raw similarity rows.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

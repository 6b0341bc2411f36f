//! Palisade Zoning - Adaptive Zone Clustering
//!
//! Groups mesh nodes into affinity-based zones. The engine takes a square
//! similarity matrix (higher score = more alike) and a zone ceiling, and
//! answers two questions for the zone-formation layer:
//!
//! - **how many zones?** — silhouette-guided search over a handful of
//!   candidate cluster counts, with a pure size lookup for large meshes
//!   and a size fallback when no candidate separates convincingly
//! - **where to start?** — k-means++ seed centroids spread across the
//!   affinity structure
//!
//! The caller runs its own k-means to convergence from those seeds and
//! instantiates the zones; that part is out of scope here.
//!
//! # Determinism
//!
//! Every stochastic step takes `&mut impl Rng`. There is no global
//! random state: two calls with the same seed and input produce
//! identical output.
//!
//! # Example
//!
//! ```
//! use palisade_zoning::{recommend_zones, SimilarityMatrix};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.9, 0.1, 0.1],
//!     vec![0.9, 1.0, 0.1, 0.1],
//!     vec![0.1, 0.1, 1.0, 0.9],
//!     vec![0.1, 0.1, 0.9, 1.0],
//! ])?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let rec = recommend_zones(&matrix, 3, &mut rng);
//! assert!(rec.k >= 1 && rec.k <= 3);
//! # Ok::<(), palisade_zoning::Error>(())
//! ```

pub mod assign;
pub mod distance;
pub mod error;
pub mod estimator;
pub mod matrix;
pub mod seeding;
pub mod silhouette;

pub use assign::{assign_clusters, refine_centroids};
pub use distance::{affinity_distance, euclidean_distance, DISTANCE_EPSILON};
pub use error::{Error, Result};
pub use estimator::{
    estimate_k, recommend_zones, KBounds, ZoningRecommendation, DEFAULT_MIN_K, FAST_PATH_NODES,
    MIN_ACCEPTED_SCORE, REFINEMENT_ROUNDS,
};
pub use matrix::SimilarityMatrix;
pub use seeding::seed_centroids;
pub use silhouette::silhouette_score;

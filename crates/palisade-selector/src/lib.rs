//! Palisade Selector - Protocol Mode Recommendation
//!
//! Recommends an operating protocol (`bft`, `fast_voting`, or `dag`) for
//! a zone from its runtime metrics. Selection runs in two independent
//! stages:
//!
//! 1. **Inference**: if a pre-trained linear model is loaded, score each
//!    label against the metrics' feature vector and softmax the result.
//! 2. **Guarded fallback**: if the model is absent or its best
//!    probability falls below the confidence threshold, a fixed
//!    priority cascade of rules decides instead.
//!
//! The model artifact is opaque and read-only; running without one is a
//! supported configuration, not an error.
//!
//! # Example
//!
//! ```
//! use palisade_selector::{ProtocolSelector, ZoneMetrics};
//!
//! let selector = ProtocolSelector::heuristic_only();
//! let metrics = ZoneMetrics {
//!     permissioned: true,
//!     ..ZoneMetrics::default()
//! };
//! assert_eq!(selector.select(&metrics), "bft");
//! ```

pub mod error;
pub mod heuristic;
pub mod metrics;
pub mod model;
pub mod selector;

pub use error::{Error, Result};
pub use heuristic::{heuristic_fallback, Protocol};
pub use metrics::{ZoneMetrics, FEATURE_LEN};
pub use model::SoftmaxModel;
pub use selector::{ProtocolSelector, CONFIDENCE_THRESHOLD};

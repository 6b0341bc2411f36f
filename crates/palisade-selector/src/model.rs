//! Pre-trained linear classifier over zone metrics.
//!
//! The artifact is an ordered label list plus one weight vector per
//! label, aligned with [`ZoneMetrics::feature_vector`]. Training happens
//! elsewhere; this module only loads and evaluates the result. The file
//! being absent is a normal deployment state, not an error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::metrics::FEATURE_LEN;

/// Immutable softmax classifier loaded once per process.
///
/// Strictly read-only after construction, so one instance can be shared
/// by any number of callers without locking.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawModel")]
pub struct SoftmaxModel {
    labels: Vec<String>,
    weights: Vec<[f64; FEATURE_LEN]>,
}

impl SoftmaxModel {
    /// Build a model from ordered labels and per-label weight vectors.
    pub fn new(labels: Vec<String>, weights: Vec<[f64; FEATURE_LEN]>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::MalformedModel("no labels".into()));
        }
        if labels.len() != weights.len() {
            return Err(Error::MalformedModel(format!(
                "{} labels but {} weight vectors",
                labels.len(),
                weights.len()
            )));
        }
        Ok(Self { labels, weights })
    }

    /// Load a model artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a model artifact from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The ordered label list.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Score a feature vector and return the most probable label with
    /// its softmax probability.
    ///
    /// Raw scores are the per-label dot products; the softmax subtracts
    /// the maximum score before exponentiating so large scores cannot
    /// overflow.
    pub fn predict(&self, features: &[f64; FEATURE_LEN]) -> (&str, f64) {
        let scores: Vec<f64> = self
            .weights
            .iter()
            .map(|w| w.iter().zip(features).map(|(wi, fi)| wi * fi).sum())
            .collect();

        let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp_scores: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
        let denom: f64 = exp_scores.iter().sum();

        let (best_idx, best_exp) = exp_scores
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, &v)| {
                if v > bv {
                    (i, v)
                } else {
                    (bi, bv)
                }
            });

        (&self.labels[best_idx], best_exp / denom)
    }
}

/// Wire shape of the artifact: weights keyed by label, so the file stays
/// readable and label order is explicit in one place.
#[derive(Debug, Deserialize)]
struct RawModel {
    labels: Vec<String>,
    weights: std::collections::HashMap<String, Vec<f64>>,
}

impl TryFrom<RawModel> for SoftmaxModel {
    type Error = Error;

    fn try_from(raw: RawModel) -> Result<Self> {
        let mut weights = Vec::with_capacity(raw.labels.len());
        for label in &raw.labels {
            let w = raw
                .weights
                .get(label)
                .ok_or_else(|| Error::MalformedModel(format!("no weights for label {label:?}")))?;
            let w: [f64; FEATURE_LEN] = w.as_slice().try_into().map_err(|_| {
                Error::MalformedModel(format!(
                    "label {label:?} has {} weights, expected {FEATURE_LEN}",
                    w.len()
                ))
            })?;
            weights.push(w);
        }
        Self::new(raw.labels, weights)
    }
}

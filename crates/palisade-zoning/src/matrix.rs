//! Pairwise similarity matrix over mesh nodes.
//!
//! Row `i` plays two roles:
//! - `matrix[i][j]` is the affinity score between node `i` and node `j`
//!   (higher = more similar; symmetry and normalization are NOT required),
//! - the whole row doubles as node `i`'s feature vector for Euclidean
//!   comparisons during cluster assignment.
//!
//! Node indices are stable only for the lifetime of one clustering call.

use crate::error::{Error, Result};

/// Square n×n matrix of pairwise affinity scores.
///
/// Squareness is validated at construction; every other shape of input
/// is rejected rather than guessed at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Build a matrix from raw rows, validating that it is square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    row: i,
                    cols: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of nodes (and of rows/columns).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for the zero-node matrix.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Affinity between nodes `i` and `j`.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Node `i`'s row, used as its feature vector.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Global maximum similarity, the reference point for converting
    /// affinities into distances. Zero for an empty matrix.
    pub fn max_similarity(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl TryFrom<Vec<Vec<f64>>> for SimilarityMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<SimilarityMatrix> for Vec<Vec<f64>> {
    fn from(matrix: SimilarityMatrix) -> Self {
        matrix.rows
    }
}

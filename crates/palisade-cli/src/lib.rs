//! zone-advisor - decision support for Palisade zone formation.
//!
//! Two invocations, both JSON-over-stdio:
//!
//! - `zone-advisor zones <max_zones> [--seed <u64>]` reads
//!   `{"similarity_matrix": [[..]], "n_nodes"?: n}` on stdin and writes
//!   `{"k": k, "initial_centroids": [..]}` on stdout. The caller runs
//!   its own k-means from those seeds to actually form zones.
//! - `zone-advisor select [--model <path>]` reads a metrics record (all
//!   fields optional) on stdin and writes one protocol label.
//!
//! Invalid input fails fast with a descriptive error and a distinct
//! non-zero exit status; nothing partial is ever written.

use std::io::{Read, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, info};

use palisade_selector::{ProtocolSelector, SoftmaxModel, ZoneMetrics};
use palisade_zoning::{recommend_zones, SimilarityMatrix};

pub mod error;

pub use error::{Error, Result};

/// Input payload for the clustering recommendation.
#[derive(Debug, Deserialize)]
pub struct ZonesRequest {
    /// Square matrix of pairwise affinity scores.
    pub similarity_matrix: SimilarityMatrix,
    /// Optional explicit node count; defaults to the matrix's row count.
    #[serde(default)]
    pub n_nodes: Option<usize>,
}

/// Run the clustering recommendation: parse the payload, estimate `k`,
/// pick seed centroids, and emit the result as one JSON line.
///
/// `seed` fixes the random source for reproducible output; `None` draws
/// from OS entropy.
pub fn run_zones(
    max_zones: usize,
    seed: Option<u64>,
    input: impl Read,
    mut output: impl Write,
) -> Result<()> {
    if max_zones == 0 {
        return Err(Error::Usage("max_zones must be a positive integer".into()));
    }

    let request: ZonesRequest = serde_json::from_reader(input).map_err(Error::InvalidPayload)?;
    let matrix = request.similarity_matrix;

    let n = matrix.len();
    if let Some(n_nodes) = request.n_nodes {
        if n_nodes != n {
            debug!(n_nodes, rows = n, "n_nodes differs from matrix rows, using rows");
        }
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let recommendation = recommend_zones(&matrix, max_zones, &mut rng);
    info!(
        n,
        k = recommendation.k,
        "zoning recommendation ready"
    );

    serde_json::to_writer(&mut output, &recommendation)?;
    writeln!(output)?;
    Ok(())
}

/// Run protocol selection: parse a metrics record, optionally load a
/// model artifact, and emit the chosen label.
pub fn run_select(
    model_path: Option<&Path>,
    input: impl Read,
    mut output: impl Write,
) -> Result<()> {
    let metrics: ZoneMetrics = serde_json::from_reader(input).map_err(Error::InvalidPayload)?;

    let selector = match model_path {
        Some(path) => ProtocolSelector::with_model(SoftmaxModel::load(path)?),
        None => ProtocolSelector::heuristic_only(),
    };
    if !selector.has_model() {
        debug!("no model artifact, running heuristic-only");
    }

    let label = selector.select(&metrics);
    writeln!(output, "{label}")?;
    Ok(())
}

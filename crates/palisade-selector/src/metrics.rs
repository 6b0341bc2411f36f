//! Operational metrics consumed by protocol selection.
//!
//! One record describes the runtime conditions of a single zone at the
//! moment of the call. Records are ephemeral: no identity, no
//! versioning, one selection per record.

use serde::{Deserialize, Serialize};

/// Number of entries in the classifier feature vector.
pub const FEATURE_LEN: usize = 7;

/// Runtime metrics for one zone.
///
/// Every field has a documented default so partial records are valid
/// input. `network_size` defaults to `zone_size` when absent; that rule
/// is applied once at deserialization, never at read sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawZoneMetrics")]
pub struct ZoneMetrics {
    /// Consensus phase the zone is operating in (>= 1).
    pub phase: u32,
    /// Number of nodes in the zone.
    pub zone_size: usize,
    /// Number of nodes in the whole mesh.
    pub network_size: usize,
    /// Average observed intra-zone latency in milliseconds.
    pub avg_latency_ms: f64,
    /// Recent transaction volume hint.
    pub tx_count_hint: f64,
    /// Whether the zone runs in a permissioned deployment.
    pub permissioned: bool,
}

impl Default for ZoneMetrics {
    fn default() -> Self {
        Self {
            phase: 1,
            zone_size: 1,
            network_size: 1,
            avg_latency_ms: 0.0,
            tx_count_hint: 0.0,
            permissioned: false,
        }
    }
}

impl ZoneMetrics {
    /// Encode the record as the classifier's fixed-order feature vector:
    /// `[bias, phase, zone_size, network_size, avg_latency_ms,
    /// tx_count_hint, permissioned]`.
    ///
    /// The order must match the per-label weight vectors in the model
    /// artifact; changing it invalidates every trained model.
    pub fn feature_vector(&self) -> [f64; FEATURE_LEN] {
        [
            1.0,
            f64::from(self.phase),
            self.zone_size as f64,
            self.network_size as f64,
            self.avg_latency_ms,
            self.tx_count_hint,
            if self.permissioned { 1.0 } else { 0.0 },
        ]
    }
}

/// Wire shape of a metrics record: everything optional.
#[derive(Debug, Deserialize)]
struct RawZoneMetrics {
    #[serde(default = "default_phase")]
    phase: u32,
    #[serde(default = "default_zone_size")]
    zone_size: usize,
    #[serde(default)]
    network_size: Option<usize>,
    #[serde(default)]
    avg_latency_ms: f64,
    #[serde(default)]
    tx_count_hint: f64,
    #[serde(default)]
    permissioned: bool,
}

fn default_phase() -> u32 {
    1
}

fn default_zone_size() -> usize {
    1
}

impl From<RawZoneMetrics> for ZoneMetrics {
    fn from(raw: RawZoneMetrics) -> Self {
        Self {
            phase: raw.phase,
            zone_size: raw.zone_size,
            network_size: raw.network_size.unwrap_or(raw.zone_size),
            avg_latency_ms: raw.avg_latency_ms,
            tx_count_hint: raw.tx_count_hint,
            permissioned: raw.permissioned,
        }
    }
}

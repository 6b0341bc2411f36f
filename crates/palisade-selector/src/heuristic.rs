//! Deterministic rule cascade for protocol selection.
//!
//! Used whenever no model is loaded or the model's confidence is below
//! threshold. The rules form a fixed priority cascade, not independent
//! checks: the first match wins and later rules are never consulted.

use serde::{Deserialize, Serialize};

use crate::metrics::ZoneMetrics;

/// Protocol modes the rule cascade can recommend.
///
/// A trained model may introduce additional labels; the cascade itself
/// never emits anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Byzantine fault tolerant consensus - the conservative default.
    Bft,
    /// Sampled fast voting for high-throughput phases and big zones.
    FastVoting,
    /// DAG-based consensus for low-latency early-phase operation.
    Dag,
}

impl Protocol {
    /// Wire label for this protocol.
    pub fn label(self) -> &'static str {
        match self {
            Protocol::Bft => "bft",
            Protocol::FastVoting => "fast_voting",
            Protocol::Dag => "dag",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick a protocol from metrics alone.
///
/// Priority order:
/// 1. permissioned deployment → BFT
/// 2. late phase, oversized zone, or heavy traffic → fast voting
/// 3. low latency in phase 1, or a large low-latency mesh → DAG
/// 4. otherwise → BFT
pub fn heuristic_fallback(metrics: &ZoneMetrics) -> Protocol {
    if metrics.permissioned {
        return Protocol::Bft;
    }
    if metrics.phase >= 2 || metrics.zone_size > 64 || metrics.tx_count_hint > 1500.0 {
        return Protocol::FastVoting;
    }
    if (metrics.phase == 1 && metrics.avg_latency_ms < 250.0)
        || (metrics.network_size > 32 && metrics.avg_latency_ms < 200.0)
    {
        return Protocol::Dag;
    }
    Protocol::Bft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissioned_always_wins() {
        // Even conditions that would otherwise pick fast_voting or dag
        let metrics = ZoneMetrics {
            phase: 3,
            zone_size: 200,
            network_size: 500,
            avg_latency_ms: 10.0,
            tx_count_hint: 9000.0,
            permissioned: true,
        };
        assert_eq!(heuristic_fallback(&metrics), Protocol::Bft);
    }

    #[test]
    fn heavy_traffic_picks_fast_voting() {
        let metrics = ZoneMetrics {
            phase: 2,
            zone_size: 100,
            tx_count_hint: 2000.0,
            permissioned: false,
            ..ZoneMetrics::default()
        };
        assert_eq!(heuristic_fallback(&metrics), Protocol::FastVoting);
    }

    #[test]
    fn each_fast_voting_trigger_fires_alone() {
        let base = ZoneMetrics::default();
        let late_phase = ZoneMetrics { phase: 2, ..base.clone() };
        assert_eq!(heuristic_fallback(&late_phase), Protocol::FastVoting);

        let big_zone = ZoneMetrics { zone_size: 65, ..base.clone() };
        assert_eq!(heuristic_fallback(&big_zone), Protocol::FastVoting);

        let busy = ZoneMetrics { tx_count_hint: 1500.1, ..base };
        assert_eq!(heuristic_fallback(&busy), Protocol::FastVoting);
    }

    #[test]
    fn quiet_early_phase_picks_dag() {
        let metrics = ZoneMetrics {
            phase: 1,
            zone_size: 5,
            network_size: 5,
            avg_latency_ms: 100.0,
            permissioned: false,
            ..ZoneMetrics::default()
        };
        assert_eq!(heuristic_fallback(&metrics), Protocol::Dag);
    }

    #[test]
    fn slow_network_defaults_to_bft() {
        let metrics = ZoneMetrics {
            phase: 1,
            avg_latency_ms: 400.0,
            network_size: 10,
            ..ZoneMetrics::default()
        };
        assert_eq!(heuristic_fallback(&metrics), Protocol::Bft);
    }

    #[test]
    fn labels_match_wire_format() {
        assert_eq!(Protocol::Bft.label(), "bft");
        assert_eq!(Protocol::FastVoting.label(), "fast_voting");
        assert_eq!(Protocol::Dag.label(), "dag");
        assert_eq!(
            serde_json::to_string(&Protocol::FastVoting).unwrap(),
            "\"fast_voting\""
        );
    }
}

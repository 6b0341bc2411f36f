//! Two-stage protocol selection: model inference, then a guarded
//! rule fallback.
//!
//! The stages are deliberately separate so each can be tested on its
//! own: [`ProtocolSelector::infer`] is pure model evaluation, and
//! [`heuristic_fallback`] is a pure rule cascade. [`ProtocolSelector::select`]
//! wires them together with the confidence guard.

use tracing::debug;

use crate::heuristic::heuristic_fallback;
use crate::metrics::ZoneMetrics;
use crate::model::SoftmaxModel;

/// Minimum model confidence for a prediction to be trusted.
pub const CONFIDENCE_THRESHOLD: f64 = 0.45;

/// Protocol selector holding an optional pre-trained model.
///
/// Constructed once by the hosting application and shared by reference;
/// everything inside is read-only, so no synchronization is needed.
#[derive(Debug, Default)]
pub struct ProtocolSelector {
    model: Option<SoftmaxModel>,
}

impl ProtocolSelector {
    /// Selector backed by a trained model, with the rule cascade as the
    /// low-confidence safety net.
    pub fn with_model(model: SoftmaxModel) -> Self {
        Self { model: Some(model) }
    }

    /// Selector with no model: every call uses the rule cascade.
    ///
    /// This is the normal degraded mode when no artifact is deployed,
    /// not an error state.
    pub fn heuristic_only() -> Self {
        Self { model: None }
    }

    /// Whether a model is loaded.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Inference stage: evaluate the model, if any.
    ///
    /// Returns the best label and its probability, unfiltered by the
    /// confidence threshold.
    pub fn infer(&self, metrics: &ZoneMetrics) -> Option<(String, f64)> {
        let model = self.model.as_ref()?;
        let (label, confidence) = model.predict(&metrics.feature_vector());
        Some((label.to_owned(), confidence))
    }

    /// Recommend a protocol label for the given metrics.
    ///
    /// Uses the model prediction when its confidence reaches
    /// [`CONFIDENCE_THRESHOLD`]; otherwise falls back to the rule
    /// cascade. The fallback only ever emits `"bft"`, `"fast_voting"`,
    /// or `"dag"`; a model may emit any label it was trained with.
    pub fn select(&self, metrics: &ZoneMetrics) -> String {
        if let Some((label, confidence)) = self.infer(metrics) {
            if confidence >= CONFIDENCE_THRESHOLD {
                debug!(%label, confidence, "model prediction accepted");
                return label;
            }
            debug!(%label, confidence, "model confidence too low, using rule cascade");
        }
        heuristic_fallback(metrics).label().to_owned()
    }
}

//! Gate tuning constants.
//!
//! The drift threshold and hazard scale are hand-set constants, not
//! derived quantities; they are configuration, deliberately kept
//! caller-visible rather than buried in the decision logic.

use serde::{Deserialize, Serialize};

use zgov_core::GatingMode;

/// Default governance threshold: ALLOW requires `z >= 1.5`.
pub const DEFAULT_Z_THRESHOLD: f64 = 1.5;

/// Default drift threshold: cosine similarity below `0.4` marks a turn
/// suspicious.
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.4;

/// Default hazard increment scale applied to `(1 - cos_sim)`.
pub const DEFAULT_HAZARD_SCALE: f64 = 0.6;

/// Default harmony reference text embedded once per gate.
pub const DEFAULT_HARMONY_TEXT: &str = "Life and Technology in Harmony: \
    safe, ethical, beneficial, truthful, respectful, constructive AI";

/// Session gate configuration.
///
/// Fixed for the lifetime of a [`crate::HazardGate`]; reconfiguration
/// means constructing a new gate (and thus a new session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// ALLOW iff the hazard-adjusted score reaches this threshold.
    pub z_threshold: f64,

    /// Cosine similarity below this classifies the turn as suspicious
    /// drift and grows the session hazard mass.
    /// Range: `[-1.0, 1.0]`
    pub drift_threshold: f64,

    /// Scale applied to `(1 - cos_sim)` when accumulating hazard.
    /// Range: `(0.0, 1.0]`
    pub hazard_scale: f64,

    /// Misalignment penalty mode for the scoring formula.
    pub gating: GatingMode,

    /// Harmony reference text; embedded once at gate construction.
    pub harmony_text: String,

    /// Default adaptability for turns evaluated without explicit inputs.
    pub default_adaptability: f64,

    /// Default efficacy for turns evaluated without explicit inputs.
    pub default_efficacy: f64,

    /// Default cost for turns evaluated without explicit inputs.
    pub default_cost: f64,
}

impl GateConfig {
    /// Default configuration with a caller-chosen governance threshold.
    pub fn with_threshold(z_threshold: f64) -> Self {
        Self {
            z_threshold,
            ..Self::default()
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
            drift_threshold: DEFAULT_DRIFT_THRESHOLD,
            hazard_scale: DEFAULT_HAZARD_SCALE,
            gating: GatingMode::Squared,
            harmony_text: DEFAULT_HARMONY_TEXT.to_string(),
            default_adaptability: 0.85,
            default_efficacy: 0.95,
            default_cost: 0.30,
        }
    }
}

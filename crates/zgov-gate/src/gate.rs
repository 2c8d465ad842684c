//! # HazardGate — Per-Session ALLOW/REJECT Decisions
//!
//! One gate per conversation. The gate has two implicit regimes:
//! nominal (hazard accumulation dormant) and escalating (hazard
//! actively growing); there is no explicit state flag, the regime is
//! visible only in whether this turn's similarity fell below the drift
//! threshold.
//!
//! ## Side-Effect Discipline
//!
//! `evaluate_turn` mutates session state only on the suspicious-drift
//! branch. An allowed, aligned turn never changes the hazard mass:
//! alignment does not erase prior risk.
//!
//! ## Concurrency
//!
//! No internal synchronization. One logical session owns one gate, and
//! `&mut self` on evaluation makes shared concurrent use a caller
//! error at compile time; wrap the gate in a `Mutex` to share it.

use zgov_core::Decision;
use zgov_model::{alignment_angle, ZFormula};

use crate::config::GateConfig;
use crate::encoder::TextEncoder;
use crate::error::GateError;
use crate::result::{round_to, EvaluationResult};

/// Session-scoped safety gate combining angle measurement, hazard-mass
/// accumulation, and hazard-adjusted scoring.
#[derive(Debug)]
pub struct HazardGate<E: TextEncoder> {
    encoder: E,
    config: GateConfig,
    formula: ZFormula,
    /// Harmony reference embedding, computed once at construction.
    harmony_vector: Vec<f64>,
    /// Accumulated hazard mass H. Monotonically non-decreasing except
    /// through [`Self::reset_hazard`].
    session_hazard: f64,
}

impl<E: TextEncoder> HazardGate<E> {
    /// Construct a gate for a new session.
    ///
    /// Embeds the configured harmony text exactly once and caches the
    /// vector; per-turn evaluation never re-embeds the reference.
    pub fn new(encoder: E, config: GateConfig) -> Result<Self, GateError> {
        let harmony_vector = encoder.embed(&config.harmony_text)?;
        if harmony_vector.is_empty() {
            return Err(GateError::EmptyEmbedding {
                context: "harmony reference",
            });
        }
        let formula = ZFormula::new(config.gating);
        Ok(Self {
            encoder,
            config,
            formula,
            harmony_vector,
            session_hazard: 0.0,
        })
    }

    /// The gate's configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Current accumulated hazard mass.
    pub fn session_hazard(&self) -> f64 {
        self.session_hazard
    }

    /// Evaluate one turn with the configured default score inputs.
    pub fn evaluate_turn(
        &mut self,
        prompt: &str,
        response: &str,
    ) -> Result<EvaluationResult, GateError> {
        let (a, e, c) = (
            self.config.default_adaptability,
            self.config.default_efficacy,
            self.config.default_cost,
        );
        self.evaluate_turn_with(prompt, response, a, e, c)
    }

    /// Evaluate one prompt/response turn with explicit score inputs.
    ///
    /// The prompt and response are concatenated into a single action
    /// text, embedded, and measured against the cached harmony vector.
    /// A similarity below the drift threshold grows the session hazard
    /// by `(1 - cos_sim) * hazard_scale` before scoring; the hazard
    /// then inflates the effective cost of this and every future turn.
    pub fn evaluate_turn_with(
        &mut self,
        prompt: &str,
        response: &str,
        adaptability: f64,
        efficacy: f64,
        cost: f64,
    ) -> Result<EvaluationResult, GateError> {
        let action_text = format!("{prompt} {response}");
        let action_vector = self.encoder.embed(&action_text)?;
        if action_vector.is_empty() {
            return Err(GateError::EmptyEmbedding {
                context: "action text",
            });
        }

        let measurement = alignment_angle(&action_vector, &self.harmony_vector);

        // Ratchet: hazard only ever grows, and only on suspicious drift.
        if measurement.cos_sim < self.config.drift_threshold {
            let increment = (1.0 - measurement.cos_sim) * self.config.hazard_scale;
            self.session_hazard += increment;
            tracing::warn!(
                cos_sim = measurement.cos_sim,
                increment,
                session_hazard = self.session_hazard,
                "suspicious drift, hazard mass increased"
            );
        }

        let z_score = self.formula.hazard_adjusted_z(
            adaptability,
            efficacy,
            cost,
            self.session_hazard,
            measurement.psi_deg,
        )?;

        let is_safe = z_score >= self.config.z_threshold;
        let decision = if is_safe {
            Decision::Allow
        } else {
            Decision::Reject
        };
        tracing::debug!(z_score, %decision, "turn evaluated");

        Ok(EvaluationResult {
            z_score: round_to(z_score, 3),
            psi_deg: round_to(measurement.psi_deg, 1),
            cos_sim: round_to(measurement.cos_sim, 3),
            hazard_mass: round_to(self.session_hazard, 3),
            effective_cost: round_to(cost + self.session_hazard, 3),
            is_safe,
            decision,
            evaluated_at: chrono::Utc::now(),
        })
    }

    /// Start a new trusted session: hazard mass back to exactly 0.0.
    pub fn reset_hazard(&mut self) {
        self.session_hazard = 0.0;
    }
}

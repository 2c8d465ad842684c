//! # ZController — Proportional Feedback on Adaptability
//!
//! The controller reads a current score, computes a proportional
//! correction, and proposes an updated adaptability value. Every
//! correction is recorded in an in-memory history used for the
//! stability diagnostics ([`ZController::lyapunov_value`],
//! [`ZController::is_stable`]).
//!
//! ## Stability
//!
//! With gain K > 0 and a locally linear plant, the error decays
//! geometrically each step provided `0 < K * dZ/dA < 2`. The upper
//! bound is intentionally not enforced: callers can choose a gain that
//! overshoots or diverges, and that behavior is accepted as-is rather
//! than silently corrected.
//!
//! ## Concurrency
//!
//! One controller per logical session, at most one caller at a time.
//! All mutation goes through `&mut self`; wrap the instance in a
//! `Mutex` if it must be shared across threads.

use serde::{Deserialize, Serialize};

use zgov_core::DomainError;
use zgov_model::ZFormula;

/// One recorded control step: the observed score, the setpoint error,
/// and the correction that was issued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSample {
    /// Observed score at the time of the correction.
    pub z: f64,
    /// Setpoint error `z_target - z`.
    pub error: f64,
    /// Correction `gain * error`.
    pub control: f64,
}

/// Proportional feedback controller for Z-score regulation.
///
/// History grows by exactly one sample per [`Self::compute_control`]
/// call and is never capped or compacted. Callers that run very long
/// sessions can read it through [`Self::history`] and truncate their
/// own retained copies; the controller itself preserves the full
/// record.
#[derive(Debug, Clone)]
pub struct ZController {
    z_target: f64,
    gain: f64,
    formula: ZFormula,
    history: Vec<ControlSample>,
}

impl ZController {
    /// Create a controller with the default (squared-gating) formula.
    ///
    /// Fails with [`DomainError::NonPositiveGain`] when `gain <= 0`
    /// (NaN included): a non-positive proportional gain breaks the
    /// geometric error-decay argument entirely.
    pub fn new(z_target: f64, gain: f64) -> Result<Self, DomainError> {
        Self::with_formula(z_target, gain, ZFormula::default())
    }

    /// Create a controller scoring through a caller-configured formula.
    pub fn with_formula(z_target: f64, gain: f64, formula: ZFormula) -> Result<Self, DomainError> {
        if !(gain > 0.0) {
            return Err(DomainError::NonPositiveGain(gain));
        }
        Ok(Self {
            z_target,
            gain,
            formula,
            history: Vec::new(),
        })
    }

    /// The setpoint this controller drives toward.
    pub fn z_target(&self) -> f64 {
        self.z_target
    }

    /// The proportional gain K.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// The recorded control history, oldest first.
    pub fn history(&self) -> &[ControlSample] {
        &self.history
    }

    /// Compute the control signal for the observed score and record the
    /// step. This is the only path by which history grows.
    pub fn compute_control(&mut self, z_current: f64) -> f64 {
        let error = self.z_target - z_current;
        let control = self.gain * error;
        self.history.push(ControlSample {
            z: z_current,
            error,
            control,
        });
        tracing::debug!(z_current, error, control, "proportional correction");
        control
    }

    /// One closed-loop step with the conventional `dt = 1.0` and
    /// adaptability bounds `(0.0, 1.0)`.
    pub fn update_adaptability(
        &mut self,
        adaptability: f64,
        efficacy: f64,
        cost: f64,
        psi_deg: f64,
    ) -> Result<(f64, f64), DomainError> {
        self.update_adaptability_with(adaptability, efficacy, cost, psi_deg, 1.0, (0.0, 1.0))
    }

    /// One closed-loop step: score the current state, compute the
    /// correction, and integrate it into a new clamped adaptability.
    ///
    /// Returns `(a_new, z_current)`. Fails when the score inputs are
    /// out of domain or the clamp interval is inverted.
    pub fn update_adaptability_with(
        &mut self,
        adaptability: f64,
        efficacy: f64,
        cost: f64,
        psi_deg: f64,
        dt: f64,
        bounds: (f64, f64),
    ) -> Result<(f64, f64), DomainError> {
        let (min, max) = bounds;
        if min > max {
            return Err(DomainError::InvalidBounds { min, max });
        }

        let z_current = self
            .formula
            .calculate_z(adaptability, efficacy, cost, psi_deg)?;
        let control = self.compute_control(z_current);
        let a_new = (adaptability + control * dt).clamp(min, max);
        Ok((a_new, z_current))
    }

    /// Lyapunov diagnostic `V = error²` for the latest step, `0.0`
    /// before any step has run. Not consumed internally.
    pub fn lyapunov_value(&self) -> f64 {
        self.history
            .last()
            .map(|sample| sample.error * sample.error)
            .unwrap_or(0.0)
    }

    /// Whether the latest setpoint error is inside the tolerance.
    /// `false` before any step has run.
    pub fn is_stable(&self, tolerance: f64) -> bool {
        self.history
            .last()
            .map(|sample| sample.error.abs() < tolerance)
            .unwrap_or(false)
    }
}

//! # Domain Vocabulary — Gating Mode, Score Inputs, Decisions
//!
//! The shared types of the governed-capability score:
//!
//! ```text
//! Z = (A * E / C) * gate(psi)
//! ```
//!
//! where `gate` is [`GatingMode::factor`] and (A, E, C, psi) travel as
//! [`ScoreInputs`]. Gate verdicts are the two-valued [`Decision`].

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GatingMode
// ---------------------------------------------------------------------------

/// Selects the nonlinear misalignment penalty applied to the base
/// capability ratio.
///
/// Fixed at formula construction: every score produced by one formula
/// instance uses the same mode. There is no per-call override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatingMode {
    /// `cos²(psi)` — stricter penalty (Malus's law). The default.
    #[default]
    Squared,
    /// `cos(psi)` — linear penalty.
    Linear,
}

impl GatingMode {
    /// Compute the gating factor for an alignment angle in degrees.
    ///
    /// Angles outside `[0, 180]` are accepted without validation; the
    /// cosine is well defined for any real degree value. This is
    /// deliberately permissive, not validated.
    pub fn factor(self, psi_deg: f64) -> f64 {
        let cos_term = psi_deg.to_radians().cos();
        match self {
            Self::Squared => cos_term * cos_term,
            Self::Linear => cos_term,
        }
    }
}

impl fmt::Display for GatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Squared => write!(f, "cos²(psi)"),
            Self::Linear => write!(f, "cos(psi)"),
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreInputs
// ---------------------------------------------------------------------------

/// One evaluation point of the governed-capability score.
///
/// Immutable per call; carries no identity beyond the call. All three
/// capability terms must be strictly positive for a score to exist —
/// violations surface as [`crate::DomainError`] from the scoring
/// functions, not from this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    /// Adaptability A: degrees of freedom (> 0).
    pub adaptability: f64,
    /// Efficacy E: capability (> 0).
    pub efficacy: f64,
    /// Cost C: friction/expense (> 0).
    pub cost: f64,
    /// Alignment angle psi in degrees; 0 = aligned, 180 = opposed.
    pub psi_deg: f64,
}

impl ScoreInputs {
    /// Construct an evaluation point.
    pub fn new(adaptability: f64, efficacy: f64, cost: f64, psi_deg: f64) -> Self {
        Self {
            adaptability,
            efficacy,
            cost,
            psi_deg,
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Per-turn gate verdict.
///
/// Serializes as `"ALLOW"`/`"REJECT"`, the wire form consumed by
/// front ends that relay gate output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// The action passed the governance threshold.
    Allow,
    /// The action fell below the governance threshold.
    Reject,
}

impl Decision {
    /// Whether this verdict permits the action.
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "ALLOW"),
            Self::Reject => write!(f, "REJECT"),
        }
    }
}

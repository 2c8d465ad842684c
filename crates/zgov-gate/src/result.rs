//! Per-turn evaluation result.
//!
//! Produced fresh each turn, immutable, returned to the caller and not
//! retained by the gate. Diagnostic floats are rounded for reporting;
//! the ALLOW/REJECT comparison always uses the unrounded score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zgov_core::Decision;

/// Outcome of evaluating one prompt/response turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Hazard-adjusted governance score, rounded to 3 decimals.
    pub z_score: f64,
    /// Alignment angle in degrees, rounded to 1 decimal.
    pub psi_deg: f64,
    /// Cosine similarity to the harmony reference, rounded to 3 decimals.
    pub cos_sim: f64,
    /// Session hazard mass after this turn, rounded to 3 decimals.
    pub hazard_mass: f64,
    /// `cost + hazard_mass`, rounded to 3 decimals.
    pub effective_cost: f64,
    /// Whether the unrounded score reached the governance threshold.
    pub is_safe: bool,
    /// ALLOW/REJECT verdict (serializes as `"ALLOW"`/`"REJECT"`).
    pub decision: Decision,
    /// UTC timestamp of the evaluation.
    pub evaluated_at: DateTime<Utc>,
}

/// Round to a fixed number of decimal places for reporting.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_matches_reporting_precision() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(72.5487, 1), 72.5);
        assert_eq!(round_to(0.41999, 3), 0.42);
        assert_eq!(round_to(-0.0004, 3), -0.0);
    }

    #[test]
    fn result_serializes_decision_in_wire_form() {
        let result = EvaluationResult {
            z_score: 0.101,
            psi_deg: 72.5,
            cos_sim: 0.3,
            hazard_mass: 0.42,
            effective_cost: 0.72,
            is_safe: false,
            decision: Decision::Reject,
            evaluated_at: Utc::now(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["decision"], "REJECT");
        assert_eq!(json["is_safe"], false);
    }
}

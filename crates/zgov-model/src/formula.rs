//! # Z Formula — Plain, Hazard-Adjusted, Time-Series, Multi-Agent
//!
//! Pure scoring over caller-supplied scalars. The only state a
//! [`ZFormula`] carries is its [`GatingMode`], fixed at construction.
//!
//! ## Hazard Adjustment
//!
//! `hazard_adjusted_z` divides by `C + H` instead of `C`. Hazard mass H
//! represents accumulated adversarial entropy that inflates effective
//! cost; as H grows the score falls monotonically, which is how past bad
//! turns suppress future allowance even when the current turn looks
//! locally aligned.

use serde::{Deserialize, Serialize};

use zgov_core::{DomainError, GatingMode, ScoreInputs};

use crate::alignment::{alignment_angle, AngleMeasurement};

/// Tolerance for accepting a caller-supplied weight vector as already
/// normalized. Sums further from 1 than this are renormalized.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Governed-capability score calculator.
///
/// ```text
/// Z = (A * E / C) * gate(psi)
/// ```
///
/// One instance, one gating mode. All scoring calls are pure; the
/// formula holds no mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZFormula {
    mode: GatingMode,
}

impl ZFormula {
    /// Create a formula with the given gating mode.
    pub fn new(mode: GatingMode) -> Self {
        Self { mode }
    }

    /// The gating mode this formula applies to every score.
    pub fn mode(&self) -> GatingMode {
        self.mode
    }

    /// Compute the plain governed-capability score.
    ///
    /// Fails with [`DomainError::NonPositiveCost`] when `cost <= 0`
    /// (NaN cost is rejected by the same check). Angles outside
    /// `[0, 180]` degrees are accepted without validation.
    pub fn calculate_z(
        &self,
        adaptability: f64,
        efficacy: f64,
        cost: f64,
        psi_deg: f64,
    ) -> Result<f64, DomainError> {
        if !(cost > 0.0) {
            return Err(DomainError::NonPositiveCost(cost));
        }
        let base = (adaptability * efficacy) / cost;
        Ok(base * self.mode.factor(psi_deg))
    }

    /// Compute the hazard-adjusted score, dividing by `cost + hazard`.
    ///
    /// Fails with [`DomainError::NonPositiveTotalCost`] when
    /// `cost + hazard <= 0`. For `hazard >= 0` the result never exceeds
    /// the plain score, with equality exactly at `hazard == 0`.
    pub fn hazard_adjusted_z(
        &self,
        adaptability: f64,
        efficacy: f64,
        cost: f64,
        hazard: f64,
        psi_deg: f64,
    ) -> Result<f64, DomainError> {
        let total_cost = cost + hazard;
        if !(total_cost > 0.0) {
            return Err(DomainError::NonPositiveTotalCost { cost, hazard });
        }
        let base = (adaptability * efficacy) / total_cost;
        Ok(base * self.mode.factor(psi_deg))
    }

    /// Element-wise score over four equal-length time series.
    ///
    /// Validates lengths first, then cost positivity (reporting the
    /// offending index), then scores every point. No partial results:
    /// either every element scores or the call fails.
    pub fn temporal_evolution(
        &self,
        a_t: &[f64],
        e_t: &[f64],
        c_t: &[f64],
        psi_t: &[f64],
    ) -> Result<Vec<f64>, DomainError> {
        let len = a_t.len();
        if e_t.len() != len || c_t.len() != len || psi_t.len() != len {
            return Err(DomainError::SeriesLengthMismatch {
                a_len: a_t.len(),
                e_len: e_t.len(),
                c_len: c_t.len(),
                psi_len: psi_t.len(),
            });
        }
        if let Some((index, &value)) = c_t.iter().enumerate().find(|(_, c)| !(**c > 0.0)) {
            return Err(DomainError::NonPositiveCostAt { index, value });
        }

        (0..len)
            .map(|i| self.calculate_z(a_t[i], e_t[i], c_t[i], psi_t[i]))
            .collect()
    }

    /// Weighted system-level score over a set of agents.
    ///
    /// Weights default to uniform `1/n`. Supplied weights whose sum
    /// differs from 1 beyond floating tolerance are renormalized by
    /// their sum. Returns the weighted system score together with every
    /// agent's individual plain score. No hazard term applies at this
    /// level.
    pub fn multi_agent(
        &self,
        agents: &[ScoreInputs],
        weights: Option<&[f64]>,
    ) -> Result<(f64, Vec<f64>), DomainError> {
        let n = agents.len();
        if n == 0 {
            return Err(DomainError::EmptyAgentSet);
        }

        let weights = match weights {
            None => vec![1.0 / n as f64; n],
            Some(w) => {
                if w.len() != n {
                    return Err(DomainError::WeightCountMismatch {
                        agents: n,
                        weights: w.len(),
                    });
                }
                let sum: f64 = w.iter().sum();
                if !sum.is_finite() || !(sum > 0.0) {
                    return Err(DomainError::NonPositiveWeightSum(sum));
                }
                if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                    tracing::debug!(sum, "renormalizing agent weights");
                    w.iter().map(|x| x / sum).collect()
                } else {
                    w.to_vec()
                }
            }
        };

        let individual: Vec<f64> = agents
            .iter()
            .map(|s| self.calculate_z(s.adaptability, s.efficacy, s.cost, s.psi_deg))
            .collect::<Result<_, _>>()?;

        let system = weights.iter().zip(&individual).map(|(w, z)| w * z).sum();
        Ok((system, individual))
    }

    /// Measure the alignment angle between an action embedding and the
    /// harmony reference embedding.
    ///
    /// Convenience re-exposure of [`alignment_angle`]; the formula
    /// itself plays no part in the measurement.
    pub fn alignment_angle(&self, action: &[f64], harmony: &[f64]) -> AngleMeasurement {
        alignment_angle(action, harmony)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squared() -> ZFormula {
        ZFormula::new(GatingMode::Squared)
    }

    // ── calculate_z ──────────────────────────────────────────────────

    #[test]
    fn aligned_score_is_exact_capability_ratio() {
        let z = squared().calculate_z(0.8, 0.9, 0.3, 0.0).unwrap();
        assert!((z - 0.8 * 0.9 / 0.3).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_action_is_fully_gated() {
        let z = squared().calculate_z(0.8, 0.9, 0.3, 90.0).unwrap();
        assert!(z.abs() < 1e-12);
    }

    #[test]
    fn squared_and_linear_diverge_at_partial_alignment() {
        let lin = ZFormula::new(GatingMode::Linear)
            .calculate_z(0.8, 0.9, 0.3, 60.0)
            .unwrap();
        let sq = squared().calculate_z(0.8, 0.9, 0.3, 60.0).unwrap();
        // cos 60 = 0.5, so the squared penalty halves the linear score.
        assert!((sq - lin * 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_and_negative_cost_are_rejected() {
        assert_eq!(
            squared().calculate_z(0.8, 0.9, 0.0, 30.0),
            Err(DomainError::NonPositiveCost(0.0))
        );
        assert_eq!(
            squared().calculate_z(0.8, 0.9, -1.0, 30.0),
            Err(DomainError::NonPositiveCost(-1.0))
        );
    }

    #[test]
    fn nan_cost_is_rejected_not_propagated() {
        let result = squared().calculate_z(0.8, 0.9, f64::NAN, 30.0);
        assert!(matches!(result, Err(DomainError::NonPositiveCost(_))));
    }

    // ── hazard_adjusted_z ────────────────────────────────────────────

    #[test]
    fn hazard_never_increases_score() {
        let f = squared();
        let plain = f.calculate_z(0.8, 0.9, 0.3, 30.0).unwrap();
        let adjusted = f.hazard_adjusted_z(0.8, 0.9, 0.3, 0.4, 30.0).unwrap();
        assert!(adjusted < plain);

        let zero_hazard = f.hazard_adjusted_z(0.8, 0.9, 0.3, 0.0, 30.0).unwrap();
        assert!((zero_hazard - plain).abs() < 1e-12);
    }

    #[test]
    fn negative_hazard_swallowing_cost_is_rejected() {
        let result = squared().hazard_adjusted_z(0.8, 0.9, 0.3, -0.3, 30.0);
        assert_eq!(
            result,
            Err(DomainError::NonPositiveTotalCost {
                cost: 0.3,
                hazard: -0.3
            })
        );
    }

    // ── temporal_evolution ───────────────────────────────────────────

    #[test]
    fn temporal_matches_element_wise_scoring() {
        let f = squared();
        let a = [0.5, 0.6, 0.7];
        let e = [0.9, 0.9, 0.9];
        let c = [0.3, 0.4, 0.5];
        let psi = [0.0, 30.0, 90.0];
        let series = f.temporal_evolution(&a, &e, &c, &psi).unwrap();
        assert_eq!(series.len(), 3);
        for i in 0..3 {
            let single = f.calculate_z(a[i], e[i], c[i], psi[i]).unwrap();
            assert!((series[i] - single).abs() < 1e-12);
        }
    }

    #[test]
    fn temporal_rejects_length_mismatch() {
        let f = squared();
        let result = f.temporal_evolution(&[0.5, 0.6, 0.7], &[0.9, 0.9], &[0.3, 0.4, 0.5], &[0.0, 30.0, 90.0]);
        assert_eq!(
            result,
            Err(DomainError::SeriesLengthMismatch {
                a_len: 3,
                e_len: 2,
                c_len: 3,
                psi_len: 3
            })
        );
    }

    #[test]
    fn temporal_reports_offending_cost_index() {
        let f = squared();
        let result = f.temporal_evolution(
            &[0.5, 0.6, 0.7],
            &[0.9, 0.9, 0.9],
            &[0.3, -0.1, 0.5],
            &[0.0, 30.0, 90.0],
        );
        assert_eq!(
            result,
            Err(DomainError::NonPositiveCostAt {
                index: 1,
                value: -0.1
            })
        );
    }

    #[test]
    fn temporal_empty_series_scores_empty() {
        let series = squared().temporal_evolution(&[], &[], &[], &[]).unwrap();
        assert!(series.is_empty());
    }

    // ── multi_agent ──────────────────────────────────────────────────

    #[test]
    fn uniform_weights_average_individual_scores() {
        let f = squared();
        let agents = [
            ScoreInputs::new(0.8, 0.9, 0.3, 0.0),
            ScoreInputs::new(0.6, 0.9, 0.3, 0.0),
        ];
        let (system, individual) = f.multi_agent(&agents, None).unwrap();
        assert_eq!(individual.len(), 2);
        let expected = (individual[0] + individual[1]) / 2.0;
        assert!((system - expected).abs() < 1e-12);
    }

    #[test]
    fn unnormalized_weights_are_renormalized() {
        let f = squared();
        let agents = [
            ScoreInputs::new(0.8, 0.9, 0.3, 0.0),
            ScoreInputs::new(0.6, 0.9, 0.3, 0.0),
        ];
        // 3:1 trust ratio expressed with a sum of 4.
        let (system, individual) = f.multi_agent(&agents, Some(&[3.0, 1.0])).unwrap();
        let expected = 0.75 * individual[0] + 0.25 * individual[1];
        assert!((system - expected).abs() < 1e-12);
    }

    #[test]
    fn degenerate_agent_sets_are_rejected() {
        let f = squared();
        assert_eq!(f.multi_agent(&[], None), Err(DomainError::EmptyAgentSet));

        let agents = [ScoreInputs::new(0.8, 0.9, 0.3, 0.0)];
        assert_eq!(
            f.multi_agent(&agents, Some(&[0.5, 0.5])),
            Err(DomainError::WeightCountMismatch {
                agents: 1,
                weights: 2
            })
        );
        assert_eq!(
            f.multi_agent(&agents, Some(&[0.0])),
            Err(DomainError::NonPositiveWeightSum(0.0))
        );
    }

    #[test]
    fn agent_with_invalid_cost_fails_the_whole_evaluation() {
        let f = squared();
        let agents = [
            ScoreInputs::new(0.8, 0.9, 0.3, 0.0),
            ScoreInputs::new(0.6, 0.9, 0.0, 0.0),
        ];
        assert_eq!(
            f.multi_agent(&agents, None),
            Err(DomainError::NonPositiveCost(0.0))
        );
    }

    // ── property tests ───────────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Every positive-cost evaluation is finite and non-NaN.
            #[test]
            fn positive_cost_scores_are_finite(
                a in 1e-3f64..10.0,
                e in 1e-3f64..10.0,
                c in 1e-3f64..10.0,
                psi in -720.0f64..720.0,
            ) {
                let z = squared().calculate_z(a, e, c, psi).unwrap();
                prop_assert!(z.is_finite());
            }

            /// Hazard adjustment is monotonically non-increasing in H.
            #[test]
            fn hazard_is_monotone(
                a in 1e-3f64..10.0,
                e in 1e-3f64..10.0,
                c in 1e-3f64..10.0,
                h1 in 0.0f64..10.0,
                h2 in 0.0f64..10.0,
                psi in 0.0f64..180.0,
            ) {
                let f = squared();
                let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
                let z_lo = f.hazard_adjusted_z(a, e, c, lo, psi).unwrap();
                let z_hi = f.hazard_adjusted_z(a, e, c, hi, psi).unwrap();
                prop_assert!(z_hi <= z_lo + 1e-12);
            }

            /// The hazard-adjusted score never exceeds the plain score.
            #[test]
            fn hazard_bounds_plain_score(
                a in 1e-3f64..10.0,
                e in 1e-3f64..10.0,
                c in 1e-3f64..10.0,
                h in 0.0f64..10.0,
                psi in 0.0f64..180.0,
            ) {
                let f = squared();
                let plain = f.calculate_z(a, e, c, psi).unwrap();
                let adjusted = f.hazard_adjusted_z(a, e, c, h, psi).unwrap();
                prop_assert!(adjusted <= plain + 1e-12);
            }
        }
    }
}

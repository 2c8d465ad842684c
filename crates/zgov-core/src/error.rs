//! # Error Types — Numeric-Domain Violations
//!
//! One error kind covers every caller mistake in the numeric core. All
//! variants use `thiserror` for derive-based `Display` and carry the
//! offending value(s) so the caller can diagnose without a debugger.
//!
//! ## Design
//!
//! - Errors are raised synchronously and never retried internally.
//! - There is no recovery path inside the core; callers decide whether
//!   to supply corrected inputs and call again.
//! - Expected floating-point artifacts (near-zero norms, cosine values
//!   marginally outside `[-1, 1]`) are clamped by the consuming code,
//!   not reported here.

use thiserror::Error;

/// A caller-supplied value outside the numeric domain of the score.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Cost must be strictly positive. Zero or negative cost is an
    /// unbounded-optimization singularity and must never silently
    /// produce an infinite or negative governance score.
    #[error("cost must be positive (got {0}); zero cost represents unbounded optimization")]
    NonPositiveCost(f64),

    /// Hazard-adjusted scoring divides by `C + H`, which must be
    /// strictly positive.
    #[error("total cost C + H must be positive (C = {cost}, H = {hazard})")]
    NonPositiveTotalCost {
        /// The base cost supplied by the caller.
        cost: f64,
        /// The hazard mass added to the cost.
        hazard: f64,
    },

    /// Time-series evaluation requires four sequences of equal length.
    #[error(
        "time series must have equal length (A = {a_len}, E = {e_len}, C = {c_len}, psi = {psi_len})"
    )]
    SeriesLengthMismatch {
        /// Length of the adaptability series.
        a_len: usize,
        /// Length of the efficacy series.
        e_len: usize,
        /// Length of the cost series.
        c_len: usize,
        /// Length of the angle series.
        psi_len: usize,
    },

    /// A cost series element violated the positivity requirement.
    #[error("cost series contains non-positive value {value} at index {index}")]
    NonPositiveCostAt {
        /// Index of the offending element.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Proportional gain must be strictly positive; a non-positive gain
    /// breaks the geometric error-decay argument for the control loop.
    #[error("controller gain must be positive for stability (got {0})")]
    NonPositiveGain(f64),

    /// Adaptability clamp bounds with an empty interval.
    #[error("adaptability bounds are inverted (min = {min}, max = {max})")]
    InvalidBounds {
        /// Lower clamp bound.
        min: f64,
        /// Upper clamp bound.
        max: f64,
    },

    /// Multi-agent evaluation over an empty agent set has no defined
    /// uniform weighting.
    #[error("multi-agent evaluation requires at least one agent")]
    EmptyAgentSet,

    /// Explicit weights must match the agent count one-to-one.
    #[error("weight count {weights} does not match agent count {agents}")]
    WeightCountMismatch {
        /// Number of agents supplied.
        agents: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// Explicit weights must have a positive, finite sum so they can be
    /// renormalized.
    #[error("weights must sum to a positive finite value (got {0})")]
    NonPositiveWeightSum(f64),
}

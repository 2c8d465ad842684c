//! # Alignment Angle — Cosine Measurement Between Embeddings
//!
//! Converts two embedding vectors into a cosine similarity and an
//! alignment angle in degrees. This is how psi is obtained in practice:
//! embed the action text, embed the harmony reference once, measure the
//! angle between them.
//!
//! ## Numerical Safety
//!
//! - Norms carry a `1e-10` epsilon in the denominator so a zero-length
//!   vector divides cleanly instead of producing NaN.
//! - The dot product of unit vectors is clamped to `[-1, 1]` before
//!   `acos`. Floating-point error can push a theoretically-bounded
//!   cosine a few ulps outside that interval, and an unclamped value
//!   would make `acos` return NaN. The clamp is mandatory.

use serde::{Deserialize, Serialize};

/// Epsilon added to vector norms to guard the zero-vector division.
const NORM_EPSILON: f64 = 1e-10;

/// Result of measuring the angle between an action embedding and the
/// harmony reference embedding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleMeasurement {
    /// Alignment angle psi in degrees, guaranteed in `[0, 180]`.
    pub psi_deg: f64,
    /// Cosine similarity, guaranteed in `[-1, 1]`.
    pub cos_sim: f64,
}

/// Measure the alignment angle between two embedding vectors.
///
/// Both vectors are normalized (with an epsilon guard), dotted, clamped,
/// and converted through `acos` to degrees. Components are paired
/// positionally; the vectors are expected to have the same dimension.
///
/// Postconditions hold for any finite input, including zero vectors and
/// adversarially near-parallel or near-antiparallel pairs:
/// `cos_sim` is in `[-1, 1]` and `psi_deg` is in `[0, 180]`.
pub fn alignment_angle(action: &[f64], harmony: &[f64]) -> AngleMeasurement {
    debug_assert_eq!(
        action.len(),
        harmony.len(),
        "embedding dimensions must match"
    );

    let action_norm = norm(action) + NORM_EPSILON;
    let harmony_norm = norm(harmony) + NORM_EPSILON;

    let cos_sim: f64 = action
        .iter()
        .zip(harmony)
        .map(|(a, h)| (a / action_norm) * (h / harmony_norm))
        .sum();
    let cos_sim = cos_sim.clamp(-1.0, 1.0);

    AngleMeasurement {
        psi_deg: cos_sim.acos().to_degrees(),
        cos_sim,
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

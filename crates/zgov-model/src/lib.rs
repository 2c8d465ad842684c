//! # zgov-model — Governed-Capability Scoring
//!
//! The numeric heart of the Z Governance Stack:
//!
//! ```text
//! Z = (A * E / C) * gate(psi)
//! ```
//!
//! where A is adaptability, E efficacy, C cost, and `gate` the cosine
//! penalty for misalignment angle psi. [`ZFormula`] computes the plain
//! score, the hazard-adjusted variant (cost inflated by accumulated
//! hazard mass), the element-wise time-series form, and the weighted
//! multi-agent aggregate. The [`alignment`] module turns two embedding
//! vectors into a cosine similarity and an angle in degrees.
//!
//! All scoring functions return `Result` and surface
//! [`zgov_core::DomainError`] for out-of-domain inputs; numerical
//! artifacts (tiny norms, cosine epsilon overflow) are absorbed with
//! epsilon guards and clamping instead.

pub mod alignment;
pub mod formula;

pub use alignment::{alignment_angle, AngleMeasurement};
pub use formula::ZFormula;

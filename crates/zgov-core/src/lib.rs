//! # zgov-core — Foundational Types for the Z Governance Stack
//!
//! This crate is the leaf of the workspace DAG. It defines the shared
//! domain vocabulary for governed-capability scoring: the gating mode,
//! the per-evaluation score inputs, the ALLOW/REJECT decision type, and
//! the error hierarchy used by every other crate.
//!
//! ## Key Design Principles
//!
//! 1. **One error kind for caller mistakes.** Every numeric-domain
//!    violation (non-positive cost, bad gain, mismatched series lengths)
//!    is a [`DomainError`] variant carrying the offending value. Errors
//!    are raised synchronously and surfaced to the caller; there is no
//!    internal retry or recovery path.
//! 2. **Floating-point artifacts are not errors.** Near-zero vector
//!    norms and cosine values a few ulps outside `[-1, 1]` are handled
//!    with epsilon guards and clamping in the consuming crates, never
//!    raised as `DomainError`.
//! 3. **Gating mode is data, not a flag.** [`GatingMode`] owns the
//!    misalignment penalty computation; an exhaustive `match` covers
//!    both modes so adding one is a compile error until every consumer
//!    handles it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `zgov-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod domain;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use domain::{Decision, GatingMode, ScoreInputs};
pub use error::DomainError;

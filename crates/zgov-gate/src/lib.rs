//! # zgov-gate — Session-Scoped Safety Decisions
//!
//! Turns a stream of per-turn alignment measurements into ALLOW/REJECT
//! decisions with stateful memory across turns.
//!
//! Each conversation owns one [`HazardGate`]. Per turn, the gate embeds
//! the prompt/response pair through an injected [`TextEncoder`],
//! measures its angle against a cached harmony reference vector, grows
//! the session hazard mass when the turn drifts below the similarity
//! threshold, and scores the turn with the hazard-adjusted formula.
//! Hazard is a ratchet: a single good turn never erases prior risk, so
//! compounding adversarial pressure (multi-turn jailbreak escalation)
//! keeps suppressing the score even when an individual turn looks
//! locally aligned.
//!
//! The embedding model itself is an external collaborator behind
//! [`TextEncoder`]; this crate never loads models or touches devices.

pub mod config;
pub mod encoder;
pub mod error;
pub mod gate;
pub mod result;

pub use config::GateConfig;
pub use encoder::{EncoderError, StubEncoder, TextEncoder};
pub use error::GateError;
pub use gate::HazardGate;
pub use result::EvaluationResult;

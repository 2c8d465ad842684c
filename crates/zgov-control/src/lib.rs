//! # zgov-control — Proportional Z-Score Regulation
//!
//! Closed-loop control of the governed-capability score:
//!
//! ```text
//! u(t) = K * (Z_target - Z_current)
//! A(t+1) = clamp(A(t) + u(t) * dt, bounds)
//! ```
//!
//! One [`ZController`] instance owns one control session: the target,
//! the gain, the formula it scores with, and the full correction
//! history. Repeated [`ZController::update_adaptability`] calls form a
//! discrete-time proportional loop that drives the score toward the
//! target when efficacy, cost, and alignment are held steady and the
//! gain is in the stabilizing range.

pub mod controller;

pub use controller::{ControlSample, ZController};

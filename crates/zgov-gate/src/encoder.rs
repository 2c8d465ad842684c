//! # Text Encoder — External Embedding Collaborator
//!
//! The gate consumes semantic embeddings through this narrow interface:
//! `embed(text) -> vector of floats`. Model loading, device placement,
//! and any network or I/O belong entirely to the implementation behind
//! the trait and are opaque to the numeric core.
//!
//! Implementations should be deterministic: the harmony reference is
//! embedded once at gate construction and cached, so a non-deterministic
//! encoder only affects per-turn action vectors.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Failure in the external encoder collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("encoder failure: {0}")]
pub struct EncoderError(pub String);

/// Contract for obtaining a fixed-length embedding of a piece of text.
pub trait TextEncoder {
    /// Embed `text` into a fixed-length vector.
    fn embed(&self, text: &str) -> Result<Vec<f64>, EncoderError>;
}

/// Deterministic hash-derived embeddings for tests and offline use.
///
/// Same text, same vector, no model required. Components are derived
/// from a per-dimension hash of the text and land in `[-1, 1]`. The
/// vectors carry no semantics; scenario tests that need a specific
/// cosine similarity should script their own encoder instead.
#[derive(Debug, Clone)]
pub struct StubEncoder {
    dimensions: usize,
}

impl StubEncoder {
    /// Create a stub encoder producing vectors of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// The fixed output dimension.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

impl Default for StubEncoder {
    fn default() -> Self {
        Self::new(384)
    }
}

impl TextEncoder for StubEncoder {
    fn embed(&self, text: &str) -> Result<Vec<f64>, EncoderError> {
        let vector = (0..self.dimensions)
            .map(|dimension| {
                let mut hasher = DefaultHasher::new();
                text.hash(&mut hasher);
                dimension.hash(&mut hasher);
                // Map the hash onto [-1, 1].
                (hasher.finish() as f64 / u64::MAX as f64) * 2.0 - 1.0
            })
            .collect();
        Ok(vector)
    }
}

//! Gate-level error type: numeric-domain violations plus encoder
//! collaborator failures.

use thiserror::Error;

use zgov_core::DomainError;

use crate::encoder::EncoderError;

/// Error surfaced by gate construction or turn evaluation.
#[derive(Error, Debug)]
pub enum GateError {
    /// The external encoder collaborator failed.
    #[error(transparent)]
    Encoder(#[from] EncoderError),

    /// A score input was outside the numeric domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The encoder returned a zero-dimensional embedding. Angle
    /// measurement over an empty vector is meaningless, so this is
    /// rejected at the boundary instead of degrading into a 90° angle.
    #[error("encoder returned an empty embedding for {context}")]
    EmptyEmbedding {
        /// Which embedding was empty ("harmony reference" or "action text").
        context: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_transparently() {
        let err: GateError = DomainError::NonPositiveCost(0.0).into();
        assert!(err.to_string().contains("cost must be positive"));
    }

    #[test]
    fn empty_embedding_names_the_context() {
        let err = GateError::EmptyEmbedding {
            context: "harmony reference",
        };
        assert!(err.to_string().contains("harmony reference"));
    }
}

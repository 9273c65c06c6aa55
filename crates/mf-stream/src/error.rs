//! Stream-layer errors.

use mf_props::{CompositionError, PropertyError, StateError};
use thiserror::Error;

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors from stream construction and mixing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamError {
    /// The composition failed validation.
    #[error("invalid composition: {0}")]
    InvalidComposition(#[from] CompositionError),

    /// The thermodynamic state or flow failed validation.
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),

    /// The property engine rejected a query.
    #[error("property engine error: {0}")]
    PropertyEngine(#[from] PropertyError),

    /// The combined feed carries no material, so the mixed state is undefined.
    #[error("mixture is degenerate: combined molar flow is zero")]
    DegenerateMixture,

    /// The enthalpy-balance temperature solve did not converge.
    #[error(
        "mixing temperature solve failed to converge: residual {residual} W after {iterations} iterations"
    )]
    MixingNonConvergence { residual: f64, iterations: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StreamError::MixingNonConvergence {
            residual: 12.5,
            iterations: 100,
        };
        let text = err.to_string();
        assert!(text.contains("12.5"));
        assert!(text.contains("100"));

        let err = StreamError::from(StateError::InvalidFlow(-1.0));
        assert!(err.to_string().contains("-1"));
    }
}

//! Property boundary errors.

use crate::species::Species;
use thiserror::Error;

/// Result type for property engine queries.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors raised when a composition fails validation.
///
/// Malformed compositions are rejected at construction, never normalized away.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    #[error("composition has no components")]
    Empty,

    #[error("non-finite mole fraction for {species}")]
    NonFinite { species: Species },

    #[error("negative mole fraction for {species}")]
    Negative { species: Species },

    #[error("component {species} appears more than once")]
    Duplicate { species: Species },

    #[error("mole fractions sum to {sum}, expected 1 within tolerance")]
    SumNotUnity { sum: f64 },
}

/// Errors raised when a thermodynamic state fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("temperature must be positive and finite, got {0} K")]
    InvalidTemperature(f64),

    #[error("pressure must be positive and finite, got {0} Pa")]
    InvalidPressure(f64),

    #[error("flow must be non-negative and finite, got {0} mol/s")]
    InvalidFlow(f64),
}

/// Errors from a property engine.
///
/// Every failure carries enough context to diagnose the offending query; no
/// failure is ever downgraded to a sentinel value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// The engine has no data for a component in the composition.
    #[error("component {species} is unknown to the {model} property model")]
    UnknownComponent {
        species: Species,
        model: &'static str,
    },

    /// The composition as a whole cannot be handled by the engine.
    #[error("unsupported composition: {what}")]
    UnsupportedComposition { what: &'static str },

    /// The requested state lies outside the engine's validity envelope.
    #[error("state outside validity envelope: {what}")]
    OutOfRange { what: String },

    /// Backend (CoolProp) error, with the offending inputs in the message.
    #[error("property backend error: {message}")]
    Backend { message: String },

    /// The engine's internal iteration failed to converge.
    #[error("property engine failed to converge: {what}")]
    NonConvergence { what: &'static str },

    /// The engine returned a value that fails plausibility validation.
    #[error("non-physical property value: {what}")]
    NonPhysical { what: &'static str },
}

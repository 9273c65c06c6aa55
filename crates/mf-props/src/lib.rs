//! mf-props: thermophysical property boundary for mixflow.
//!
//! Provides:
//! - Chemical species definitions (Water, Acetone, Ethanol, ...)
//! - Validated mole-fraction compositions
//! - Thermodynamic state representation (pressure, temperature, composition)
//! - PropertyModel trait for property calculations
//! - IdealMixModel: closed-form ideal-mixture engine for tests and offline use
//! - CoolProp backend (via `rfluids`, behind the `coolprop` feature)
//!
//! # Architecture
//!
//! The `PropertyModel` trait isolates stream handling from any particular property
//! backend. The trait has a defined failure contract (`PropertyError`) so callers
//! can distinguish unknown components, out-of-envelope states, and backend
//! convergence failures. The ideal-mixture model keeps the rest of the workspace
//! testable without the native CoolProp library.

pub mod composition;
pub mod error;
pub mod ideal;
pub mod model;
pub mod species;
pub mod state;

#[cfg(feature = "coolprop")]
pub mod coolprop;

// Re-exports for ergonomics
pub use composition::Composition;
pub use error::{CompositionError, PropertyError, PropertyResult, StateError};
pub use ideal::IdealMixModel;
pub use model::{PropertyModel, PropertyPack};
pub use species::Species;
pub use state::{
    MolarDensity, MolarEnthalpy, MolarFlow, MolarHeatCapacity, SpecEnthalpy, SpecHeatCapacity,
    ThermoState,
};

#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropModel;

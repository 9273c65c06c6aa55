//! Thermodynamic state definitions.

use crate::composition::Composition;
use crate::error::StateError;
use mf_core::units::{Pressure, Temperature};

/// Molar flow rate [mol/s].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarFlow = f64;

/// Molar enthalpy [J/mol].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarEnthalpy = f64;

/// Specific enthalpy [J/kg].
pub type SpecEnthalpy = f64;

/// Molar heat capacity [J/(mol·K)].
pub type MolarHeatCapacity = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Molar density [mol/m³].
pub type MolarDensity = f64;

/// Thermodynamic state: pressure, temperature, and composition.
///
/// This is the minimal set of independent properties. Derived properties
/// (density, enthalpy, viscosity, ...) are computed on demand via the
/// [`PropertyModel`](crate::model::PropertyModel) trait and are never stored,
/// so they cannot desynchronize from the state.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoState {
    p: Pressure,
    t: Temperature,
    comp: Composition,
}

impl ThermoState {
    /// Create a state from pressure, temperature, and composition.
    ///
    /// Validates that pressure and temperature are positive and finite.
    pub fn from_pt(
        p: Pressure,
        t: Temperature,
        comp: Composition,
    ) -> Result<Self, StateError> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(StateError::InvalidPressure(p.value));
        }
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(StateError::InvalidTemperature(t.value));
        }

        Ok(Self { p, t, comp })
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Get composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// Same pressure and composition at a different temperature.
    pub fn with_temperature(&self, t: Temperature) -> Result<Self, StateError> {
        Self::from_pt(self.p, t, self.comp.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use mf_core::units::{k, pa};

    #[test]
    fn create_valid_state() {
        let comp = Composition::pure(Species::Water);
        let state = ThermoState::from_pt(pa(101325.0), k(300.0), comp).unwrap();
        assert_eq!(state.pressure().value, 101325.0);
        assert_eq!(state.temperature().value, 300.0);
        assert_eq!(state.composition().is_pure(), Some(Species::Water));
    }

    #[test]
    fn reject_negative_pressure() {
        let comp = Composition::pure(Species::Water);
        let result = ThermoState::from_pt(pa(-1.0), k(300.0), comp);
        assert!(matches!(result, Err(StateError::InvalidPressure(_))));
    }

    #[test]
    fn reject_zero_temperature() {
        let comp = Composition::pure(Species::Water);
        let result = ThermoState::from_pt(pa(101325.0), k(0.0), comp);
        assert!(matches!(result, Err(StateError::InvalidTemperature(_))));
    }

    #[test]
    fn reject_non_finite() {
        let comp = Composition::pure(Species::Water);
        let result = ThermoState::from_pt(pa(f64::NAN), k(300.0), comp);
        assert!(result.is_err());
    }

    #[test]
    fn with_temperature_keeps_pressure_and_composition() {
        let comp = Composition::pure(Species::Ethanol);
        let state = ThermoState::from_pt(pa(101325.0), k(300.0), comp).unwrap();
        let warmer = state.with_temperature(k(320.0)).unwrap();
        assert_eq!(warmer.pressure(), state.pressure());
        assert_eq!(warmer.composition(), state.composition());
        assert_eq!(warmer.temperature().value, 320.0);
    }
}

//! Property model trait and validation helpers.

use crate::composition::Composition;
use crate::error::{PropertyError, PropertyResult};
use crate::state::{
    MolarDensity, MolarEnthalpy, MolarHeatCapacity, SpecEnthalpy, SpecHeatCapacity, ThermoState,
};
use mf_core::units::{Density, DynVisc, Pressure, Temperature, ThermalCond};

/// All derived properties of one state, computed in a single batch.
///
/// Backends that can serve several properties from one internal state override
/// [`PropertyModel::property_pack`] to avoid redundant state construction; the
/// default implementation issues one query per property.
#[derive(Clone, Debug)]
pub struct PropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Temperature [K]
    pub t: Temperature,

    /// Mass density [kg/m³]
    pub density_mass: Density,

    /// Molar density [mol/m³]
    pub density_molar: MolarDensity,

    /// Specific enthalpy [J/kg]
    pub enthalpy_mass: SpecEnthalpy,

    /// Molar enthalpy [J/mol]
    pub enthalpy_molar: MolarEnthalpy,

    /// Specific heat capacity at constant pressure [J/(kg·K)]
    pub heat_capacity_mass: SpecHeatCapacity,

    /// Molar heat capacity at constant pressure [J/(mol·K)]
    pub heat_capacity_molar: MolarHeatCapacity,

    /// Dynamic viscosity [Pa·s]
    pub viscosity: DynVisc,

    /// Thermal conductivity [W/(m·K)]
    pub thermal_conductivity: ThermalCond,
}

impl PropertyPack {
    /// Return a one-line summary of the contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,T={:.2}K,ρ={:.2}kg/m³,h={:.1}J/mol,cp={:.2}J/mol·K,μ={:.2e}Pa·s,λ={:.3}W/m·K)",
            self.p.value,
            self.t.value,
            self.density_mass.value,
            self.enthalpy_molar,
            self.heat_capacity_molar,
            self.viscosity.value,
            self.thermal_conductivity.value,
        )
    }
}

/// Trait for thermophysical property engines.
///
/// Implementations must be thread-safe (Send + Sync). Every method is a fresh,
/// independent query over an immutable state; implementations may cache
/// internally but must never return stale values for a different state.
///
/// The failure contract is [`PropertyError`]: unknown components, states outside
/// the engine's validity envelope, backend errors, and internal non-convergence
/// are all distinguishable by the caller.
pub trait PropertyModel: Send + Sync {
    /// Get the model name (for diagnostics/logging).
    fn name(&self) -> &str;

    /// Check if this model supports the given composition.
    fn supports(&self, comp: &Composition) -> bool;

    /// Mass density [kg/m³] at the given state.
    fn density_mass(&self, state: &ThermoState) -> PropertyResult<Density>;

    /// Molar density [mol/m³] at the given state.
    fn density_molar(&self, state: &ThermoState) -> PropertyResult<MolarDensity>;

    /// Specific enthalpy [J/kg] at the given state.
    fn enthalpy_mass(&self, state: &ThermoState) -> PropertyResult<SpecEnthalpy>;

    /// Molar enthalpy [J/mol] at the given state.
    fn enthalpy_molar(&self, state: &ThermoState) -> PropertyResult<MolarEnthalpy>;

    /// Specific heat capacity at constant pressure [J/(kg·K)].
    fn heat_capacity_mass(&self, state: &ThermoState) -> PropertyResult<SpecHeatCapacity>;

    /// Molar heat capacity at constant pressure [J/(mol·K)].
    fn heat_capacity_molar(&self, state: &ThermoState) -> PropertyResult<MolarHeatCapacity>;

    /// Dynamic viscosity [Pa·s] at the given state.
    fn viscosity(&self, state: &ThermoState) -> PropertyResult<DynVisc>;

    /// Thermal conductivity [W/(m·K)] at the given state.
    fn thermal_conductivity(&self, state: &ThermoState) -> PropertyResult<ThermalCond>;

    /// Compute all derived properties in one call.
    fn property_pack(&self, state: &ThermoState) -> PropertyResult<PropertyPack> {
        Ok(PropertyPack {
            p: state.pressure(),
            t: state.temperature(),
            density_mass: self.density_mass(state)?,
            density_molar: self.density_molar(state)?,
            enthalpy_mass: self.enthalpy_mass(state)?,
            enthalpy_molar: self.enthalpy_molar(state)?,
            heat_capacity_mass: self.heat_capacity_mass(state)?,
            heat_capacity_molar: self.heat_capacity_molar(state)?,
            viscosity: self.viscosity(state)?,
            thermal_conductivity: self.thermal_conductivity(state)?,
        })
    }
}

/// Validation helpers for engine outputs.
pub(crate) mod validation {
    use super::*;

    pub fn validate_density(rho: Density) -> PropertyResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "mass density must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_molar_density(rho: MolarDensity) -> PropertyResult<()> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "molar density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Enthalpy may be negative (reference-dependent) but must be finite.
    pub fn validate_enthalpy(h: f64) -> PropertyResult<()> {
        if !h.is_finite() {
            return Err(PropertyError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        Ok(())
    }

    pub fn validate_heat_capacity(cp: f64) -> PropertyResult<()> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "heat capacity must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_viscosity(mu: DynVisc) -> PropertyResult<()> {
        if !mu.value.is_finite() || mu.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_conductivity(lambda: ThermalCond) -> PropertyResult<()> {
        if !lambda.value.is_finite() || lambda.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "thermal conductivity must be positive and finite",
            });
        }
        Ok(())
    }
}

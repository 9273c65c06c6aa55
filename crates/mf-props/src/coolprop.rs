//! CoolProp-backed property model.
//!
//! Pure components map directly to rfluids substances; multi-component
//! compositions go through CoolProp's custom mole-based mixture interface.
//! CoolProp works on a mass basis internally, so molar quantities are derived
//! through the backend's own molar mass.

use std::collections::HashMap;

use crate::composition::Composition;
use crate::error::{PropertyError, PropertyResult};
use crate::model::{PropertyModel, validation};
use crate::state::{
    MolarDensity, MolarEnthalpy, MolarHeatCapacity, SpecEnthalpy, SpecHeatCapacity, ThermoState,
};
use mf_core::units::{Density, DynVisc, ThermalCond, kg_per_m3, pa_s, w_per_m_k};
use rfluids::prelude::*;

/// CoolProp backend for thermophysical properties.
///
/// Thread-safe: a fresh rfluids fluid instance is built per query, so no
/// state is shared between threads.
pub struct CoolPropModel {}

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self {}
    }

    /// Build an undefined-state rfluids fluid for the composition.
    fn undefined_fluid(&self, comp: &Composition) -> PropertyResult<Fluid<Undefined>> {
        if let Some(species) = comp.is_pure() {
            let pure = species.rfluids_pure().ok_or(PropertyError::UnknownComponent {
                species,
                model: "CoolProp",
            })?;
            return Ok(Fluid::from(pure));
        }

        let mut components = HashMap::with_capacity(comp.len());
        for (species, frac) in comp.iter() {
            let pure = species.rfluids_pure().ok_or(PropertyError::UnknownComponent {
                species,
                model: "CoolProp",
            })?;
            components.insert(pure, frac);
        }

        let custom = CustomMix::mole_based(components).map_err(|e| PropertyError::Backend {
            message: format!("rfluids rejected mole-based mixture: {e}"),
        })?;
        Fluid::try_from(custom).map_err(|e| PropertyError::Backend {
            message: format!("rfluids could not build custom mixture: {e}"),
        })
    }

    /// Build a defined-state fluid at the state's pressure and temperature.
    fn fluid_at(&self, state: &ThermoState) -> PropertyResult<Fluid> {
        let p_pa = state.pressure().value;
        let t_k = state.temperature().value;
        self.undefined_fluid(state.composition())?
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| PropertyError::Backend {
                message: format!("rfluids error at P={p_pa} Pa, T={t_k} K: {e}"),
            })
    }

    /// Backend molar mass [kg/mol] for the composition.
    fn molar_mass_backend(&self, comp: &Composition) -> PropertyResult<f64> {
        let mut fluid = self.undefined_fluid(comp)?;
        fluid.molar_mass().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting molar mass: {e}"),
        })
    }
}

impl Default for CoolPropModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, comp: &Composition) -> bool {
        // Every component must map to an rfluids substance. Whether CoolProp
        // accepts the specific mixture is only known at query time.
        comp.species().all(|s| s.rfluids_pure().is_some())
    }

    fn density_mass(&self, state: &ThermoState) -> PropertyResult<Density> {
        let mut fluid = self.fluid_at(state)?;
        let rho_val = fluid.density().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting density: {e}"),
        })?;

        let rho = kg_per_m3(rho_val);
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn density_molar(&self, state: &ThermoState) -> PropertyResult<MolarDensity> {
        let rho_mass = self.density_mass(state)?;
        let m = self.molar_mass_backend(state.composition())?;
        let rho = rho_mass.value / m;
        validation::validate_molar_density(rho)?;
        Ok(rho)
    }

    fn enthalpy_mass(&self, state: &ThermoState) -> PropertyResult<SpecEnthalpy> {
        let mut fluid = self.fluid_at(state)?;
        let h = fluid.enthalpy().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting enthalpy: {e}"),
        })?;

        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn enthalpy_molar(&self, state: &ThermoState) -> PropertyResult<MolarEnthalpy> {
        let h_mass = self.enthalpy_mass(state)?;
        let m = self.molar_mass_backend(state.composition())?;
        Ok(h_mass * m)
    }

    fn heat_capacity_mass(&self, state: &ThermoState) -> PropertyResult<SpecHeatCapacity> {
        let mut fluid = self.fluid_at(state)?;
        let cp = fluid.specific_heat().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting specific heat: {e}"),
        })?;

        validation::validate_heat_capacity(cp)?;
        Ok(cp)
    }

    fn heat_capacity_molar(&self, state: &ThermoState) -> PropertyResult<MolarHeatCapacity> {
        let cp_mass = self.heat_capacity_mass(state)?;
        let m = self.molar_mass_backend(state.composition())?;
        Ok(cp_mass * m)
    }

    fn viscosity(&self, state: &ThermoState) -> PropertyResult<DynVisc> {
        let mut fluid = self.fluid_at(state)?;
        let mu_val = fluid.dynamic_viscosity().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting viscosity: {e}"),
        })?;

        let mu = pa_s(mu_val);
        validation::validate_viscosity(mu)?;
        Ok(mu)
    }

    fn thermal_conductivity(&self, state: &ThermoState) -> PropertyResult<ThermalCond> {
        let mut fluid = self.fluid_at(state)?;
        let lambda_val = fluid.conductivity().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting thermal conductivity: {e}"),
        })?;

        let lambda = w_per_m_k(lambda_val);
        validation::validate_conductivity(lambda)?;
        Ok(lambda)
    }

    fn property_pack(&self, state: &ThermoState) -> PropertyResult<crate::model::PropertyPack> {
        // Single defined-state fluid, all queries batched against it.
        let mut fluid = self.fluid_at(state)?;

        let rho = fluid.density().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting density: {e}"),
        })?;
        let h = fluid.enthalpy().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting enthalpy: {e}"),
        })?;
        let cp = fluid.specific_heat().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting specific heat: {e}"),
        })?;
        let mu_val = fluid.dynamic_viscosity().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting viscosity: {e}"),
        })?;
        let lambda_val = fluid.conductivity().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting thermal conductivity: {e}"),
        })?;
        let m = fluid.molar_mass().map_err(|e| PropertyError::Backend {
            message: format!("rfluids error getting molar mass: {e}"),
        })?;

        let density_mass = kg_per_m3(rho);
        let viscosity = pa_s(mu_val);
        let thermal_conductivity = w_per_m_k(lambda_val);

        validation::validate_density(density_mass)?;
        validation::validate_enthalpy(h)?;
        validation::validate_heat_capacity(cp)?;
        validation::validate_viscosity(viscosity)?;
        validation::validate_conductivity(thermal_conductivity)?;

        Ok(crate::model::PropertyPack {
            p: state.pressure(),
            t: state.temperature(),
            density_mass,
            density_molar: rho / m,
            enthalpy_mass: h,
            enthalpy_molar: h * m,
            heat_capacity_mass: cp,
            heat_capacity_molar: cp * m,
            viscosity,
            thermal_conductivity,
        })
    }
}

//! Closed-form ideal-mixture property model.
//!
//! This model exists so that stream mixing and its temperature solve can be
//! exercised deterministically, without the native CoolProp library. It treats
//! the mixture as an ideal solution of incompressible liquids near ambient
//! conditions:
//!
//! - molar enthalpy is linear in temperature with a frozen per-species cp,
//!   `h_i(T) = h_ref_i + cp_i · (T − T_ref)`, mole-fraction weighted;
//! - molar volumes are additive;
//! - transport properties use a crude mole-fraction-weighted rule.
//!
//! Pressure is ignored everywhere (incompressible assumption). Species without
//! liquid-phase data fail with `UnknownComponent`.

use std::collections::HashMap;

use crate::composition::Composition;
use crate::error::{PropertyError, PropertyResult};
use crate::model::{PropertyModel, validation};
use crate::species::Species;
use crate::state::{
    MolarDensity, MolarEnthalpy, MolarHeatCapacity, SpecEnthalpy, SpecHeatCapacity, ThermoState,
};
use mf_core::units::{Density, DynVisc, ThermalCond, kg_per_m3, pa_s, w_per_m_k};

const MODEL_NAME: &str = "ideal-mix";

/// Enthalpy reference temperature [K].
pub const T_REF: f64 = 298.15;

/// Constant liquid-phase properties for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidProps {
    /// Molar heat capacity at constant pressure [J/(mol·K)].
    pub cp_molar: f64,
    /// Molar enthalpy at [`T_REF`] [J/mol].
    pub h_ref_molar: f64,
    /// Molar volume [m³/mol].
    pub molar_volume: f64,
    /// Dynamic viscosity [Pa·s].
    pub viscosity: f64,
    /// Thermal conductivity [W/(m·K)].
    pub thermal_conductivity: f64,
}

/// Ideal liquid-mixture property model with per-species constant data.
#[derive(Debug, Clone, Default)]
pub struct IdealMixModel {
    overrides: HashMap<Species, LiquidProps>,
}

/// Built-in liquid-phase data near 298 K, from standard reference tables.
///
/// Only species that are liquid near ambient conditions are covered; gases
/// return `None` and surface as `UnknownComponent` to the caller.
fn builtin(species: Species) -> Option<LiquidProps> {
    let (cp_molar, molar_volume, viscosity, thermal_conductivity) = match species {
        Species::Water => (75.3, 1.807e-5, 8.9e-4, 0.606),
        Species::Methanol => (79.5, 4.07e-5, 5.4e-4, 0.200),
        Species::Ethanol => (112.3, 5.87e-5, 1.07e-3, 0.167),
        Species::Acetone => (125.5, 7.40e-5, 3.1e-4, 0.161),
        Species::Benzene => (136.0, 8.94e-5, 6.0e-4, 0.141),
        Species::Toluene => (157.0, 1.066e-4, 5.6e-4, 0.131),
        Species::Ammonia => (80.8, 2.48e-5, 1.3e-4, 0.520),
        Species::NPentane => (167.2, 1.162e-4, 2.2e-4, 0.113),
        Species::NHexane => (197.7, 1.315e-4, 3.0e-4, 0.120),
        _ => return None,
    };
    Some(LiquidProps {
        cp_molar,
        h_ref_molar: 0.0,
        molar_volume,
        viscosity,
        thermal_conductivity,
    })
}

impl IdealMixModel {
    /// Create a model with the built-in liquid data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override or add the data for one species.
    #[must_use]
    pub fn with_species(mut self, species: Species, props: LiquidProps) -> Self {
        self.overrides.insert(species, props);
        self
    }

    fn props_for(&self, species: Species) -> PropertyResult<LiquidProps> {
        self.overrides
            .get(&species)
            .copied()
            .or_else(|| builtin(species))
            .ok_or(PropertyError::UnknownComponent {
                species,
                model: MODEL_NAME,
            })
    }

    /// Mole-fraction-weighted sum of a per-species quantity.
    fn mixture_sum<F>(&self, comp: &Composition, f: F) -> PropertyResult<f64>
    where
        F: Fn(&LiquidProps) -> f64,
    {
        let mut acc = 0.0;
        for (species, x) in comp.iter() {
            acc += x * f(&self.props_for(species)?);
        }
        Ok(acc)
    }
}

impl PropertyModel for IdealMixModel {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn supports(&self, comp: &Composition) -> bool {
        comp.species().all(|s| self.props_for(s).is_ok())
    }

    fn density_molar(&self, state: &ThermoState) -> PropertyResult<MolarDensity> {
        // Additive molar volumes (Amagat).
        let v_molar = self.mixture_sum(state.composition(), |p| p.molar_volume)?;
        let rho = 1.0 / v_molar;
        validation::validate_molar_density(rho)?;
        Ok(rho)
    }

    fn density_mass(&self, state: &ThermoState) -> PropertyResult<Density> {
        let rho_molar = self.density_molar(state)?;
        let rho = kg_per_m3(rho_molar * state.composition().molar_mass_kg_per_mol());
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn enthalpy_molar(&self, state: &ThermoState) -> PropertyResult<MolarEnthalpy> {
        let t = state.temperature().value;
        let h = self.mixture_sum(state.composition(), |p| {
            p.h_ref_molar + p.cp_molar * (t - T_REF)
        })?;
        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn enthalpy_mass(&self, state: &ThermoState) -> PropertyResult<SpecEnthalpy> {
        let h_molar = self.enthalpy_molar(state)?;
        Ok(h_molar / state.composition().molar_mass_kg_per_mol())
    }

    fn heat_capacity_molar(&self, state: &ThermoState) -> PropertyResult<MolarHeatCapacity> {
        let cp = self.mixture_sum(state.composition(), |p| p.cp_molar)?;
        validation::validate_heat_capacity(cp)?;
        Ok(cp)
    }

    fn heat_capacity_mass(&self, state: &ThermoState) -> PropertyResult<SpecHeatCapacity> {
        let cp_molar = self.heat_capacity_molar(state)?;
        Ok(cp_molar / state.composition().molar_mass_kg_per_mol())
    }

    fn viscosity(&self, state: &ThermoState) -> PropertyResult<DynVisc> {
        // Mole-weighted average is a crude mixing rule; adequate for a stand-in.
        let mu = pa_s(self.mixture_sum(state.composition(), |p| p.viscosity)?);
        validation::validate_viscosity(mu)?;
        Ok(mu)
    }

    fn thermal_conductivity(&self, state: &ThermoState) -> PropertyResult<ThermalCond> {
        let lambda = w_per_m_k(
            self.mixture_sum(state.composition(), |p| p.thermal_conductivity)?,
        );
        validation::validate_conductivity(lambda)?;
        Ok(lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::units::{k, pa};
    use mf_core::{Tolerances, nearly_equal};

    fn water_at(t_k: f64) -> ThermoState {
        ThermoState::from_pt(pa(101325.0), k(t_k), Composition::pure(Species::Water)).unwrap()
    }

    #[test]
    fn model_name() {
        assert_eq!(IdealMixModel::new().name(), "ideal-mix");
    }

    #[test]
    fn enthalpy_is_linear_in_temperature() {
        let model = IdealMixModel::new();
        let h1 = model.enthalpy_molar(&water_at(300.0)).unwrap();
        let h2 = model.enthalpy_molar(&water_at(310.0)).unwrap();
        // Slope is exactly the frozen cp of water.
        assert!(nearly_equal(
            (h2 - h1) / 10.0,
            75.3,
            Tolerances::default()
        ));
    }

    #[test]
    fn water_density_plausible() {
        let model = IdealMixModel::new();
        let rho = model.density_mass(&water_at(298.15)).unwrap();
        assert!(rho.value > 980.0 && rho.value < 1010.0, "rho = {}", rho.value);
    }

    #[test]
    fn mixture_heat_capacity_is_additive() {
        let model = IdealMixModel::new();
        let comp = Composition::from_mole_fractions(vec![
            (Species::Water, 0.70),
            (Species::Acetone, 0.30),
        ])
        .unwrap();
        let state = ThermoState::from_pt(pa(101325.0), k(320.0), comp).unwrap();
        let cp = model.heat_capacity_molar(&state).unwrap();
        assert!(nearly_equal(
            cp,
            0.70 * 75.3 + 0.30 * 125.5,
            Tolerances::default()
        ));
    }

    #[test]
    fn mass_and_molar_accessors_are_consistent() {
        let model = IdealMixModel::new();
        let comp = Composition::from_mole_fractions(vec![
            (Species::Water, 0.5),
            (Species::Ethanol, 0.5),
        ])
        .unwrap();
        let state = ThermoState::from_pt(pa(101325.0), k(330.0), comp).unwrap();

        let m = state.composition().molar_mass_kg_per_mol();
        let tol = Tolerances::default();
        assert!(nearly_equal(
            model.enthalpy_mass(&state).unwrap() * m,
            model.enthalpy_molar(&state).unwrap(),
            tol
        ));
        assert!(nearly_equal(
            model.heat_capacity_mass(&state).unwrap() * m,
            model.heat_capacity_molar(&state).unwrap(),
            tol
        ));
        assert!(nearly_equal(
            model.density_molar(&state).unwrap() * m,
            model.density_mass(&state).unwrap().value,
            tol
        ));
    }

    #[test]
    fn gas_species_are_unknown() {
        let model = IdealMixModel::new();
        let state = ThermoState::from_pt(
            pa(101325.0),
            k(300.0),
            Composition::pure(Species::Nitrogen),
        )
        .unwrap();
        let err = model.enthalpy_molar(&state).unwrap_err();
        assert!(matches!(
            err,
            PropertyError::UnknownComponent {
                species: Species::Nitrogen,
                ..
            }
        ));
        assert!(!model.supports(state.composition()));
    }

    #[test]
    fn species_override_takes_precedence() {
        let props = LiquidProps {
            cp_molar: 100.0,
            h_ref_molar: 0.0,
            molar_volume: 5e-5,
            viscosity: 1e-3,
            thermal_conductivity: 0.3,
        };
        let model = IdealMixModel::new().with_species(Species::Nitrogen, props);
        let state = ThermoState::from_pt(
            pa(101325.0),
            k(T_REF + 1.0),
            Composition::pure(Species::Nitrogen),
        )
        .unwrap();
        assert!(model.supports(state.composition()));
        assert!(nearly_equal(
            model.enthalpy_molar(&state).unwrap(),
            100.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn property_pack_batches_everything() {
        let model = IdealMixModel::new();
        let pack = model.property_pack(&water_at(310.0)).unwrap();
        assert_eq!(pack.t.value, 310.0);
        assert!(pack.viscosity.value > 0.0);
        assert!(pack.summary().contains("310"));
    }
}

//! Material stream: molar flow plus an immutable thermodynamic state.

use crate::error::{StreamError, StreamResult};
use mf_core::units::{Density, DynVisc, Pressure, Temperature, ThermalCond};
use mf_props::state::{
    MolarDensity, MolarEnthalpy, MolarFlow, MolarHeatCapacity, SpecEnthalpy, SpecHeatCapacity,
};
use mf_props::{Composition, PropertyModel, PropertyPack, Species, StateError, ThermoState};

/// A material stream.
///
/// Streams are immutable once constructed: operations that change conditions
/// (mixing, reheating) produce new streams. Derived properties are never
/// stored; they are computed on demand against a [`PropertyModel`], so a
/// stream can be evaluated under different engines without rebuilding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    flow: MolarFlow,
    state: ThermoState,
}

impl Stream {
    /// Create a stream from composition, temperature, pressure, and molar flow.
    ///
    /// Flow must be finite and non-negative; zero-flow streams are valid and
    /// act as identity elements under mixing.
    pub fn new(
        comp: Composition,
        t: Temperature,
        p: Pressure,
        flow: MolarFlow,
    ) -> StreamResult<Self> {
        if !flow.is_finite() || flow < 0.0 {
            return Err(StreamError::InvalidState(StateError::InvalidFlow(flow)));
        }
        let state = ThermoState::from_pt(p, t, comp)?;
        Ok(Self { flow, state })
    }

    /// Build a stream from an already-validated state.
    pub(crate) fn from_parts(flow: MolarFlow, state: ThermoState) -> Self {
        Self { flow, state }
    }

    /// Molar flow rate [mol/s].
    pub fn flow(&self) -> MolarFlow {
        self.flow
    }

    /// The thermodynamic state.
    pub fn state(&self) -> &ThermoState {
        &self.state
    }

    /// The stream's composition.
    pub fn composition(&self) -> &Composition {
        self.state.composition()
    }

    /// Stream temperature.
    pub fn temperature(&self) -> Temperature {
        self.state.temperature()
    }

    /// Stream pressure.
    pub fn pressure(&self) -> Pressure {
        self.state.pressure()
    }

    /// Number of components present.
    pub fn component_count(&self) -> usize {
        self.composition().len()
    }

    /// Molar flow of one component [mol/s] (0 if not present).
    pub fn component_flow(&self, species: Species) -> MolarFlow {
        self.flow * self.composition().mole_fraction(species)
    }

    /// Mass density [kg/m³] under the given property model.
    pub fn density_mass<M>(&self, model: &M) -> StreamResult<Density>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.density_mass(&self.state)?)
    }

    /// Molar density [mol/m³] under the given property model.
    pub fn density_molar<M>(&self, model: &M) -> StreamResult<MolarDensity>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.density_molar(&self.state)?)
    }

    /// Specific enthalpy [J/kg] under the given property model.
    pub fn enthalpy_mass<M>(&self, model: &M) -> StreamResult<SpecEnthalpy>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.enthalpy_mass(&self.state)?)
    }

    /// Molar enthalpy [J/mol] under the given property model.
    pub fn enthalpy_molar<M>(&self, model: &M) -> StreamResult<MolarEnthalpy>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.enthalpy_molar(&self.state)?)
    }

    /// Specific heat capacity [J/(kg·K)] under the given property model.
    pub fn heat_capacity_mass<M>(&self, model: &M) -> StreamResult<SpecHeatCapacity>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.heat_capacity_mass(&self.state)?)
    }

    /// Molar heat capacity [J/(mol·K)] under the given property model.
    pub fn heat_capacity_molar<M>(&self, model: &M) -> StreamResult<MolarHeatCapacity>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.heat_capacity_molar(&self.state)?)
    }

    /// Dynamic viscosity [Pa·s] under the given property model.
    pub fn viscosity<M>(&self, model: &M) -> StreamResult<DynVisc>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.viscosity(&self.state)?)
    }

    /// Thermal conductivity [W/(m·K)] under the given property model.
    pub fn thermal_conductivity<M>(&self, model: &M) -> StreamResult<ThermalCond>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.thermal_conductivity(&self.state)?)
    }

    /// Enthalpy flow rate [J/s] carried by the stream.
    pub fn enthalpy_rate<M>(&self, model: &M) -> StreamResult<f64>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(self.flow * model.enthalpy_molar(&self.state)?)
    }

    /// All derived properties in one batch.
    pub fn properties<M>(&self, model: &M) -> StreamResult<PropertyPack>
    where
        M: PropertyModel + ?Sized,
    {
        Ok(model.property_pack(&self.state)?)
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stream containing [")?;
        for (i, species) in self.composition().species().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{species}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_core::units::{k, pa};
    use mf_core::{Tolerances, nearly_equal};
    use mf_props::IdealMixModel;

    fn water_acetone() -> Composition {
        Composition::from_mole_fractions(vec![
            (Species::Water, 0.70),
            (Species::Acetone, 0.30),
        ])
        .unwrap()
    }

    #[test]
    fn create_valid_stream() {
        let s = Stream::new(water_acetone(), k(350.0), pa(101325.0), 2.0).unwrap();
        assert_eq!(s.flow(), 2.0);
        assert_eq!(s.temperature().value, 350.0);
        assert_eq!(s.pressure().value, 101325.0);
        assert_eq!(s.component_count(), 2);
    }

    #[test]
    fn zero_flow_is_valid() {
        let s = Stream::new(water_acetone(), k(350.0), pa(101325.0), 0.0).unwrap();
        assert_eq!(s.flow(), 0.0);
        assert_eq!(s.component_flow(Species::Water), 0.0);
    }

    #[test]
    fn reject_negative_flow() {
        let result = Stream::new(water_acetone(), k(350.0), pa(101325.0), -1.0);
        assert!(matches!(
            result,
            Err(StreamError::InvalidState(StateError::InvalidFlow(_)))
        ));
    }

    #[test]
    fn reject_non_finite_flow() {
        let result = Stream::new(water_acetone(), k(350.0), pa(101325.0), f64::NAN);
        assert!(matches!(result, Err(StreamError::InvalidState(_))));
    }

    #[test]
    fn component_flows_split_total() {
        let s = Stream::new(water_acetone(), k(350.0), pa(101325.0), 2.0).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(s.component_flow(Species::Water), 1.4, tol));
        assert!(nearly_equal(s.component_flow(Species::Acetone), 0.6, tol));
        assert_eq!(s.component_flow(Species::Ethanol), 0.0);
    }

    #[test]
    fn enthalpy_rate_scales_with_flow() {
        let model = IdealMixModel::new();
        let s1 = Stream::new(water_acetone(), k(350.0), pa(101325.0), 2.0).unwrap();
        let s2 = Stream::new(water_acetone(), k(350.0), pa(101325.0), 4.0).unwrap();
        let rate1 = s1.enthalpy_rate(&model).unwrap();
        let rate2 = s2.enthalpy_rate(&model).unwrap();
        assert!(nearly_equal(rate2, 2.0 * rate1, Tolerances::default()));
    }

    #[test]
    fn properties_through_trait_object() {
        let model: Box<dyn PropertyModel> = Box::new(IdealMixModel::new());
        let s = Stream::new(water_acetone(), k(350.0), pa(101325.0), 2.0).unwrap();
        let pack = s.properties(model.as_ref()).unwrap();
        assert_eq!(pack.t.value, 350.0);
        assert!(pack.density_mass.value > 0.0);
    }

    #[test]
    fn display_lists_components() {
        let s = Stream::new(water_acetone(), k(350.0), pa(101325.0), 2.0).unwrap();
        assert_eq!(s.to_string(), "Stream containing [Water, Acetone]");
    }
}

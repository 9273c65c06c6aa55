//! Smoke tests against the native CoolProp library.
//!
//! These need libCoolProp at runtime, so they only build with the `coolprop`
//! feature enabled.

#![cfg(feature = "coolprop")]

use mf_core::units::{k, pa};
use mf_props::{Composition, CoolPropModel, PropertyModel, Species, ThermoState};

#[test]
fn water_density_at_ambient() {
    let model = CoolPropModel::new();
    let state =
        ThermoState::from_pt(pa(101325.0), k(300.0), Composition::pure(Species::Water)).unwrap();
    let rho = model.density_mass(&state).unwrap();
    assert!(
        (rho.value - 996.5).abs() < 5.0,
        "water density at 300 K: {}",
        rho.value
    );
}

#[test]
fn mixture_enthalpy_bracketed_by_pures() {
    let model = CoolPropModel::new();
    let p = pa(101325.0);
    let t = k(300.0);

    let h_water = model
        .enthalpy_molar(&ThermoState::from_pt(p, t, Composition::pure(Species::Water)).unwrap())
        .unwrap();
    let h_ethanol = model
        .enthalpy_molar(&ThermoState::from_pt(p, t, Composition::pure(Species::Ethanol)).unwrap())
        .unwrap();

    let mix = Composition::from_mole_fractions(vec![
        (Species::Water, 0.5),
        (Species::Ethanol, 0.5),
    ])
    .unwrap();
    let h_mix = model
        .enthalpy_molar(&ThermoState::from_pt(p, t, mix).unwrap())
        .unwrap();

    let lo = h_water.min(h_ethanol);
    let hi = h_water.max(h_ethanol);
    // Real mixtures have excess enthalpy; allow generous slack around the
    // ideal bracket.
    let span = (hi - lo).abs().max(1.0);
    assert!(
        h_mix > lo - 0.5 * span && h_mix < hi + 0.5 * span,
        "h_mix = {h_mix}, pures = [{lo}, {hi}]"
    );
}

#[test]
fn property_pack_is_consistent() {
    let model = CoolPropModel::new();
    let state =
        ThermoState::from_pt(pa(101325.0), k(300.0), Composition::pure(Species::Water)).unwrap();
    let pack = model.property_pack(&state).unwrap();

    let m = 0.018015;
    assert!((pack.enthalpy_molar - pack.enthalpy_mass * m).abs() / pack.enthalpy_molar.abs() < 1e-3);
    assert!(pack.viscosity.value > 0.0);
    assert!(pack.thermal_conductivity.value > 0.0);
}

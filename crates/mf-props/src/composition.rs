//! Stream composition (pure or mixtures).

use crate::error::CompositionError;
use crate::species::Species;

/// Tolerance on the mole-fraction sum at construction.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Fractions at or below this threshold carry no support and are dropped.
const NEGLIGIBLE: f64 = 1e-15;

/// Mixture makeup defined by mole fractions.
///
/// Fractions must sum to 1 within [`SUM_TOLERANCE`]; inputs that do not are
/// rejected, never silently rescaled. Entry order is preserved but carries no
/// meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(Species, f64)>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            items: vec![(species, 1.0)],
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Validates that fractions are finite and non-negative, that no species
    /// repeats, and that the sum is 1 within [`SUM_TOLERANCE`]. Zero-fraction
    /// entries are dropped: the composition's support is exactly the set of
    /// species actually present.
    pub fn from_mole_fractions(
        fractions: Vec<(Species, f64)>,
    ) -> Result<Self, CompositionError> {
        if fractions.is_empty() {
            return Err(CompositionError::Empty);
        }

        let mut sum = 0.0;
        for (i, (species, frac)) in fractions.iter().enumerate() {
            if !frac.is_finite() {
                return Err(CompositionError::NonFinite { species: *species });
            }
            if *frac < 0.0 {
                return Err(CompositionError::Negative { species: *species });
            }
            if fractions[..i].iter().any(|(s, _)| s == species) {
                return Err(CompositionError::Duplicate { species: *species });
            }
            sum += frac;
        }

        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(CompositionError::SumNotUnity { sum });
        }

        let items: Vec<(Species, f64)> = fractions
            .into_iter()
            .filter(|(_, f)| *f > NEGLIGIBLE)
            .collect();

        if items.is_empty() {
            return Err(CompositionError::Empty);
        }

        Ok(Self { items })
    }

    /// Get mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Check whether a species is part of this composition's support.
    pub fn contains(&self, species: Species) -> bool {
        self.items.iter().any(|(s, _)| *s == species)
    }

    /// Check if this is a pure-species composition.
    pub fn is_pure(&self) -> Option<Species> {
        match self.items.as_slice() {
            [(species, _)] => Some(*species),
            _ => None,
        }
    }

    /// Number of components present.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed composition (empty inputs are rejected);
    /// provided as the conventional companion to [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all species with non-zero mole fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Iterate over the species present, in entry order.
    pub fn species(&self) -> impl Iterator<Item = Species> + '_ {
        self.items.iter().map(|(s, _)| *s)
    }

    /// Compute mixture molar mass [kg/kmol] from species mole fractions.
    ///
    /// For a mixture: M_mix = Σ (x_i · M_i) where x_i is the mole fraction of
    /// species i.
    pub fn molar_mass(&self) -> f64 {
        self.items
            .iter()
            .map(|(species, mole_frac)| species.molar_mass() * mole_frac)
            .sum()
    }

    /// Mixture molar mass in [kg/mol], for specific ↔ molar conversions.
    pub fn molar_mass_kg_per_mol(&self) -> f64 {
        self.molar_mass() * 1e-3
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_inputs_are_accepted(fracs in prop::collection::vec(1e-6_f64..1.0_f64, 1..5)) {
            let species = [
                Species::Water,
                Species::Ethanol,
                Species::Acetone,
                Species::Methanol,
                Species::Benzene,
            ];
            let total: f64 = fracs.iter().sum();
            let input: Vec<(Species, f64)> = fracs
                .iter()
                .enumerate()
                .map(|(i, &f)| (species[i], f / total))
                .collect();

            let comp = Composition::from_mole_fractions(input).unwrap();
            let sum: f64 = comp.iter().map(|(_, f)| f).sum();
            prop_assert!((sum - 1.0).abs() <= SUM_TOLERANCE);
        }

        #[test]
        fn short_sums_are_rejected(scale in 0.1_f64..0.9_f64) {
            let result = Composition::from_mole_fractions(vec![
                (Species::Water, 0.7 * scale),
                (Species::Acetone, 0.3 * scale),
            ]);
            let is_sum_not_unity = matches!(result, Err(CompositionError::SumNotUnity { .. }));
            prop_assert!(is_sum_not_unity);
        }
    }
}

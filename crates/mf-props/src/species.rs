//! Chemical species definitions.

/// Chemical species relevant for process material streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Water (H₂O)
    Water,
    /// Methanol (CH₃OH)
    Methanol,
    /// Ethanol (C₂H₅OH)
    Ethanol,
    /// Acetone (C₃H₆O)
    Acetone,
    /// Benzene (C₆H₆)
    Benzene,
    /// Toluene (C₇H₈)
    Toluene,
    /// Ammonia (NH₃)
    Ammonia,
    /// n-Pentane
    NPentane,
    /// n-Hexane
    NHexane,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Oxygen (O₂)
    Oxygen,
    /// Methane (CH₄)
    Methane,
    /// Propane (C₃H₈)
    Propane,
}

impl Species {
    pub const ALL: [Species; 14] = [
        Species::Water,
        Species::Methanol,
        Species::Ethanol,
        Species::Acetone,
        Species::Benzene,
        Species::Toluene,
        Species::Ammonia,
        Species::NPentane,
        Species::NHexane,
        Species::CarbonDioxide,
        Species::Nitrogen,
        Species::Oxygen,
        Species::Methane,
        Species::Propane,
    ];

    /// Canonical key, stable across releases. Matches the CoolProp fluid name
    /// where one exists.
    pub fn key(&self) -> &'static str {
        match self {
            Species::Water => "Water",
            Species::Methanol => "Methanol",
            Species::Ethanol => "Ethanol",
            Species::Acetone => "Acetone",
            Species::Benzene => "Benzene",
            Species::Toluene => "Toluene",
            Species::Ammonia => "Ammonia",
            Species::NPentane => "nPentane",
            Species::NHexane => "nHexane",
            Species::CarbonDioxide => "CO2",
            Species::Nitrogen => "N2",
            Species::Oxygen => "O2",
            Species::Methane => "CH4",
            Species::Propane => "Propane",
        }
    }

    /// Get molar mass [kg/kmol] for this species.
    ///
    /// Values sourced from standard reference data (e.g., NIST).
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::Water => 18.015,
            Species::Methanol => 32.042,
            Species::Ethanol => 46.068,
            Species::Acetone => 58.080,
            Species::Benzene => 78.114,
            Species::Toluene => 92.141,
            Species::Ammonia => 17.031,
            Species::NPentane => 72.151,
            Species::NHexane => 86.178,
            Species::CarbonDioxide => 44.010,
            Species::Nitrogen => 28.014,
            Species::Oxygen => 31.999,
            Species::Methane => 16.043,
            Species::Propane => 44.097,
        }
    }

    /// Get CoolProp fluid name for this species.
    pub fn coolprop_name(&self) -> Option<&'static str> {
        match self {
            Species::Water => Some("Water"),
            Species::Methanol => Some("Methanol"),
            Species::Ethanol => Some("Ethanol"),
            Species::Acetone => Some("Acetone"),
            Species::Benzene => Some("Benzene"),
            Species::Toluene => Some("Toluene"),
            Species::Ammonia => Some("Ammonia"),
            Species::NPentane => Some("n-Pentane"),
            Species::NHexane => Some("n-Hexane"),
            Species::CarbonDioxide => Some("CarbonDioxide"),
            Species::Nitrogen => Some("Nitrogen"),
            Species::Oxygen => Some("Oxygen"),
            Species::Methane => Some("Methane"),
            Species::Propane => Some("n-Propane"),
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    #[cfg(feature = "coolprop")]
    pub(crate) fn rfluids_pure(&self) -> Option<rfluids::substance::Pure> {
        use rfluids::substance::Pure;
        match self {
            Species::Water => Some(Pure::Water),
            Species::Methanol => Some(Pure::Methanol),
            Species::Ethanol => Some(Pure::Ethanol),
            Species::Acetone => Some(Pure::Acetone),
            Species::Benzene => Some(Pure::Benzene),
            Species::Toluene => Some(Pure::Toluene),
            Species::Ammonia => Some(Pure::Ammonia),
            Species::NPentane => Some(Pure::nPentane),
            Species::NHexane => Some(Pure::nHexane),
            Species::CarbonDioxide => Some(Pure::CarbonDioxide),
            Species::Nitrogen => Some(Pure::Nitrogen),
            Species::Oxygen => Some(Pure::Oxygen),
            Species::Methane => Some(Pure::Methane),
            Species::Propane => Some(Pure::nPropane),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2O" | "WATER" => Ok(Species::Water),
            "CH3OH" | "METHANOL" => Ok(Species::Methanol),
            "C2H5OH" | "ETHANOL" => Ok(Species::Ethanol),
            "ACETONE" | "C3H6O" => Ok(Species::Acetone),
            "BENZENE" | "C6H6" => Ok(Species::Benzene),
            "TOLUENE" | "C7H8" => Ok(Species::Toluene),
            "NH3" | "AMMONIA" => Ok(Species::Ammonia),
            "NPENTANE" | "N-PENTANE" | "PENTANE" => Ok(Species::NPentane),
            "NHEXANE" | "N-HEXANE" | "HEXANE" => Ok(Species::NHexane),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CarbonDioxide),
            "N2" | "NITROGEN" => Ok(Species::Nitrogen),
            "O2" | "OXYGEN" => Ok(Species::Oxygen),
            "CH4" | "METHANE" => Ok(Species::Methane),
            "PROPANE" | "C3H8" => Ok(Species::Propane),
            _ => Err("unknown species"),
        }
    }
}

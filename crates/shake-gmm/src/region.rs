//! Tectonic region classification.

use serde::{Deserialize, Serialize};

/// Tectonic region type a model is defined for.
///
/// Labels follow the conventional region strings; anything unrecognized
/// normalizes to `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TectonicRegion {
    ActiveShallowCrust,
    StableContinental,
    SubductionInterface,
    SubductionIntraSlab,
    Background,
    Unknown,
}

impl TectonicRegion {
    /// Conventional display label.
    pub fn label(&self) -> &'static str {
        match self {
            TectonicRegion::ActiveShallowCrust => "Active Shallow Crust",
            TectonicRegion::StableContinental => "Stable Continental Crust",
            TectonicRegion::SubductionInterface => "Subduction Interface",
            TectonicRegion::SubductionIntraSlab => "Subduction IntraSlab",
            TectonicRegion::Background => "Background",
            TectonicRegion::Unknown => "Unknown",
        }
    }

    /// Parse a label, normalizing unexpected values to `Unknown`.
    pub fn from_label(label: &str) -> TectonicRegion {
        match label.trim() {
            "Active Shallow Crust" => TectonicRegion::ActiveShallowCrust,
            "Stable Continental Crust" => TectonicRegion::StableContinental,
            "Subduction Interface" => TectonicRegion::SubductionInterface,
            "Subduction IntraSlab" => TectonicRegion::SubductionIntraSlab,
            "Background" => TectonicRegion::Background,
            _ => TectonicRegion::Unknown,
        }
    }
}

impl std::fmt::Display for TectonicRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

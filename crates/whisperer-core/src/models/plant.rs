//! Identified plant records.

use serde::{Deserialize, Serialize};

/// Care guidance for a plant family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareInstructions {
    pub light: String,
    pub water: String,
    pub temperature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<String>,
}

impl CareInstructions {
    pub fn new(
        light: impl Into<String>,
        water: impl Into<String>,
        temperature: impl Into<String>,
        humidity: Option<&str>,
    ) -> Self {
        Self {
            light: light.into(),
            water: water.into(),
            temperature: temperature.into(),
            humidity: humidity.map(str::to_string),
        }
    }
}

/// The result of one successful identification.
///
/// Built once from the service response plus the care table and affirmation
/// templates; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantRecord {
    /// First common name, or the scientific name without authorship
    pub name: String,

    /// Full scientific name as reported by the service
    pub scientific_name: String,

    /// Every common name the service returned
    #[serde(default)]
    pub common_names: Vec<String>,

    /// Taxonomic family, when the service reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    pub care: CareInstructions,

    /// Match confidence in percent, 0 to 100
    pub confidence: u8,

    pub affirmation: String,
}

//! Response shape of the identification service.

use serde::Deserialize;

/// Top-level response body.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IdentifyResponse {
    #[serde(default)]
    pub results: Vec<SpeciesMatch>,
}

/// One ranked candidate. The service orders results best first.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SpeciesMatch {
    /// Match score in `0..=1`
    pub score: f64,
    pub species: Species,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    #[serde(default)]
    pub scientific_name: String,
    pub scientific_name_without_author: String,
    #[serde(default)]
    pub common_names: Vec<String>,
    #[serde(default)]
    pub family: Option<Taxon>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Taxon {
    pub scientific_name_without_author: String,
}

impl SpeciesMatch {
    /// Score as a whole percentage, clamped to `0..=100`.
    pub fn confidence(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

impl Species {
    /// First common name, or the scientific name without authorship.
    pub fn display_name(&self) -> &str {
        self.common_names
            .first()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.scientific_name_without_author.as_str())
    }

    /// Full scientific name, falling back to the authorless form.
    pub fn full_scientific_name(&self) -> &str {
        if self.scientific_name.trim().is_empty() {
            self.scientific_name_without_author.as_str()
        } else {
            self.scientific_name.as_str()
        }
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family
            .as_ref()
            .map(|f| f.scientific_name_without_author.as_str())
            .filter(|f| !f.is_empty())
    }
}

//! Static care instructions keyed by plant family.

use std::collections::BTreeMap;

use crate::models::CareInstructions;

/// Immutable lookup from family name to care instructions.
///
/// Family names match case-insensitively. Unknown or missing families get
/// the fallback record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareInstructionTable {
    entries: BTreeMap<String, (String, CareInstructions)>,
    fallback: CareInstructions,
}

impl CareInstructionTable {
    /// Creates an empty table that answers every lookup with `fallback`.
    pub fn new(fallback: CareInstructions) -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback,
        }
    }

    /// The table shipped with the application.
    pub fn builtin() -> Self {
        Self::new(CareInstructions::new(
            "Bright, indirect light",
            "Water when the top 1-2 inches of soil are dry",
            "65-75°F (18-24°C)",
            None,
        ))
        .with_entry(
            "Araceae",
            CareInstructions::new(
                "Medium to bright, indirect light",
                "Water when the top inch of soil is dry",
                "65-85°F (18-29°C)",
                Some("50-60%"),
            ),
        )
        .with_entry(
            "Asparagaceae",
            CareInstructions::new(
                "Low to bright, indirect light",
                "Water every 2-6 weeks when soil is dry",
                "70-90°F (21-32°C)",
                Some("30-50%"),
            ),
        )
        .with_entry(
            "Arecaceae",
            CareInstructions::new(
                "Bright, indirect light",
                "Keep soil lightly moist, never soggy",
                "65-80°F (18-27°C)",
                Some("40-60%"),
            ),
        )
        .with_entry(
            "Cactaceae",
            CareInstructions::new(
                "Full sun to bright direct light",
                "Water sparingly; let soil dry out completely",
                "65-90°F (18-32°C)",
                Some("10-30%"),
            ),
        )
        .with_entry(
            "Crassulaceae",
            CareInstructions::new(
                "Bright light with some direct sun",
                "Water when soil is completely dry",
                "60-80°F (16-27°C)",
                None,
            ),
        )
        .with_entry(
            "Orchidaceae",
            CareInstructions::new(
                "Bright, indirect light",
                "Water weekly and let the roots dry slightly in between",
                "65-80°F (18-27°C)",
                Some("50-70%"),
            ),
        )
    }

    /// Adds or replaces the record for `family`.
    pub fn with_entry(mut self, family: impl Into<String>, care: CareInstructions) -> Self {
        let family = family.into();
        self.entries
            .insert(family.trim().to_lowercase(), (family, care));
        self
    }

    /// Care for `family`, if the table has a dedicated record.
    pub fn get(&self, family: &str) -> Option<&CareInstructions> {
        self.entries
            .get(&family.trim().to_lowercase())
            .map(|(_, care)| care)
    }

    /// Care for `family`, falling back to the default record.
    pub fn lookup(&self, family: Option<&str>) -> &CareInstructions {
        family
            .and_then(|f| self.get(f))
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &CareInstructions {
        &self.fallback
    }

    /// Families with a dedicated record, alphabetically.
    pub fn families(&self) -> Vec<&str> {
        self.entries.values().map(|(name, _)| name.as_str()).collect()
    }
}

impl Default for CareInstructionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_family() {
        let table = CareInstructionTable::builtin();
        let care = table.lookup(Some("Araceae"));
        assert_eq!(care.light, "Medium to bright, indirect light");
        assert_eq!(care.humidity.as_deref(), Some("50-60%"));
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let table = CareInstructionTable::builtin();
        assert_eq!(table.lookup(Some(" cactaceae ")), table.lookup(Some("Cactaceae")));
    }

    #[test]
    fn test_unknown_and_missing_family_use_fallback() {
        let table = CareInstructionTable::builtin();
        assert_eq!(table.lookup(Some("Moraceae")), table.fallback());
        assert_eq!(table.lookup(None), table.fallback());
        assert_eq!(table.lookup(Some("")), table.fallback());
        assert!(table.get("Moraceae").is_none());
    }

    #[test]
    fn test_families_are_sorted_display_names() {
        let table = CareInstructionTable::builtin();
        let families = table.families();
        assert_eq!(families.first(), Some(&"Araceae"));
        assert!(families.contains(&"Orchidaceae"));
        let mut sorted = families.clone();
        sorted.sort_unstable();
        assert_eq!(families, sorted);
    }

    #[test]
    fn test_custom_table() {
        let fallback = CareInstructions::new("Any", "Sometimes", "Room", None);
        let table = CareInstructionTable::new(fallback.clone()).with_entry(
            "Moraceae",
            CareInstructions::new("Bright", "Weekly", "Warm", Some("High")),
        );
        assert_eq!(table.lookup(Some("Moraceae")).light, "Bright");
        assert_eq!(table.lookup(Some("Araceae")), &fallback);
    }
}

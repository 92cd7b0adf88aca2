//! Care sheets and family listings.

use std::fmt;

use crate::identify::CareInstructionTable;
use crate::models::CareInstructions;

/// Care instructions looked up for a named family.
pub struct CareSheet<'a> {
    family: &'a str,
    care: &'a CareInstructions,
    dedicated: bool,
}

impl<'a> CareSheet<'a> {
    /// Looks `family` up in `table`, noting whether the fallback was used.
    pub fn lookup(table: &'a CareInstructionTable, family: &'a str) -> Self {
        match table.get(family) {
            Some(care) => Self {
                family,
                care,
                dedicated: true,
            },
            None => Self {
                family,
                care: table.fallback(),
                dedicated: false,
            },
        }
    }

    pub fn is_dedicated(&self) -> bool {
        self.dedicated
    }
}

impl fmt::Display for CareSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Care for {}", self.family)?;
        writeln!(f)?;
        if !self.dedicated {
            writeln!(f, "No dedicated record for this family; showing general care.")?;
            writeln!(f)?;
        }
        write!(f, "{}", self.care)
    }
}

/// Families with dedicated care records.
pub struct FamilyList<'a>(pub Vec<&'a str>);

impl fmt::Display for FamilyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No families found.");
        }
        writeln!(f, "# Families")?;
        writeln!(f)?;
        for family in &self.0 {
            writeln!(f, "- {family}")?;
        }
        Ok(())
    }
}

//! Display implementations for domain models.

use std::fmt;

use crate::camera::CameraState;
use crate::models::{CareInstructions, PlantRecord, ScanPhase, WorkflowState};

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CameraState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CareInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Light**: {}", self.light)?;
        writeln!(f, "- **Water**: {}", self.water)?;
        writeln!(f, "- **Temperature**: {}", self.temperature)?;
        if let Some(humidity) = &self.humidity {
            writeln!(f, "- **Humidity**: {humidity}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "*{}*", self.scientific_name)?;
        writeln!(f)?;

        writeln!(f, "- Confidence: {}%", self.confidence)?;
        if let Some(family) = &self.family {
            writeln!(f, "- Family: {family}")?;
        }
        let others: Vec<&str> = self
            .common_names
            .iter()
            .map(String::as_str)
            .filter(|n| *n != self.name)
            .collect();
        if !others.is_empty() {
            writeln!(f, "- Also known as: {}", others.join(", "))?;
        }

        writeln!(f, "\n## Care Instructions")?;
        writeln!(f)?;
        write!(f, "{}", self.care)?;

        writeln!(f, "\n## Your Daily Plant Affirmation")?;
        writeln!(f)?;
        writeln!(f, "{}", self.affirmation)?;
        Ok(())
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanPhase::Welcome => {
                writeln!(f, "# Plant Whisperer")?;
                writeln!(f)?;
                writeln!(f, "Photograph or upload a plant to learn its name and how to care for it.")
            }
            ScanPhase::Capturing => {
                writeln!(f, "## Capture Your Plant")?;
                writeln!(f)?;
                writeln!(f, "Open the camera or upload a photo.")
            }
            ScanPhase::Identifying => writeln!(f, "Identifying your plant..."),
            ScanPhase::Succeeded(record) => write!(f, "{record}"),
            ScanPhase::Failed { message } => {
                writeln!(f, "Error: {message}")?;
                writeln!(f)?;
                writeln!(f, "Scan another plant to try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlantRecord {
        PlantRecord {
            name: "Fiddle Leaf Fig".to_string(),
            scientific_name: "Ficus lyrata Warb.".to_string(),
            common_names: vec!["Fiddle Leaf Fig".to_string(), "Banjo Fig".to_string()],
            family: Some("Moraceae".to_string()),
            care: CareInstructions::new(
                "Bright, indirect light",
                "Water when dry",
                "65-75°F (18-24°C)",
                None,
            ),
            confidence: 92,
            affirmation: "You stand tall and graceful.".to_string(),
        }
    }

    #[test]
    fn test_plant_record_markdown() {
        let output = record().to_string();
        assert!(output.starts_with("# Fiddle Leaf Fig\n"));
        assert!(output.contains("*Ficus lyrata Warb.*"));
        assert!(output.contains("- Confidence: 92%"));
        assert!(output.contains("- Family: Moraceae"));
        assert!(output.contains("- Also known as: Banjo Fig"));
        assert!(output.contains("## Care Instructions"));
        assert!(output.contains("- **Light**: Bright, indirect light"));
        assert!(!output.contains("Humidity"));
        assert!(output.contains("## Your Daily Plant Affirmation"));
    }

    #[test]
    fn test_care_with_humidity() {
        let care = CareInstructions::new("Low", "Rarely", "Warm", Some("30-50%"));
        assert!(care.to_string().contains("- **Humidity**: 30-50%"));
    }

    #[test]
    fn test_failed_phase_offers_retry() {
        let phase = ScanPhase::Failed {
            message: "No species could be identified.".to_string(),
        };
        let output = phase.to_string();
        assert!(output.contains("Error: No species could be identified."));
        assert!(output.contains("try again"));
    }

    #[test]
    fn test_identifying_phase() {
        assert_eq!(ScanPhase::Identifying.to_string(), "Identifying your plant...\n");
        assert_eq!(WorkflowState::ResultError.to_string(), "result-error");
    }
}

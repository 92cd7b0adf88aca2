//! Scan workflow states.

use serde::{Deserialize, Serialize};

use super::PlantRecord;

/// The five states of the scan workflow, without their data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowState {
    /// Nothing captured, camera closed
    #[default]
    Welcome,
    /// Capture view is open (camera or upload)
    Capturing,
    /// An image was captured and its identification is in flight
    Identifying,
    /// A plant record is available
    ResultSuccess,
    /// Identification failed; a retry is offered
    ResultError,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Welcome => "welcome",
            WorkflowState::Capturing => "capturing",
            WorkflowState::Identifying => "identifying",
            WorkflowState::ResultSuccess => "result-success",
            WorkflowState::ResultError => "result-error",
        }
    }

    /// Whether the workflow is showing a finished scan.
    pub fn is_result(&self) -> bool {
        matches!(self, WorkflowState::ResultSuccess | WorkflowState::ResultError)
    }
}

/// Workflow state together with the data each state carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Welcome,
    Capturing,
    Identifying,
    Succeeded(PlantRecord),
    Failed { message: String },
}

impl ScanPhase {
    pub fn state(&self) -> WorkflowState {
        match self {
            ScanPhase::Welcome => WorkflowState::Welcome,
            ScanPhase::Capturing => WorkflowState::Capturing,
            ScanPhase::Identifying => WorkflowState::Identifying,
            ScanPhase::Succeeded(_) => WorkflowState::ResultSuccess,
            ScanPhase::Failed { .. } => WorkflowState::ResultError,
        }
    }

    pub fn plant(&self) -> Option<&PlantRecord> {
        match self {
            ScanPhase::Succeeded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ScanPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

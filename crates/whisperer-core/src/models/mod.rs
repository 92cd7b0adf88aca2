//! Data models for captured images, identified plants and workflow state.
//!
//! This module groups the plain data types that flow between the capture
//! pipeline, the identification client and the scan workflow:
//!
//! - [`image`]: [`ImagePayload`], [`CapturedImage`], [`DisplayUrl`] and the
//!   file picker input [`UploadedFile`]
//! - [`plant`]: [`PlantRecord`] and [`CareInstructions`]
//! - [`state`]: [`WorkflowState`] and the data-carrying [`ScanPhase`]
//!
//! Display implementations live in [`crate::display`].

pub mod image;
pub mod plant;
pub mod state;

pub use self::image::{CapturedImage, DisplayUrl, ImagePayload, SourceKind, UploadedFile};
pub use plant::{CareInstructions, PlantRecord};
pub use state::{ScanPhase, WorkflowState};

//! Core library for the Plant Whisperer application.
//!
//! This crate takes a photo of a plant from a camera or an uploaded file,
//! sends it to a PlantNet-style identification service, and turns the best
//! match into a [`PlantRecord`] with care instructions and an affirmation.
//!
//! - **Capture** ([`capture`]): Normalizes camera frames and uploads into
//!   one image payload with a revocable display URL
//! - **Camera** ([`camera`]): Owns the live stream, captures a single frame
//!   as JPEG and releases every track afterwards
//! - **Identification** ([`identify`]): The multipart HTTP client and the
//!   care-instruction lookup
//! - **Workflow** ([`workflow`]): The scan state machine tying it together
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown; the
//! [`display`] wrappers add context such as camera hints or care sheets.
//! The CLI renders this markdown with its terminal renderer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use whisperer_core::{CameraSessionManager, Config, IdentificationClientBuilder, NoCamera};
//! use whisperer_core::{ScanWorkflow, UploadedFile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load(None)?;
//! let client = IdentificationClientBuilder::from_config(&config).build()?;
//! let mut workflow = ScanWorkflow::new(CameraSessionManager::<NoCamera>::unavailable(), client);
//!
//! workflow.start()?;
//! let photo = UploadedFile::from_path(std::path::Path::new("monstera.png"))?;
//! if let Some(pending) = workflow.submit_upload(photo)? {
//!     workflow.identify(pending).await;
//! }
//! if let Some(plant) = workflow.plant() {
//!     println!("{plant}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod capture;
pub mod config;
pub mod display;
pub mod error;
pub mod identify;
pub mod models;
pub mod workflow;

// Re-export commonly used types
pub use camera::{CameraBackend, CameraSessionManager, CameraState, NoCamera, VideoStream};
pub use capture::DisplayUrlRegistry;
pub use config::Config;
pub use display::{CameraNotice, CareSheet, FamilyList};
pub use error::{CameraError, IdentifyError, Result, WhispererError};
pub use identify::{
    CareInstructionTable, IdentificationClient, IdentificationClientBuilder, PlantIdentifier,
};
pub use models::{
    CapturedImage, CareInstructions, ImagePayload, PlantRecord, ScanPhase, SourceKind,
    UploadedFile, WorkflowState,
};
pub use workflow::{IdentificationOutcome, PendingIdentification, ScanId, ScanWorkflow};

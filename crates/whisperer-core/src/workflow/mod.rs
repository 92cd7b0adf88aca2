//! Scan Workflow Controller.
//!
//! Coordinates one scan at a time:
//!
//! ```text
//!             start                 image acquired
//!   Welcome ────────▶ Capturing ───────────────────▶ Identifying
//!      ▲                 │  ▲                          │       │
//!      └──── close ──────┘  │                  success │       │ failure
//!                           │                          ▼       ▼
//!                           └──── new_scan ──── ResultSuccess / ResultError
//! ```
//!
//! The controller owns the camera session and the captured image. Accepting
//! an image hands back a [`PendingIdentification`] that can be run apart
//! from the controller; its [`IdentificationOutcome`] is applied with
//! [`ScanWorkflow::complete`], which drops outcomes from abandoned scans.
//!
//! # Usage
//!
//! ```rust,no_run
//! use whisperer_core::camera::{CameraSessionManager, NoCamera};
//! use whisperer_core::identify::IdentificationClient;
//! use whisperer_core::models::UploadedFile;
//! use whisperer_core::workflow::ScanWorkflow;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IdentificationClient::builder().with_api_key("key").build()?;
//! let mut workflow = ScanWorkflow::new(CameraSessionManager::<NoCamera>::unavailable(), client);
//!
//! workflow.start()?;
//! let photo = UploadedFile::from_path(std::path::Path::new("fern.jpg"))?;
//! if let Some(pending) = workflow.submit_upload(photo)? {
//!     workflow.identify(pending).await;
//! }
//! println!("{}", workflow.phase());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::camera::{CameraBackend, CameraSessionManager, CameraState, Dimensions};
use crate::capture::{self, DisplayUrlRegistry};
use crate::error::{CameraError, IdentifyError, Result, WhispererError};
use crate::identify::PlantIdentifier;
use crate::models::{
    CapturedImage, ImagePayload, PlantRecord, ScanPhase, UploadedFile, WorkflowState,
};


/// Identifies one accepted image; a new one is issued per capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanId(u64);

impl ScanId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// An identification request for the image a scan just accepted.
///
/// Produced exactly once per captured image and consumed by
/// [`run`](Self::run), so one image can never be identified twice.
#[must_use = "the scan stays in `identifying` until the request is run and completed"]
pub struct PendingIdentification<I> {
    scan: ScanId,
    payload: ImagePayload,
    identifier: Arc<I>,
}

impl<I: PlantIdentifier> PendingIdentification<I> {
    pub fn scan(&self) -> ScanId {
        self.scan
    }

    pub fn payload(&self) -> &ImagePayload {
        &self.payload
    }

    /// Calls the identifier. Does not touch the workflow.
    pub async fn run(self) -> IdentificationOutcome {
        let result = self.identifier.identify(self.payload).await;
        IdentificationOutcome {
            scan: self.scan,
            result,
        }
    }
}

/// Result of a [`PendingIdentification`], tagged with its scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentificationOutcome {
    pub scan: ScanId,
    pub result: std::result::Result<PlantRecord, IdentifyError>,
}

/// The scan state machine.
pub struct ScanWorkflow<B: CameraBackend, I: PlantIdentifier> {
    phase: ScanPhase,
    camera: CameraSessionManager<B>,
    identifier: Arc<I>,
    urls: DisplayUrlRegistry,
    image: Option<CapturedImage>,
    scan: Option<ScanId>,
    issued_scans: u64,
}

impl<B: CameraBackend, I: PlantIdentifier> ScanWorkflow<B, I> {
    pub fn new(camera: CameraSessionManager<B>, identifier: I) -> Self {
        Self {
            phase: ScanPhase::Welcome,
            camera,
            identifier: Arc::new(identifier),
            urls: DisplayUrlRegistry::new(),
            image: None,
            scan: None,
            issued_scans: 0,
        }
    }

    pub fn phase(&self) -> &ScanPhase {
        &self.phase
    }

    pub fn state(&self) -> WorkflowState {
        self.phase.state()
    }

    /// Image of the current scan, from capture until the next scan or reset.
    pub fn image(&self) -> Option<&CapturedImage> {
        self.image.as_ref()
    }

    pub fn plant(&self) -> Option<&PlantRecord> {
        self.phase.plant()
    }

    /// Scan whose identification result is currently awaited.
    pub fn current_scan(&self) -> Option<ScanId> {
        self.scan
    }

    pub fn camera_state(&self) -> CameraState {
        self.camera.state()
    }

    /// Camera error to show in the capture view, if the last open failed.
    pub fn camera_error(&self) -> Option<&CameraError> {
        self.camera.last_error()
    }

    pub fn camera_tracks(&self) -> usize {
        self.camera.live_tracks()
    }

    pub fn display_urls(&self) -> &DisplayUrlRegistry {
        &self.urls
    }

    /// Whether the upload path is offered; true for the whole capture view.
    pub fn can_upload(&self) -> bool {
        self.state() == WorkflowState::Capturing
    }

    /// `welcome → capturing`.
    pub fn start(&mut self) -> Result<()> {
        self.expect_state(WorkflowState::Welcome, "start a scan")?;
        self.phase = ScanPhase::Capturing;
        info!("Scan started");
        Ok(())
    }

    /// Opens the camera inside the capture view.
    ///
    /// Camera failures are returned as [`WhispererError::Camera`] and leave
    /// the workflow capturing, with the upload path still available.
    pub async fn open_camera(&mut self) -> Result<Dimensions> {
        self.expect_state(WorkflowState::Capturing, "open the camera")?;
        Ok(self.camera.open().await?)
    }

    /// Cancels the camera without leaving the capture view.
    pub fn stop_camera(&mut self) -> bool {
        self.camera.stop()
    }

    /// Captures a camera frame and moves to `identifying`.
    pub fn capture_photo(&mut self) -> Result<PendingIdentification<I>> {
        self.expect_state(WorkflowState::Capturing, "capture a photo")?;
        let jpeg = self.camera.capture()?;
        let image = capture::capture_from_camera(jpeg, &self.urls);
        Ok(self.accept(image))
    }

    /// Offers a picked file.
    ///
    /// Files not declared as images are ignored: `Ok(None)` and nothing
    /// changes. Otherwise the workflow moves to `identifying`.
    pub fn submit_upload(
        &mut self,
        file: UploadedFile,
    ) -> Result<Option<PendingIdentification<I>>> {
        self.expect_state(WorkflowState::Capturing, "upload a photo")?;
        Ok(capture::capture_from_file(file, &self.urls).map(|image| self.accept(image)))
    }

    /// Applies an identification outcome.
    ///
    /// Returns `false` and changes nothing when the outcome belongs to a scan
    /// that is no longer being identified.
    pub fn complete(&mut self, outcome: IdentificationOutcome) -> bool {
        let current =
            self.state() == WorkflowState::Identifying && self.scan == Some(outcome.scan);
        if !current {
            debug!("Discarding stale result for scan {}", outcome.scan.get());
            return false;
        }

        self.scan = None;
        self.phase = match outcome.result {
            Ok(record) => {
                info!("Identified {} ({}%)", record.name, record.confidence);
                ScanPhase::Succeeded(record)
            }
            Err(err) => {
                warn!("Identification failed: {}", err.detail());
                ScanPhase::Failed {
                    message: err.to_string(),
                }
            }
        };
        true
    }

    /// Runs `pending` and applies its outcome.
    pub async fn identify(&mut self, pending: PendingIdentification<I>) -> bool {
        let outcome = pending.run().await;
        self.complete(outcome)
    }

    /// `result-* → capturing`, releasing the previous image.
    pub fn new_scan(&mut self) -> Result<()> {
        if !self.state().is_result() {
            return Err(WhispererError::InvalidTransition {
                action: "start a new scan",
                state: self.state().as_str(),
            });
        }
        self.release_image();
        self.phase = ScanPhase::Capturing;
        Ok(())
    }

    /// `capturing → welcome`, stopping the camera.
    pub fn close(&mut self) -> Result<()> {
        self.expect_state(WorkflowState::Capturing, "close the capture view")?;
        self.camera.reset();
        self.release_image();
        self.phase = ScanPhase::Welcome;
        Ok(())
    }

    /// Abandons whatever is going on and returns to `welcome`.
    ///
    /// Any identification still in flight is orphaned: its outcome will be
    /// discarded by [`complete`](Self::complete).
    pub fn reset(&mut self) {
        self.camera.reset();
        self.release_image();
        self.scan = None;
        self.phase = ScanPhase::Welcome;
    }

    fn accept(&mut self, image: CapturedImage) -> PendingIdentification<I> {
        // Leaving the capture view tears the camera down.
        self.camera.reset();
        self.release_image();

        self.issued_scans += 1;
        let scan = ScanId(self.issued_scans);
        info!(
            "Scan {} accepted {} image ({} bytes)",
            scan.get(),
            image.source.as_str(),
            image.payload.len()
        );

        let payload = image.payload.clone();
        self.image = Some(image);
        self.scan = Some(scan);
        self.phase = ScanPhase::Identifying;

        PendingIdentification {
            scan,
            payload,
            identifier: Arc::clone(&self.identifier),
        }
    }

    fn release_image(&mut self) {
        if let Some(image) = self.image.take() {
            self.urls.revoke(&image.url);
        }
    }

    fn expect_state(&self, expected: WorkflowState, action: &'static str) -> Result<()> {
        if self.state() == expected {
            Ok(())
        } else {
            Err(WhispererError::InvalidTransition {
                action,
                state: self.state().as_str(),
            })
        }
    }
}

//! Camera Session Manager.
//!
//! Owns at most one live video stream and walks it through
//! `idle → starting → streaming → idle`, with `error` as the terminal state
//! of a failed attempt:
//!
//! ```text
//!            open                 first frame
//!   Idle ────────────▶ Starting ──────────────▶ Streaming
//!    ▲                    │                        │
//!    │                    │ acquisition failed     │ stop / capture / drop
//!    │                    ▼                        │
//!    │        open      Error                      │
//!    └──────────────────  ◀ ───────────────────────┘
//! ```
//!
//! The stream lives inside a drop guard, so tracks are stopped on every exit
//! path, including dropping the manager while a stream is running.
//! Capturing a frame always ends the session.

pub mod device;
pub mod encode;
mod session;

#[cfg(test)]
pub(crate) mod mock;

use log::{debug, info, warn};

pub use device::{
    CameraBackend, DeviceError, DeviceErrorKind, Dimensions, FacingMode, NoCamera, NoStream,
    VideoConstraints, VideoFrame, VideoStream,
};

use self::session::ActiveStream;
use crate::capture::CAMERA_JPEG_QUALITY;
use crate::error::{CameraError, Result, WhispererError};

/// Lifecycle state of the camera session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Idle,
    Starting,
    Streaming,
    Error,
}

impl CameraState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraState::Idle => "idle",
            CameraState::Starting => "starting",
            CameraState::Streaming => "streaming",
            CameraState::Error => "error",
        }
    }
}

/// Manages the single camera session of a scan.
pub struct CameraSessionManager<B: CameraBackend> {
    backend: Option<B>,
    constraints: VideoConstraints,
    state: CameraState,
    session: Option<ActiveStream<B::Stream>>,
    last_error: Option<CameraError>,
}

impl<B: CameraBackend> CameraSessionManager<B> {
    /// Creates a manager that acquires streams from `backend`.
    pub fn new(backend: B) -> Self {
        Self::with_backend(Some(backend))
    }

    /// Creates a manager for a platform without any camera API.
    ///
    /// Every [`open`](Self::open) short-circuits to
    /// [`CameraError::Unsupported`].
    pub fn unavailable() -> Self {
        Self::with_backend(None)
    }

    fn with_backend(backend: Option<B>) -> Self {
        Self {
            backend,
            constraints: VideoConstraints::default(),
            state: CameraState::Idle,
            session: None,
            last_error: None,
        }
    }

    /// Overrides the stream constraints used by [`open`](Self::open).
    pub fn with_constraints(mut self, constraints: VideoConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_streaming(&self) -> bool {
        self.state == CameraState::Streaming
    }

    /// Whether a camera API exists at all.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Error of the last failed [`open`](Self::open), until the next attempt.
    pub fn last_error(&self) -> Option<&CameraError> {
        self.last_error.as_ref()
    }

    /// Dimensions delivered by the live stream, if any.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.session.as_ref().map(|s| s.dimensions())
    }

    /// Device tracks currently held open by this manager.
    pub fn live_tracks(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.live_tracks())
    }

    /// Opens the camera and waits for the first frame.
    ///
    /// Any running session is released first. On failure the manager enters
    /// [`CameraState::Error`] and keeps the classified error in
    /// [`last_error`](Self::last_error).
    pub async fn open(&mut self) -> std::result::Result<Dimensions, CameraError> {
        self.stop();
        self.last_error = None;

        let Some(backend) = self.backend.as_ref() else {
            return self.fail(CameraError::Unsupported);
        };

        self.state = CameraState::Starting;
        let requested = backend.request_stream(&self.constraints).await;
        let stream = match requested {
            Ok(stream) => stream,
            Err(err) => {
                warn!("Camera acquisition failed: {err}");
                return self.fail(err.into());
            }
        };

        // Guard first, so a stream that never becomes ready is still stopped.
        let mut stream = ActiveStream::new(stream);
        let ready = stream.ready().await;
        match ready {
            Ok(dimensions) => {
                info!(
                    "Camera streaming at {dimensions} (requested {}x{})",
                    self.constraints.ideal_width, self.constraints.ideal_height
                );
                self.session = Some(stream);
                self.state = CameraState::Streaming;
                Ok(dimensions)
            }
            Err(err) => {
                warn!("Camera stream never delivered a frame: {err}");
                drop(stream);
                self.fail(err.into())
            }
        }
    }

    /// Stops the live stream, if any. Returns whether one was released.
    pub fn stop(&mut self) -> bool {
        let released = self.session.take().is_some();
        if matches!(self.state, CameraState::Starting | CameraState::Streaming) {
            self.state = CameraState::Idle;
        }
        released
    }

    /// Stops the stream and forgets any error, back to a clean idle state.
    pub fn reset(&mut self) {
        self.stop();
        self.state = CameraState::Idle;
        self.last_error = None;
    }

    /// Snapshots the current frame as a JPEG and ends the session.
    ///
    /// Only valid while streaming. The stream is stopped whether or not
    /// encoding succeeds; a second capture needs a new [`open`](Self::open).
    pub fn capture(&mut self) -> Result<Vec<u8>> {
        let Some(mut stream) = self.session.take() else {
            return Err(WhispererError::InvalidTransition {
                action: "capture a frame",
                state: self.state.as_str(),
            });
        };

        let dimensions = stream.dimensions();
        let encoded = stream
            .read_frame()
            .map_err(|e| WhispererError::Camera(e.into()))
            .and_then(|frame| encode::rasterize(dimensions, frame))
            .and_then(|bitmap| encode::encode_jpeg(bitmap, CAMERA_JPEG_QUALITY));

        drop(stream);
        self.state = CameraState::Idle;

        match &encoded {
            Ok(jpeg) => debug!("Encoded {dimensions} frame to {} bytes", jpeg.len()),
            Err(err) => warn!("Frame capture failed: {err}"),
        }
        encoded
    }

    fn fail<T>(&mut self, err: CameraError) -> std::result::Result<T, CameraError> {
        self.state = CameraState::Error;
        self.last_error = Some(err.clone());
        Err(err)
    }
}

//! Device-facing camera interfaces.
//!
//! A [`CameraBackend`] hands out [`VideoStream`]s; the session manager never
//! talks to hardware directly. Platform errors arrive as a [`DeviceError`]
//! whose [`DeviceErrorKind`] drives classification.

use std::fmt;
use std::future::Future;

use crate::error::CameraError;

/// Which way the requested camera should face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Rear camera on phones and tablets
    #[default]
    Environment,
    /// Front camera
    User,
}

/// Stream constraints passed to the backend.
///
/// Width and height are ideals; backends may deliver anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConstraints {
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub facing: FacingMode,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            ideal_width: 1280,
            ideal_height: 720,
            facing: FacingMode::Environment,
        }
    }
}

/// Frame size as delivered by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One decoded video frame, 8-bit RGBA, row major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Error category reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceErrorKind {
    /// Access refused by the user or a policy
    NotAllowed,
    /// No matching input device
    NotFound,
    /// The device or platform cannot satisfy the request at all
    NotSupported,
    /// The device exists but could not be opened (busy, hardware fault)
    NotReadable,
    /// Anything the platform did not categorize
    Other,
}

/// A failure reported by a camera backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceError {
    pub kind: DeviceErrorKind,
    pub message: String,
}

impl DeviceError {
    pub fn new(kind: DeviceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for DeviceError {}

impl From<DeviceError> for CameraError {
    /// Classifies by category only; the message is kept for the generic
    /// case and never inspected.
    fn from(err: DeviceError) -> Self {
        match err.kind {
            DeviceErrorKind::NotAllowed => CameraError::PermissionDenied,
            DeviceErrorKind::NotFound => CameraError::DeviceNotFound,
            DeviceErrorKind::NotSupported => CameraError::Unsupported,
            DeviceErrorKind::NotReadable | DeviceErrorKind::Other => CameraError::Generic {
                message: err.message,
            },
        }
    }
}

/// Source of live video streams.
pub trait CameraBackend {
    type Stream: VideoStream + Send;

    /// Requests a stream matching `constraints` as closely as the device can.
    fn request_stream(
        &self,
        constraints: &VideoConstraints,
    ) -> impl Future<Output = Result<Self::Stream, DeviceError>> + Send;
}

/// A live video stream with one or more device tracks.
pub trait VideoStream {
    /// Resolves once the first frame is available, with its dimensions.
    fn ready(&mut self) -> impl Future<Output = Result<Dimensions, DeviceError>> + Send;

    /// Dimensions the device is currently delivering.
    fn dimensions(&self) -> Dimensions;

    /// Returns the current frame.
    fn read_frame(&mut self) -> Result<VideoFrame, DeviceError>;

    /// Number of device tracks still running.
    fn live_tracks(&self) -> usize;

    /// Stops every track. Must be idempotent.
    fn stop(&mut self);
}

/// Backend for builds without any camera API.
///
/// Uninhabited: a session manager typed with it can only be built with
/// [`crate::camera::CameraSessionManager::unavailable`].
#[derive(Debug, Clone, Copy)]
pub enum NoCamera {}

/// Stream type of [`NoCamera`]; cannot be constructed.
#[derive(Debug)]
pub enum NoStream {}

impl CameraBackend for NoCamera {
    type Stream = NoStream;

    async fn request_stream(
        &self,
        _constraints: &VideoConstraints,
    ) -> Result<NoStream, DeviceError> {
        match *self {}
    }
}

impl VideoStream for NoStream {
    async fn ready(&mut self) -> Result<Dimensions, DeviceError> {
        match *self {}
    }

    fn dimensions(&self) -> Dimensions {
        match *self {}
    }

    fn read_frame(&mut self) -> Result<VideoFrame, DeviceError> {
        match *self {}
    }

    fn live_tracks(&self) -> usize {
        match *self {}
    }

    fn stop(&mut self) {
        match *self {}
    }
}

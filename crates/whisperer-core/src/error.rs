//! Error types for the whisperer library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Camera failures, classified into the categories shown to the user.
///
/// Every variant is recoverable: the capture view keeps offering the upload
/// path while one of these is displayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// No camera API is available, or the device rejected the constraints
    #[error("Camera not supported on this device. Please use the upload option.")]
    Unsupported,
    /// The user or platform refused camera access
    #[error("Camera permission denied. Please allow camera access and try again.")]
    PermissionDenied,
    /// No video input device exists
    #[error("No camera found. Please use the upload option.")]
    DeviceNotFound,
    /// Any other acquisition failure
    #[error("Camera access denied. Please use the upload option.")]
    Generic { message: String },
}

impl CameraError {
    /// Extra guidance rendered under the message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CameraError::PermissionDenied => Some(
                "Tip: look for a camera icon in your browser or system settings to allow access",
            ),
            _ => None,
        }
    }
}

/// Failures of a single identification call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifyError {
    /// The service answered with a non-success HTTP status
    #[error("Identification service error (HTTP {status}). Please try again.")]
    Service { status: u16 },
    /// The service answered but matched no species
    #[error("No species could be identified. Please try another photo.")]
    NoMatch,
    /// The request never completed (connectivity, timeout, request build)
    #[error("Failed to identify plant. Please try again.")]
    Network { message: String },
    /// The body could not be decoded into the expected shape
    #[error("Failed to identify plant. Please try again.")]
    MalformedResponse { message: String },
}

impl IdentifyError {
    /// Technical detail for logs; the `Display` text is the user-facing one.
    pub fn detail(&self) -> String {
        match self {
            IdentifyError::Service { status } => format!("service returned status {status}"),
            IdentifyError::NoMatch => "empty result list".to_string(),
            IdentifyError::Network { message } => format!("network failure: {message}"),
            IdentifyError::MalformedResponse { message } => {
                format!("malformed response: {message}")
            }
        }
    }
}

/// Comprehensive error type for all whisperer operations.
#[derive(Error, Debug)]
pub enum WhispererError {
    /// Camera acquisition or device errors
    #[error(transparent)]
    Camera(#[from] CameraError),
    /// Identification service errors
    #[error(transparent)]
    Identification(#[from] IdentifyError),
    /// An operation was requested in a state that does not allow it
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    /// Frame rasterization or JPEG encoding failed
    #[error("Image encoding error: {message}")]
    ImageEncoding {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WhispererError {
        WhispererError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WhispererError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an encoding error without an underlying codec error.
    pub fn encoding(message: impl Into<String>) -> Self {
        WhispererError::ImageEncoding {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the workflow can keep going after this error.
    ///
    /// Camera and identification failures are shown to the user and the
    /// workflow stays operable; everything else is a programming or setup
    /// problem.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WhispererError::Camera(_) | WhispererError::Identification(_)
        )
    }
}

impl From<image::ImageError> for WhispererError {
    fn from(source: image::ImageError) -> Self {
        WhispererError::ImageEncoding {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add lazily built context to any error type, converting to
    /// WhispererError.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| WhispererError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for whisperer operations
pub type Result<T> = std::result::Result<T, WhispererError>;

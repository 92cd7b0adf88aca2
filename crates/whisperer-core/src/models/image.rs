//! Image payloads and the handles used to render them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhispererError};

/// Binary image data together with the metadata needed to upload it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Encoded image bytes
    pub data: Vec<u8>,
    /// File name sent with the multipart upload
    pub file_name: String,
    /// Declared media type, e.g. `image/jpeg`
    pub media_type: String,
}

impl ImagePayload {
    pub fn new(
        data: Vec<u8>,
        file_name: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            data,
            file_name: file_name.into(),
            media_type: media_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Where a captured image came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Snapshot from a live camera stream
    Camera,
    /// File chosen through the file picker
    Upload,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Camera => "camera",
            SourceKind::Upload => "upload",
        }
    }
}

/// Revocable local handle used to render a captured image.
///
/// Handles are issued by [`crate::capture::DisplayUrlRegistry`]; two payloads
/// never share a handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayUrl(pub(crate) String);

impl DisplayUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An image owned by the active scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub payload: ImagePayload,
    pub url: DisplayUrl,
    pub source: SourceKind,
}

/// A file handed over by the file picker.
///
/// The media type is whatever the picker declared; nothing here validates
/// the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data,
        }
    }

    /// Reads a file from disk, declaring its media type from the extension.
    ///
    /// Unknown extensions are declared as `application/octet-stream`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| WhispererError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let media_type = ::image::ImageFormat::from_path(path)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream");

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(name, media_type, data))
    }

    /// Whether the declared media type names an image.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

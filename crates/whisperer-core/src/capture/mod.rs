//! Capture Source Adapter.
//!
//! Both ways an image can enter a scan end up here: a JPEG frame produced by
//! the camera session, or a file from the picker. Either way the result is a
//! [`CapturedImage`] with a freshly issued [`DisplayUrl`].
//!
//! ```rust
//! use whisperer_core::capture::{capture_from_file, DisplayUrlRegistry};
//! use whisperer_core::models::UploadedFile;
//!
//! let urls = DisplayUrlRegistry::new();
//! let photo = UploadedFile::new("fern.png", "image/png", vec![0x89, 0x50]);
//! let notes = UploadedFile::new("notes.txt", "text/plain", b"hello".to_vec());
//!
//! assert!(capture_from_file(notes, &urls).is_none());
//! let image = capture_from_file(photo, &urls).expect("png is accepted");
//! assert!(urls.is_live(&image.url));
//! ```

pub mod url;

use log::debug;

pub use url::DisplayUrlRegistry;

use crate::models::{CapturedImage, ImagePayload, SourceKind, UploadedFile};

/// File name given to every camera snapshot.
pub const CAMERA_FILE_NAME: &str = "plant-photo.jpg";

/// Media type of every camera snapshot.
pub const CAMERA_MEDIA_TYPE: &str = "image/jpeg";

/// JPEG quality used for camera snapshots (0.8 on a 0..1 scale).
pub const CAMERA_JPEG_QUALITY: u8 = 80;

/// Wraps an encoded camera frame.
pub fn capture_from_camera(jpeg: Vec<u8>, urls: &DisplayUrlRegistry) -> CapturedImage {
    let payload = ImagePayload::new(jpeg, CAMERA_FILE_NAME, CAMERA_MEDIA_TYPE);
    let url = urls.issue(&payload);
    debug!("Captured {} byte camera frame as {}", payload.len(), url.as_str());
    CapturedImage {
        payload,
        url,
        source: SourceKind::Camera,
    }
}

/// Wraps a picked file, or returns `None` when it is not declared as an image.
pub fn capture_from_file(file: UploadedFile, urls: &DisplayUrlRegistry) -> Option<CapturedImage> {
    if !file.is_image() {
        debug!(
            "Ignoring upload '{}' with media type '{}'",
            file.name, file.media_type
        );
        return None;
    }

    let payload = ImagePayload::new(file.data, file.name, file.media_type);
    let url = urls.issue(&payload);
    Some(CapturedImage {
        payload,
        url,
        source: SourceKind::Upload,
    })
}

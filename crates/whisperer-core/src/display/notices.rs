//! Camera problem notices shown in the capture view.

use std::fmt;

use crate::error::CameraError;

/// A camera error with its hint and the upload fallback.
pub struct CameraNotice<'a> {
    error: &'a CameraError,
}

impl<'a> CameraNotice<'a> {
    pub fn new(error: &'a CameraError) -> Self {
        Self { error }
    }
}

impl fmt::Display for CameraNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Camera Issue")?;
        writeln!(f)?;
        writeln!(f, "{}", self.error)?;
        if let Some(hint) = self.error.hint() {
            writeln!(f)?;
            writeln!(f, "> {hint}")?;
        }
        writeln!(f)?;
        writeln!(f, "You can still upload a photo instead.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_notice_has_tip() {
        let output = CameraNotice::new(&CameraError::PermissionDenied).to_string();
        assert!(output
            .contains("Camera permission denied. Please allow camera access and try again."));
        assert!(output.contains("> Tip:"));
        assert!(output.contains("upload a photo"));
    }

    #[test]
    fn test_unsupported_notice_has_no_tip() {
        let output = CameraNotice::new(&CameraError::Unsupported).to_string();
        assert!(output.contains("Camera not supported on this device."));
        assert!(!output.contains("Tip:"));
    }
}

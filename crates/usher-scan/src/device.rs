//! # Camera Boundary
//!
//! The contract a camera/decoder widget must satisfy, plus the structured
//! fault type it reports errors through.
//!
//! ## Fault Reporting
//! Widgets should construct a [`DeviceFault`] variant directly when they
//! know what went wrong. The free-text classifier in `usher-core` is only
//! the fallback adapter ([`DeviceFault::from_raw`]) for decoders that
//! forward platform error strings verbatim - substring matching on those
//! strings is fragile and stays confined to this boundary.

use thiserror::Error;
use usher_core::classify::{classify, ScanErrorKind};

/// Deterministic camera control.
///
/// Decode and error *events* flow the other way: the host forwards them to
/// [`crate::ScanController::handle_decoded`] and
/// [`crate::ScanController::handle_error`]. This trait only carries the
/// commands the session emits toward the device.
pub trait CameraControl {
    /// Request camera activation (start capturing and decoding frames).
    fn activate(&mut self);

    /// Stop capturing and release the camera. Must be safe to call when the
    /// camera is already inactive.
    fn release(&mut self);
}

/// A structured camera/decoder fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceFault {
    /// The user denied camera access
    #[error("camera permission denied")]
    PermissionDenied,

    /// No camera exists on this device
    #[error("no camera device found")]
    NotFound,

    /// A camera exists but could not be opened
    #[error("camera device not readable")]
    NotReadable,

    /// Anything else, with the raw text preserved for logging
    #[error("decoder error: {0}")]
    Other(String),
}

impl DeviceFault {
    /// Adapts a raw decoder error string into a structured fault.
    ///
    /// Uses the classifier's substring rules; unmatched text lands in
    /// [`DeviceFault::Other`] with the original message preserved.
    pub fn from_raw(raw: &str) -> Self {
        match classify(raw) {
            ScanErrorKind::PermissionDenied => DeviceFault::PermissionDenied,
            ScanErrorKind::DeviceNotFound => DeviceFault::NotFound,
            ScanErrorKind::DeviceUnreadable => DeviceFault::NotReadable,
            ScanErrorKind::Other => DeviceFault::Other(raw.to_string()),
        }
    }

    /// The classification this fault maps to.
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            DeviceFault::PermissionDenied => ScanErrorKind::PermissionDenied,
            DeviceFault::NotFound => ScanErrorKind::DeviceNotFound,
            DeviceFault::NotReadable => ScanErrorKind::DeviceUnreadable,
            DeviceFault::Other(_) => ScanErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_uses_classifier_rules() {
        assert_eq!(
            DeviceFault::from_raw("NotAllowedError: Permission denied"),
            DeviceFault::PermissionDenied
        );
        assert_eq!(DeviceFault::from_raw("NotFoundError"), DeviceFault::NotFound);
        assert_eq!(
            DeviceFault::from_raw("NotReadableError: in use"),
            DeviceFault::NotReadable
        );
        assert_eq!(
            DeviceFault::from_raw("boom"),
            DeviceFault::Other("boom".to_string())
        );
    }

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(
            DeviceFault::PermissionDenied.kind(),
            ScanErrorKind::PermissionDenied
        );
        assert_eq!(DeviceFault::NotFound.kind(), ScanErrorKind::DeviceNotFound);
        assert_eq!(
            DeviceFault::NotReadable.kind(),
            ScanErrorKind::DeviceUnreadable
        );
        assert_eq!(
            DeviceFault::Other("x".to_string()).kind(),
            ScanErrorKind::Other
        );
    }
}

//! # Error Classifier
//!
//! Maps raw camera/decoder errors into a small set of user-facing categories
//! and decides whether a scan session can continue.
//!
//! ## Classification Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Decoder Error Classification                        │
//! │                                                                         │
//! │  raw error text                      kind               session         │
//! │  ──────────────                      ────               ───────         │
//! │  contains "NotAllowedError"   ──►  PermissionDenied  ──► abort          │
//! │  contains "NotFoundError"     ──►  DeviceNotFound    ──► abort          │
//! │  contains "NotReadableError"  ──►  DeviceUnreadable  ──► abort          │
//! │  anything else                ──►  Other             ──► keep scanning  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The substring names come from the browser `getUserMedia` error taxonomy
//! that camera widgets typically forward verbatim. Matching is case-sensitive
//! on purpose: the platform emits these exact identifiers, and loosening the
//! match would change which errors abort a session.
//!
//! Preferably the camera boundary reports a structured fault and this
//! function is only the fallback adapter for free-text errors (see
//! `usher-scan::device::DeviceFault::from_raw`).

use serde::{Deserialize, Serialize};

/// Classification of a camera/decoder error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanErrorKind {
    /// The user denied camera access
    PermissionDenied,

    /// No camera exists on this device
    DeviceNotFound,

    /// A camera exists but could not be opened (held by another app, etc.)
    DeviceUnreadable,

    /// Anything else: transient, unknown, or frame-level noise
    Other,
}

impl ScanErrorKind {
    /// Whether this error ends the scan session.
    ///
    /// Permission and device errors are terminal: the session returns to
    /// idle and the camera is released. `Other` is non-fatal - the decoder
    /// simply keeps attempting frames.
    pub fn is_fatal(self) -> bool {
        !matches!(self, ScanErrorKind::Other)
    }

    /// The user-facing message for this kind, if one is shown at all.
    ///
    /// `Other` has no message: transient decode noise must not interrupt
    /// or distract the operator.
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            ScanErrorKind::PermissionDenied => {
                Some("camera access must be allowed to scan codes.")
            }
            ScanErrorKind::DeviceNotFound => Some("no camera available on this device."),
            ScanErrorKind::DeviceUnreadable => Some("camera could not be accessed; retry."),
            ScanErrorKind::Other => None,
        }
    }
}

/// Classifies a raw decoder error message.
///
/// ## Rules
/// Case-sensitive substring containment, first match wins:
/// - `"NotAllowedError"` → [`ScanErrorKind::PermissionDenied`]
/// - `"NotFoundError"` → [`ScanErrorKind::DeviceNotFound`]
/// - `"NotReadableError"` → [`ScanErrorKind::DeviceUnreadable`]
/// - otherwise → [`ScanErrorKind::Other`]
///
/// ## Example
/// ```rust
/// use usher_core::classify::{classify, ScanErrorKind};
///
/// assert_eq!(
///     classify("NotAllowedError: Permission denied"),
///     ScanErrorKind::PermissionDenied
/// );
/// assert_eq!(classify("boom"), ScanErrorKind::Other);
/// ```
pub fn classify(raw: &str) -> ScanErrorKind {
    if raw.contains("NotAllowedError") {
        ScanErrorKind::PermissionDenied
    } else if raw.contains("NotFoundError") {
        ScanErrorKind::DeviceNotFound
    } else if raw.contains("NotReadableError") {
        ScanErrorKind::DeviceUnreadable
    } else {
        ScanErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        assert_eq!(
            classify("NotAllowedError: Permission denied by user"),
            ScanErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_classify_device_not_found() {
        assert_eq!(classify("NotFoundError"), ScanErrorKind::DeviceNotFound);
    }

    #[test]
    fn test_classify_device_unreadable() {
        assert_eq!(
            classify("NotReadableError: Could not start video source"),
            ScanErrorKind::DeviceUnreadable
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("boom"), ScanErrorKind::Other);
        assert_eq!(classify(""), ScanErrorKind::Other);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // Lowercased platform identifiers do not match - a straight port of
        // the original matching semantics
        assert_eq!(classify("notallowederror"), ScanErrorKind::Other);
    }

    #[test]
    fn test_fatal_kinds() {
        assert!(ScanErrorKind::PermissionDenied.is_fatal());
        assert!(ScanErrorKind::DeviceNotFound.is_fatal());
        assert!(ScanErrorKind::DeviceUnreadable.is_fatal());
        assert!(!ScanErrorKind::Other.is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ScanErrorKind::PermissionDenied.user_message(),
            Some("camera access must be allowed to scan codes.")
        );
        assert_eq!(
            ScanErrorKind::DeviceNotFound.user_message(),
            Some("no camera available on this device.")
        );
        assert_eq!(
            ScanErrorKind::DeviceUnreadable.user_message(),
            Some("camera could not be accessed; retry.")
        );
        assert_eq!(ScanErrorKind::Other.user_message(), None);
    }
}

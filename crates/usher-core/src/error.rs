//! # Error Types
//!
//! Domain-specific error types for usher-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  usher-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Missing/malformed input fields                 │
//! │                                                                         │
//! │  usher-scan errors (separate crate)                                    │
//! │  └── DeviceFault      - Structured camera/decoder faults               │
//! │                                                                         │
//! │  gate-api errors (in app)                                              │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transient decode misses are deliberately absent from this taxonomy: a
//! frame with no decodable code is not an error, the decoder simply keeps
//! trying and nothing is surfaced.

use thiserror::Error;

use crate::classify::ScanErrorKind;

/// Core domain errors.
///
/// These errors represent check-in rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The camera device reported a fatal fault.
    ///
    /// ## When This Occurs
    /// - Camera permission denied by the user
    /// - No camera attached to the device
    /// - Camera held by another application
    #[error("camera fault: {0:?}")]
    Device(ScanErrorKind),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any handler logic runs. Presence is the
/// only rule the auth boundary enforces, so a missing required field is the
/// only variant - format and length are the client form's concern.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "password".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

//! # Validation Module
//!
//! Field-presence validation for the auth forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client form                                                  │
//! │  ├── Format checks (email shape, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Gate API handler (Rust)                                      │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: required-field validation                            │
//! │                                                                         │
//! │  There is no storage layer behind the auth routes: presence is the     │
//! │  whole contract. A present field is accepted as-is - no format or      │
//! │  length rules here - and a missing field is the only 400-class         │
//! │  failure.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a required field is present and non-blank.
///
/// Presence only: any non-blank value passes, whatever its shape.
///
/// ## Returns
/// The trimmed value.
///
/// ## Example
/// ```rust
/// use usher_core::validation::validate_required;
///
/// assert_eq!(validate_required("email", " a@b.c ").unwrap(), "a@b.c");
/// assert!(validate_required("email", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("fullName", "Ada").unwrap(), "Ada");
        assert_eq!(validate_required("fullName", "  Ada  ").unwrap(), "Ada");

        assert!(validate_required("fullName", "").is_err());
        assert!(validate_required("fullName", "   ").is_err());
    }

    #[test]
    fn test_any_present_value_passes() {
        // Presence only: no format or length rules
        assert_eq!(validate_required("email", "admin").unwrap(), "admin");
        assert!(validate_required("email", &"A".repeat(5000)).is_ok());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = validate_required("password", "").unwrap_err();
        assert_eq!(err.to_string(), "password is required");
    }
}

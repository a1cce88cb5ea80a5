//! # Domain Types
//!
//! Shared types used across the scan flow and the gate API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decoded ticket code.
///
/// ## Design Notes
/// - `code` is opaque: it is displayed verbatim and never parsed or
///   validated here. Whatever the QR payload was, that is what we hold.
/// - `received_at` records when the decode callback fired. The source of
///   truth for "is there a result" is the session state, not this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// The decoded QR payload, verbatim
    pub code: String,

    /// When the decode event was received
    pub received_at: DateTime<Utc>,
}

impl ScanResult {
    /// Creates a result from a decode event, stamping the receipt time.
    pub fn new(code: impl Into<String>) -> Self {
        ScanResult {
            code: code.into(),
            received_at: Utc::now(),
        }
    }
}

/// A signed-in user record.
///
/// This is the shape stored in the `user` cookie and echoed by the auth
/// routes. The gate middleware requires `full_name` to be non-empty; the
/// password is never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Generated identifier (UUID v4 at signup)
    pub id: String,

    /// Display name; required by the route guard
    pub full_name: String,

    /// Contact email
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_result_holds_code_verbatim() {
        let result = ScanResult::new("TCKT-00042 ");
        // No trimming, no normalization - the payload is opaque
        assert_eq!(result.code, "TCKT-00042 ");
    }

    #[test]
    fn test_user_account_cookie_shape() {
        let user = UserAccount {
            id: "u-1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        // The route guard looks for this exact camelCase key
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert!(json.get("password").is_none());
    }
}

//! # Virtual Meeting Links
//!
//! Resolves a virtual event's platform details into a joinable URL.
//!
//! ## Resolution Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  platform      requires       produces                                  │
//! │  ────────      ────────       ────────                                  │
//! │  zoom          meeting_id     https://zoom.us/j/{id}                    │
//! │  google-meet   meeting_id     https://meet.google.com/{id}              │
//! │  custom        meeting_url    meeting_url verbatim                      │
//! │  (anything)    -              UnsupportedPlatform error                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Details needed to resolve a joinable meeting URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    /// Platform identifier, e.g. `"zoom"`, `"google-meet"`, `"custom"`
    pub platform: String,

    /// Platform-native meeting id (zoom, google-meet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,

    /// Full URL for self-hosted platforms (custom)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
}

/// Errors from meeting link resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetingLinkError {
    /// The platform needs a meeting id and none was given.
    #[error("meeting id is required for {platform}")]
    MissingMeetingId { platform: String },

    /// A custom platform needs the full URL.
    #[error("meeting url is required for custom platform")]
    MissingMeetingUrl,

    /// The platform is not in the lookup table.
    #[error("unsupported meeting platform: {0}")]
    UnsupportedPlatform(String),
}

/// Resolves a joinable URL for a virtual event.
///
/// Pure lookup, no network access: the URL is constructed, never checked.
///
/// ## Example
/// ```rust
/// use usher_core::meeting::{resolve_meeting_link, MeetingDetails};
///
/// let details = MeetingDetails {
///     platform: "zoom".to_string(),
///     meeting_id: Some("123".to_string()),
///     meeting_url: None,
/// };
/// assert_eq!(resolve_meeting_link(&details).unwrap(), "https://zoom.us/j/123");
/// ```
pub fn resolve_meeting_link(details: &MeetingDetails) -> Result<String, MeetingLinkError> {
    match details.platform.as_str() {
        "zoom" => {
            let id = require_meeting_id(details)?;
            Ok(format!("https://zoom.us/j/{id}"))
        }
        "google-meet" => {
            let id = require_meeting_id(details)?;
            Ok(format!("https://meet.google.com/{id}"))
        }
        "custom" => details
            .meeting_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .ok_or(MeetingLinkError::MissingMeetingUrl),
        other => Err(MeetingLinkError::UnsupportedPlatform(other.to_string())),
    }
}

fn require_meeting_id(details: &MeetingDetails) -> Result<&str, MeetingLinkError> {
    details
        .meeting_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| MeetingLinkError::MissingMeetingId {
            platform: details.platform.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(platform: &str, id: Option<&str>, url: Option<&str>) -> MeetingDetails {
        MeetingDetails {
            platform: platform.to_string(),
            meeting_id: id.map(str::to_string),
            meeting_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_zoom_with_meeting_id() {
        assert_eq!(
            resolve_meeting_link(&details("zoom", Some("123"), None)).unwrap(),
            "https://zoom.us/j/123"
        );
    }

    #[test]
    fn test_zoom_without_meeting_id_fails() {
        assert_eq!(
            resolve_meeting_link(&details("zoom", None, None)),
            Err(MeetingLinkError::MissingMeetingId {
                platform: "zoom".to_string()
            })
        );
        // Blank ids count as missing
        assert!(resolve_meeting_link(&details("zoom", Some("  "), None)).is_err());
    }

    #[test]
    fn test_google_meet() {
        assert_eq!(
            resolve_meeting_link(&details("google-meet", Some("abc-defg-hij"), None)).unwrap(),
            "https://meet.google.com/abc-defg-hij"
        );
    }

    #[test]
    fn test_custom_requires_url() {
        assert_eq!(
            resolve_meeting_link(&details("custom", None, Some("https://meet.example.com/x")))
                .unwrap(),
            "https://meet.example.com/x"
        );
        assert_eq!(
            resolve_meeting_link(&details("custom", None, None)),
            Err(MeetingLinkError::MissingMeetingUrl)
        );
    }

    #[test]
    fn test_unsupported_platform() {
        assert_eq!(
            resolve_meeting_link(&details("webex", Some("123"), None)),
            Err(MeetingLinkError::UnsupportedPlatform("webex".to_string()))
        );
    }
}

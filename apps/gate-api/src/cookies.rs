//! # Auth Cookie Store
//!
//! Opaque key/value cookie helpers with JSON payloads.
//!
//! ## Contract
//! - Values are JSON-serialized; readers get `None` (never an error) when a
//!   cookie is absent or fails to parse, and parse failures are logged.
//! - Default expiry is 30 days (configurable per call).
//! - This is a client-readable cookie with no signature: a convenience
//!   store for the route guard, not a security mechanism.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Options applied when setting a cookie.
#[derive(Debug, Clone)]
pub struct CookieOptions {
    /// Lifetime in days
    pub max_age_days: i64,

    /// Cookie path
    pub path: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        CookieOptions {
            max_age_days: usher_core::AUTH_COOKIE_MAX_AGE_DAYS,
            path: "/".to_string(),
        }
    }
}

/// Stores a JSON-serialized value under `key`.
///
/// Serialization failures are logged and leave the jar unchanged - callers
/// never see an error from the cookie layer.
pub fn set_auth_cookie<T: Serialize>(
    jar: CookieJar,
    key: &str,
    value: &T,
    options: CookieOptions,
) -> CookieJar {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn!(key = %key, error = %err, "failed to serialize cookie value");
            return jar;
        }
    };

    let cookie = Cookie::build((key.to_string(), json))
        .path(options.path)
        .max_age(time::Duration::days(options.max_age_days))
        .build();

    jar.add(cookie)
}

/// Reads and parses a JSON cookie.
///
/// Returns `None` when the cookie is absent or its payload does not parse;
/// parse failures are logged, never thrown to the caller.
pub fn get_auth_cookie<T: DeserializeOwned>(jar: &CookieJar, key: &str) -> Option<T> {
    let cookie = jar.get(key)?;

    match serde_json::from_str(cookie.value()) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key = %key, error = %err, "failed to parse cookie value");
            None
        }
    }
}

/// Removes a cookie by key.
///
/// Adds an already-expired cookie rather than calling `CookieJar::remove`:
/// `remove` only emits a removal `Set-Cookie` when the request carried the
/// cookie, and logout must clear client state unconditionally.
pub fn remove_auth_cookie(jar: CookieJar, key: &str) -> CookieJar {
    let expired = Cookie::build((key.to_string(), ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    jar.add(expired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use usher_core::UserAccount;

    fn user() -> UserAccount {
        UserAccount {
            id: "u-1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let jar = CookieJar::new();
        let jar = set_auth_cookie(jar, "user", &user(), CookieOptions::default());

        let read: Option<UserAccount> = get_auth_cookie(&jar, "user");
        assert_eq!(read, Some(user()));
    }

    #[test]
    fn test_default_expiry_is_30_days() {
        let jar = set_auth_cookie(CookieJar::new(), "user", &user(), CookieOptions::default());
        let cookie = jar.get("user").unwrap();
        assert_eq!(cookie.max_age(), Some(time::Duration::days(30)));
    }

    #[test]
    fn test_missing_cookie_returns_none() {
        let jar = CookieJar::new();
        let read: Option<UserAccount> = get_auth_cookie(&jar, "user");
        assert_eq!(read, None);
    }

    #[test]
    fn test_malformed_cookie_returns_none() {
        let jar = CookieJar::new().add(Cookie::new("user", "{not json"));
        let read: Option<UserAccount> = get_auth_cookie(&jar, "user");
        assert_eq!(read, None);
    }

    #[test]
    fn test_remove_cookie() {
        let jar = set_auth_cookie(CookieJar::new(), "user", &user(), CookieOptions::default());
        let jar = remove_auth_cookie(jar, "user");
        let read: Option<UserAccount> = get_auth_cookie(&jar, "user");
        assert_eq!(read, None);
    }

    #[test]
    fn test_remove_expires_even_when_absent() {
        // A logout with no cookie on the request must still clear client
        // state, so removal emits an expired cookie unconditionally
        let jar = remove_auth_cookie(CookieJar::new(), "user");
        let cookie = jar.get("user").expect("expired removal cookie is emitted");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}

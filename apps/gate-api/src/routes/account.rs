//! # Account Routes
//!
//! Routes behind the `/account` cookie guard.

use axum::Json;
use axum_extra::extract::CookieJar;
use serde_json::Value;
use tracing::error;

use usher_core::USER_COOKIE;

use crate::cookies::get_auth_cookie;
use crate::error::ApiError;

/// Handles `GET /account/profile`: echoes the cookie's user record.
///
/// Echoed as raw JSON: the guard only requires `fullName`, so the record may
/// carry fewer fields than a full signup produces. A missing record here
/// means the request skipped the guard somehow, which is a server fault,
/// not a client one.
pub async fn profile(jar: CookieJar) -> Result<Json<Value>, ApiError> {
    match get_auth_cookie::<Value>(&jar, USER_COOKIE) {
        Some(user) => Ok(Json(user)),
        None => {
            error!("profile handler reached without a parsable user cookie");
            Err(ApiError::unauthorized())
        }
    }
}

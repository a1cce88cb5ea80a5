//! # Route Guard
//!
//! Gates the protected `/account` path prefix on the `user` cookie.
//!
//! ## What This Is (and Is Not)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cookie Guard Semantics                              │
//! │                                                                         │
//! │  GET /account/profile                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  `user` cookie present? ── no ──────────► 307 redirect to login path   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  JSON with non-empty fullName? ── no ──► 307 redirect to login path    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  pass through to the handler                                            │
//! │                                                                         │
//! │  BOUNDARY CHECK ONLY: the cookie is client-readable and unsigned.      │
//! │  This gates navigation, it does not authenticate anything.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::debug;

use usher_core::USER_COOKIE;

use crate::cookies::get_auth_cookie;
use crate::AppState;

/// The only shape the guard cares about: a JSON object with `fullName`.
///
/// Deliberately not [`usher_core::UserAccount`]: the contract requires the
/// `fullName` field and nothing more, so a cookie without `id` or `email`
/// still passes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuardUser {
    #[serde(default)]
    full_name: String,
}

/// Middleware requiring a well-formed `user` cookie.
///
/// Absence or malformed content redirects to the configured login path.
pub async fn require_user(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    match get_auth_cookie::<GuardUser>(&jar, USER_COOKIE) {
        Some(user) if !user.full_name.trim().is_empty() => next.run(request).await,
        Some(_) => {
            debug!("user cookie has empty fullName, redirecting");
            Redirect::temporary(&state.config.login_path).into_response()
        }
        None => {
            debug!("no parsable user cookie, redirecting");
            Redirect::temporary(&state.config.login_path).into_response()
        }
    }
}

//! # Auth Routes
//!
//! `POST /login`, `POST /signup`, `POST /logout`.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Auth Route Contract                              │
//! │                                                                         │
//! │  POST /login   { email, password }                                      │
//! │    missing/blank field ──► 400 { code, message }                        │
//! │    all present ──────────► 200 { user: { email } }                      │
//! │                                                                         │
//! │  POST /signup  { fullName, email, password }                            │
//! │    missing/blank field ──► 400 { code, message }                        │
//! │    all present ──────────► 201 { user: { id, fullName, email } }        │
//! │                            + Set-Cookie: user=<json> (30 days)          │
//! │                                                                         │
//! │  POST /logout  ──────────► 204 + cookie removal                         │
//! │                                                                         │
//! │  Passwords are validated for PRESENCE only and never echoed, hashed,   │
//! │  or stored - there is no persistence behind these routes.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use usher_core::validation::validate_required;
use usher_core::{UserAccount, USER_COOKIE};

use crate::cookies::{remove_auth_cookie, set_auth_cookie, CookieOptions};
use crate::error::ApiError;
use crate::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// The user record echoed by `/login`.
///
/// Login knows nothing beyond the submitted email; no password field
/// exists on this type, so it cannot leak.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub email: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: SessionUser,
}

/// Handles `POST /login`.
pub async fn login(Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    let email = validate_required("email", &req.email)?;
    validate_required("password", &req.password)?;

    info!(email = %email, "login accepted");

    Ok(Json(LoginResponse {
        user: SessionUser { email },
    }))
}

/// Signup request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// Signup response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub user: UserAccount,
}

/// Handles `POST /signup`.
///
/// Sets the `user` cookie that the `/account` guard checks, so a fresh
/// signup can navigate straight to protected pages.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<SignupResponse>), ApiError> {
    let full_name = validate_required("fullName", &req.full_name)?;
    let email = validate_required("email", &req.email)?;
    validate_required("password", &req.password)?;

    let user = UserAccount {
        id: Uuid::new_v4().to_string(),
        full_name,
        email,
    };

    info!(user_id = %user.id, email = %user.email, "signup accepted");

    let jar = set_auth_cookie(
        jar,
        USER_COOKIE,
        &user,
        CookieOptions {
            max_age_days: state.config.cookie_max_age_days,
            ..CookieOptions::default()
        },
    );

    Ok((StatusCode::CREATED, jar, Json(SignupResponse { user })))
}

/// Handles `POST /logout`: removes the `user` cookie.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = remove_auth_cookie(jar, USER_COOKIE);
    (jar, StatusCode::NO_CONTENT)
}

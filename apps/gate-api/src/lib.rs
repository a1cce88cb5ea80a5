//! # Usher Gate API Library
//!
//! Router construction for the gate HTTP service.
//!
//! ## Module Organization
//! ```text
//! usher_gate_api/
//! ├── lib.rs          ◄─── You are here (router + shared state)
//! ├── config.rs       ◄─── Env-based configuration
//! ├── cookies.rs      ◄─── Auth cookie store (JSON payloads, 30-day expiry)
//! ├── middleware.rs   ◄─── `user` cookie guard for /account
//! ├── error.rs        ◄─── API error type for handlers
//! └── routes/
//!     ├── mod.rs      ◄─── Health probe + module exports
//!     ├── auth.rs     ◄─── /login, /signup, /logout
//!     └── account.rs  ◄─── /account/profile (guarded)
//! ```

pub mod config;
pub mod cookies;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use config::GateConfig;

/// Shared application state.
pub struct AppState {
    pub config: GateConfig,
}

/// Builds the gate router.
///
/// The `/account` prefix is wrapped in the cookie guard; everything else is
/// public. Tests exercise this router directly via `tower::ServiceExt`,
/// main binds it to a socket.
pub fn router(config: GateConfig) -> Router {
    let state = Arc::new(AppState { config });

    let protected = Router::new()
        .route("/account/profile", get(routes::account::profile))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_user,
        ));

    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/login", post(routes::auth::login))
        .route("/signup", post(routes::auth::signup))
        .route("/logout", post(routes::auth::logout))
        .merge(protected)
        .with_state(state)
}
